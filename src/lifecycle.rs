//! Main loop state machine
//!
//! `Running` until the window asks to close (close button, Escape, or a
//! platform request), then `Closing`: the window is released and the app
//! exits successfully. Physics is gated on `Running`, so the transition takes
//! effect at the next frame boundary.

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowCloseRequested};

use crate::ball::PitStats;

#[derive(States, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LoopState {
    #[default]
    Running,
    Closing,
}

/// Watch for close requests while running
pub fn detect_close_request(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mut close_requests: MessageReader<WindowCloseRequested>,
    mut next_state: ResMut<NextState<LoopState>>,
) {
    let window_closed = close_requests.read().count() > 0;
    let escape = keyboard.is_some_and(|k| k.just_pressed(KeyCode::Escape));

    if window_closed || escape {
        let source = if window_closed { "window" } else { "escape key" };
        info!("Close requested ({source})");
        next_state.set(LoopState::Closing);
    }
}

/// Release the window and exit with success
pub fn release_and_exit(
    mut commands: Commands,
    windows: Query<Entity, With<PrimaryWindow>>,
    stats: Res<PitStats>,
    mut app_exit: MessageWriter<AppExit>,
) {
    for window in &windows {
        commands.entity(window).despawn();
    }

    info!(
        "Closing after {} frames ({} wall reflections)",
        stats.frames,
        stats.total_reflections()
    );
    app_exit.write(AppExit::Success);
}

//! Ballpit - bouncing balls in a fixed window, built with Bevy
//!
//! Main entry point: window setup and system registration.

use ballpit::{
    BACKGROUND_COLOR, PitConfig, SCREEN_HEIGHT, SCREEN_WIDTH, TARGET_FPS, WINDOW_TITLE,
    app_builder::add_simulation, render,
};
use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

fn main() -> AppExit {
    let config = PitConfig::default();

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            // Scale factor pinned so one world unit is one pixel on HiDPI displays
            resolution: WindowResolution::new(SCREEN_WIDTH, SCREEN_HEIGHT)
                .with_scale_factor_override(1.0),
            title: WINDOW_TITLE.into(),
            resizable: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        // Close requests go through the loop state machine
        close_when_requested: false,
        ..default()
    }))
    .insert_resource(ClearColor(BACKGROUND_COLOR));

    add_simulation(&mut app, &config, TARGET_FPS);

    app.add_systems(
        Startup,
        (
            render::spawn_camera,
            render::setup_ball_materials,
            render::spawn_status_text,
        ),
    )
    .add_systems(PostStartup, render::attach_ball_visuals)
    .add_systems(Update, render::sync_ball_transforms)
    .run()
}

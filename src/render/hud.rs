//! Static status line

use bevy::prelude::*;

use crate::constants::*;

/// Status text component
#[derive(Component)]
pub struct StatusText;

/// Spawn the fixed status line in the top-left corner
pub fn spawn_status_text(mut commands: Commands) {
    commands.spawn((
        Text::new(STATUS_TEXT),
        TextFont {
            font_size: UI_TEXT_SIZE,
            ..default()
        },
        TextColor(TEXT_COLOR),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(STATUS_TEXT_POS.x),
            top: Val::Px(STATUS_TEXT_POS.y),
            ..default()
        },
        StatusText,
    ));
}

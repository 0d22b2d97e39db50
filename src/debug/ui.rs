//! Debug domain: overlay components and text formatting.

use bevy::prelude::*;

use crate::movement::{CharacterMotor, ControlRotation, LocomotionState};

/// Marker for the locomotion info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub(crate) fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}

pub(crate) fn format_locomotion_info(
    state: &LocomotionState,
    motor: &CharacterMotor,
    control: &ControlRotation,
    position: Vec3,
) -> String {
    format!(
        "Level: {} (last {})\nMultiplier: {:.2}\nMax speed: {:.2} / {:.2}\nPos: ({:.1}, {:.1}, {:.1})\nView: yaw {:.0} pitch {:.0}",
        state.level(),
        state.last_level(),
        state.multiplier(),
        motor.max_speed,
        state.base_speed(),
        position.x,
        position.y,
        position.z,
        control.yaw,
        control.pitch
    )
}

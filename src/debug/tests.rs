//! Debug domain: overlay formatting and toggle tests.

use bevy::prelude::*;

use super::DebugState;
use super::systems::toggle_debug_info;
use super::ui::format_locomotion_info;
use crate::movement::{CharacterMotor, ControlRotation, LevelCommand, LocomotionState};

#[test]
fn test_info_text_shows_throttle_state() {
    let mut state = LocomotionState::new(6.0);
    state.apply(LevelCommand::Increase);
    let motor = CharacterMotor::new(6.0);
    let control = ControlRotation {
        yaw: 45.0,
        pitch: -10.0,
    };

    let text = format_locomotion_info(&state, &motor, &control, Vec3::new(1.0, 2.0, 3.0));

    assert!(text.contains("Level: 1 (last 0)"));
    assert!(text.contains("Multiplier: 0.00"));
    assert!(text.contains("Max speed: 6.00 / 6.00"));
    assert!(text.contains("Pos: (1.0, 2.0, 3.0)"));
    assert!(text.contains("yaw 45 pitch -10"));
}

#[test]
fn test_f3_toggles_overlay() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .init_resource::<DebugState>()
        .init_resource::<ButtonInput<KeyCode>>()
        .add_systems(Update, toggle_debug_info);

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::F3);
    app.update();
    assert!(app.world().resource::<DebugState>().show_info);

    // Still held: no second toggle
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .clear();
    app.update();
    assert!(app.world().resource::<DebugState>().show_info);
}

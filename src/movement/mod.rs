//! Movement domain: throttle-style locomotion for the player character.

mod bootstrap;
mod components;
mod locomotion;
mod resources;
mod systems;


pub use components::*;
pub use locomotion::*;
pub use resources::*;

use bevy::prelude::*;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionTuning>()
            .init_resource::<MovementInput>()
            .init_resource::<DoubleTapDetector>()
            .add_systems(
                Startup,
                (
                    bootstrap::spawn_test_ground,
                    bootstrap::spawn_player,
                    bootstrap::spawn_camera,
                ),
            )
            .add_systems(
                Update,
                (
                    systems::read_input,
                    systems::apply_level_commands,
                    systems::apply_move_right,
                    systems::apply_control_rotation,
                    systems::detect_ground,
                    systems::tick_locomotion,
                    systems::apply_jump,
                    systems::apply_motor,
                    systems::follow_camera,
                )
                    .chain(),
            );
    }
}

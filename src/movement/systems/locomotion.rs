//! Movement domain: level commands and the per-frame locomotion tick.

use bevy::prelude::*;

use crate::movement::{CharacterMotor, LocomotionState, LocomotionTuning, MovementInput, Player};

pub(crate) fn apply_level_commands(
    input: Res<MovementInput>,
    mut query: Query<&mut LocomotionState, With<Player>>,
) {
    if input.commands.is_empty() {
        return;
    }

    for mut state in &mut query {
        for &command in &input.commands {
            state.apply(command);
            debug!(
                "Level command {:?}: level {} (last {}, multiplier {:.2})",
                command,
                state.level(),
                state.last_level(),
                state.multiplier()
            );
        }
    }
}

pub(crate) fn tick_locomotion(
    tuning: Res<LocomotionTuning>,
    mut query: Query<(&mut LocomotionState, &mut CharacterMotor, &Transform), With<Player>>,
) {
    for (mut state, mut motor, transform) in &mut query {
        let outcome = state.tick(&tuning);

        if let Some(max_speed) = outcome.max_speed {
            motor.max_speed = max_speed;
        }

        // Forward is read after any turning applied earlier this frame
        if let Some(drive) = outcome.drive {
            motor.add_movement_input(*transform.forward(), drive.scale());
        }
    }
}

//! Movement domain: character yaw and control-rotation pass-through.

use bevy::prelude::*;

use crate::movement::{ControlRotation, LocomotionTuning, MovementInput, Player};

/// Degrees to apply this frame for a rate-style axis value.
pub(crate) fn rate_to_degrees(rate: f32, base_rate: f32, delta_secs: f32) -> f32 {
    rate * base_rate * delta_secs
}

/// `MoveRight`: yaw the character itself by a fixed step per frame.
pub(crate) fn apply_move_right(
    input: Res<MovementInput>,
    tuning: Res<LocomotionTuning>,
    mut query: Query<&mut Transform, With<Player>>,
) {
    if input.move_right == 0.0 {
        return;
    }

    // Positive input turns right, which is clockwise seen from above
    let radians = -(tuning.yaw_step * input.move_right).to_radians();
    for mut transform in &mut query {
        transform.rotate_y(radians);
    }
}

pub(crate) fn apply_control_rotation(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<LocomotionTuning>,
    mut query: Query<&mut ControlRotation, With<Player>>,
) {
    let dt = time.delta_secs();
    let yaw = input.turn + rate_to_degrees(input.turn_rate, tuning.base_turn_rate, dt);
    let pitch = input.look_up + rate_to_degrees(input.look_up_rate, tuning.base_look_up_rate, dt);

    if yaw == 0.0 && pitch == 0.0 {
        return;
    }

    for mut rotation in &mut query {
        rotation.add_yaw(yaw);
        rotation.add_pitch(pitch, tuning.pitch_limit);
    }
}

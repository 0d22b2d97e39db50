//! Movement domain: hands the motor's consumed input to the physics body.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{CharacterMotor, LocomotionTuning, MovementState};

/// Horizontal velocity for a consumed input vector at the given max speed.
/// A negative max speed never pushes the body.
pub(crate) fn horizontal_velocity(input: Vec3, max_speed: f32) -> Vec2 {
    let speed = max_speed.max(0.0);
    Vec2::new(input.x, input.z) * speed
}

/// Airborne bodies only move `air_control` of the way to the target.
pub(crate) fn air_blend(current: Vec2, target: Vec2, air_control: f32) -> Vec2 {
    current.lerp(target, air_control)
}

pub(crate) fn apply_motor(
    tuning: Res<LocomotionTuning>,
    mut query: Query<(
        &mut CharacterMotor,
        &mut LinearVelocity,
        Option<&MovementState>,
    )>,
) {
    for (mut motor, mut velocity, state) in &mut query {
        let input = motor.consume_input();
        let mut planar = horizontal_velocity(input, motor.max_speed);

        // Bodies without ground tracking are treated as grounded
        if state.is_some_and(|s| !s.on_ground) {
            planar = air_blend(Vec2::new(velocity.x, velocity.z), planar, tuning.air_control);
        }

        // Vertical velocity stays with gravity and jumps
        velocity.x = planar.x;
        velocity.z = planar.y;
    }
}

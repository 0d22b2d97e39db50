//! Movement domain: ground detection and jumping.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, LocomotionTuning, MovementInput, MovementState, Player};

/// How far below the feet ground still counts as contact.
const GROUND_CONTACT_DISTANCE: f32 = 0.1;
/// Ray starts this far above the feet so it never begins inside the ground.
const GROUND_RAY_LIFT: f32 = 0.05;

/// Origin and length of the downward ground ray for a capsule of the given
/// height centred on `translation`.
pub(crate) fn ground_ray(translation: Vec3, capsule_height: f32) -> (Vec3, f32) {
    let feet = translation - Vec3::Y * (capsule_height * 0.5);
    (
        feet + Vec3::Y * GROUND_RAY_LIFT,
        GROUND_RAY_LIFT + GROUND_CONTACT_DISTANCE,
    )
}

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<LocomotionTuning>,
    mut query: Query<(&Transform, &mut MovementState), With<Player>>,
) {
    // Only ground surfaces count, never the player's own collider
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, mut state) in &mut query {
        let was_on_ground = state.on_ground;
        let (origin, distance) = ground_ray(transform.translation, tuning.capsule_height);

        let hit = spatial_query.cast_ray(origin, Dir3::NEG_Y, distance, true, &ground_filter);
        state.on_ground = hit.is_some();

        if state.on_ground && !was_on_ground {
            debug!("Landed: is_jumping={}", state.is_jumping);
        } else if !state.on_ground && was_on_ground {
            debug!("Left ground: is_jumping={}", state.is_jumping);
        }
    }
}

pub(crate) fn apply_jump(
    input: Res<MovementInput>,
    tuning: Res<LocomotionTuning>,
    mut query: Query<(&mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    for (mut state, mut velocity) in &mut query {
        // Releasing the key ends the jump request
        if !input.jump_held {
            state.is_jumping = false;
            continue;
        }

        state.is_jumping = true;

        // A held jump fires again on landing
        if state.on_ground {
            velocity.y = tuning.jump_velocity;
            state.on_ground = false;
            debug!("Jump: velocity.y={}", velocity.y);
        }
    }
}

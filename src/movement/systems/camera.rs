//! Movement domain: follow camera on a boom behind the player.

use bevy::prelude::*;

use crate::movement::{CameraBoom, ControlRotation, Player};

/// Camera transform for a boom hanging off `pivot` along `rotation`.
pub(crate) fn boom_transform(pivot: Vec3, rotation: Quat, arm_length: f32) -> Transform {
    Transform {
        translation: pivot + rotation * Vec3::new(0.0, 0.0, arm_length),
        rotation,
        ..default()
    }
}

pub(crate) fn follow_camera(
    player_query: Query<(&Transform, &ControlRotation), With<Player>>,
    mut camera_query: Query<(&mut Transform, &CameraBoom), Without<Player>>,
) {
    let Ok((player, control)) = player_query.single() else {
        return;
    };

    for (mut camera, boom) in &mut camera_query {
        let pivot = player.translation + Vec3::Y * boom.pivot_height;
        *camera = boom_transform(pivot, control.to_quat(), boom.arm_length);
    }
}

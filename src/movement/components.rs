//! Movement domain: components and physics layers for locomotion.

use avian3d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// The character's movement system: a max walk speed plus the movement input
/// gathered since the last physics step.
#[derive(Component, Debug, Clone)]
pub struct CharacterMotor {
    pub max_speed: f32,
    pending_input: Vec3,
}

impl CharacterMotor {
    pub fn new(max_speed: f32) -> Self {
        Self {
            max_speed,
            pending_input: Vec3::ZERO,
        }
    }

    pub fn add_movement_input(&mut self, direction: Vec3, scale: f32) {
        self.pending_input += direction * scale;
    }

    #[cfg(test)]
    pub fn pending_input(&self) -> Vec3 {
        self.pending_input
    }

    /// Take the accumulated input, clamped to unit length.
    pub fn consume_input(&mut self) -> Vec3 {
        let input = self.pending_input.clamp_length_max(1.0);
        self.pending_input = Vec3::ZERO;
        input
    }
}

/// Ground contact and jump request for the player body.
#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub on_ground: bool,
    /// Set while a jump is held; cleared on release.
    pub is_jumping: bool,
}

/// Yaw/pitch the camera looks along, in degrees. Only the camera follows it;
/// the character turns through `MoveRight`.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlRotation {
    pub yaw: f32,
    pub pitch: f32,
}

impl ControlRotation {
    pub fn add_yaw(&mut self, degrees: f32) {
        self.yaw = (self.yaw + degrees).rem_euclid(360.0);
    }

    pub fn add_pitch(&mut self, degrees: f32, limit: f32) {
        self.pitch = (self.pitch + degrees).clamp(-limit, limit);
    }

    /// Rotation equivalent, with positive yaw turning right and positive
    /// pitch looking up.
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            (-self.yaw).to_radians(),
            self.pitch.to_radians(),
            0.0,
        )
    }
}

/// Camera that trails the player on a fixed-length arm.
#[derive(Component, Debug)]
pub struct CameraBoom {
    pub arm_length: f32,
    /// Height of the arm's pivot above the player's origin.
    pub pivot_height: f32,
}

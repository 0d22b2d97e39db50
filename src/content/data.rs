//! Data definitions for the locomotion config file.
//!
//! These structs mirror assets/config/locomotion.ron. Every section and field
//! is optional; anything left out falls back to the built-in tuning.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::LocomotionTuning;

pub const SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Top-level file (locomotion.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct LocomotionDefaults {
    pub schema_version: u32,
    #[serde(default)]
    pub throttle: ThrottleDef,
    #[serde(default)]
    pub turning: TurningDef,
    #[serde(default)]
    pub jump: JumpDef,
    #[serde(default)]
    pub body: BodyDef,
}

impl Default for LocomotionDefaults {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            throttle: ThrottleDef::default(),
            turning: TurningDef::default(),
            jump: JumpDef::default(),
            body: BodyDef::default(),
        }
    }
}

// ============================================================================
// Sections
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct ThrottleDef {
    pub acceleration_step: f32,
    pub decay_step: f32,
    pub base_walk_speed: f32,
    pub double_tap_window: f32,
}

impl Default for ThrottleDef {
    fn default() -> Self {
        let tuning = LocomotionTuning::default();
        Self {
            acceleration_step: tuning.acceleration_step,
            decay_step: tuning.decay_step,
            base_walk_speed: tuning.base_walk_speed,
            double_tap_window: tuning.double_tap_window,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct TurningDef {
    pub base_turn_rate: f32,
    pub base_look_up_rate: f32,
    pub yaw_step: f32,
    pub mouse_sensitivity: f32,
    pub pitch_limit: f32,
}

impl Default for TurningDef {
    fn default() -> Self {
        let tuning = LocomotionTuning::default();
        Self {
            base_turn_rate: tuning.base_turn_rate,
            base_look_up_rate: tuning.base_look_up_rate,
            yaw_step: tuning.yaw_step,
            mouse_sensitivity: tuning.mouse_sensitivity,
            pitch_limit: tuning.pitch_limit,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct JumpDef {
    pub jump_velocity: f32,
    pub air_control: f32,
}

impl Default for JumpDef {
    fn default() -> Self {
        let tuning = LocomotionTuning::default();
        Self {
            jump_velocity: tuning.jump_velocity,
            air_control: tuning.air_control,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct BodyDef {
    pub capsule_radius: f32,
    pub capsule_height: f32,
    pub camera_arm_length: f32,
}

impl Default for BodyDef {
    fn default() -> Self {
        let tuning = LocomotionTuning::default();
        Self {
            capsule_radius: tuning.capsule_radius,
            capsule_height: tuning.capsule_height,
            camera_arm_length: tuning.camera_arm_length,
        }
    }
}

impl From<&LocomotionDefaults> for LocomotionTuning {
    fn from(defaults: &LocomotionDefaults) -> Self {
        let ThrottleDef {
            acceleration_step,
            decay_step,
            base_walk_speed,
            double_tap_window,
        } = defaults.throttle;
        let TurningDef {
            base_turn_rate,
            base_look_up_rate,
            yaw_step,
            mouse_sensitivity,
            pitch_limit,
        } = defaults.turning;
        let JumpDef {
            jump_velocity,
            air_control,
        } = defaults.jump;
        let BodyDef {
            capsule_radius,
            capsule_height,
            camera_arm_length,
        } = defaults.body;

        Self {
            acceleration_step,
            decay_step,
            base_walk_speed,
            base_turn_rate,
            base_look_up_rate,
            yaw_step,
            mouse_sensitivity,
            double_tap_window,
            pitch_limit,
            jump_velocity,
            air_control,
            capsule_radius,
            capsule_height,
            camera_arm_length,
        }
    }
}

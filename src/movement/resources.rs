//! Movement domain: tuning and input resources.

use bevy::prelude::*;

use crate::movement::LevelCommand;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct LocomotionTuning {
    /// Multiplier gained per tick for each unit of level.
    pub acceleration_step: f32,
    /// Flat multiplier lost per tick while coasting or over target.
    pub decay_step: f32,
    /// Max walk speed the character spawns with (units/s).
    pub base_walk_speed: f32,
    /// Degrees per second at full turn-rate deflection.
    pub base_turn_rate: f32,
    /// Degrees per second at full look-up-rate deflection.
    pub base_look_up_rate: f32,
    /// Degrees of yaw per frame per unit of `MoveRight`.
    pub yaw_step: f32,
    /// Degrees of control rotation per pixel of mouse travel.
    pub mouse_sensitivity: f32,
    /// Seconds between two presses for them to count as a double tap.
    pub double_tap_window: f32,
    pub pitch_limit: f32,
    /// Upward velocity applied when a jump starts (units/s).
    pub jump_velocity: f32,
    /// Fraction of the horizontal velocity change the character gets per
    /// frame while airborne.
    pub air_control: f32,
    pub capsule_radius: f32,
    pub capsule_height: f32,
    pub camera_arm_length: f32,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            acceleration_step: 0.01,
            decay_step: 0.01,
            base_walk_speed: 6.0,
            base_turn_rate: 45.0,
            base_look_up_rate: 45.0,
            yaw_step: 2.0,
            mouse_sensitivity: 0.2,
            double_tap_window: 0.25,
            pitch_limit: 89.0,
            jump_velocity: 6.0,
            air_control: 0.2,
            capsule_radius: 0.42,
            capsule_height: 1.92,
            camera_arm_length: 3.0,
        }
    }
}

/// Input sampled this frame, consumed by the locomotion and turning systems.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub commands: Vec<LevelCommand>,
    /// Yaw the character itself: -1 left, +1 right.
    pub move_right: f32,
    /// Absolute deltas (mouse), degrees.
    pub turn: f32,
    pub look_up: f32,
    /// Rate deflections (keys, sticks) in [-1, 1].
    pub turn_rate: f32,
    pub look_up_rate: f32,
    pub jump_held: bool,
}

impl MovementInput {
    pub fn clear(&mut self) {
        self.commands.clear();
        self.move_right = 0.0;
        self.turn = 0.0;
        self.look_up = 0.0;
        self.turn_rate = 0.0;
        self.look_up_rate = 0.0;
        self.jump_held = false;
    }
}

/// Which throttle key was tapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleKey {
    Forward,
    Backward,
}

/// Turns presses of the throttle keys into level commands, promoting a second
/// press of the same key inside the window to a full-throttle command.
#[derive(Resource, Debug, Default)]
pub struct DoubleTapDetector {
    last_press: Option<(ThrottleKey, f32)>,
}

impl DoubleTapDetector {
    pub fn press(&mut self, key: ThrottleKey, now: f32, window: f32) -> LevelCommand {
        let double = matches!(
            self.last_press,
            Some((prev, at)) if prev == key && now - at <= window
        );

        if double {
            self.last_press = None;
            match key {
                ThrottleKey::Forward => LevelCommand::MaxForward,
                ThrottleKey::Backward => LevelCommand::MaxBackward,
            }
        } else {
            self.last_press = Some((key, now));
            match key {
                ThrottleKey::Forward => LevelCommand::Increase,
                ThrottleKey::Backward => LevelCommand::Decrease,
            }
        }
    }
}

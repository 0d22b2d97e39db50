//! Movement domain: level-driven locomotion state machine.
//!
//! Discrete commands move a bounded `level`; every tick the `multiplier`
//! eases toward that level and the outcome tells the caller which max speed
//! to write and which way to drive the character. The multiplier is always a
//! commitment magnitude in the direction of `last_level`, so a reversal first
//! bleeds it down to zero before the new direction takes over.

use bevy::prelude::*;

use crate::movement::LocomotionTuning;

/// Largest magnitude `level` can reach in either direction.
pub const MAX_LEVEL: i8 = 4;

/// Atomic level commands produced by the input adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelCommand {
    Increase,
    Decrease,
    Stop,
    MaxForward,
    MaxBackward,
}

/// Direction of a movement input along the character's forward vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drive {
    Forward,
    Backward,
}

impl Drive {
    /// Scale passed to the movement-input sink.
    pub fn scale(self) -> f32 {
        match self {
            Drive::Forward => 1.0,
            Drive::Backward => -1.0,
        }
    }

    fn from_level(level: i8) -> Option<Self> {
        match level.signum() {
            1 => Some(Drive::Forward),
            -1 => Some(Drive::Backward),
            _ => None,
        }
    }
}

/// What a single tick asks of the movement system.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickOutcome {
    /// New max walk speed, when the tick wrote one.
    pub max_speed: Option<f32>,
    /// Movement input to issue this tick, if any.
    pub drive: Option<Drive>,
}

impl TickOutcome {
    fn idle() -> Self {
        Self::default()
    }

    fn driving(max_speed: f32, drive: Drive) -> Self {
        Self {
            max_speed: Some(max_speed),
            drive: Some(drive),
        }
    }
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct LocomotionState {
    level: i8,
    last_level: i8,
    multiplier: f32,
    base_speed: f32,
}

impl LocomotionState {
    /// A character at rest. `base_speed` is the movement system's max speed
    /// at the time the character is created.
    pub fn new(base_speed: f32) -> Self {
        Self {
            level: 0,
            last_level: 0,
            multiplier: 0.0,
            base_speed,
        }
    }

    pub fn level(&self) -> i8 {
        self.level
    }

    pub fn last_level(&self) -> i8 {
        self.last_level
    }

    pub fn multiplier(&self) -> f32 {
        self.multiplier
    }

    pub fn base_speed(&self) -> f32 {
        self.base_speed
    }

    /// Speed the movement system should currently be capped at.
    pub fn current_max_speed(&self) -> f32 {
        self.base_speed * self.multiplier
    }

    pub fn apply(&mut self, command: LevelCommand) {
        match command {
            LevelCommand::Increase => {
                if self.level < MAX_LEVEL {
                    self.level += 1;
                }
            }
            LevelCommand::Decrease => {
                if self.level > -MAX_LEVEL {
                    self.level -= 1;
                }
            }
            LevelCommand::Stop => self.level = 0,
            LevelCommand::MaxForward => self.level = MAX_LEVEL,
            LevelCommand::MaxBackward => self.level = -MAX_LEVEL,
        }
    }

    /// Advance the multiplier by one simulation tick.
    pub fn tick(&mut self, tuning: &LocomotionTuning) -> TickOutcome {
        let level = self.level;
        let last = self.last_level;
        let magnitude = f32::from(level.unsigned_abs());

        if level == 0 {
            return self.coast(tuning);
        }

        let direction = if level > 0 {
            Drive::Forward
        } else {
            Drive::Backward
        };
        let reversing = (level > 0 && last < 0) || (level < 0 && last > 0);

        if reversing {
            if self.multiplier > 0.0 {
                // Keep pushing the old way while the old commitment unwinds.
                self.multiplier -= tuning.acceleration_step * magnitude;
                let old_direction = match direction {
                    Drive::Forward => Drive::Backward,
                    Drive::Backward => Drive::Forward,
                };
                return TickOutcome::driving(self.current_max_speed(), old_direction);
            }

            debug!(
                "Reversal complete: last_level {} -> {}, multiplier {:.3}",
                last, level, self.multiplier
            );
            self.last_level = level;
            return TickOutcome::idle();
        }

        if self.multiplier < magnitude {
            self.multiplier += tuning.acceleration_step * magnitude;
        } else if self.multiplier > magnitude {
            self.multiplier -= tuning.decay_step;
        }
        self.last_level = level;
        TickOutcome::driving(self.current_max_speed(), direction)
    }

    /// Neutral level: bleed off speed while still moving the way we were going.
    fn coast(&mut self, tuning: &LocomotionTuning) -> TickOutcome {
        if self.multiplier > 0.0 {
            self.multiplier -= tuning.decay_step;
            return TickOutcome {
                max_speed: Some(self.current_max_speed()),
                drive: Drive::from_level(self.last_level),
            };
        }

        self.last_level = 0;
        TickOutcome::idle()
    }
}

#[cfg(test)]
impl LocomotionState {
    /// Build an arbitrary mid-motion state for exercising single branches.
    pub(crate) fn with_parts(level: i8, last_level: i8, multiplier: f32, base_speed: f32) -> Self {
        Self {
            level,
            last_level,
            multiplier,
            base_speed,
        }
    }
}

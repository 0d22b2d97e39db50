//! Validation for loaded locomotion tuning values.

use crate::movement::LocomotionTuning;

/// A validation error with context about what failed.
#[derive(Debug, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub value: f32,
    pub expected: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "'{}' is {} but must be {}",
            self.field, self.value, self.expected
        )
    }
}

/// Helper macro for checking a field against a predicate
macro_rules! check_field {
    ($errors:expr, $tuning:expr, $field:ident, $expected:expr, |$v:ident| $cond:expr) => {
        let $v = $tuning.$field;
        if !($cond) {
            $errors.push(ValidationError {
                field: stringify!($field),
                value: $v,
                expected: $expected,
            });
        }
    };
}

/// Validate tuning values.
/// Returns a list of validation errors, empty if the tuning is usable.
pub fn validate_tuning(tuning: &LocomotionTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // Throttle
    check_field!(errors, tuning, acceleration_step, "> 0", |v| v > 0.0);
    check_field!(errors, tuning, decay_step, "> 0", |v| v > 0.0);
    check_field!(errors, tuning, base_walk_speed, "> 0", |v| v > 0.0);
    check_field!(errors, tuning, double_tap_window, "> 0", |v| v > 0.0);

    // Turning
    check_field!(errors, tuning, base_turn_rate, ">= 0", |v| v >= 0.0);
    check_field!(errors, tuning, base_look_up_rate, ">= 0", |v| v >= 0.0);
    check_field!(errors, tuning, yaw_step, ">= 0", |v| v >= 0.0);
    check_field!(errors, tuning, mouse_sensitivity, ">= 0", |v| v >= 0.0);
    check_field!(errors, tuning, pitch_limit, "in (0, 90)", |v| v > 0.0 && v < 90.0);

    // Jump
    check_field!(errors, tuning, jump_velocity, ">= 0", |v| v >= 0.0);
    check_field!(errors, tuning, air_control, "in [0, 1]", |v| (0.0..=1.0).contains(&v));

    // Body
    check_field!(errors, tuning, capsule_radius, "> 0", |v| v > 0.0);
    check_field!(
        errors,
        tuning,
        capsule_height,
        ">= 2 * capsule_radius",
        |v| v >= 2.0 * tuning.capsule_radius
    );
    check_field!(errors, tuning, camera_arm_length, ">= 0", |v| v >= 0.0);

    errors
}

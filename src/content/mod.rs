//! Content domain: data-driven locomotion config loaded from RON.

mod data;
mod loader;
mod validation;


pub use data::*;
pub use loader::*;
pub use validation::*;

use bevy::prelude::*;
use std::path::Path;

use crate::movement::LocomotionTuning;

/// Directory holding the config files, relative to the working directory.
pub const CONFIG_DIR: &str = "assets/config";

/// Turn a load result into usable tuning, falling back to the built-in
/// values when the file is missing, malformed or fails validation.
pub fn resolve_tuning(loaded: Result<LocomotionDefaults, ContentLoadError>) -> LocomotionTuning {
    let defaults = match loaded {
        Ok(defaults) => defaults,
        Err(e) => {
            warn!("{}; using built-in locomotion tuning", e);
            return LocomotionTuning::default();
        }
    };

    let tuning = LocomotionTuning::from(&defaults);
    let errors = validate_tuning(&tuning);
    if !errors.is_empty() {
        for e in &errors {
            error!("Invalid locomotion tuning: {}", e);
        }
        warn!(
            "{} invalid locomotion value(s); using built-in locomotion tuning",
            errors.len()
        );
        return LocomotionTuning::default();
    }

    info!(
        "Loaded locomotion tuning: accel_step={}, decay_step={}, base_walk_speed={}",
        tuning.acceleration_step, tuning.decay_step, tuning.base_walk_speed
    );
    tuning
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let tuning = resolve_tuning(load_locomotion_defaults(Path::new(CONFIG_DIR)));

        app.register_type::<LocomotionDefaults>()
            .register_type::<ThrottleDef>()
            .register_type::<TurningDef>()
            .register_type::<JumpDef>()
            .register_type::<BodyDef>()
            .insert_resource(tuning);
    }
}

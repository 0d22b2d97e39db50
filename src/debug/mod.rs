//! Debug overlay for tuning locomotion feel.
//!
//! Press F3 to show the live throttle state (level, multiplier, max speed).

mod systems;
mod ui;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the locomotion info overlay is shown
    pub show_info: bool,
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (systems::toggle_debug_info, systems::update_debug_info).chain(),
        );
    }
}

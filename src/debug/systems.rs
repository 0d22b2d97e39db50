//! Debug domain: overlay toggle and refresh.

use bevy::prelude::*;

use crate::debug::DebugState;
use crate::debug::ui::{DebugInfoOverlay, format_locomotion_info, spawn_debug_info_overlay};
use crate::movement::{CharacterMotor, ControlRotation, LocomotionState, Player};

/// Toggle the info overlay with F3
pub(crate) fn toggle_debug_info(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.show_info = !debug_state.show_info;
        debug!("Debug info overlay: {}", debug_state.show_info);
    }
}

pub(crate) fn update_debug_info(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    player_query: Query<
        (&Transform, &LocomotionState, &CharacterMotor, &ControlRotation),
        With<Player>,
    >,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        // Cleanup overlay if it exists
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    // Ensure overlay exists
    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Some((transform, state, motor, control)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        **text = format_locomotion_info(state, motor, control, transform.translation);
    }
}

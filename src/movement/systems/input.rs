//! Movement domain: input sampling for locomotion.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

use crate::movement::{
    DoubleTapDetector, LevelCommand, LocomotionTuning, MovementInput, ThrottleKey,
};

pub(crate) fn read_input(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_motion: Option<Res<AccumulatedMouseMotion>>,
    tuning: Res<LocomotionTuning>,
    mut detector: ResMut<DoubleTapDetector>,
    mut input: ResMut<MovementInput>,
) {
    input.clear();

    let now = time.elapsed_secs();

    // Throttle: W/S step the level, a double tap pins it to the extreme
    if keyboard.just_pressed(KeyCode::KeyW) {
        let command = detector.press(ThrottleKey::Forward, now, tuning.double_tap_window);
        input.commands.push(command);
    }
    if keyboard.just_pressed(KeyCode::KeyS) {
        let command = detector.press(ThrottleKey::Backward, now, tuning.double_tap_window);
        input.commands.push(command);
    }
    if keyboard.just_pressed(KeyCode::KeyX) {
        input.commands.push(LevelCommand::Stop);
    }

    // Jump while held, stop jumping on release
    input.jump_held = keyboard.pressed(KeyCode::Space);

    // Character yaw
    input.move_right = axis(&keyboard, KeyCode::KeyA, KeyCode::KeyD);

    // Rate devices
    input.turn_rate = axis(&keyboard, KeyCode::ArrowLeft, KeyCode::ArrowRight);
    input.look_up_rate = axis(&keyboard, KeyCode::ArrowDown, KeyCode::ArrowUp);

    // Absolute devices: screen-space y grows downward
    if let Some(motion) = mouse_motion {
        input.turn = motion.delta.x * tuning.mouse_sensitivity;
        input.look_up = -motion.delta.y * tuning.mouse_sensitivity;
    }
}

fn axis(keyboard: &ButtonInput<KeyCode>, negative: KeyCode, positive: KeyCode) -> f32 {
    let mut value = 0.0;
    if keyboard.pressed(negative) {
        value -= 1.0;
    }
    if keyboard.pressed(positive) {
        value += 1.0;
    }
    value
}

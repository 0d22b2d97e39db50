//! Movement domain: system modules for locomotion updates.

pub(crate) mod camera;
pub(crate) mod input;
pub(crate) mod jump;
pub(crate) mod locomotion;
pub(crate) mod motor;
pub(crate) mod turning;

pub(crate) use camera::follow_camera;
pub(crate) use input::read_input;
pub(crate) use jump::{apply_jump, detect_ground};
pub(crate) use locomotion::{apply_level_commands, tick_locomotion};
pub(crate) use motor::apply_motor;
pub(crate) use turning::{apply_control_rotation, apply_move_right};

//! Camera and object orientation.
//!
//! Transforms follow the `lumen_shared::Transform` convention: the X, Y and Z
//! columns are right, up and forward, and `WORLD_UP` fixes the handedness.

mod controller;
mod orientation;

pub use controller::{mouse_look, ControllerInput, MatrixController};
pub use orientation::{look_at, stabilize, turn_to, MAX_TURN_STEP};

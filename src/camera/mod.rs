//! Camera system for first-person scene navigation.
//!
//! Provides a fly camera whose state advances once per frame from
//! accumulated input and yields separate projection and view matrices.

/// Per-frame fly-camera controller.
pub mod controller;
/// Camera state, derived matrices and the GPU uniform type.
pub mod core;

pub use controller::CameraController;
pub use self::core::{CameraMatrices, CameraState, CameraUniform};

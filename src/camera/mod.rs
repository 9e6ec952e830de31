//! Camera system for first-person scene navigation.
//!
//! Provides a free-fly camera with yaw/pitch mouse look, basis-relative
//! movement, field-of-view zoom, frustum extraction, and the per-frame
//! uniform output consumed by the hosting renderer.

/// Core camera struct and the per-frame uniform type.
pub mod core;
/// View frustum extraction and intersection tests.
pub mod frustum;
/// Command executor owning the camera and its per-frame state.
pub mod rig;

pub use self::core::{FreeCamera, ViewUniform};
pub use rig::CameraRig;

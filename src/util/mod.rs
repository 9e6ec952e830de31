//! Shared utilities for the camera rig.

pub mod frame_timing;

// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Free-fly camera rig for 3D viewers.
//!
//! Flycam maintains a first-person camera (position plus accumulated
//! yaw/pitch) and turns platform window events into camera motion. Each
//! frame it hands the hosting renderer a view matrix, a projection
//! matrix, and a plain-data uniform struct — it never owns a window or a
//! GPU device.
//!
//! # Key entry points
//!
//! - [`camera::rig::CameraRig`] - command executor and per-frame driver
//! - [`camera::core::FreeCamera`] - the camera state and math
//! - [`input::InputProcessor`] - raw events in, [`command::CameraCommand`]
//!   values out
//! - [`options::Options`] - runtime configuration (camera tuning,
//!   keybindings) with TOML preset support
//!
//! # Architecture
//!
//! The windowing collaborator forwards events as [`input::InputEvent`]
//! values and key strings; the processor resolves them against
//! configurable bindings and emits commands; the rig executes commands
//! and integrates held-key movement once per frame using the delta time
//! from [`util::frame_timing::FrameTiming`]. All state is
//! single-threaded and owned by the caller's frame loop.

pub mod camera;
pub mod command;
pub mod error;
pub mod input;
pub mod options;
pub mod util;

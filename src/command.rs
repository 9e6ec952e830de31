//! The rig's complete interactive vocabulary.
//!
//! Every camera-facing operation — whether triggered by a key press,
//! mouse motion, scroll, or programmatic call — is represented as a
//! `CameraCommand`.  Consumers construct commands and pass them to
//! [`CameraRig::execute`](crate::camera::rig::CameraRig::execute).

use glam::Vec2;

// ── Command payload types ────────────────────────────────────────────────

/// Translation direction relative to the camera's current basis.
///
/// Forward/backward move along the full look direction (including its
/// vertical component when pitched); left/right strafe along the
/// derived right vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    /// Along the look direction.
    Forward,
    /// Opposite the look direction.
    Backward,
    /// Strafe opposite the right vector.
    Left,
    /// Strafe along the right vector.
    Right,
}

/// Snapshot of the held movement keys for one frame.
///
/// Produced by
/// [`InputProcessor::movement_axes`](crate::input::InputProcessor::movement_axes)
/// and consumed by [`CameraRig::frame`](crate::camera::rig::CameraRig::frame).
/// Opposed axes are allowed to be held simultaneously; they cancel out
/// during integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct MovementAxes {
    /// Forward key held.
    pub forward: bool,
    /// Backward key held.
    pub backward: bool,
    /// Left strafe key held.
    pub left: bool,
    /// Right strafe key held.
    pub right: bool,
    /// Sprint modifier held (scales the integration step).
    pub sprint: bool,
}

impl MovementAxes {
    /// Whether any movement key is held.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

// ── Commands ─────────────────────────────────────────────────────────────

/// A discrete or parameterized operation the camera rig can perform.
///
/// This is the single, centralized description of what the rig can do
/// interactively.  The rig never cares *how* a command was triggered —
/// keyboard, mouse, or API all look identical:
///
/// ```ignore
/// rig.execute(CameraCommand::Zoom { delta: 1.0 });
/// rig.execute(CameraCommand::ResetCamera);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Translate the camera for one integration step.
    ///
    /// Continuous movement normally flows through
    /// [`CameraRig::frame`](crate::camera::rig::CameraRig::frame); this
    /// command exists for discrete or scripted nudges.
    Move {
        /// Basis-relative direction.
        direction: MoveDirection,
        /// Elapsed time in seconds to integrate over.
        delta_time: f32,
    },

    /// Rotate the camera by `delta` pixels of mouse movement.
    ///
    /// `delta.y` is positive when the cursor moved toward the top of
    /// the window (pitch up).
    Look {
        /// Horizontal and vertical look delta.
        delta: Vec2,
    },

    /// Narrow or widen the field of view (positive = zoom in).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },

    /// Restore the constructed pose, orientation, and field of view.
    ResetCamera,

    /// Flip mouse-look mode.
    ToggleMouseLook,

    /// Set mouse-look mode explicitly.
    ///
    /// Emitted by the input processor so the windowing collaborator can
    /// observe the state and grab or release the cursor accordingly.
    SetMouseLook {
        /// `true` to slew the camera from cursor motion.
        active: bool,
    },
}

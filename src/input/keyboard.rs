use serde::{Deserialize, Serialize};

/// Camera actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_forward = "KeyW"
/// reset_camera = "KeyR"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Move along the look direction while held.
    MoveForward,
    /// Move opposite the look direction while held.
    MoveBackward,
    /// Strafe left while held.
    StrafeLeft,
    /// Strafe right while held.
    StrafeRight,
    /// Restore the camera's home pose.
    ResetCamera,
    /// Flip mouse-look mode.
    ToggleMouseLook,
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 1.0, max = 45.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Lower field-of-view clamp when zooming in.
    #[schemars(skip)]
    pub fov_min: f32,
    /// Upper field-of-view clamp when zooming out.
    #[schemars(skip)]
    pub fov_max: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Movement speed in world units per second.
    #[schemars(title = "Movement Speed", range(min = 0.5, max = 20.0), extend("step" = 0.5))]
    pub movement_speed: f32,
    /// Mouse-look sensitivity in degrees per pixel.
    #[schemars(title = "Mouse Sensitivity", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub mouse_sensitivity: f32,
    /// Pitch clamp in degrees, symmetric about the horizon.
    #[schemars(skip)]
    pub pitch_limit: f32,
    /// Invert vertical mouse look.
    #[schemars(title = "Invert Y")]
    pub invert_y: bool,
    /// Movement speed multiplier while the sprint modifier is held.
    #[schemars(title = "Sprint Multiplier", range(min = 1.0, max = 10.0), extend("step" = 0.5))]
    pub sprint_multiplier: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            fov_min: 1.0,
            fov_max: 45.0,
            znear: 0.1,
            zfar: 100.0,
            movement_speed: 2.5,
            mouse_sensitivity: 0.1,
            pitch_limit: 89.0,
            invert_y: false,
            sprint_multiplier: 2.0,
        }
    }
}

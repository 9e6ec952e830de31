use glam::{Mat4, Vec3};

use crate::camera::core::{FreeCamera, ViewUniform};
use crate::camera::frustum::Frustum;
use crate::command::{CameraCommand, MoveDirection, MovementAxes};
use crate::options::CameraOptions;

/// Command executor and per-frame driver for a [`FreeCamera`].
///
/// The rig is the explicit state struct that replaces ad-hoc global
/// camera pointers: the event loop hands it commands and held-key axes,
/// and the renderer reads matrices and the refreshed [`ViewUniform`]
/// back out. Exclusively owned by the caller's frame loop; nothing here
/// is shared or locked.
pub struct CameraRig {
    camera: FreeCamera,
    /// Constructed pose, restored by [`CameraCommand::ResetCamera`].
    home: FreeCamera,
    uniform: ViewUniform,
    aspect: f32,
    mouse_look: bool,
    sprint_multiplier: f32,
}

impl CameraRig {
    /// Create a rig with a camera at `position` tuned by `options`.
    #[must_use]
    pub fn new(position: Vec3, options: &CameraOptions) -> Self {
        let camera = FreeCamera::new(position, options);
        let home = camera.clone();
        let mut uniform = ViewUniform::new();
        let aspect = 1.6;
        uniform.refresh(&camera, aspect);

        Self {
            camera,
            home,
            uniform,
            aspect,
            mouse_look: false,
            sprint_multiplier: options.sprint_multiplier,
        }
    }

    /// Read access to the camera state.
    #[must_use]
    pub fn camera(&self) -> &FreeCamera {
        &self.camera
    }

    /// The uniform as of the last executed command or frame.
    #[must_use]
    pub fn uniform(&self) -> &ViewUniform {
        &self.uniform
    }

    /// Whether cursor motion currently slews the camera.
    #[must_use]
    pub fn mouse_look(&self) -> bool {
        self.mouse_look
    }

    /// View matrix for the current pose.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.camera.view_matrix()
    }

    /// Projection matrix for the current zoom and aspect ratio.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.camera.projection_matrix(self.aspect)
    }

    /// Combined projection × view matrix.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.camera.view_projection(self.aspect)
    }

    /// Culling frustum for the current view-projection.
    #[must_use]
    pub fn frustum(&self) -> Frustum {
        Frustum::from_view_projection(self.view_projection())
    }

    /// Track a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
        self.uniform.refresh(&self.camera, self.aspect);
    }

    /// Execute a single command.
    pub fn execute(&mut self, command: CameraCommand) {
        match command {
            CameraCommand::Move {
                direction,
                delta_time,
            } => self.camera.advance(direction, delta_time),
            CameraCommand::Look { delta } => {
                self.camera.look(delta.x, delta.y, true);
            }
            CameraCommand::Zoom { delta } => self.camera.zoom_by(delta, true),
            CameraCommand::ResetCamera => self.reset(),
            CameraCommand::ToggleMouseLook => {
                self.set_mouse_look(!self.mouse_look);
            }
            CameraCommand::SetMouseLook { active } => {
                self.set_mouse_look(active);
            }
        }
        self.uniform.refresh(&self.camera, self.aspect);
    }

    /// Integrate held-key movement for one frame.
    ///
    /// `delta_time` is the frame's elapsed seconds; movement stays
    /// frame-rate independent because each axis advances by
    /// `speed * delta_time`.
    pub fn frame(&mut self, axes: MovementAxes, delta_time: f32) {
        let step = if axes.sprint {
            delta_time * self.sprint_multiplier
        } else {
            delta_time
        };

        if axes.forward {
            self.camera.advance(MoveDirection::Forward, step);
        }
        if axes.backward {
            self.camera.advance(MoveDirection::Backward, step);
        }
        if axes.left {
            self.camera.advance(MoveDirection::Left, step);
        }
        if axes.right {
            self.camera.advance(MoveDirection::Right, step);
        }

        self.uniform.refresh(&self.camera, self.aspect);
    }

    /// Restore the constructed pose, orientation, and field of view.
    pub fn reset(&mut self) {
        log::debug!("camera reset to home pose");
        self.camera = self.home.clone();
    }

    fn set_mouse_look(&mut self, active: bool) {
        if self.mouse_look != active {
            log::debug!("mouse-look {}", if active { "on" } else { "off" });
        }
        self.mouse_look = active;
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::Vec2;

    use super::*;

    fn rig() -> CameraRig {
        CameraRig::new(Vec3::ZERO, &CameraOptions::default())
    }

    #[test]
    fn frame_integrates_held_axes() {
        let mut rig = rig();
        let axes = MovementAxes {
            forward: true,
            right: true,
            ..MovementAxes::default()
        };
        rig.frame(axes, 0.5);
        // 2.5 speed * 0.5 s along -Z and +X
        assert!(rig
            .camera()
            .position
            .abs_diff_eq(Vec3::new(1.25, 0.0, -1.25), 1e-5));
    }

    #[test]
    fn opposed_axes_cancel() {
        let mut rig = rig();
        let axes = MovementAxes {
            forward: true,
            backward: true,
            ..MovementAxes::default()
        };
        rig.frame(axes, 1.0);
        assert!(rig.camera().position.abs_diff_eq(Vec3::ZERO, 1e-5));
    }

    #[test]
    fn sprint_scales_step() {
        let mut rig = rig();
        let axes = MovementAxes {
            forward: true,
            sprint: true,
            ..MovementAxes::default()
        };
        rig.frame(axes, 1.0);
        // 2.5 speed * 2.0 sprint multiplier
        assert_relative_eq!(rig.camera().position.z, -5.0, epsilon = 1e-5);
    }

    #[test]
    fn reset_restores_home_pose() {
        let mut rig = rig();
        rig.execute(CameraCommand::Look {
            delta: Vec2::new(300.0, 100.0),
        });
        rig.execute(CameraCommand::Zoom { delta: 20.0 });
        rig.frame(
            MovementAxes {
                forward: true,
                ..MovementAxes::default()
            },
            1.0,
        );

        rig.execute(CameraCommand::ResetCamera);
        assert!(rig.camera().position.abs_diff_eq(Vec3::ZERO, 1e-5));
        assert_relative_eq!(rig.camera().yaw(), -90.0);
        assert_relative_eq!(rig.camera().pitch(), 0.0);
        assert_relative_eq!(rig.camera().zoom(), 45.0);
    }

    #[test]
    fn mouse_look_commands_flip_state() {
        let mut rig = rig();
        assert!(!rig.mouse_look());
        rig.execute(CameraCommand::ToggleMouseLook);
        assert!(rig.mouse_look());
        rig.execute(CameraCommand::SetMouseLook { active: false });
        assert!(!rig.mouse_look());
    }

    #[test]
    fn uniform_refreshes_after_execute() {
        let mut rig = rig();
        rig.resize(800, 400);
        rig.execute(CameraCommand::Zoom { delta: 15.0 });
        assert_relative_eq!(rig.uniform().fovy, 30.0);
        assert_relative_eq!(rig.uniform().aspect, 2.0);
    }

    #[test]
    fn resize_ignores_zero_height() {
        let mut rig = rig();
        rig.resize(800, 400);
        rig.resize(800, 0);
        assert_relative_eq!(rig.uniform().aspect, 2.0);
    }
}

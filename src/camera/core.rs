use glam::{Mat4, Vec2, Vec3};

use crate::command::MoveDirection;
use crate::options::CameraOptions;

/// First-person camera defined by a world position and accumulated
/// yaw/pitch angles.
///
/// The orthonormal basis (`front`, `right`, `up`) is derived from the
/// angles and a fixed world-up reference; it is recomputed after every
/// orientation change and never set directly, so the view basis stays
/// right-handed and drift-free.
#[derive(Debug, Clone)]
pub struct FreeCamera {
    /// Eye position in world space.
    pub position: Vec3,

    /// Heading in degrees. `-90` looks down `-Z`.
    yaw: f32,
    /// Elevation in degrees, kept inside `±pitch_limit` when clamping
    /// is enabled.
    pitch: f32,
    /// Vertical field of view in degrees; scroll zoom narrows it.
    zoom: f32,

    /// Derived look direction.
    front: Vec3,
    /// Derived right vector.
    right: Vec3,
    /// Derived up vector.
    up: Vec3,
    /// Fixed world-up reference for re-orthogonalization.
    world_up: Vec3,

    /// Near clipping plane distance.
    znear: f32,
    /// Far clipping plane distance.
    zfar: f32,

    // Tuning scalars, sourced from CameraOptions at construction.
    movement_speed: f32,
    mouse_sensitivity: f32,
    pitch_limit: f32,
    fov_min: f32,
    fov_max: f32,
    invert_y: bool,
}

impl FreeCamera {
    /// Create a camera at `position` looking down `-Z`, with tuning
    /// taken from `options`.
    #[must_use]
    pub fn new(position: Vec3, options: &CameraOptions) -> Self {
        let mut camera = Self {
            position,
            yaw: -90.0,
            pitch: 0.0,
            zoom: options.fovy,
            front: Vec3::NEG_Z,
            right: Vec3::ZERO,
            up: Vec3::ZERO,
            world_up: Vec3::Y,
            znear: options.znear,
            zfar: options.zfar,
            movement_speed: options.movement_speed,
            mouse_sensitivity: options.mouse_sensitivity,
            pitch_limit: options.pitch_limit,
            fov_min: options.fov_min,
            fov_max: options.fov_max,
            invert_y: options.invert_y,
        };
        camera.recompute_basis();
        camera
    }

    /// Current heading in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current elevation in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Current vertical field of view in degrees.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Derived look direction (unit length).
    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Derived right vector (unit length).
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Derived up vector (unit length).
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Translate along the basis for `delta_time` seconds of movement.
    ///
    /// A zero `delta_time` leaves the position unchanged.
    pub fn advance(&mut self, direction: MoveDirection, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        match direction {
            MoveDirection::Forward => self.position += self.front * velocity,
            MoveDirection::Backward => self.position -= self.front * velocity,
            MoveDirection::Left => self.position -= self.right * velocity,
            MoveDirection::Right => self.position += self.right * velocity,
        }
    }

    /// Accumulate a mouse-look delta into yaw and pitch.
    ///
    /// Deltas are scaled by the configured sensitivity. With `clamp`
    /// enabled the pitch is held inside the configured limit to avoid
    /// flipping over the pole.
    pub fn look(&mut self, x_delta: f32, y_delta: f32, clamp: bool) {
        let x_delta = x_delta * self.mouse_sensitivity;
        let mut y_delta = y_delta * self.mouse_sensitivity;
        if self.invert_y {
            y_delta = -y_delta;
        }

        self.yaw += x_delta;
        self.pitch += y_delta;

        if clamp {
            self.pitch = self.pitch.clamp(-self.pitch_limit, self.pitch_limit);
        }

        self.recompute_basis();
    }

    /// Narrow or widen the field of view (positive offset = zoom in).
    pub fn zoom_by(&mut self, offset: f32, clamp: bool) {
        self.zoom -= offset;

        if clamp {
            self.zoom = self.zoom.clamp(self.fov_min, self.fov_max);
        }
    }

    /// Build the view matrix from the current position and basis.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Build the projection matrix for the given aspect ratio.
    ///
    /// Uses the OpenGL `[-1, 1]` depth convention.
    #[must_use]
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.zoom.to_radians(),
            aspect.max(0.1),
            self.znear,
            self.zfar,
        )
    }

    /// Combined projection × view matrix.
    #[must_use]
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// Unit world-space ray through a normalized device coordinate.
    #[must_use]
    pub fn pick_ray(&self, ndc: Vec2, aspect: f32) -> Vec3 {
        let t = (self.zoom.to_radians() * 0.5).tan();
        (self.front + self.right * (ndc.x * t * aspect) + self.up * (ndc.y * t))
            .normalize()
    }

    /// Rebuild the orthonormal basis from yaw and pitch.
    ///
    /// Spherical-to-Cartesian for the front vector, then two normalized
    /// cross products re-orthogonalize right and up against the fixed
    /// world-up reference.
    fn recompute_basis(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();

        self.front = Vec3::new(
            yaw_cos * pitch_cos,
            pitch_sin,
            yaw_sin * pitch_cos,
        )
        .normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

/// Per-frame camera output handed to the rendering collaborator.
///
/// Plain `#[repr(C)]` data so callers can upload it as a uniform buffer
/// without copying field by field; this crate never touches the GPU
/// itself.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ViewUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Default for ViewUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewUniform {
    /// Create a new uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.6,
            forward: [0.0, 0.0, -1.0],
            fovy: 45.0,
        }
    }

    /// Update all fields from the camera's current state.
    pub fn refresh(&mut self, camera: &FreeCamera, aspect: f32) {
        self.view_proj = camera.view_projection(aspect).to_cols_array_2d();
        self.position = camera.position.to_array();
        self.aspect = aspect;
        self.forward = camera.front().to_array();
        self.fovy = camera.zoom();
    }
}

//! View frustum for culling
//!
//! Extracts frustum planes from the camera's view-projection matrix and
//! provides intersection tests for points and spheres.

use glam::{Mat4, Vec3, Vec4};

/// A plane in 3D space, represented as (normal.x, normal.y, normal.z,
/// distance) where the plane equation is: ax + by + cz + d = 0
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    /// Unit normal pointing into the positive half-space.
    pub normal: Vec3,
    /// Signed distance from origin (`n · p + d = 0`).
    pub distance: f32,
}

impl Plane {
    /// Build a normalized plane from a raw coefficient row.
    fn from_row(row: Vec4) -> Self {
        let normal = Vec3::new(row.x, row.y, row.z);
        let len = normal.length();
        if len > 0.0 {
            Self {
                normal: normal / len,
                distance: row.w / len,
            }
        } else {
            Self {
                normal: Vec3::ZERO,
                distance: 0.0,
            }
        }
    }

    /// Signed distance from point to plane (positive = in front,
    /// negative = behind)
    #[inline]
    #[must_use]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }
}

/// View frustum consisting of 6 planes
#[derive(Debug, Clone)]
pub struct Frustum {
    /// Six clipping planes: left, right, bottom, top, near, far.
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix.
    ///
    /// Uses the Gribb/Hartmann method for the `[-1, 1]` depth range the
    /// camera projects with (both near and far planes involve the last
    /// row, unlike the `[0, 1]` variant). Planes point inward, so the
    /// positive half-space is inside the frustum.
    #[must_use]
    pub fn from_view_projection(vp: Mat4) -> Self {
        let row0 = vp.row(0);
        let row1 = vp.row(1);
        let row2 = vp.row(2);
        let row3 = vp.row(3);

        Self {
            planes: [
                Plane::from_row(row3 + row0),
                Plane::from_row(row3 - row0),
                Plane::from_row(row3 + row1),
                Plane::from_row(row3 - row1),
                Plane::from_row(row3 + row2),
                Plane::from_row(row3 - row2),
            ],
        }
    }

    /// Test if a point is inside the frustum
    #[inline]
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(point) >= 0.0)
    }

    /// Test if a sphere intersects or is inside the frustum
    #[inline]
    #[must_use]
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(center) >= -radius)
    }

    /// Test if a sphere is completely inside the frustum (not just
    /// intersecting)
    #[inline]
    #[must_use]
    pub fn contains_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(center) >= radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::core::FreeCamera;
    use crate::options::CameraOptions;

    fn frustum() -> Frustum {
        // Default pose at the origin looking down -Z
        let camera = FreeCamera::new(Vec3::ZERO, &CameraOptions::default());
        Frustum::from_view_projection(camera.view_projection(1.0))
    }

    #[test]
    fn contains_point_ahead_rejects_point_behind() {
        let frustum = frustum();
        assert!(frustum.contains_point(Vec3::new(0.0, 0.0, -10.0)));
        assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, 10.0)));
    }

    #[test]
    fn rejects_point_outside_far_plane() {
        let frustum = frustum();
        // Default zfar is 100
        assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, -200.0)));
    }

    #[test]
    fn sphere_tests_respect_radius() {
        let frustum = frustum();
        // Center behind the near plane but radius crossing it
        assert!(frustum.intersects_sphere(Vec3::ZERO, 1.0));
        assert!(!frustum.contains_sphere(Vec3::ZERO, 1.0));
        // Well off to the side at a shallow depth
        assert!(!frustum.intersects_sphere(Vec3::new(50.0, 0.0, -1.0), 1.0));
    }

    #[test]
    fn frustum_follows_camera_orientation() {
        let mut camera = FreeCamera::new(Vec3::ZERO, &CameraOptions::default());
        // Turn 180°: 1800 px at 0.1 sensitivity
        camera.look(1800.0, 0.0, true);
        let frustum =
            Frustum::from_view_projection(camera.view_projection(1.0));
        assert!(frustum.contains_point(Vec3::new(0.0, 0.0, 10.0)));
        assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, -10.0)));
    }
}

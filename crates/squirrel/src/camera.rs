//! Camera built on a [`Transform`].

use glam::{Mat4, Vec3};
use squirrel_core::Transform;

/// A perspective camera whose pose lives in a [`Transform`].
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera pose in world space.
    pub transform: Transform,
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
    /// Aspect ratio (width / height).
    pub aspect: f32,
    /// Multiplier applied to incremental rotations.
    pub sensitivity: f32,
    /// Whether this is the camera the renderer draws from.
    pub primary: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            transform: Transform::new(),
            fov: 45.0,
            near: 0.1,
            far: 1000.0,
            aspect: 4.0 / 3.0,
            sensitivity: 1.0,
            primary: true,
        }
    }
}

impl Camera {
    /// Creates a new camera with default settings.
    #[must_use]
    pub fn new(aspect: f32) -> Self {
        Self {
            aspect,
            ..Default::default()
        }
    }

    /// Sets the aspect ratio.
    pub fn set_aspect_ratio(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Returns the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        let position = self.transform.position();
        Mat4::look_at_rh(
            position,
            position + self.transform.forward_vector(),
            self.transform.up_vector(),
        )
    }

    /// Returns the projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), self.aspect, self.near, self.far)
    }

    /// Turns left/right about world up by `degrees`.
    pub fn rotate_yaw(&mut self, degrees: f32) {
        self.transform
            .rotate_axis_angle(Vec3::Y, degrees * self.sensitivity);
    }

    /// Tilts up/down about the camera's right vector by `degrees`.
    pub fn rotate_pitch(&mut self, degrees: f32) {
        let right = self.transform.right_vector();
        self.transform
            .rotate_axis_angle(right, degrees * self.sensitivity);
    }

    /// Rolls about the camera's forward vector by `degrees`.
    pub fn rotate_roll(&mut self, degrees: f32) {
        let forward = self.transform.forward_vector();
        self.transform
            .rotate_axis_angle(forward, degrees * self.sensitivity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_defaults() {
        let camera = Camera::default();
        assert!((camera.fov - 45.0).abs() < f32::EPSILON);
        assert!((camera.aspect - 4.0 / 3.0).abs() < f32::EPSILON);
        assert!(camera.primary);
    }

    #[test]
    fn test_view_matrix_moves_world_opposite_camera() {
        let mut camera = Camera::new(16.0 / 9.0);
        camera.transform.set_position(Vec3::new(0.0, 0.0, 10.0));

        let view = camera.view_matrix();
        let origin_in_view = view.transform_point3(Vec3::ZERO);
        assert!((origin_in_view - Vec3::new(0.0, 0.0, -10.0)).length() < EPS);
    }

    #[test]
    fn test_yaw_turns_forward() {
        let mut camera = Camera::default();
        camera.rotate_yaw(90.0);
        assert!((camera.transform.forward_vector() - Vec3::NEG_X).length() < EPS);
    }

    #[test]
    fn test_pitch_turns_forward_up() {
        let mut camera = Camera::default();
        camera.rotate_pitch(90.0);
        assert!((camera.transform.forward_vector() - Vec3::Y).length() < EPS);
        assert!((camera.transform.right_vector() - Vec3::X).length() < EPS);
    }

    #[test]
    fn test_roll_keeps_forward() {
        let mut camera = Camera::default();
        camera.rotate_roll(90.0);
        assert!((camera.transform.forward_vector() - Vec3::NEG_Z).length() < EPS);
        assert!((camera.transform.up_vector() - Vec3::X).length() < EPS);
    }

    #[test]
    fn test_sensitivity_scales_rotation() {
        let mut camera = Camera {
            sensitivity: 0.5,
            ..Default::default()
        };
        camera.rotate_yaw(180.0);
        assert!((camera.transform.forward_vector() - Vec3::NEG_X).length() < EPS);
    }

    #[test]
    fn test_projection_matrix_matches_glam() {
        let camera = Camera::new(2.0);
        let expected = Mat4::perspective_rh(45.0f32.to_radians(), 2.0, 0.1, 1000.0);
        assert_eq!(camera.projection_matrix(), expected);
    }
}

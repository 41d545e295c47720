//! Spatial transform component.
//!
//! A [`Transform`] owns a [`DualQuaternion`] for rotation and translation plus
//! a separate scale vector, and caches the resulting model matrix. Every
//! mutator marks the cache dirty; only [`Transform::matrix`] rebuilds it and
//! clears the flag.
//!
//! Axis convention (right-handed): forward is -Z, right is +X, up is +Y.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::dual_quaternion::DualQuaternion;
use crate::options::{AntiparallelLook, Options};
use crate::quaternion::Quaternion;

/// A rigid transform with per-axis scale and a lazily rebuilt matrix.
///
/// Starts at the origin with identity rotation and unit scale. The cache
/// starts dirty, so the first [`Transform::matrix`] call always computes.
///
/// Not safe to mutate and read concurrently without external locking; a
/// reader could observe the motion and the cached matrix out of step.
#[derive(Debug, Clone)]
pub struct Transform {
    motion: DualQuaternion,
    scale: Vec3,
    matrix: Mat4,
    dirty: bool,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            motion: DualQuaternion::IDENTITY,
            scale: Vec3::ONE,
            matrix: Mat4::IDENTITY,
            dirty: true,
        }
    }
}

impl Transform {
    /// Creates a new identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transform from a position, rotation and scale.
    #[must_use]
    pub fn from_components(position: Vec3, rotation: Quaternion, scale: Vec3) -> Self {
        Self {
            motion: DualQuaternion::from_rotation_translation(rotation, position),
            scale,
            ..Default::default()
        }
    }

    /// The underlying rotation + translation.
    #[must_use]
    pub fn dual_quaternion(&self) -> &DualQuaternion {
        &self.motion
    }

    /// Whether the next [`Self::matrix`] call will rebuild.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns the position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.motion.translation()
    }

    /// Sets the position.
    pub fn set_position(&mut self, position: Vec3) {
        self.motion.set_translation(position);
        self.dirty = true;
    }

    /// Moves the transform by `delta` in world space.
    pub fn translate(&mut self, delta: Vec3) {
        self.motion.add_translation(delta);
        self.dirty = true;
    }

    /// Returns the rotation.
    #[must_use]
    pub fn rotation(&self) -> Quaternion {
        self.motion.rotation()
    }

    /// Replaces the rotation. The position is kept.
    pub fn set_rotation(&mut self, rotation: Quaternion) {
        self.motion.set_rotation(rotation);
        self.dirty = true;
    }

    /// Composes `rotation` on top of the current rotation.
    ///
    /// Unlike [`Self::set_rotation`] this does not reproject the translation,
    /// so the position reported afterwards swings with the rotation.
    pub fn rotate(&mut self, rotation: Quaternion) {
        self.motion.add_rotation(rotation);
        self.dirty = true;
    }

    /// Rotates by `angle_degrees` about `axis`. See [`Self::rotate`].
    pub fn rotate_axis_angle(&mut self, axis: Vec3, angle_degrees: f32) {
        self.rotate(Quaternion::from_axis_angle_vec(axis, angle_degrees.to_radians()));
    }

    /// Returns the scale.
    #[must_use]
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Sets the scale.
    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
        self.dirty = true;
    }

    /// Multiplies the scale uniformly by `factor`.
    pub fn scale_by(&mut self, factor: f32) {
        self.scale *= factor;
        self.dirty = true;
    }

    /// Returns the rotation as `(roll, pitch, yaw)` in radians.
    #[must_use]
    pub fn euler_angles(&self) -> Vec3 {
        self.motion.euler_rotation()
    }

    /// Returns the rotation as Euler angles (in degrees).
    #[must_use]
    pub fn euler_angles_degrees(&self) -> Vec3 {
        self.euler_angles() * (180.0 / std::f32::consts::PI)
    }

    /// Sets the rotation from `(roll, pitch, yaw)` in degrees.
    pub fn set_euler_angles_degrees(&mut self, degrees: Vec3) {
        let radians = degrees * (std::f32::consts::PI / 180.0);
        self.set_rotation(Quaternion::from_euler(radians.x, radians.y, radians.z));
    }

    /// The local -Z axis in world space.
    #[must_use]
    pub fn forward_vector(&self) -> Vec3 {
        self.rotate_axis(Vec3::NEG_Z)
    }

    /// The local +X axis in world space.
    #[must_use]
    pub fn right_vector(&self) -> Vec3 {
        self.rotate_axis(Vec3::X)
    }

    /// The local +Y axis in world space.
    #[must_use]
    pub fn up_vector(&self) -> Vec3 {
        self.rotate_axis(Vec3::Y)
    }

    fn rotate_axis(&self, axis: Vec3) -> Vec3 {
        self.motion.real.normalized().rotate_vector(axis)
    }

    /// Turns to face `direction` using default [`Options`].
    pub fn look(&mut self, direction: Vec3) {
        self.look_with(direction, &Options::default());
    }

    /// Turns to face `direction` along the shortest arc from forward.
    ///
    /// A direction within `options.look_epsilon` of forward yields the
    /// identity rotation. A direction within the same tolerance of backward
    /// follows `options.antiparallel_look`. A zero direction produces NaN.
    /// The position is kept.
    pub fn look_with(&mut self, direction: Vec3, options: &Options) {
        let direction = direction.normalize();
        let forward = Vec3::NEG_Z;
        let dot = forward.dot(direction);

        let rotation = if dot >= 1.0 - options.look_epsilon {
            Quaternion::IDENTITY
        } else if dot <= -1.0 + options.look_epsilon {
            log::debug!(
                "look: direction opposite forward, using {:?} fallback",
                options.antiparallel_look
            );
            match options.antiparallel_look {
                AntiparallelLook::Identity => Quaternion::IDENTITY,
                AntiparallelLook::HalfTurn => Quaternion::new(0.0, 0.0, 1.0, 0.0),
            }
        } else {
            let axis = forward.cross(direction);
            Quaternion::new(1.0 + dot, axis.x, axis.y, axis.z).normalized()
        };

        self.set_rotation(rotation);
    }

    /// Returns the model matrix, `translation · rotation · scale`.
    ///
    /// Rebuilds only when a mutator has run since the last call.
    pub fn matrix(&mut self) -> Mat4 {
        if self.dirty {
            self.matrix = self.motion.matrix() * Mat4::from_scale(self.scale);
            self.dirty = false;
            log::trace!("rebuilt transform matrix");
        }
        self.matrix
    }

    /// Returns the model matrix packed for upload.
    pub fn uniforms(&mut self) -> ModelUniforms {
        ModelUniforms {
            model: self.matrix().to_cols_array_2d(),
        }
    }

    /// Plain-float snapshot of position, rotation and scale.
    #[must_use]
    pub fn to_record(&self) -> TransformRecord {
        let rotation = self.rotation();
        TransformRecord {
            position: self.position().to_array(),
            rotation: [rotation.w, rotation.i, rotation.j, rotation.k],
            scale: self.scale.to_array(),
        }
    }

    /// Rebuilds a transform from a snapshot.
    #[must_use]
    pub fn from_record(record: &TransformRecord) -> Self {
        let [w, i, j, k] = record.rotation;
        Self::from_components(
            Vec3::from_array(record.position),
            Quaternion::new(w, i, j, k),
            Vec3::from_array(record.scale),
        )
    }
}

/// Serializable position, rotation `[w, i, j, k]` and scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformRecord {
    pub position: [f32; 3],
    pub rotation: [f32; 4],
    pub scale: [f32; 3],
}

impl Default for TransformRecord {
    fn default() -> Self {
        Transform::default().to_record()
    }
}

/// GPU-compatible model matrix uniform.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelUniforms {
    /// Column-major model matrix.
    pub model: [[f32; 4]; 4],
}

impl Default for ModelUniforms {
    fn default() -> Self {
        Self {
            model: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }
}

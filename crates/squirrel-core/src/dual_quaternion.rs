//! Dual quaternions for rigid-body transforms.
//!
//! A dual quaternion encodes a rigid body transformation (rotation + translation)
//! as a pair of quaternions `(real, dual)`. `real` is the rotation and `dual`
//! encodes the translation relative to it:
//!
//! ```text
//! dual        = 0.5 * (0, t) * real
//! translation = vector part of 2 * dual * conjugate(real)
//! ```
//!
//! Because `dual` depends on `real`, the rotation cannot be overwritten on its
//! own. [`DualQuaternion::set_rotation`] reprojects `dual` so the translation
//! survives the change. [`DualQuaternion::add_rotation`] deliberately leaves
//! `dual` alone: the translation read back afterwards is re-derived from the
//! new `real`, which swings it along with the rotation.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::quaternion::{warn_if_degenerate, Quaternion};

/// A dual quaternion representing a rigid body transformation.
///
/// The default value is the identity transform: `real = (1, 0, 0, 0)`,
/// `dual = (0, 0, 0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DualQuaternion {
    /// Rotation part.
    pub real: Quaternion,
    /// Translation-encoding part.
    pub dual: Quaternion,
}

impl Default for DualQuaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl DualQuaternion {
    /// No rotation, no translation.
    pub const IDENTITY: Self = Self::new(Quaternion::IDENTITY, Quaternion::ZERO);

    /// Creates a dual quaternion from its two parts as-is.
    #[must_use]
    pub const fn new(real: Quaternion, dual: Quaternion) -> Self {
        Self { real, dual }
    }

    /// Creates a dual quaternion from a rotation and a translation vector.
    #[must_use]
    pub fn from_rotation_translation(rotation: Quaternion, translation: Vec3) -> Self {
        let mut dq = Self::new(rotation, Quaternion::ZERO);
        dq.set_translation(translation);
        dq
    }

    /// Extracts the rotation quaternion and translation vector.
    #[must_use]
    pub fn to_rotation_translation(&self) -> (Quaternion, Vec3) {
        (self.real, self.translation())
    }

    /// Dot product of the real parts.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f32 {
        self.real.dot(&other.real)
    }

    /// Norm of the real part.
    #[must_use]
    pub fn norm(&self) -> f32 {
        self.real.norm()
    }

    /// Squared norm of the real part.
    #[must_use]
    pub fn norm_squared(&self) -> f32 {
        self.real.norm_squared()
    }

    /// Divides both parts by the magnitude of `real`, in place.
    ///
    /// Both parts share one divisor, so the real/dual ratio (and with it the
    /// encoded translation) is preserved. Precondition: `real` is non-zero.
    ///
    /// The divisor is `sqrt(dot(real, real))`, not `dot(real, real)`. The two
    /// agree only when `real` is already unit length; dividing by the squared
    /// norm would leave a non-unit `real` non-unit.
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// Returns a normalized copy. See [`Self::normalize`].
    #[must_use]
    pub fn normalized(&self) -> Self {
        let magnitude_squared = self.real.dot(&self.real);
        warn_if_degenerate(magnitude_squared, "DualQuaternion::normalize");
        *self * (1.0 / magnitude_squared.sqrt())
    }

    /// Conjugates both quaternions: `(real*, dual*)`.
    ///
    /// The inverse used for sandwich products `q · x · q*`.
    #[must_use]
    pub fn conjugate_quaternion(&self) -> Self {
        Self::new(self.real.conjugate(), self.dual.conjugate())
    }

    /// Dual-number conjugate: `(real, -dual)`.
    #[must_use]
    pub fn conjugate_dual(&self) -> Self {
        Self::new(self.real, -self.dual)
    }

    /// Both conjugates at once: `(real*, -dual*)`.
    ///
    /// Used to transform points by screw motion: `p' = q · (1, p) · q̄`.
    #[must_use]
    pub fn conjugate_combined(&self) -> Self {
        Self::new(self.real.conjugate(), -self.dual.conjugate())
    }

    /// Replaces the rotation while keeping the encoded translation.
    ///
    /// Un-applies the old rotation from `dual`, swaps `real`, then re-applies
    /// the new one. Precondition: the current `real` has unit norm.
    pub fn set_rotation(&mut self, rotation: Quaternion) {
        self.dual *= self.real.conjugate();
        self.real = rotation;
        self.dual *= self.real;
    }

    /// Composes `rotation` on top of the current one (`real = rotation · real`).
    ///
    /// `dual` is left untouched, so the translation read back afterwards is
    /// re-derived against the new rotation.
    pub fn add_rotation(&mut self, rotation: Quaternion) {
        self.real = rotation * self.real;
    }

    /// The rotation part.
    #[must_use]
    pub fn rotation(&self) -> Quaternion {
        self.real
    }

    /// Rotation as `(roll, pitch, yaw)` in radians. Approximate near gimbal lock.
    #[must_use]
    pub fn euler_rotation(&self) -> Vec3 {
        self.real.euler_angles()
    }

    /// Encodes `translation` against the current rotation.
    pub fn set_translation(&mut self, translation: Vec3) {
        self.dual = Self::encode_translation(translation, self.real);
    }

    /// Adds `translation` (world space) to the encoded translation.
    pub fn add_translation(&mut self, translation: Vec3) {
        self.dual += Self::encode_translation(translation, self.real);
    }

    /// The encoded translation, `2 · dual · real*`.
    #[must_use]
    pub fn translation(&self) -> Vec3 {
        ((self.dual * 2.0) * self.real.conjugate()).vector()
    }

    /// Applies rotation then translation to a point.
    #[must_use]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        let dq = self.normalized();
        dq.real.rotate_vector(point) + dq.translation()
    }

    /// Rotation-only 4×4 matrix, computed from a normalized copy.
    #[must_use]
    pub fn rotation_matrix(&self) -> Mat4 {
        self.normalized().real.to_mat4()
    }

    /// Rotation and translation as a 4×4 matrix, computed from a normalized
    /// copy. The translation occupies the last column.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        let dq = self.normalized();
        let mut matrix = dq.real.to_mat4();
        matrix.w_axis = dq.translation().extend(1.0);
        matrix
    }

    /// Dual linear blend between two dual quaternions.
    ///
    /// Component-wise lerp of both parts followed by normalization, flipping
    /// `b` first when needed so the blend takes the shortest path.
    #[must_use]
    pub fn nlerp(a: &Self, b: &Self, t: f32) -> Self {
        let b = if a.dot(b) < 0.0 { -*b } else { *b };
        (*a * (1.0 - t) + b * t).normalized()
    }

    /// Packs `[real, dual]` as `[w, i, j, k]` rows for upload to a shader.
    #[must_use]
    pub fn to_shader_array(&self) -> [[f32; 4]; 2] {
        let Self { real, dual } = *self;
        [
            [real.w, real.i, real.j, real.k],
            [dual.w, dual.i, dual.j, dual.k],
        ]
    }

    fn encode_translation(translation: Vec3, real: Quaternion) -> Quaternion {
        (Quaternion::from_vector(translation) * 0.5) * real
    }
}

impl Add for DualQuaternion {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.real + rhs.real, self.dual + rhs.dual)
    }
}

impl Sub for DualQuaternion {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.real - rhs.real, self.dual - rhs.dual)
    }
}

impl Neg for DualQuaternion {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.real, -self.dual)
    }
}

/// `(r1, d1) · (r2, d2) = (r1·r2, r1·d2 + d1·r2)`.
impl Mul for DualQuaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.real * rhs.real,
            self.real * rhs.dual + self.dual * rhs.real,
        )
    }
}

impl Mul<f32> for DualQuaternion {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.real * rhs, self.dual * rhs)
    }
}

impl AddAssign for DualQuaternion {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for DualQuaternion {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for DualQuaternion {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl MulAssign<f32> for DualQuaternion {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

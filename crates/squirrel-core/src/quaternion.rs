//! Rotation quaternions.
//!
//! [`Quaternion`] stores the scalar part `w` and the vector part `(i, j, k)`.
//! A quaternion represents a rotation only when it has unit norm; arithmetic
//! chains may pass through non-unit values and must be renormalized before the
//! result is used as a rotation.
//!
//! # Preconditions
//!
//! Nothing in this module returns an error or panics. Degenerate input (a
//! zero quaternion passed to [`Quaternion::normalize`], a zero-length axis
//! passed to [`Quaternion::from_axis_angle`]) propagates as NaN/inf through the
//! float arithmetic. Debug builds log a warning when that happens.

use std::f32::consts::FRAC_PI_2;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use glam::{Mat4, Quat, Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Logs a warning in debug builds when a length that is about to be divided
/// by is zero or not finite. Compiles to nothing in release builds.
#[inline]
pub(crate) fn warn_if_degenerate(length_squared: f32, operation: &str) {
    if cfg!(debug_assertions) && (length_squared <= 0.0 || !length_squared.is_finite()) {
        log::warn!("{operation}: degenerate input (length^2 = {length_squared}), result will not be finite");
    }
}

/// A quaternion `w + i·x + j·y + k·z`.
///
/// The default value is the identity rotation `(1, 0, 0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    /// Scalar (real) part.
    pub w: f32,
    /// X component of the vector part.
    pub i: f32,
    /// Y component of the vector part.
    pub j: f32,
    /// Z component of the vector part.
    pub k: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// The identity rotation.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// All components zero. Not a rotation.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a quaternion from its four components.
    #[must_use]
    pub const fn new(w: f32, i: f32, j: f32, k: f32) -> Self {
        Self { w, i, j, k }
    }

    /// Creates a pure quaternion `(0, v)`.
    #[must_use]
    pub const fn from_vector(v: Vec3) -> Self {
        Self::new(0.0, v.x, v.y, v.z)
    }

    /// Returns the vector part `(i, j, k)`.
    #[must_use]
    pub fn vector(&self) -> Vec3 {
        Vec3::new(self.i, self.j, self.k)
    }

    /// Sum of the componentwise products.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f32 {
        self.w * other.w + self.i * other.i + self.j * other.j + self.k * other.k
    }

    /// Euclidean length. Zero for the zero quaternion.
    #[must_use]
    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Squared length, `dot(self, self)`.
    #[must_use]
    pub fn norm_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Scales this quaternion to unit length in place.
    ///
    /// Precondition: `norm() > 0`. A zero quaternion becomes NaN.
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// Returns a unit-length copy. Same precondition as [`Self::normalize`].
    #[must_use]
    pub fn normalized(&self) -> Self {
        let norm_squared = self.norm_squared();
        warn_if_degenerate(norm_squared, "Quaternion::normalize");
        *self * (1.0 / norm_squared.sqrt())
    }

    /// Negates the vector part. Equals the inverse for unit quaternions.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.i, -self.j, -self.k)
    }

    /// Multiplicative inverse, `conjugate / norm²`. Exact for non-unit input.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let norm_squared = self.norm_squared();
        warn_if_degenerate(norm_squared, "Quaternion::inverse");
        self.conjugate() * (1.0 / norm_squared)
    }

    /// Rotates `v` by this quaternion.
    ///
    /// Uses `t = 2·(u × v)`, `v' = v + w·t + u × t` where `u` is the vector
    /// part, which equals the vector part of `q·(0, v)·q*` without the two
    /// full Hamilton products. Precondition: unit norm; a non-unit quaternion
    /// scales the result.
    #[must_use]
    pub fn rotate_vector(&self, v: Vec3) -> Vec3 {
        let u = self.vector();
        let t = 2.0 * u.cross(v);
        v + self.w * t + u.cross(t)
    }

    /// Rotates a raw `[x, y, z]` triple in place.
    pub fn rotate_array(&self, v: &mut [f32; 3]) {
        *v = self.rotate_vector(Vec3::from_array(*v)).to_array();
    }

    /// Builds a rotation from Euler angles in radians.
    ///
    /// `roll` turns about X, `pitch` about Y and `yaw` about Z. The result is
    /// `yaw · pitch · roll`, so roll is applied first.
    #[must_use]
    pub fn from_euler(roll: f32, pitch: f32, yaw: f32) -> Self {
        let (sr, cr) = (roll * 0.5).sin_cos();
        let (sp, cp) = (pitch * 0.5).sin_cos();
        let (sy, cy) = (yaw * 0.5).sin_cos();

        Self::new(
            cr * cp * cy + sr * sp * sy,
            sr * cp * cy - cr * sp * sy,
            cr * sp * cy + sr * cp * sy,
            cr * cp * sy - sr * sp * cy,
        )
    }

    /// Builds a rotation of `angle` radians about the axis `(x, y, z)`.
    ///
    /// The axis does not need to be normalized but must be non-zero.
    #[must_use]
    pub fn from_axis_angle(x: f32, y: f32, z: f32, angle: f32) -> Self {
        let length_squared = x * x + y * y + z * z;
        warn_if_degenerate(length_squared, "Quaternion::from_axis_angle");

        let (s, c) = (angle * 0.5).sin_cos();
        let scale = s / length_squared.sqrt();
        Self::new(c, x * scale, y * scale, z * scale)
    }

    /// [`Self::from_axis_angle`] taking the axis as a vector.
    #[must_use]
    pub fn from_axis_angle_vec(axis: Vec3, angle: f32) -> Self {
        Self::from_axis_angle(axis.x, axis.y, axis.z, angle)
    }

    /// Converts back to `(roll, pitch, yaw)` in radians.
    ///
    /// Approximate near gimbal lock (pitch close to ±90°), where roll and yaw
    /// are no longer independent and only their combination is recovered.
    #[must_use]
    pub fn euler_angles(&self) -> Vec3 {
        let Self { w, i, j, k } = *self;

        let roll = (2.0 * (w * i + j * k)).atan2(1.0 - 2.0 * (i * i + j * j));

        let s = 2.0 * (w * j - i * k);
        let sp = (1.0 + s).max(0.0).sqrt();
        let cp = (1.0 - s).max(0.0).sqrt();
        let pitch = 2.0 * sp.atan2(cp) - FRAC_PI_2;

        let yaw = (2.0 * (w * k + i * j)).atan2(1.0 - 2.0 * (j * j + k * k));

        Vec3::new(roll, pitch, yaw)
    }

    /// Angle in radians between two unit rotations.
    #[must_use]
    pub fn angle_to(&self, other: &Self) -> f32 {
        2.0 * self.dot(other).abs().min(1.0).acos()
    }

    /// Rotation matrix (column-major). Precondition: unit norm.
    #[must_use]
    pub fn to_mat4(&self) -> Mat4 {
        let Self { w, i, j, k } = *self;
        let (ii, jj, kk) = (i * i, j * j, k * k);
        let (ij, ik, jk) = (i * j, i * k, j * k);
        let (wi, wj, wk) = (w * i, w * j, w * k);

        Mat4::from_cols(
            Vec4::new(1.0 - 2.0 * (jj + kk), 2.0 * (ij + wk), 2.0 * (ik - wj), 0.0),
            Vec4::new(2.0 * (ij - wk), 1.0 - 2.0 * (ii + kk), 2.0 * (jk + wi), 0.0),
            Vec4::new(2.0 * (ik + wj), 2.0 * (jk - wi), 1.0 - 2.0 * (ii + jj), 0.0),
            Vec4::W,
        )
    }

    /// Componentwise comparison with an absolute tolerance.
    #[must_use]
    pub fn abs_diff_eq(&self, other: &Self, max_abs_diff: f32) -> bool {
        (self.w - other.w).abs() <= max_abs_diff
            && (self.i - other.i).abs() <= max_abs_diff
            && (self.j - other.j).abs() <= max_abs_diff
            && (self.k - other.k).abs() <= max_abs_diff
    }
}

impl Add for Quaternion {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.w + rhs.w, self.i + rhs.i, self.j + rhs.j, self.k + rhs.k)
    }
}

impl Sub for Quaternion {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.w - rhs.w, self.i - rhs.i, self.j - rhs.j, self.k - rhs.k)
    }
}

impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.w, -self.i, -self.j, -self.k)
    }
}

/// Hamilton product. `a * b` applies `b` first, then `a`.
impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let Self { w: w1, i: i1, j: j1, k: k1 } = self;
        let Self { w: w2, i: i2, j: j2, k: k2 } = rhs;

        Self::new(
            w1 * w2 - i1 * i2 - j1 * j2 - k1 * k2,
            w1 * i2 + i1 * w2 + j1 * k2 - k1 * j2,
            w1 * j2 - i1 * k2 + j1 * w2 + k1 * i2,
            w1 * k2 + i1 * j2 - j1 * i2 + k1 * w2,
        )
    }
}

impl Mul<f32> for Quaternion {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.w * rhs, self.i * rhs, self.j * rhs, self.k * rhs)
    }
}

impl Mul<Quaternion> for f32 {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Quaternion {
        rhs * self
    }
}

impl AddAssign for Quaternion {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Quaternion {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Quaternion {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl MulAssign<f32> for Quaternion {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl From<Quat> for Quaternion {
    fn from(q: Quat) -> Self {
        Self::new(q.w, q.x, q.y, q.z)
    }
}

impl From<Quaternion> for Quat {
    fn from(q: Quaternion) -> Self {
        Quat::from_xyzw(q.i, q.j, q.k, q.w)
    }
}

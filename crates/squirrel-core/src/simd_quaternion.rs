//! Vectorized quaternion.
//!
//! [`SimdQuaternion`] has the same contract as [`Quaternion`] but keeps its
//! components in a single [`Vec4`] with lanes `[w, i, j, k]`. On targets where
//! glam has a SIMD backend (SSE2, NEON, wasm simd128) every operation runs on
//! the whole register; the Hamilton product is four broadcast multiplies
//! against lane shuffles of the right-hand side with sign masks.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use glam::{Vec3, Vec3A, Vec4, Vec4Swizzles};

use crate::quaternion::{warn_if_degenerate, Quaternion};

// Signs applied to the shuffled right-hand side for the i, j and k columns
// of the Hamilton product.
const SIGN_I: Vec4 = Vec4::new(-1.0, 1.0, -1.0, 1.0);
const SIGN_J: Vec4 = Vec4::new(-1.0, 1.0, 1.0, -1.0);
const SIGN_K: Vec4 = Vec4::new(-1.0, -1.0, 1.0, 1.0);
const CONJUGATE: Vec4 = Vec4::new(1.0, -1.0, -1.0, -1.0);
const EULER_MIX: Vec4 = Vec4::new(1.0, -1.0, 1.0, -1.0);

/// Quaternion stored as one `[w, i, j, k]` vector register.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimdQuaternion(Vec4);

impl Default for SimdQuaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl SimdQuaternion {
    /// The identity rotation.
    pub const IDENTITY: Self = Self(Vec4::X);

    /// Creates a quaternion from its four components.
    #[must_use]
    pub const fn new(w: f32, i: f32, j: f32, k: f32) -> Self {
        Self(Vec4::new(w, i, j, k))
    }

    /// Scalar part.
    #[must_use]
    pub fn w(&self) -> f32 {
        self.0.x
    }

    /// First vector component.
    #[must_use]
    pub fn i(&self) -> f32 {
        self.0.y
    }

    /// Second vector component.
    #[must_use]
    pub fn j(&self) -> f32 {
        self.0.z
    }

    /// Third vector component.
    #[must_use]
    pub fn k(&self) -> f32 {
        self.0.w
    }

    /// Components as `[w, i, j, k]`.
    #[must_use]
    pub fn to_array(&self) -> [f32; 4] {
        self.0.to_array()
    }

    /// Sum of lane-wise products.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f32 {
        self.0.dot(other.0)
    }

    /// Euclidean length.
    #[must_use]
    pub fn norm(&self) -> f32 {
        self.0.length()
    }

    /// Squared length, without the square root.
    #[must_use]
    pub fn norm_squared(&self) -> f32 {
        self.0.length_squared()
    }

    /// Scales to unit length in place. Precondition: `norm() > 0`.
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// Unit-length copy. Precondition: `norm() > 0`.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let norm_squared = self.norm_squared();
        warn_if_degenerate(norm_squared, "SimdQuaternion::normalize");
        Self(self.0 * (1.0 / norm_squared.sqrt()))
    }

    /// Negates the vector part. The inverse of a unit quaternion.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self(self.0 * CONJUGATE)
    }

    /// Rotates `v`. Precondition: unit norm.
    #[must_use]
    pub fn rotate_vector(&self, v: Vec3) -> Vec3 {
        let u = Vec3A::from(self.0.yzw());
        let v = Vec3A::from(v);
        let t = 2.0 * u.cross(v);
        Vec3::from(v + self.w() * t + u.cross(t))
    }

    /// Rotates a raw `[x, y, z]` triple in place.
    pub fn rotate_array(&self, v: &mut [f32; 3]) {
        *v = self.rotate_vector(Vec3::from_array(*v)).to_array();
    }

    /// Same term layout as [`Quaternion::from_euler`].
    #[must_use]
    pub fn from_euler(roll: f32, pitch: f32, yaw: f32) -> Self {
        let (sr, cr) = (roll * 0.5).sin_cos();
        let (sp, cp) = (pitch * 0.5).sin_cos();
        let (sy, cy) = (yaw * 0.5).sin_cos();

        let a = Vec4::new(cr, sr, cr, cr) * Vec4::new(cp, cp, sp, cp) * Vec4::new(cy, cy, cy, sy);
        let b = Vec4::new(sr, cr, sr, sr) * Vec4::new(sp, sp, cp, sp) * Vec4::new(sy, sy, sy, cy);
        Self(a + b * EULER_MIX)
    }

    /// Rotation of `angle` radians about `(x, y, z)`. The axis must be non-zero.
    #[must_use]
    pub fn from_axis_angle(x: f32, y: f32, z: f32, angle: f32) -> Self {
        let axis = Vec4::new(0.0, x, y, z);
        let length_squared = axis.length_squared();
        warn_if_degenerate(length_squared, "SimdQuaternion::from_axis_angle");

        let (s, c) = (angle * 0.5).sin_cos();
        Self(Vec4::new(c, 0.0, 0.0, 0.0) + axis * (s / length_squared.sqrt()))
    }
}

impl Add for SimdQuaternion {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for SimdQuaternion {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for SimdQuaternion {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul for SimdQuaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let q = rhs.0;
        Self(
            Vec4::splat(self.0.x) * q
                + Vec4::splat(self.0.y) * (q.yxwz() * SIGN_I)
                + Vec4::splat(self.0.z) * (q.zwxy() * SIGN_J)
                + Vec4::splat(self.0.w) * (q.wzyx() * SIGN_K),
        )
    }
}

impl Mul<f32> for SimdQuaternion {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self(self.0 * rhs)
    }
}

impl AddAssign for SimdQuaternion {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for SimdQuaternion {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl MulAssign for SimdQuaternion {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl MulAssign<f32> for SimdQuaternion {
    fn mul_assign(&mut self, rhs: f32) {
        self.0 *= rhs;
    }
}

impl From<Quaternion> for SimdQuaternion {
    fn from(q: Quaternion) -> Self {
        Self::new(q.w, q.i, q.j, q.k)
    }
}

impl From<SimdQuaternion> for Quaternion {
    fn from(q: SimdQuaternion) -> Self {
        let [w, i, j, k] = q.to_array();
        Self::new(w, i, j, k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-5;

    fn agrees(simd: SimdQuaternion, scalar: Quaternion) -> bool {
        let scale = scalar.norm().max(1.0);
        Quaternion::from(simd).abs_diff_eq(&scalar, EPS * scale)
    }

    #[test]
    fn test_default_is_identity() {
        assert_eq!(SimdQuaternion::default().to_array(), [1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_product_matches_reference_values() {
        let q = SimdQuaternion::new(1.0, 2.0, 3.0, 4.0) * SimdQuaternion::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(q.to_array(), [-280.0, 40.0, 60.0, 80.0]);
    }

    #[test]
    fn test_componentwise_ops() {
        let a = SimdQuaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = SimdQuaternion::new(0.5, -1.0, 2.0, 0.0);
        assert_eq!((a + b).to_array(), [1.5, 1.0, 5.0, 4.0]);
        assert_eq!((a - b).to_array(), [0.5, 3.0, 1.0, 4.0]);
        assert_eq!((-a).to_array(), [-1.0, -2.0, -3.0, -4.0]);
        assert_eq!((a * 2.0).to_array(), [2.0, 4.0, 6.0, 8.0]);
        assert_eq!(a.conjugate().to_array(), [1.0, -2.0, -3.0, -4.0]);

        let mut c = a;
        c += b;
        c -= b;
        c *= 2.0;
        assert_eq!(c, a * 2.0);
    }

    #[test]
    fn test_accessors() {
        let q = SimdQuaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!((q.w(), q.i(), q.j(), q.k()), (1.0, 2.0, 3.0, 4.0));
        assert!((q.norm_squared() - 30.0).abs() < EPS);
    }

    #[test]
    fn test_rotate_vector_right_hand_rule() {
        let q = SimdQuaternion::from_axis_angle(0.0, 1.0, 0.0, FRAC_PI_2);
        assert!((q.rotate_vector(Vec3::X) - Vec3::new(0.0, 0.0, -1.0)).length() < EPS);
    }

    #[test]
    fn test_rotate_array_matches_rotate_vector() {
        let q = SimdQuaternion::from_axis_angle(1.0, -2.0, 0.5, 1.1);
        let v = Vec3::new(3.0, 0.5, -2.0);
        let mut raw = v.to_array();
        q.rotate_array(&mut raw);
        assert!((Vec3::from_array(raw) - q.rotate_vector(v)).length() < 1e-5);

        let mut quarter = [1.0, 0.0, 0.0];
        SimdQuaternion::from_axis_angle(0.0, 1.0, 0.0, FRAC_PI_2)
            .rotate_array(&mut quarter);
        assert!((Vec3::from_array(quarter) - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_normalize() {
        let mut q = SimdQuaternion::new(1.0, 2.0, 3.0, 4.0);
        q.normalize();
        assert!((q.norm() - 1.0).abs() < EPS);
    }

    proptest! {
        #[test]
        fn prop_product_matches_scalar(
            a in prop::array::uniform4(-10.0f32..10.0),
            b in prop::array::uniform4(-10.0f32..10.0),
        ) {
            let (sa, sb) = (Quaternion::new(a[0], a[1], a[2], a[3]), Quaternion::new(b[0], b[1], b[2], b[3]));
            let simd = SimdQuaternion::from(sa) * SimdQuaternion::from(sb);
            prop_assert!(agrees(simd, sa * sb));
        }

        #[test]
        fn prop_euler_matches_scalar(roll in -3.0f32..3.0, pitch in -3.0f32..3.0, yaw in -3.0f32..3.0) {
            prop_assert!(agrees(
                SimdQuaternion::from_euler(roll, pitch, yaw),
                Quaternion::from_euler(roll, pitch, yaw),
            ));
        }

        #[test]
        fn prop_axis_angle_and_rotation_match_scalar(
            axis in prop::array::uniform3(0.1f32..1.0),
            angle in -3.0f32..3.0,
            v in prop::array::uniform3(-5.0f32..5.0),
        ) {
            let simd = SimdQuaternion::from_axis_angle(axis[0], axis[1], axis[2], angle);
            let scalar = Quaternion::from_axis_angle(axis[0], axis[1], axis[2], angle);
            prop_assert!(agrees(simd, scalar));

            let v = Vec3::from_array(v);
            prop_assert!((simd.rotate_vector(v) - scalar.rotate_vector(v)).length() < 1e-4);
        }

        #[test]
        fn prop_dot_and_normalize_match_scalar(a in prop::array::uniform4(0.1f32..10.0)) {
            let scalar = Quaternion::new(a[0], a[1], a[2], a[3]);
            let simd = SimdQuaternion::from(scalar);
            prop_assert!((simd.dot(&simd) - scalar.dot(&scalar)).abs() < 1e-3);
            prop_assert!(agrees(simd.normalized(), scalar.normalized()));
        }
    }
}

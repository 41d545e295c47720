//! Rigid-body transform core for squirrel-engine.
//!
//! This crate provides the spatial math every entity in the engine is built on:
//! - [`Quaternion`] for rotations, with Euler and axis-angle conversions
//! - [`DualQuaternion`] combining rotation and translation in one value
//! - [`Transform`], the component that adds scale and caches the model matrix
//! - [`SimdQuaternion`], a vectorized quaternion with the same contract
//!
//! The math is a hot path: none of it returns errors or panics. Degenerate
//! input (zero-length axes or directions, zero quaternions) propagates as
//! NaN/inf, and debug builds log a warning when it happens.

// Operator-heavy math reads better with short single-letter component names
#![allow(clippy::many_single_char_names)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod dual_quaternion;
pub mod error;
pub mod options;
pub mod quaternion;
pub mod simd_quaternion;
pub mod transform;

pub use dual_quaternion::DualQuaternion;
pub use error::{Result, SquirrelError};
pub use options::{AntiparallelLook, Options};
pub use quaternion::Quaternion;
pub use simd_quaternion::SimdQuaternion;
pub use transform::{ModelUniforms, Transform, TransformRecord};

// Re-export glam types for convenience
pub use glam::{Mat4, Quat, Vec3, Vec4};

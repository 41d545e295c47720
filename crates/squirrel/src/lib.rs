//! squirrel: spatial transforms for a small 3D engine.
//!
//! Every spatial entity owns a [`Transform`]: position, rotation and scale
//! backed by a [`DualQuaternion`], with a model matrix that is rebuilt only
//! when something changed. A [`Camera`] reads its pose from a transform to
//! produce view and projection matrices.
//!
//! # Quick Start
//!
//! ```no_run
//! use squirrel::*;
//!
//! fn main() -> Result<()> {
//!     let ctx = init()?;
//!
//!     let mut transform = ctx.new_transform();
//!     transform.set_position(Vec3::new(0.0, 0.0, 10.0));
//!     transform.rotate_axis_angle(Vec3::Y, 90.0);
//!
//!     // Upload as the model uniform
//!     let model = transform.matrix();
//!     # let _ = model;
//!     Ok(())
//! }
//! ```
//!
//! # Rotation semantics
//!
//! [`Transform::set_rotation`] replaces the rotation and keeps the position.
//! [`Transform::rotate`] composes an incremental rotation without
//! reprojecting the translation, so the reported position swings with it.
//! Pick the one that matches the motion you want.

mod camera;
mod init;

pub use camera::Camera;
pub use init::{init, init_from_file, init_with_options, Context};

// Re-export core types
pub use squirrel_core::{
    error::{Result, SquirrelError},
    options::{AntiparallelLook, Options},
    DualQuaternion, Mat4, ModelUniforms, Quat, Quaternion, SimdQuaternion, Transform,
    TransformRecord, Vec3, Vec4,
};

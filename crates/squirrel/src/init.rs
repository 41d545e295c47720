//! Engine context construction.
//!
//! There is no global engine instance. [`init`] builds a [`Context`] that the
//! caller owns and passes to whatever needs configuration.

use std::path::Path;

use squirrel_core::{Options, Quaternion, Transform, Vec3};

use crate::Result;

/// Shared configuration handed to systems that need it.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Transform-core options.
    pub options: Options,
}

impl Context {
    /// Creates a context from already-validated options.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Creates an identity transform.
    #[must_use]
    pub fn new_transform(&self) -> Transform {
        Transform::new()
    }

    /// Turns `transform` to face `direction` using this context's options.
    pub fn look(&self, transform: &mut Transform, direction: Vec3) {
        transform.look_with(direction, &self.options);
    }

    /// Shortest-arc rotation that faces `direction`, without touching any
    /// transform.
    #[must_use]
    pub fn look_rotation(&self, direction: Vec3) -> Quaternion {
        let mut scratch = Transform::new();
        scratch.look_with(direction, &self.options);
        scratch.rotation()
    }
}

/// Initializes logging and returns a context with default options.
///
/// # Example
///
/// ```no_run
/// use squirrel::*;
///
/// fn main() -> Result<()> {
///     let ctx = init()?;
///     let mut transform = ctx.new_transform();
///     ctx.look(&mut transform, Vec3::new(1.0, 0.0, -1.0));
///     Ok(())
/// }
/// ```
pub fn init() -> Result<Context> {
    init_with_options(Options::default())
}

/// Initializes logging and returns a context with the given options.
///
/// # Errors
///
/// Returns an error if the options fail validation.
pub fn init_with_options(options: Options) -> Result<Context> {
    let _ = env_logger::try_init();
    options.validate()?;
    log::info!("squirrel initialized ({options:?})");
    Ok(Context::new(options))
}

/// Initializes logging and returns a context with options read from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or holds
/// invalid values.
pub fn init_from_file(path: impl AsRef<Path>) -> Result<Context> {
    let options = Options::from_json_file(path)?;
    init_with_options(options)
}

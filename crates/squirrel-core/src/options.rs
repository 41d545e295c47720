//! Configuration options for the transform core.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SquirrelError};

/// Tunables for the transform core.
///
/// Options are passed explicitly to the operations that need them; nothing
/// here is read from global state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Tolerance used by `look` to detect a direction (anti)parallel to forward.
    pub look_epsilon: f32,

    /// What `look` does when asked to face directly behind.
    pub antiparallel_look: AntiparallelLook,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            look_epsilon: 1e-6,
            antiparallel_look: AntiparallelLook::Identity,
        }
    }
}

impl Options {
    /// Parses options from a JSON string. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Reads options from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let options = Self::from_json_str(&contents)?;
        log::debug!("loaded options from {}", path.as_ref().display());
        Ok(options)
    }

    /// Serializes options to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if !self.look_epsilon.is_finite() || self.look_epsilon <= 0.0 || self.look_epsilon >= 1.0 {
            return Err(SquirrelError::InvalidOption(format!(
                "look_epsilon must be in (0, 1), got {}",
                self.look_epsilon
            )));
        }
        Ok(())
    }
}

/// Policy for `look` when the requested direction points directly behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AntiparallelLook {
    /// Fall back to the identity rotation, same as the parallel case.
    #[default]
    Identity,
    /// Turn 180 degrees about +Y so forward actually points behind.
    HalfTurn,
}

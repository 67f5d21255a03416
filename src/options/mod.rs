//! Centralized scene options with TOML preset support.
//!
//! Every tunable the control surface exposes (glass shape, transmission
//! material, sphere color/motion, frame pacing) is consolidated here.
//! Options serialize to/from TOML for preset files, and the JSON Schema
//! carries title/range/step metadata so an external panel can render
//! sliders without hardcoding the parameter list.

mod glass;
mod material;
mod pacing;
mod sphere;

use std::path::Path;

pub use glass::GlassOptions;
pub use material::MaterialOptions;
pub use pacing::PacingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use sphere::{MotionMode, SphereOptions};

use crate::error::VetroError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[sphere]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Fluted-panel shape parameters.
    pub glass: GlassOptions,
    /// Glass transmission-material passthrough.
    pub material: MaterialOptions,
    /// Glowing-sphere parameters.
    pub sphere: SphereOptions,
    /// Frame-pacing parameters.
    pub pacing: PacingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    /// [`VetroError::Io`] if the file cannot be read,
    /// [`VetroError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, VetroError> {
        let content = std::fs::read_to_string(path).map_err(VetroError::Io)?;
        toml::from_str(&content)
            .map_err(|e| VetroError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file, falling back to defaults (with a
    /// logged warning) when the file is missing or malformed.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(options) => options,
            Err(e) => {
                log::warn!(
                    "failed to load options from {}, using defaults: {e}",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    /// [`VetroError::OptionsParse`] if serialization fails,
    /// [`VetroError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), VetroError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VetroError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VetroError::Io)?;
        }
        std::fs::write(path, content).map_err(VetroError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

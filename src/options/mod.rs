//! Centralized camera, input and import options with TOML preset support.
//!
//! All tweakable settings are consolidated here. Options serialize to/from
//! TOML so view presets can be kept next to the models they were tuned for.

mod camera;
mod import;
mod keybindings;

use std::path::Path;

pub use camera::{CameraOptions, FOV_LIMITS};
pub use import::{ImportOptions, TexCoordV};
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::MeshcamError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera pose, projection and control parameters.
    pub camera: CameraOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
    /// Model import parameters.
    pub import: ImportOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, MeshcamError> {
        let content = std::fs::read_to_string(path).map_err(MeshcamError::Io)?;
        let options = toml::from_str(&content)
            .map_err(|e| MeshcamError::OptionsParse(e.to_string()))?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), MeshcamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MeshcamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(MeshcamError::Io)?;
        }
        std::fs::write(path, content).map_err(MeshcamError::Io)?;
        log::info!("saved options to {}", path.display());
        Ok(())
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

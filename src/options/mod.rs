//! Ribbon generation options with TOML preset support.
//!
//! Options serialize to/from TOML so a viewer can keep named presets on disk.
//! Every struct uses `#[serde(default)]`, so partial files (e.g. only
//! overriding `[colors]`) work.

mod colors;
mod ribbon;

use std::path::Path;

pub use colors::{ColorOptions, ColorScheme};
pub use ribbon::RibbonOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RibbonError;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Ribbon shape parameters.
    pub ribbon: RibbonOptions,
    /// Residue and outline coloring.
    pub colors: ColorOptions,
}

impl Options {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`RibbonError::Io`] if the file cannot be read,
    /// [`RibbonError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, RibbonError> {
        let content = std::fs::read_to_string(path)?;
        let options = toml::from_str(&content)
            .map_err(|e| RibbonError::OptionsParse(e.to_string()))?;
        log::info!("Loaded ribbon options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`RibbonError::OptionsParse`] on serialization failure,
    /// [`RibbonError::Io`] if the file or its directory cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), RibbonError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RibbonError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        log::info!("Saved ribbon options to {}", path.display());
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

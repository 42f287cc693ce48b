//! Generation configuration.
//!
//! The skip sets and enum-code overrides track a specific vk.xml release.
//! They are data, not algorithm: moving to a new registry version means
//! editing these tables (or shipping a JSON file with replacements), never
//! the generators.

use crate::error::CodegenError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use vulkinit_registry::ExtractOptions;

/// Configuration for one generation run.
///
/// Loadable from JSON; fields missing from the document keep their
/// defaults, so a config file only needs to carry the tables it changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    /// Extraction-side tables: full-exclusion set and enum-code overrides.
    pub extract: ExtractOptions,
    /// Tagged structs excluded from the full-parameter pass only. Their
    /// tag-only initializers are still generated.
    pub params_ignored: HashSet<String>,
    /// Untagged structs excluded from the untagged pass.
    pub untagged_ignored: HashSet<String>,
}

impl GenConfig {
    /// Loads a configuration from a JSON string.
    ///
    /// # Errors
    /// Returns `CodegenError::Config` if the JSON is malformed.
    pub fn from_json_str(json: &str) -> Result<Self, CodegenError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    /// Returns `CodegenError` if reading or deserializing fails.
    pub fn from_json_file(path: &std::path::Path) -> Result<Self, CodegenError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

impl Default for GenConfig {
    fn default() -> Self {
        let params_ignored = [
            // Large query structs: filled in by the implementation, edited,
            // and sent back, so a constructor taking every field is noise.
            "VkPhysicalDeviceProperties2",
            "VkPhysicalDeviceDescriptorIndexingFeaturesEXT",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let untagged_ignored = [
            // Holds a 2-D matrix; the element-wise copy loop emitted for
            // array members cannot express its layout.
            "VkTransformMatrixKHR",
            "VkRect3D",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        Self {
            extract: ExtractOptions::default(),
            params_ignored,
            untagged_ignored,
        }
    }
}

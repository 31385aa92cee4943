//! FILENAME: core/engine/src/config.rs
//! PURPOSE: Grid configuration supplied by the host application.
//! CONTEXT: Every field has a default so partial JSON documents load.

use crate::error::ConfigError;
use crate::locale::Language;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_PAGE_SIZES: [u32; 5] = [10, 20, 30, 40, 50];
pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfig {
    /// Extra columns to keep out of the filter panel.
    pub excluded_columns: Vec<String>,
    /// When non-empty, only these columns can be filtered.
    pub filter_columns: Vec<String>,
    pub allowed_page_sizes: Vec<u32>,
    pub default_page_size: u32,
    /// Base name for exported files.
    pub file_title: Option<String>,
    /// UI language code, e.g. `"ar"`.
    pub language: Option<String>,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            excluded_columns: Vec::new(),
            filter_columns: Vec::new(),
            allowed_page_sizes: DEFAULT_PAGE_SIZES.to_vec(),
            default_page_size: DEFAULT_PAGE_SIZE,
            file_title: None,
            language: None,
        }
    }
}

impl GridConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Configured UI language. Missing or unknown codes fall back to the default.
    pub fn language(&self) -> Language {
        let Some(code) = self.language.as_deref() else {
            return Language::default();
        };
        Language::from_code(code).unwrap_or_else(|| {
            log::warn!("unknown language {:?}, using {}", code, Language::default().code());
            Language::default()
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::debug!("loaded grid config from {}", path.display());
        Ok(config)
    }
}

//! FILENAME: core/locales/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocaleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cannot determine language from file names; use 'ar' or 'en' in the names or pass both languages")]
    UnknownLanguage,

    #[error("Translation failed: {0}")]
    Translation(String),
}

//! FILENAME: core/locales/src/lib.rs
//! Locale File Tools
//!
//! Keeps JSON locale files tidy: drops duplicated keys and extracts (and
//! optionally translates) the keys one locale is missing relative to another,
//! and machine-translates the Arabic strings of a whole file.

mod dedup;
mod error;
mod files;
mod missing;
mod translate;

pub use dedup::{parse_dedup, Deduplicated};
pub use error::LocaleError;
pub use files::{
    cleaned_output_path, dedupe_file, missing_output_path, read_json, translate_file,
    translate_missing_file, translated_output_path, write_json, DedupReport, MissingReport,
    TranslateReport,
};
pub use missing::{count_strings, extract_missing_keys};
pub use translate::{
    contains_arabic, count_arabic_strings, infer_languages, translate_arabic_value, translate_value,
    PassthroughTranslator, Translator,
};

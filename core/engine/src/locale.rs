//! FILENAME: core/engine/src/locale.rs
//! PURPOSE: Read-only localization context handed to the grid logic.
//! CONTEXT: Holds the current language and a flat key-to-text table.
//! Nested locale documents are flattened with `.` separators, which is how
//! the host's translation keys address them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// UI language. Only the two the grid ships labels for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Ar)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocaleContext {
    language: Language,
    translations: HashMap<String, String>,
}

impl LocaleContext {
    pub fn new(language: Language) -> Self {
        LocaleContext {
            language,
            translations: HashMap::new(),
        }
    }

    pub fn with_translations(mut self, translations: HashMap<String, String>) -> Self {
        self.translations.extend(translations);
        self
    }

    /// Load translations from a locale document such as `{"grid": {"reset": "Reset"}}`.
    pub fn with_locale_json(mut self, document: &serde_json::Value) -> Self {
        flatten_into(document, String::new(), &mut self.translations);
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.translations.get(key).map(String::as_str)
    }

    /// Translated text for `key`, falling back to the key itself.
    pub fn translate(&self, key: &str) -> String {
        self.lookup(key).unwrap_or(key).to_string()
    }

    /// Pager caption, e.g. "Page 2 of 9".
    pub fn page_label(&self, page: u32, total_pages: u32) -> String {
        match self.language {
            Language::Ar => format!("الصفحة {} من {}", page, total_pages),
            Language::En => format!("Page {} of {}", page, total_pages),
        }
    }
}

fn flatten_into(value: &serde_json::Value, prefix: String, out: &mut HashMap<String, String>) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_into(child, path, out);
            }
        }
        serde_json::Value::String(text) if !prefix.is_empty() => {
            out.insert(prefix, text.clone());
        }
        _ => {}
    }
}

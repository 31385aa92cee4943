//! FILENAME: core/locales/src/translate.rs
//! PURPOSE: Translation of locale values behind a pluggable translator.
//! CONTEXT: Any backend (an HTTP service, a glossary) implements
//! `Translator`. A failed string is logged and kept in its source language
//! so one bad entry never aborts a whole file.

use crate::error::LocaleError;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;

pub trait Translator {
    fn translate(&mut self, text: &str, from: &str, to: &str) -> Result<String, LocaleError>;
}

/// Leaves text as-is; used when no translation backend is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughTranslator;

impl Translator for PassthroughTranslator {
    fn translate(&mut self, text: &str, _from: &str, _to: &str) -> Result<String, LocaleError> {
        Ok(text.to_string())
    }
}

/// Glossary lookup: source text to translated text. Unknown text passes through.
impl Translator for HashMap<String, String> {
    fn translate(&mut self, text: &str, _from: &str, _to: &str) -> Result<String, LocaleError> {
        Ok(self.get(text).cloned().unwrap_or_else(|| text.to_string()))
    }
}

/// Translate every string leaf of `value` from `from` to `to`.
pub fn translate_value<T>(value: &Value, from: &str, to: &str, translator: &mut T) -> Value
where
    T: Translator + ?Sized,
{
    translate_leaves(value, from, to, translator, &|_| true)
}

/// Like `translate_value`, but only leaves containing Arabic script are
/// sent to the translator. Everything else is copied as-is.
pub fn translate_arabic_value<T>(value: &Value, from: &str, to: &str, translator: &mut T) -> Value
where
    T: Translator + ?Sized,
{
    translate_leaves(value, from, to, translator, &contains_arabic)
}

/// Whether `text` has at least one character in the Arabic block (U+0600..U+06FF).
pub fn contains_arabic(text: &str) -> bool {
    text.chars().any(|c| ('\u{0600}'..='\u{06FF}').contains(&c))
}

/// Number of string leaves that `translate_arabic_value` would send.
pub fn count_arabic_strings(value: &Value) -> usize {
    match value {
        Value::String(text) => usize::from(contains_arabic(text)),
        Value::Array(items) => items.iter().map(count_arabic_strings).sum(),
        Value::Object(map) => map.values().map(count_arabic_strings).sum(),
        _ => 0,
    }
}

fn translate_leaves<T>(
    value: &Value,
    from: &str,
    to: &str,
    translator: &mut T,
    accept: &dyn Fn(&str) -> bool,
) -> Value
where
    T: Translator + ?Sized,
{
    if from == to {
        return value.clone();
    }

    match value {
        Value::String(text) if !text.is_empty() && accept(text) => {
            match translator.translate(text, from, to) {
                Ok(translated) => Value::String(translated),
                Err(e) => {
                    log::warn!("translation failed for {:?}: {}", text, e);
                    value.clone()
                }
            }
        }
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| translate_leaves(item, from, to, translator, accept))
                .collect(),
        ),
        Value::Object(map) => {
            let mut out = Map::new();
            for (i, (key, child)) in map.iter().enumerate() {
                log::trace!("translating key {} ({}/{})", key, i + 1, map.len());
                out.insert(key.clone(), translate_leaves(child, from, to, translator, accept));
            }
            Value::Object(out)
        }
        other => other.clone(),
    }
}

/// Source and target language codes.
///
/// An explicit pair always wins. Otherwise the source file name decides:
/// a name containing `ar` translates Arabic to English, one containing
/// `en` translates English to Arabic. The check is a plain substring
/// match, so a name like `calendar_en.json` counts as Arabic.
pub fn infer_languages(
    source: &Path,
    explicit: Option<(&str, &str)>,
) -> Result<(String, String), LocaleError> {
    if let Some((from, to)) = explicit {
        return Ok((from.to_string(), to.to_string()));
    }

    let name = source
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if name.contains("ar") {
        Ok(("ar".to_string(), "en".to_string()))
    } else if name.contains("en") {
        Ok(("en".to_string(), "ar".to_string()))
    } else {
        Err(LocaleError::UnknownLanguage)
    }
}

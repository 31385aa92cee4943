//! FILENAME: core/locales/src/files.rs
//! PURPOSE: File-level locale operations behind the CLI subcommands.

use crate::dedup::parse_dedup;
use crate::error::LocaleError;
use crate::missing::{count_strings, extract_missing_keys};
use crate::translate::{count_arabic_strings, infer_languages, translate_arabic_value, translate_value, Translator};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of `dedupe_file`.
#[derive(Debug, Clone, PartialEq)]
pub struct DedupReport {
    pub output: PathBuf,
    pub duplicates: Vec<String>,
}

/// Outcome of `translate_missing_file`. `output` is `None` when the target
/// already had every key and nothing was written.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingReport {
    pub output: Option<PathBuf>,
    pub missing_keys: usize,
    pub translated_strings: usize,
    pub from: String,
    pub to: String,
}

/// Outcome of `translate_file`.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslateReport {
    pub output: PathBuf,
    pub translated_strings: usize,
}

/// `dir/name_cleaned.ext` next to `input`.
pub fn cleaned_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    let name = match input.extension() {
        Some(ext) => format!("{}_cleaned.{}", stem, ext.to_string_lossy()),
        None => format!("{}_cleaned", stem),
    };
    input.with_file_name(name)
}

/// `dir/<source>_missing_in_<target>_translated.json` next to `source`.
pub fn missing_output_path(source: &Path, target: &Path) -> PathBuf {
    let source_stem = source.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    let target_stem = target.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    source.with_file_name(format!(
        "{}_missing_in_{}_translated.json",
        source_stem, target_stem
    ))
}

/// Output name for a whole-file translation, next to `input`.
///
/// Every `ar` in the file stem (any case) becomes `En`, so `resourceAr.json`
/// maps to `resourceEn.json`. Stems without `ar` get `_<to>` appended.
pub fn translated_output_path(input: &Path, to: &str) -> PathBuf {
    let stem = input.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    let ext = input
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let name = if stem.to_lowercase().contains("ar") {
        format!("{}{}", replace_ar(&stem), ext)
    } else {
        format!("{}_{}{}", stem, to, ext)
    };
    input.with_file_name(name)
}

fn replace_ar(stem: &str) -> String {
    let mut out = String::with_capacity(stem.len());
    let mut chars = stem.chars().peekable();
    while let Some(c) = chars.next() {
        if c.eq_ignore_ascii_case(&'a') && chars.peek().is_some_and(|n| n.eq_ignore_ascii_case(&'r')) {
            chars.next();
            out.push_str("En");
        } else {
            out.push(c);
        }
    }
    out
}

pub fn read_json(path: &Path) -> Result<Value, LocaleError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Pretty-printed with two-space indentation.
pub fn write_json(path: &Path, value: &Value) -> Result<(), LocaleError> {
    let text = serde_json::to_string_pretty(value)?;
    fs::write(path, text)?;
    Ok(())
}

pub fn dedupe_file(input: &Path, output: Option<&Path>) -> Result<DedupReport, LocaleError> {
    let text = fs::read_to_string(input)?;
    let parsed = parse_dedup(&text)?;

    let output = output.map_or_else(|| cleaned_output_path(input), Path::to_path_buf);
    write_json(&output, &parsed.value)?;

    for path in &parsed.duplicates {
        log::info!("removed duplicate key {}", path);
    }
    Ok(DedupReport {
        output,
        duplicates: parsed.duplicates,
    })
}

pub fn translate_missing_file<T>(
    source: &Path,
    target: &Path,
    output: Option<&Path>,
    languages: Option<(&str, &str)>,
    translator: &mut T,
) -> Result<MissingReport, LocaleError>
where
    T: Translator + ?Sized,
{
    let source_doc = read_json(source)?;
    let target_doc = read_json(target)?;
    let (from, to) = infer_languages(source, languages)?;

    let missing = Value::Object(extract_missing_keys(&source_doc, &target_doc));
    let missing_keys = missing.as_object().map_or(0, |m| m.len());
    if missing_keys == 0 {
        log::info!("no missing keys in {}", target.display());
        return Ok(MissingReport {
            output: None,
            missing_keys: 0,
            translated_strings: 0,
            from,
            to,
        });
    }

    log::info!("translating {} missing key(s) from {} to {}", missing_keys, from, to);
    let translated = translate_value(&missing, &from, &to, translator);

    let output = output.map_or_else(|| missing_output_path(source, target), Path::to_path_buf);
    write_json(&output, &translated)?;

    Ok(MissingReport {
        output: Some(output),
        missing_keys,
        translated_strings: count_strings(&missing),
        from,
        to,
    })
}

/// Translate every Arabic string in `input` and write the whole document out.
pub fn translate_file<T>(
    input: &Path,
    output: Option<&Path>,
    from: &str,
    to: &str,
    translator: &mut T,
) -> Result<TranslateReport, LocaleError>
where
    T: Translator + ?Sized,
{
    let document = read_json(input)?;
    let translated_strings = count_arabic_strings(&document);
    log::info!(
        "translating {} string(s) in {} from {} to {}",
        translated_strings,
        input.display(),
        from,
        to
    );

    let translated = translate_arabic_value(&document, from, to, translator);
    let output = output.map_or_else(|| translated_output_path(input, to), Path::to_path_buf);
    write_json(&output, &translated)?;

    Ok(TranslateReport {
        output,
        translated_strings,
    })
}

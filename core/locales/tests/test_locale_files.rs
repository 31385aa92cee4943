//! FILENAME: tests/test_locale_files.rs
//! Integration tests for the file-level locale operations.

use locale_tools::{
    dedupe_file, read_json, translate_file, translate_missing_file, LocaleError,
    PassthroughTranslator,
};
use serde_json::json;
use std::collections::HashMap;
use std::fs;

#[test]
fn test_dedupe_writes_cleaned_file_next_to_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("resourceAr.json");
    fs::write(
        &input,
        r#"{"save": "حفظ", "grid": {"reset": "إعادة", "reset": "تصفير"}, "save": "خزن"}"#,
    )
    .unwrap();

    let report = dedupe_file(&input, None).unwrap();
    assert_eq!(report.output, dir.path().join("resourceAr_cleaned.json"));
    assert_eq!(report.duplicates, vec!["grid.reset", "save"]);

    let cleaned = read_json(&report.output).unwrap();
    assert_eq!(cleaned, json!({"save": "حفظ", "grid": {"reset": "إعادة"}}));

    let text = fs::read_to_string(&report.output).unwrap();
    assert!(text.starts_with("{\n  \"save\""));
}

#[test]
fn test_missing_keys_are_translated_and_written() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("resourceAr.json");
    let target = dir.path().join("resourceEn.json");
    fs::write(&source, r#"{"save": "حفظ", "grid": {"reset": "إعادة", "export": "تصدير"}}"#).unwrap();
    fs::write(&target, r#"{"save": "Save", "grid": {"reset": "Reset"}}"#).unwrap();

    let mut glossary = HashMap::new();
    glossary.insert("تصدير".to_string(), "Export".to_string());

    let report = translate_missing_file(&source, &target, None, None, &mut glossary).unwrap();
    assert_eq!(report.missing_keys, 1);
    assert_eq!(report.translated_strings, 1);
    assert_eq!((report.from.as_str(), report.to.as_str()), ("ar", "en"));

    let output = report.output.unwrap();
    assert_eq!(output, dir.path().join("resourceAr_missing_in_resourceEn_translated.json"));
    assert_eq!(read_json(&output).unwrap(), json!({"grid": {"export": "Export"}}));
}

#[test]
fn test_complete_target_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("en.json");
    let target = dir.path().join("ar.json");
    fs::write(&source, r#"{"a": "x"}"#).unwrap();
    fs::write(&target, r#"{"a": "y"}"#).unwrap();

    let report =
        translate_missing_file(&source, &target, None, None, &mut PassthroughTranslator).unwrap();
    assert!(report.output.is_none());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
}

#[test]
fn test_unknown_language_without_explicit_pair() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("base.json");
    let target = dir.path().join("other.json");
    fs::write(&source, r#"{"a": "x"}"#).unwrap();
    fs::write(&target, "{}").unwrap();

    let result = translate_missing_file(&source, &target, None, None, &mut PassthroughTranslator);
    assert!(matches!(result, Err(LocaleError::UnknownLanguage)));

    let out = dir.path().join("out.json");
    let report = translate_missing_file(
        &source,
        &target,
        Some(&out),
        Some(("en", "ar")),
        &mut PassthroughTranslator,
    )
    .unwrap();
    assert_eq!(report.output, Some(out.clone()));
    assert_eq!(read_json(&out).unwrap(), json!({"a": "x"}));
}

#[test]
fn test_invalid_source_json_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("ar.json");
    let target = dir.path().join("en.json");
    fs::write(&source, "{broken").unwrap();
    fs::write(&target, "{}").unwrap();

    let result = translate_missing_file(&source, &target, None, None, &mut PassthroughTranslator);
    assert!(matches!(result, Err(LocaleError::Json(_))));
}

#[test]
fn test_translate_file_sends_only_arabic_strings() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("resourceAr.json");
    fs::write(
        &input,
        r#"{"save": "حفظ", "code": "GR-5", "grid": {"export": "تصدير", "size": 10}}"#,
    )
    .unwrap();

    let mut glossary = HashMap::new();
    glossary.insert("حفظ".to_string(), "Save".to_string());
    glossary.insert("تصدير".to_string(), "Export".to_string());
    glossary.insert("GR-5".to_string(), "changed".to_string());

    let report = translate_file(&input, None, "ar", "en", &mut glossary).unwrap();
    assert_eq!(report.output, dir.path().join("resourceEn.json"));
    assert_eq!(report.translated_strings, 2);
    assert_eq!(
        read_json(&report.output).unwrap(),
        json!({"save": "Save", "code": "GR-5", "grid": {"export": "Export", "size": 10}})
    );
}

#[test]
fn test_translate_file_without_ar_in_name() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("data.json");
    fs::write(&input, r#"{"title": "عنوان"}"#).unwrap();

    let report = translate_file(&input, None, "ar", "en", &mut PassthroughTranslator).unwrap();
    assert_eq!(report.output, dir.path().join("data_en.json"));
    assert_eq!(read_json(&report.output).unwrap(), json!({"title": "عنوان"}));
}

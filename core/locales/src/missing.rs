//! FILENAME: core/locales/src/missing.rs
//! PURPOSE: Find the keys one locale document has that another lacks.

use serde_json::{Map, Value};

/// Keys of `source` that `target` does not have, with their source values.
///
/// Recurses only where both sides hold an object under the same key, and
/// keeps a nested result only if it is non-empty. A non-object `source`
/// has no keys to report.
pub fn extract_missing_keys(source: &Value, target: &Value) -> Map<String, Value> {
    let mut missing = Map::new();
    let Some(source) = source.as_object() else {
        return missing;
    };
    let target = target.as_object();

    for (key, source_value) in source {
        match target.and_then(|t| t.get(key)) {
            None => {
                missing.insert(key.clone(), source_value.clone());
            }
            Some(target_value) => {
                if source_value.is_object() && target_value.is_object() {
                    let nested = extract_missing_keys(source_value, target_value);
                    if !nested.is_empty() {
                        missing.insert(key.clone(), Value::Object(nested));
                    }
                }
            }
        }
    }
    missing
}

/// Number of string leaves under `value`; what a translation pass will touch.
pub fn count_strings(value: &Value) -> usize {
    match value {
        Value::String(_) => 1,
        Value::Array(items) => items.iter().map(count_strings).sum(),
        Value::Object(map) => map.values().map(count_strings).sum(),
        _ => 0,
    }
}

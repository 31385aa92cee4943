//! FILENAME: core/locales/src/dedup.rs
//! PURPOSE: Parse a locale document keeping the first occurrence of each key.
//! CONTEXT: A plain `serde_json::from_str` silently keeps the LAST value of a
//! repeated key. Locale files grow by appending, so the first entry is the
//! one translators reviewed. The seed below walks the document once and
//! records the path of every dropped duplicate.

use crate::error::LocaleError;
use serde::de::{self, DeserializeSeed, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde_json::{Map, Number, Value};
use std::fmt;

/// A parsed document and the dotted paths of the keys that were dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Deduplicated {
    pub value: Value,
    pub duplicates: Vec<String>,
}

pub fn parse_dedup(json: &str) -> Result<Deduplicated, LocaleError> {
    let mut duplicates = Vec::new();
    let mut de = serde_json::Deserializer::from_str(json);
    let value = FirstWins {
        path: String::new(),
        duplicates: &mut duplicates,
    }
    .deserialize(&mut de)?;
    de.end()?;

    if !duplicates.is_empty() {
        log::debug!("dropped {} duplicate key(s)", duplicates.len());
    }
    Ok(Deduplicated { value, duplicates })
}

struct FirstWins<'a> {
    path: String,
    duplicates: &'a mut Vec<String>,
}

impl<'a> FirstWins<'a> {
    fn child(&mut self, path: String) -> FirstWins<'_> {
        FirstWins {
            path,
            duplicates: &mut *self.duplicates,
        }
    }

    fn key_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }
}

impl<'de, 'a> DeserializeSeed<'de> for FirstWins<'a> {
    type Value = Value;

    fn deserialize<D>(self, deserializer: D) -> Result<Value, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}

impl<'de, 'a> Visitor<'de> for FirstWins<'a> {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Number(v.into()))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Value, E> {
        Ok(Value::Number(v.into()))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Value, E> {
        Ok(Number::from_f64(v).map_or(Value::Null, Value::Number))
    }

    fn visit_str<E>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.to_string()))
    }

    fn visit_string<E>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_unit<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_seq<A>(mut self, mut seq: A) -> Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::new();
        loop {
            let path = format!("{}[{}]", self.path, items.len());
            match seq.next_element_seed(self.child(path))? {
                Some(item) => items.push(item),
                None => break,
            }
        }
        Ok(Value::Array(items))
    }

    fn visit_map<A>(mut self, mut map: A) -> Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut object = Map::new();
        while let Some(key) = map.next_key::<String>()? {
            let path = self.key_path(&key);
            if object.contains_key(&key) {
                map.next_value::<IgnoredAny>()?;
                self.duplicates.push(path);
            } else {
                let value = map.next_value_seed(self.child(path))?;
                object.insert(key, value);
            }
        }
        Ok(Value::Object(object))
    }
}

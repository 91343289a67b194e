//! Lenient field deserializers for attribute structs
//!
//! The API is not consistent about scalar encodings: sizes and counters show
//! up as numbers in one response and as numeric strings in another, and some
//! identifiers are numeric. Attribute fields use these helpers together with
//! `#[serde(default)]` so an absent key stays `None`.

use serde::de::{self, Deserialize, Deserializer};
use serde_json::Value;

pub(crate) fn opt_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().and_then(whole_f64))
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("expected integer, found {n}"))),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("expected integer, found \"{s}\""))),
        Some(other) => Err(de::Error::custom(format!("expected integer, found {other}"))),
    }
}

/// `2048.0` is accepted; fractions and values outside `i64` are not
fn whole_f64(f: f64) -> Option<i64> {
    (f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64).then_some(f as i64)
}

pub(crate) fn opt_bool<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<bool>, D::Error> {
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(b)),
        Some(Value::Number(n)) => Ok(Some(n.as_i64() != Some(0))),
        Some(Value::String(s)) => match s.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(Some(true)),
            "false" | "0" | "no" => Ok(Some(false)),
            "" => Ok(None),
            _ => Err(de::Error::custom(format!("expected boolean, found \"{s}\""))),
        },
        Some(other) => Err(de::Error::custom(format!("expected boolean, found {other}"))),
    }
}

/// Strings that occasionally arrive as numbers
pub(crate) fn opt_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(de::Error::custom(format!("expected string, found {other}"))),
    }
}

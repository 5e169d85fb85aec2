//! Normalization of raw roster entries.
//!
//! The public API does not guarantee field presence or types, so raw
//! entries stay as [`serde_json::Value`] until they pass through
//! [`normalize_character`]. Nothing else reads the raw payload.

use serde_json::Value;

use super::character::{Character, Transformation, UNNAMED};

/// Convert one raw roster entry into a [`Character`].
///
/// Never fails: every field falls back to a defined default.
pub fn normalize_character(raw: &Value) -> Character {
    let id = first_present(raw, &["id", "_id"])
        .and_then(coerce_number)
        .map(|n| n.trunc() as i64)
        .unwrap_or(0);

    Character {
        id,
        name: clean_text(raw.get("name")),
        race: clean_text(raw.get("race")),
        affiliation: clean_text(raw.get("affiliation")),
        ki: raw.get("ki").and_then(coerce_number),
        max_ki: raw.get("maxKi").and_then(coerce_number),
        transformations: normalize_transformations(raw.get("transformations")),
        gender: clean_text(raw.get("gender")),
        description: clean_text(raw.get("description")),
        image: clean_text(raw.get("image")),
    }
}

fn normalize_transformations(raw: Option<&Value>) -> Vec<Transformation> {
    let Some(Value::Array(items)) = raw else {
        return Vec::new();
    };

    items
        .iter()
        .map(|item| Transformation {
            name: clean_text(item.get("name")).unwrap_or_else(|| UNNAMED.to_string()),
            multiplier: item.get("multiplier").and_then(coerce_number),
        })
        .collect()
}

/// First key whose value is present and not `null`.
fn first_present<'a>(raw: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| raw.get(*key))
        .find(|value| !value.is_null())
}

/// Strings are trimmed, other scalars keep their literal JSON text.
fn clean_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Lenient numeric coercion; only finite results are kept.
fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            s.parse::<f64>().ok()?
        }
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };
    n.is_finite().then_some(n)
}

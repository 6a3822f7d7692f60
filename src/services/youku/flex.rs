//! Loosely typed upstream scalars
//!
//! The Youku API is inconsistent about scalar types: the same counter can come
//! back as `123`, `"123"`, `"1,234"` or `null` depending on endpoint. Every such
//! value is captured as a [`Flex`] and coerced explicitly; the serde helpers in
//! this module apply that coercion per field so one bad field never fails the
//! surrounding item.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::services::format::format_score;

/// A scalar as the upstream sent it
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Flex {
    Integer(i64),
    Real(f64),
    Text(String),
    /// null, bool, array, object or missing
    #[default]
    Null,
}

impl Flex {
    /// Integer view; unparsable input is 0
    pub fn as_i64(&self) -> i64 {
        match self {
            Flex::Integer(i) => *i,
            Flex::Real(f) if f.is_finite() => *f as i64,
            Flex::Real(_) => 0,
            Flex::Text(s) => {
                let cleaned = clean_number(s);
                cleaned
                    .parse::<i64>()
                    .ok()
                    .or_else(|| {
                        cleaned
                            .parse::<f64>()
                            .ok()
                            .filter(|f| f.is_finite())
                            .map(|f| f as i64)
                    })
                    .unwrap_or(0)
            }
            Flex::Null => 0,
        }
    }

    /// Real view; unparsable or non-finite input is 0.0
    pub fn as_f64(&self) -> f64 {
        let value = match self {
            Flex::Integer(i) => *i as f64,
            Flex::Real(f) => *f,
            Flex::Text(s) => clean_number(s).parse::<f64>().unwrap_or(0.0),
            Flex::Null => 0.0,
        };
        if value.is_finite() {
            value
        } else {
            0.0
        }
    }

    /// Text view; numbers are rendered, null is empty
    pub fn as_text(&self) -> String {
        match self {
            Flex::Integer(i) => i.to_string(),
            Flex::Real(f) => f.to_string(),
            Flex::Text(s) => s.clone(),
            Flex::Null => String::new(),
        }
    }
}

fn clean_number(s: &str) -> String {
    s.trim().replace(',', "")
}

impl From<Value> for Flex {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(n) => match n.as_i64() {
                Some(i) => Flex::Integer(i),
                None => Flex::Real(n.as_f64().unwrap_or(0.0)),
            },
            Value::String(s) => Flex::Text(s),
            _ => Flex::Null,
        }
    }
}

impl From<&str> for Flex {
    fn from(s: &str) -> Self {
        Flex::Text(s.to_string())
    }
}

impl From<i64> for Flex {
    fn from(i: i64) -> Self {
        Flex::Integer(i)
    }
}

impl From<f64> for Flex {
    fn from(f: f64) -> Self {
        Flex::Real(f)
    }
}

impl<'de> Deserialize<'de> for Flex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Flex::from)
    }
}

impl Serialize for Flex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Flex::Integer(i) => serializer.serialize_i64(*i),
            Flex::Real(f) => serializer.serialize_f64(*f),
            Flex::Text(s) => serializer.serialize_str(s),
            Flex::Null => serializer.serialize_none(),
        }
    }
}

// ============================================================================
// Field helpers (use with `#[serde(default, deserialize_with = "...")]`)
// ============================================================================

/// Counter field: number or numeric string, zero otherwise
pub fn integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(Flex::deserialize(deserializer)?.as_i64())
}

/// Real field (durations)
pub fn real<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Flex::deserialize(deserializer)?.as_f64())
}

/// Show score field
pub fn score<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(format_score(&Flex::deserialize(deserializer)?))
}

/// Text field: strings pass through, numbers are rendered, anything else is empty
pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Flex::deserialize(deserializer)?.as_text())
}

/// Structured field that falls back to its default when malformed
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

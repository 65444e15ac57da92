//! Lenient field coercion applied where external records enter the crate.
//!
//! Every numeric field of the data model is routed through [`number`], so a
//! missing, `null`, boolean or non-numeric value becomes `0.0` instead of a
//! deserialization error. Numeric strings (`"12.5"`) parse as numbers. Tags
//! go through [`tag`], which maps anything unrecognized to the type's
//! fallback variant. Nested records go through [`or_default`], so a record
//! of the wrong shape loads as its default.
//!
//! These helpers are meant for `#[serde(deserialize_with = "...")]`:
//!
//! ```rust
//! use roimap::core::coerce;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Row {
//!     #[serde(default, deserialize_with = "coerce::number")]
//!     amount: f64,
//! }
//!
//! let row: Row = serde_json::from_str(r#"{"amount": "not a number"}"#).unwrap();
//! assert_eq!(row.amount, 0.0);
//! ```

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Anything a field may hold once it leaves the storage layer.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Number(f64),
    Text(String),
    Flag(bool),
    Other(IgnoredAny),
}

/// Tag enums that fall back to a fixed variant for values they do not know.
pub trait Tagged: Sized {
    /// Map a textual tag to a variant, using the fallback for unknown tags.
    fn from_tag(tag: &str) -> Self;

    /// Variant used when the stored value is not a string at all.
    fn unrecognized() -> Self;

    /// Variant used for `null` or a blank string.
    fn missing() -> Self {
        Self::unrecognized()
    }
}

/// A nested value that either matches `T` or is skipped.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Other(IgnoredAny),
}

/// Pure coercion of a textual value to a finite number.
pub fn parse_number(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Deserialize a number, treating anything non-numeric as `0.0`.
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Number(value) => finite_or_zero(value),
        Scalar::Text(text) => parse_number(&text),
        Scalar::Flag(_) | Scalar::Other(_) => 0.0,
    })
}

/// Deserialize a recurrence count. Fractions truncate; zero, negative or
/// non-numeric counts mean a single occurrence.
pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Scalar::deserialize(deserializer)? {
        Scalar::Number(value) => finite_or_zero(value),
        Scalar::Text(text) => parse_number(&text),
        Scalar::Flag(_) | Scalar::Other(_) => 0.0,
    };
    Ok(normalize_count(raw))
}

/// Truncate a raw count to a positive integer, defaulting to 1.
pub fn normalize_count(raw: f64) -> u32 {
    let truncated = raw.trunc();
    if truncated < 1.0 {
        1
    } else if truncated >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        truncated as u32
    }
}

/// Deserialize an identifier or label. Numbers are rendered as text
/// (storage layers sometimes key records by timestamp).
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(text) => text,
        Scalar::Number(value) if value.fract() == 0.0 && value.abs() < 1e15 => {
            format!("{}", value as i64)
        }
        Scalar::Number(value) => value.to_string(),
        Scalar::Flag(_) | Scalar::Other(_) => String::new(),
    })
}

/// Deserialize a boolean flag. Accepts `true`/`false`, `"true"`/`"1"` and
/// non-zero numbers.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Flag(value) => value,
        Scalar::Number(value) => value != 0.0,
        Scalar::Text(text) => matches!(text.trim(), "true" | "1" | "yes"),
        Scalar::Other(_) => false,
    })
}

/// Deserialize a tag enum through [`Tagged`].
pub fn tag<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Tagged,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        None => T::missing(),
        Some(Scalar::Text(text)) if text.trim().is_empty() => T::missing(),
        Some(Scalar::Text(text)) => T::from_tag(text.trim()),
        Some(_) => T::unrecognized(),
    })
}

/// Deserialize a nested record or list. `null` and values of the wrong
/// shape (a string where a record belongs) become the default.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(match Lenient::<Option<T>>::deserialize(deserializer)? {
        Lenient::Value(value) => value.unwrap_or_default(),
        Lenient::Other(_) => T::default(),
    })
}

/// Deserialize a list or record strictly, treating only `null` as its default.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

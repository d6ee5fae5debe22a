//! Lenient deserializers for request bodies.
//!
//! The admin and landing frontends send list parameters either as JSON
//! numbers or as numeric strings (`"page": "2"`). Both are accepted.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Deserializes a number, a numeric string, an empty string or `null` into
/// an optional `i64`. Fractions are truncated toward zero.
pub fn deserialize_loose_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<LooseNumber>::deserialize(deserializer)? {
        None => Ok(None),
        Some(LooseNumber::Int(n)) => Ok(Some(n)),
        Some(LooseNumber::Float(f)) if f.is_finite() => Ok(Some(f.trunc() as i64)),
        Some(LooseNumber::Float(f)) => Err(serde::de::Error::custom(format!(
            "expected a finite number, got {}",
            f
        ))),
        Some(LooseNumber::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(LooseNumber::Text(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Deserializes an optional string, mapping blank strings to `None`.
pub fn deserialize_optional_trimmed<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.filter(|s| !s.trim().is_empty()))
}

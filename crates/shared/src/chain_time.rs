//! Chain timestamp encoding.
//!
//! The chain reports times as `%Y-%m-%dT%H:%M:%S` in UTC with no zone suffix,
//! and uses the epoch (`1970-01-01T00:00:00`) to mean "not set". Some nodes
//! write `1969-12-31T23:59:59` instead, so anything at or before the epoch
//! counts as unset.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serializer};

pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Sentinel the chain writes for an unset timestamp
pub const EMPTY: &str = "1970-01-01T00:00:00";

/// Parse a chain timestamp, tolerating a trailing `Z` or fractional seconds.
pub fn parse(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim().trim_end_matches('Z');
    let trimmed = trimmed.split('.').next().unwrap_or(trimmed);
    NaiveDateTime::parse_from_str(trimmed, FORMAT).ok()
}

fn is_set(dt: &NaiveDateTime) -> bool {
    dt.and_utc().timestamp() > 0
}

/// Parse a timestamp, mapping the unset sentinels to `None`.
pub fn parse_optional(raw: &str) -> Option<NaiveDateTime> {
    parse(raw).filter(is_set)
}

pub fn format(dt: &NaiveDateTime) -> String {
    dt.format(FORMAT).to_string()
}

pub fn serialize<S>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(dt))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid chain time: {}", raw)))
}

/// Optional timestamps: the sentinel decodes to `None` and `None` encodes
/// back to the sentinel.
pub mod optional {
    use super::*;

    pub fn serialize<S>(dt: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match dt {
            Some(dt) => serializer.serialize_str(&super::format(dt)),
            None => serializer.serialize_str(EMPTY),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => {
                let dt = parse(&raw).ok_or_else(|| {
                    serde::de::Error::custom(format!("invalid chain time: {}", raw))
                })?;
                Ok(Some(dt).filter(is_set))
            }
        }
    }
}

//! Casts from raw env strings to typed values.

use std::str::FromStr;

use crate::error::{ConfigError, ConfigResult};

const TRUTHY: &[&str] = &["1", "true", "yes", "on", "t", "y"];
const FALSY: &[&str] = &["", "0", "false", "no", "off", "f", "n"];

/// Cast to boolean.
///
/// Case-insensitive and whitespace-tolerant. Anything outside the accepted
/// true/false spellings is rejected rather than silently read as `false`.
pub fn to_bool(key: &str, raw: &str) -> ConfigResult<bool> {
    let value = raw.trim().to_ascii_lowercase();

    if TRUTHY.contains(&value.as_str()) {
        Ok(true)
    } else if FALSY.contains(&value.as_str()) {
        Ok(false)
    } else {
        Err(ConfigError::invalid(
            key,
            format!("expected a boolean, got {:?}", raw),
        ))
    }
}

/// Cast to any integer type; out-of-range values are rejected.
pub fn to_int<T>(key: &str, raw: &str) -> ConfigResult<T>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    raw.trim().parse::<T>().map_err(|e| {
        ConfigError::invalid(key, format!("expected an integer, got {:?} ({})", raw, e))
    })
}

/// Split a comma-separated value. Items are trimmed, empty items dropped,
/// order kept.
pub fn to_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

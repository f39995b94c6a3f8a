//! Pure field validators.
//!
//! Each validator keeps the parse error that made a value invalid instead of
//! collapsing it to a boolean.

use crate::account::{Address, PrivateKey, PublicKey};

use super::InvalidReason;

/// Maximum number of parts in a namespace alias (`root.sub.leaf`).
pub const MAX_ALIAS_DEPTH: usize = 3;

/// Maximum length of a single alias part.
pub const MAX_ALIAS_PART_LENGTH: usize = 64;

/// Validates a plain or pretty address.
pub fn validate_address(value: &str) -> Result<Address, InvalidReason> {
    Ok(Address::parse(value)?)
}

/// Validates a namespace alias such as `symbol.xym`.
///
/// Parts are lowercase alphanumerics plus `-` and `_`, must start with an
/// alphanumeric, and at most three parts are allowed.
pub fn validate_alias(value: &str) -> Result<(), InvalidReason> {
    let parts: Vec<&str> = value.split('.').collect();
    if parts.len() > MAX_ALIAS_DEPTH {
        return Err(InvalidReason::Alias(format!(
            "at most {MAX_ALIAS_DEPTH} levels allowed"
        )));
    }

    for part in parts {
        if part.is_empty() || part.len() > MAX_ALIAS_PART_LENGTH {
            return Err(InvalidReason::Alias(format!(
                "part length must be 1 to {MAX_ALIAS_PART_LENGTH}"
            )));
        }
        let mut chars = part.chars();
        let first = chars.next().unwrap_or_default();
        if !(first.is_ascii_lowercase() || first.is_ascii_digit()) {
            return Err(InvalidReason::Alias(format!("{part:?} must start with a-z or 0-9")));
        }
        if let Some(bad) = chars.find(|c| {
            !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || *c == '_')
        }) {
            return Err(InvalidReason::Alias(format!("unexpected character {bad:?}")));
        }
    }

    Ok(())
}

/// Validates that `value` is a decimal number with at most `max` fraction digits.
pub fn validate_max_decimals(value: &str, max: u32) -> Result<(), InvalidReason> {
    let value = value.trim();
    let (whole, fraction) = value.split_once('.').unwrap_or((value, ""));

    let is_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
        return Err(InvalidReason::NotANumber(value.to_string()));
    }

    let actual = fraction.len() as u32;
    if actual > max {
        return Err(InvalidReason::TooManyDecimals { max, actual });
    }
    Ok(())
}

/// Validates an absolute `http` or `https` URL.
pub fn validate_url(value: &str) -> Result<(), InvalidReason> {
    let url = url::Url::parse(value).map_err(|e| InvalidReason::Url(e.to_string()))?;
    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(()),
        "http" | "https" => Err(InvalidReason::Url("missing host".to_string())),
        other => Err(InvalidReason::Url(format!("unsupported scheme {other}"))),
    }
}

/// Validates a 64-character hex public key.
pub fn validate_public_key(value: &str) -> Result<(), InvalidReason> {
    PublicKey::parse(value)?;
    Ok(())
}

/// Validates a 64-character hex private key.
pub fn validate_private_key(value: &str) -> Result<(), InvalidReason> {
    PrivateKey::parse(value)?;
    Ok(())
}

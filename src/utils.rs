//! Numeric and date normalization helpers.
//!
//! The upstream API is loose about number encoding: the same field can arrive
//! as a JSON number, a decimal string, a scientific-notation string
//! (`"1.23E+09"`), or a display string with thousands separators
//! (`"+1,234.56"`). Everything here is total — a malformed field degrades to
//! a defined default instead of failing the whole response.

use crate::models::RawNumeric;
use serde_json::Value;

/// Parse a raw numeric token in decimal or scientific notation.
///
/// Absent, null, empty, or unparseable values become `0.0`. Numbers pass
/// through unchanged.
pub fn parse_numeric(raw: &RawNumeric) -> f64 {
    match raw {
        RawNumeric::Number(n) => *n,
        RawNumeric::Text(s) => parse_decimal_str(s),
        RawNumeric::Other(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        RawNumeric::Other(_) => 0.0,
    }
}

/// Parse a display-formatted numeric token (`"+1,234.56"`).
///
/// Thousands commas and a leading `+` are stripped before parsing; the
/// zero-on-failure policy is the same as [`parse_numeric`].
pub fn parse_display_numeric(raw: &RawNumeric) -> f64 {
    match raw {
        RawNumeric::Number(n) => *n,
        RawNumeric::Text(s) => parse_display_str(s),
        RawNumeric::Other(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        RawNumeric::Other(_) => 0.0,
    }
}

/// String-level variant of [`parse_display_numeric`], used for table cells.
pub fn parse_display_str(text: &str) -> f64 {
    let cleaned = text.trim().replace(',', "");
    let cleaned = cleaned.strip_prefix('+').unwrap_or(&cleaned);
    parse_decimal_str(cleaned)
}

fn parse_decimal_str(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Format a value with K/M/B/T magnitude suffixes. Zero renders as `"0"`.
///
/// Values below a thousand are printed as-is with thousands grouping (two
/// decimals when fractional). The sign survives as a leading `-`.
pub fn format_magnitude(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    if abs >= 1e12 {
        format!("{}{:.2}T", sign, abs / 1e12)
    } else if abs >= 1e9 {
        format!("{}{:.2}B", sign, abs / 1e9)
    } else if abs >= 1e6 {
        format!("{}{:.2}M", sign, abs / 1e6)
    } else if abs >= 1e3 {
        format!("{}{:.2}K", sign, abs / 1e3)
    } else if abs.fract() == 0.0 {
        format!("{}{}", sign, group_thousands(abs as u64))
    } else {
        format!("{}{:.2}", sign, abs)
    }
}

/// Same scaling as [`format_magnitude`] but zero renders as `"-"`.
///
/// Both zero conventions exist upstream; transaction display fields use this
/// one, aggregate totals use the `"0"` form.
pub fn format_magnitude_or_dash(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        "-".to_string()
    } else {
        format_magnitude(value)
    }
}

/// Comma-group an integer (`1234567` → `"1,234,567"`).
pub fn group_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Reformat a compact `YYYYMMDD` date code as `YYYY-MM-DD`.
///
/// Anything that is not exactly 8 characters long comes back unchanged so a
/// non-conforming upstream value stays visible instead of being blanked.
pub fn format_compact_date(code: &str) -> String {
    if code.len() != 8 || !code.is_ascii() {
        return code.to_string();
    }
    format!("{}-{}-{}", &code[..4], &code[4..6], &code[6..8])
}

/// Upstream API base URL, overridable for testing against a stub.
pub fn get_base_url() -> String {
    std::env::var("MARKETDECK_BASE_URL")
        .unwrap_or_else(|_| "https://api.brokerage.example/v1".to_string())
}

pub fn get_access_token() -> Option<String> {
    std::env::var("MARKETDECK_ACCESS_TOKEN").ok()
}

pub fn get_refresh_token() -> Option<String> {
    std::env::var("MARKETDECK_REFRESH_TOKEN").ok()
}

pub fn get_session_cookie() -> Option<String> {
    std::env::var("MARKETDECK_SESSION").ok()
}

//! Display strings for reports
//!
//! Digits are grouped by thousands with a plain space, independent of locale.
//! Undefined, NaN and infinite values render as a dash placeholder.

use chrono::Month;

/// Rendered in place of any undefined value
pub const PLACEHOLDER: &str = "—";

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Whole-unit number with grouped digits and an optional prefix
fn grouped(value: f64, prefix: &str) -> String {
    let digits = format!("{:.0}", value.abs());
    let sign = if value < 0.0 && digits.chars().any(|c| c != '0') { "-" } else { "" };
    format!("{sign}{prefix}{}", group_digits(&digits))
}

/// Monetary amount, e.g. `€50 000 000`
pub fn money<V: Into<Option<f64>>>(value: V, currency: &str) -> String {
    match finite(value.into()) {
        Some(v) => grouped(v, currency),
        None => PLACEHOLDER.to_string(),
    }
}

/// Volume count, e.g. `31 536`
pub fn count<V: Into<Option<f64>>>(value: V) -> String {
    match finite(value.into()) {
        Some(v) => grouped(v, ""),
        None => PLACEHOLDER.to_string(),
    }
}

/// Ratio as a percentage with one decimal, e.g. `73.3%`
pub fn percent<V: Into<Option<f64>>>(value: V) -> String {
    match finite(value.into()) {
        Some(v) => format!("{:.1}%", v * 100.0),
        None => PLACEHOLDER.to_string(),
    }
}

/// Three-letter English month name; out-of-range months wrap modulo 12
pub fn month_abbrev(month: u32) -> &'static str {
    let number = (month as i64 - 1).rem_euclid(12) as u8 + 1;
    match Month::try_from(number) {
        Ok(m) => &m.name()[..3],
        Err(_) => PLACEHOLDER,
    }
}

//! # Display Formatting
//!
//! Pure value-to-text formatting for the calculator display: thousands
//! grouping, a capped fraction length without trailing zeros, and
//! normalized exponential notation outside the fixed-point range.

use crate::config::{
    EXP_LOWER_THRESHOLD, EXP_UPPER_THRESHOLD, GROUP_SEPARATOR, MAX_FRACTION_DIGITS,
};

/// Display text for the sticky division-by-zero marker
pub const ERROR_TEXT: &str = "Error";

/// Format a numeric value for the display
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return text.to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXP_UPPER_THRESHOLD || (magnitude != 0.0 && magnitude < EXP_LOWER_THRESHOLD) {
        format_exponential(value)
    } else {
        format_fixed(value)
    }
}

/// Normalized exponential notation with an explicit exponent sign
/// (`1.000000e+12`, `1.000000e-7`)
fn format_exponential(value: f64) -> String {
    // {:.6e} normalizes and rounds the mantissa but leaves positive
    // exponents unsigned
    let raw = format!("{:.*e}", MAX_FRACTION_DIGITS, value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => raw,
    }
}

/// Fixed-point notation: fraction capped without trailing zeros, integer
/// digits grouped in thousands
fn format_fixed(value: f64) -> String {
    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');

    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed),
    };
    let (int_part, fraction) = match unsigned.split_once('.') {
        Some((int_part, fraction)) => (int_part, Some(fraction)),
        None => (unsigned, None),
    };

    let grouped = group_thousands(int_part);
    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Insert a separator every three digits, counting from the right
fn group_thousands(digits: &str) -> String {
    let mut reversed = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            reversed.push(GROUP_SEPARATOR);
        }
        reversed.push(c);
    }
    reversed.chars().rev().collect()
}

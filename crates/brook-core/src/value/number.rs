// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Number formatting and text-to-number parsing.
//!
//! Formatting follows the default decimal form of the language: integral
//! values print without a fraction, `NaN` and the infinities print by name,
//! and magnitudes outside `[1e-6, 1e21)` switch to exponent notation with an
//! explicit exponent sign (`1e+21`, `1.5e-7`).

/// Smallest magnitude printed without an exponent.
const MIN_PLAIN: f64 = 1e-6;

/// Smallest magnitude printed with an exponent.
const MAX_PLAIN: f64 = 1e21;

/// Format a number in default decimal form.
#[must_use]
pub fn format(n: f64) -> String {
    if n.is_nan() {
        return String::from("NaN");
    }
    if n.is_infinite() {
        return String::from(if n > 0.0 { "Infinity" } else { "-Infinity" });
    }
    // Covers -0 as well
    if n == 0.0 {
        return String::from("0");
    }

    let magnitude = n.abs();
    if (MIN_PLAIN..MAX_PLAIN).contains(&magnitude) {
        return format!("{n}");
    }

    // Rust prints `1e21` / `1.5e-7`; the exponent needs an explicit sign
    let formatted = format!("{n:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

/// Parse text as a number.
///
/// Surrounding whitespace is ignored and empty text is zero. Accepts decimal
/// and exponent forms, the signed names `Infinity`, and unsigned `0x`, `0o`
/// and `0b` integer literals. Everything else is NaN.
#[must_use]
pub fn parse(text: &str) -> f64 {
    let s = text.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(n) = parse_radix_literal(s) {
        return n;
    }

    if is_decimal_literal(s) {
        return s.parse::<f64>().unwrap_or(f64::NAN);
    }

    f64::NAN
}

/// Parse `0x`, `0o` and `0b` prefixed integers.
///
/// Returns `None` if the text has no radix prefix. A prefix with invalid or
/// missing digits is NaN.
fn parse_radix_literal(s: &str) -> Option<f64> {
    let radix = match s.get(..2) {
        Some("0x" | "0X") => 16,
        Some("0o" | "0O") => 8,
        Some("0b" | "0B") => 2,
        _ => return None,
    };

    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let mut value = 0.0_f64;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else {
            return Some(f64::NAN);
        };
        value = value.mul_add(f64::from(radix), f64::from(d));
    }
    Some(value)
}

/// Check that text only uses decimal literal characters.
///
/// `str::parse::<f64>` also accepts `inf` and `nan` spellings, which are not
/// numbers in this language.
fn is_decimal_literal(s: &str) -> bool {
    s.bytes().any(|b| b.is_ascii_digit())
        && s
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
}

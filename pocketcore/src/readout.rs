//! The calculator display text.
//!
//! The readout is the only numeric representation the calculator keeps for
//! the value being entered: every operation reads the number back out of the
//! text and writes results in with six significant digits.

use std::fmt;

/// Maximum number of characters the display will hold.
pub const MAX_LEN: usize = 31;

/// Significant digits used when a computed value is written to the display.
pub const SIGNIFICANT_DIGITS: usize = 6;

/// Bounded display text. Always non-empty; starts as `"0"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readout {
    text: String,
}

impl Default for Readout {
    fn default() -> Self {
        Self::zero()
    }
}

impl Readout {
    pub fn zero() -> Self {
        Self {
            text: "0".to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True only for the literal `"0"`, not for `"0."` or `"-0"`.
    pub fn is_zero_literal(&self) -> bool {
        self.text == "0"
    }

    pub fn has_decimal_point(&self) -> bool {
        self.text.contains('.')
    }

    /// Numeric value of the text, read the way C `atof` would.
    pub fn value(&self) -> f64 {
        parse_leading(&self.text)
    }

    /// Start a fresh number with a single character.
    pub fn start_with(&mut self, c: char) {
        self.text.clear();
        self.text.push(c);
    }

    /// Append a character. Returns false when the display is full.
    pub fn push(&mut self, c: char) -> bool {
        if self.text.len() >= MAX_LEN {
            return false;
        }
        self.text.push(c);
        true
    }

    /// Replace the text with `value` in `%.6g` form.
    pub fn set_value(&mut self, value: f64) {
        self.text = format_general(value, SIGNIFICANT_DIGITS);
        self.text.truncate(MAX_LEN);
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Format like C's `%.{precision}g`.
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let precision = precision.max(1);
    // Rounding can carry into the next power of ten, so the exponent is
    // taken from the already-rounded scientific form.
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.rsplit_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Convert the longest numeric prefix of `text`, defaulting to 0.
///
/// Accepts an optional sign, digits with at most one point, an optional
/// exponent, or `inf`/`infinity`/`nan` in any case.
pub fn parse_leading(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;

    let negative = matches!(bytes.first(), Some(b'-'));
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let rest = &s[i..];
    if starts_with_ignore_case(rest, "inf") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    if starts_with_ignore_case(rest, "nan") {
        return f64::NAN;
    }

    let mut digits = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        digits += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return 0.0;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        if j < bytes.len() && bytes[j].is_ascii_digit() {
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            i = j;
        }
    }

    s[..i].parse().unwrap_or(0.0)
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len() && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

//! Money formatting in the Russian locale used by the app.
//!
//! Amounts are shown the way `ru-RU` number formatting renders them: digit
//! groups of three separated by a no-break space, a decimal comma, and at
//! most three fraction digits. Rounding starts from the shortest decimal form
//! of the float and sends ties away from zero. Every amount carries the tenge
//! suffix.

use crate::models::PLACEHOLDER;

/// Suffix appended to every formatted amount.
pub const CURRENCY_SUFFIX: &str = " ₸";

/// Thousands separator (U+00A0 NO-BREAK SPACE).
pub const GROUP_SEPARATOR: char = '\u{a0}';

const DECIMAL_SEPARATOR: char = ',';
const MAX_FRACTION_DIGITS: usize = 3;

/// Format a number with grouped thousands and no currency suffix.
pub fn format_number(amount: f64) -> String {
    if amount.is_nan() {
        return PLACEHOLDER.to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let fixed = round_fraction(&format!("{}", amount.abs()), MAX_FRACTION_DIGITS);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    // "-0" is never shown: rounding a tiny negative to zero drops the sign
    if amount < 0.0 && (int_part.bytes().any(|b| b != b'0') || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if !frac_part.is_empty() {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(frac_part);
    }
    out
}

/// Format an amount for display, e.g. `1 000 000 ₸`.
pub fn format_money(amount: f64) -> String {
    format_number(amount) + CURRENCY_SUFFIX
}

/// Round a plain decimal string (shortest round-trip form, no exponent) to
/// `digits` fraction digits, ties away from zero.
fn round_fraction(decimal: &str, digits: usize) -> String {
    let (int_part, frac_part) = decimal.split_once('.').unwrap_or((decimal, ""));
    if frac_part.len() <= digits {
        return decimal.to_string();
    }

    let round_up = frac_part.as_bytes()[digits] >= b'5';
    let mut kept: Vec<u8> = int_part.bytes().chain(frac_part.bytes().take(digits)).collect();

    if round_up {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let int_len = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 1);
    out.extend(kept[..int_len].iter().map(|&b| b as char));
    out.push('.');
    out.extend(kept[int_len..].iter().map(|&b| b as char));
    out
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3 * GROUP_SEPARATOR.len_utf8());
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }
    grouped
}

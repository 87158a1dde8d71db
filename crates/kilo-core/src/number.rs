//! # Number Rendering
//!
//! Renders `f64` values exactly like ECMAScript `Number.prototype.toString()`
//! with radix 10.
//!
//! Rust's `Display` for floats never switches to exponent notation and
//! prints `-0` as `-0`, so it cannot be used where the textual form of a
//! number is observable (the `int` and `float` built-ins match a regex
//! against this rendering).
//!
//! ## Algorithm
//!
//! `{:e}` yields the shortest round-trip digit string `d.ddd` and a decimal
//! exponent. With `k` digits and `n = exponent + 1`:
//!
//! | condition | output |
//! |-----------|--------|
//! | `k <= n <= 21` | digits followed by `n - k` zeros |
//! | `0 < n <= 21` | digits with a point after the `n`th digit |
//! | `-6 < n <= 0` | `0.`, `-n` zeros, digits |
//! | otherwise | `d[.ddd]e±(n - 1)` |

/// Render `n` the way JavaScript converts a number to a string.
pub fn to_js_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n == 0.0 {
        // Covers -0 as well.
        return "0".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let sign = if n < 0.0 { "-" } else { "" };
    let scientific = format!("{:e}", n.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let k = digits.len() as i32;
    let point = exponent + 1;

    let body = if k <= point && point <= 21 {
        let mut out = digits;
        out.extend(std::iter::repeat('0').take((point - k) as usize));
        out
    } else if 0 < point && point <= 21 {
        let (int_part, frac_part) = digits.split_at(point as usize);
        format!("{int_part}.{frac_part}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat((-point) as usize))
    } else {
        let e = point - 1;
        let exp = if e >= 0 { format!("+{e}") } else { e.to_string() };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{exp}")
        } else {
            format!("{lead}.{rest}e{exp}")
        }
    };

    format!("{sign}{body}")
}

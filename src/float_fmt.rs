//! Float rendering that matches what a browser shows for the same value.
//!
//! Results used to be rendered by JavaScript, so the dashboard keeps
//! `Number.prototype.toFixed` and `Number.prototype.toString` output:
//! - Non-finite values render as `NaN`, `Infinity` and `-Infinity`.
//! - `to_fixed` rounds ties away from zero on the exact binary value.
//! - Magnitudes of at least `1e21` switch to exponential notation.

/// Enough fractional digits to print any `f64` exactly (the smallest
/// subnormal needs 1074).
const EXACT_FRAC_DIGITS: usize = 1100;

/// Upper bound accepted by `toFixed`.
const MAX_FIXED_DIGITS: usize = 100;

fn non_finite(v: f64) -> Option<&'static str> {
    if v.is_nan() {
        Some("NaN")
    } else if v == f64::INFINITY {
        Some("Infinity")
    } else if v == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

fn exponential(v: f64) -> String {
    // Rust prints `1.5e21` / `1e-7`; JS spells positive exponents `e+21`.
    let s = format!("{v:e}");
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => s,
    }
}

/// `v.toFixed(decimals)`.
pub fn to_fixed(v: f64, decimals: usize) -> String {
    if let Some(s) = non_finite(v) {
        return s.to_string();
    }
    if v.abs() >= 1e21 {
        return to_js_string(v);
    }

    let decimals = decimals.min(MAX_FIXED_DIGITS);
    let negative = v < 0.0;

    let exact = format!("{:.*}", EXACT_FRAC_DIGITS, v.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(decimals))
        .collect();
    let mut int_len = int_part.len();

    let round_up = frac_part
        .as_bytes()
        .get(decimals)
        .is_some_and(|&d| d >= b'5');
    if round_up {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                int_len += 1;
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let mut out = String::with_capacity(digits.len() + 2);
    if negative {
        out.push('-');
    }
    for (i, &d) in digits.iter().enumerate() {
        if i == int_len {
            out.push('.');
        }
        out.push(d as char);
    }
    out
}

/// `String(v)` for a JS number.
pub fn to_js_string(v: f64) -> String {
    if let Some(s) = non_finite(v) {
        return s.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }
    let abs = v.abs();
    if !(1e-6..1e21).contains(&abs) {
        return exponential(v);
    }
    format!("{v}")
}

//! Pulling the prediction out of a service response and turning it into the
//! text shown on the result card.

use serde_json::Value;

use crate::float_fmt::{to_fixed, to_js_string};

/// Field read by the regression extractor.
pub const PVOUT_FIELD: &str = "Predicted_PVOUT";

/// Classification fields in priority order. Different backend variants answer
/// with different names; keep this order unless the backend contract changes.
pub const CLASS_FIELDS: &[&str] = &["Predicted_Class", "Predicted_Site_Suitability", "prediction"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseExtractor {
    /// Read one named field.
    Field(&'static str),
    /// Read the first field whose value is neither missing nor `null`.
    FirstPresent(&'static [&'static str]),
}

impl ResponseExtractor {
    pub fn regression() -> Self {
        ResponseExtractor::Field(PVOUT_FIELD)
    }

    pub fn classification() -> Self {
        ResponseExtractor::FirstPresent(CLASS_FIELDS)
    }

    /// `None` means no recognized field was present. Falsy values such as
    /// `0` or `""` still count as present.
    pub fn extract<'a>(&self, body: &'a Value) -> Option<&'a Value> {
        let present = |key: &str| body.get(key).filter(|v| !v.is_null());
        match self {
            ResponseExtractor::Field(key) => present(*key),
            ResponseExtractor::FirstPresent(keys) => keys.iter().find_map(|k| present(*k)),
        }
    }

    pub fn fields(&self) -> &[&'static str] {
        match self {
            ResponseExtractor::Field(key) => std::slice::from_ref(key),
            ResponseExtractor::FirstPresent(keys) => keys,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultFormatter {
    /// Coerce to a number, then render with a fixed number of fractional digits.
    Fixed(usize),
    /// Echo the value as the page would print it.
    Identity,
}

impl ResultFormatter {
    pub fn format(&self, value: &Value) -> String {
        match self {
            ResultFormatter::Fixed(decimals) => to_fixed(coerce_number(value), *decimals),
            ResultFormatter::Identity => display_value(value),
        }
    }
}

/// Number coercion with JavaScript `Number()` rules for JSON values.
pub fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_numeric_string(s),
        Value::Array(items) => match items.as_slice() {
            [] => 0.0,
            [single] if !single.is_array() && !single.is_object() => coerce_number(single),
            _ => f64::NAN,
        },
        Value::Object(_) => f64::NAN,
    }
}

fn parse_numeric_string(s: &str) -> f64 {
    let t = s.trim();
    if t.is_empty() {
        return 0.0;
    }
    match t {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    // Rust also accepts `inf`/`nan` spellings that JS rejects.
    if t.bytes().any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E') {
        return f64::NAN;
    }
    t.parse::<f64>().unwrap_or(f64::NAN)
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match (n.as_i64(), n.as_u64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(u)) => u.to_string(),
            _ => to_js_string(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

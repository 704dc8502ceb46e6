//! Scalar parameter values and their URL rendering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar query parameter value.
///
/// Values keep their native type until they are rendered into a URL, because
/// falsiness is judged on the native value (`0` and `false` are dropped even
/// though `"0"` and `"false"` are not filler tokens).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl ParamValue {
    /// True for `false`, `0`, `0.0`, NaN and the empty string.
    pub fn is_falsy(&self) -> bool {
        match self {
            ParamValue::Bool(b) => !*b,
            ParamValue::Int(n) => *n == 0,
            ParamValue::Float(f) => *f == 0.0 || f.is_nan(),
            ParamValue::Text(s) => s.is_empty(),
        }
    }

    /// String form used in the canonical query (`key=<rendered>`).
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Bool(b) => write!(f, "{b}"),
            ParamValue::Int(n) => write!(f, "{n}"),
            ParamValue::Float(x) if x.is_nan() => f.write_str("NaN"),
            ParamValue::Float(x) if x.is_infinite() => {
                f.write_str(if *x > 0.0 { "Infinity" } else { "-Infinity" })
            }
            // `{}` on f64 already prints integral floats without a fraction.
            ParamValue::Float(x) => write!(f, "{x}"),
            ParamValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        ParamValue::Int(n)
    }
}

impl From<i32> for ParamValue {
    fn from(n: i32) -> Self {
        ParamValue::Int(i64::from(n))
    }
}

impl From<u32> for ParamValue {
    fn from(n: u32) -> Self {
        ParamValue::Int(i64::from(n))
    }
}

impl From<f64> for ParamValue {
    fn from(x: f64) -> Self {
        ParamValue::Float(x)
    }
}

//! Typed lookups into a `serde_json::Value` override object.
//!
//! A missing key (or `null`) yields the default. A key holding the wrong JSON
//! type is reported as `LifeError::ParamTypeMismatch` so a typo in a
//! `--params` string is not silently ignored.

use crate::error::LifeError;
use serde_json::Value;

/// Extracts an `f64` from `params[name]`. Integers are accepted.
pub fn param_f64(params: &Value, name: &str, default: f64) -> Result<f64, LifeError> {
    match lookup(params, name) {
        None => Ok(default),
        Some(v) => v.as_f64().ok_or_else(|| mismatch(name, "number", v)),
    }
}

/// Extracts a non-negative integer from `params[name]` as `u64`.
pub fn param_u64(params: &Value, name: &str, default: u64) -> Result<u64, LifeError> {
    match lookup(params, name) {
        None => Ok(default),
        Some(v) => v
            .as_u64()
            .ok_or_else(|| mismatch(name, "non-negative integer", v)),
    }
}

/// Extracts a non-negative integer from `params[name]` as `usize`.
pub fn param_usize(params: &Value, name: &str, default: usize) -> Result<usize, LifeError> {
    param_u64(params, name, default as u64).map(|v| v as usize)
}

/// Extracts an optional non-negative integer; absent or `null` yields `None`.
pub fn param_opt_u64(params: &Value, name: &str) -> Result<Option<u64>, LifeError> {
    match lookup(params, name) {
        None => Ok(None),
        Some(v) => v
            .as_u64()
            .map(Some)
            .ok_or_else(|| mismatch(name, "non-negative integer", v)),
    }
}

fn lookup<'a>(params: &'a Value, name: &str) -> Option<&'a Value> {
    params.get(name).filter(|v| !v.is_null())
}

fn mismatch(name: &str, expected: &str, got: &Value) -> LifeError {
    LifeError::ParamTypeMismatch {
        name: name.to_owned(),
        expected: expected.to_owned(),
        got: json_type_name(got).to_owned(),
    }
}

fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(n) if n.is_i64() && n.as_i64().is_some_and(|i| i < 0) => "negative integer",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

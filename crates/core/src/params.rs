//! Helpers for reading typed field parameters from a `serde_json::Value` object.
//!
//! A missing key (or `null`) falls back to the default. A key holding the
//! wrong JSON type is an error, so a typo such as `"half_width": "0.3"` is
//! reported instead of silently ignored.

use crate::error::FourierError;
use serde_json::Value;

/// Extracts an `f64` from `params[name]`, returning `default` if missing.
///
/// Accepts both JSON floats and integers. Returns
/// `FourierError::ParamTypeMismatch` for any other JSON type.
pub fn param_f64(params: &Value, name: &str, default: f64) -> Result<f64, FourierError> {
    match params.get(name) {
        None | Some(Value::Null) => Ok(default),
        Some(v) => v.as_f64().ok_or_else(|| FourierError::ParamTypeMismatch {
            name: name.to_string(),
            expected: "number".into(),
            got: json_type_name(v).into(),
        }),
    }
}

/// Like [`param_f64`], but also requires the value to lie in `[min, max]`.
///
/// Returns `FourierError::ParamOutOfRange` otherwise, including for NaN. The
/// default is not checked.
pub fn param_f64_in(
    params: &Value,
    name: &str,
    default: f64,
    min: f64,
    max: f64,
) -> Result<f64, FourierError> {
    let value = param_f64(params, name, default)?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(FourierError::ParamOutOfRange {
            name: name.to_string(),
            value,
            min,
            max,
        })
    }
}

/// Short JSON type name used in error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn param_f64_extracts_existing_float() {
        let params = json!({"half_width": 0.3});
        assert!((param_f64(&params, "half_width", 0.25).unwrap() - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_extracts_integer_as_float() {
        let params = json!({"n": -2});
        assert!((param_f64(&params, "n", 0.0).unwrap() + 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_when_key_missing() {
        let params = json!({"other": 1.0});
        assert!((param_f64(&params, "value", 3.0).unwrap() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_for_null_value() {
        let params = json!({"value": null});
        assert!((param_f64(&params, "value", 5.0).unwrap() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_for_non_object() {
        let params = json!("not an object");
        assert!((param_f64(&params, "value", 7.0).unwrap() - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_rejects_wrong_type() {
        let params = json!({"radius": "wide"});
        let err = param_f64(&params, "radius", 0.25).unwrap_err();
        match err {
            FourierError::ParamTypeMismatch {
                name,
                expected,
                got,
            } => {
                assert_eq!(name, "radius");
                assert_eq!(expected, "number");
                assert_eq!(got, "string");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn param_f64_in_accepts_bounds_and_default() {
        let params = json!({"half_width": 0.5});
        assert_eq!(param_f64_in(&params, "half_width", 0.25, 0.0, 0.5).unwrap(), 0.5);
        assert_eq!(param_f64_in(&json!({}), "half_width", 0.25, 0.0, 0.5).unwrap(), 0.25);
    }

    #[test]
    fn param_f64_in_rejects_value_outside_range() {
        let params = json!({"half_width": 0.7});
        match param_f64_in(&params, "half_width", 0.25, 0.0, 0.5).unwrap_err() {
            FourierError::ParamOutOfRange {
                name,
                value,
                min,
                max,
            } => {
                assert_eq!(name, "half_width");
                assert_eq!(value, 0.7);
                assert_eq!((min, max), (0.0, 0.5));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn param_f64_in_still_reports_type_mismatch() {
        let params = json!({"half_width": "wide"});
        assert!(matches!(
            param_f64_in(&params, "half_width", 0.25, 0.0, 0.5),
            Err(FourierError::ParamTypeMismatch { .. })
        ));
    }

    #[test]
    fn json_type_names() {
        assert_eq!(json_type_name(&json!(true)), "boolean");
        assert_eq!(json_type_name(&json!([1])), "array");
        assert_eq!(json_type_name(&json!({})), "object");
        assert_eq!(json_type_name(&json!(null)), "null");
    }
}

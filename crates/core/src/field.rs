//! The `ScalarField` trait implemented by named, parameterized fields.
//!
//! The estimator itself only needs a closure; this trait adds the parameter
//! introspection that registries and front ends use. It is object-safe so
//! fields can be held as `dyn ScalarField`.

use crate::error::FourierError;
use num_complex::Complex64;
use serde_json::Value;

/// A scalar field on the unit square with inspectable parameters.
pub trait ScalarField {
    /// Value of the field at `point` (real part = x, imaginary part = y).
    ///
    /// Returns `FourierError::FieldEvaluation` if no finite value exists there.
    fn sample(&self, point: Complex64) -> Result<Complex64, FourierError>;

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing all parameters, their types, ranges, and defaults.
    fn param_schema(&self) -> Value;
}

/// Checks that a sampled value is finite, naming the point if it is not.
pub fn ensure_finite(point: Complex64, value: Complex64) -> Result<Complex64, FourierError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FourierError::FieldEvaluation {
            x: point.re,
            y: point.im,
            message: format!("non-finite value {value}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::fourier_grid;
    use serde_json::json;

    /// Field that divides by `x`, used to exercise evaluation errors.
    struct Reciprocal {
        scale: f64,
    }

    impl ScalarField for Reciprocal {
        fn sample(&self, point: Complex64) -> Result<Complex64, FourierError> {
            ensure_finite(point, Complex64::new(self.scale / point.re, 0.0))
        }

        fn params(&self) -> Value {
            json!({"scale": self.scale})
        }

        fn param_schema(&self) -> Value {
            json!({
                "scale": {
                    "type": "number",
                    "default": 1.0,
                    "description": "Numerator of scale / x"
                }
            })
        }
    }

    #[test]
    fn scalar_field_is_object_safe() {
        let field: Box<dyn ScalarField> = Box::new(Reciprocal { scale: 2.0 });
        let v = field.sample(Complex64::new(0.5, 0.5)).unwrap();
        assert!((v.re - 4.0).abs() < 1e-12);
        assert_eq!(field.params()["scale"], 2.0);
        assert_eq!(field.param_schema()["scale"]["type"], "number");
    }

    #[test]
    fn non_finite_sample_becomes_field_evaluation_error() {
        let field = Reciprocal { scale: 1.0 };
        let err = field.sample(Complex64::new(0.0, 0.25)).unwrap_err();
        assert!(matches!(
            err,
            FourierError::FieldEvaluation { x, y, .. } if x == 0.0 && y == 0.25
        ));
    }

    #[test]
    fn grid_over_trait_object_propagates_field_error() {
        let field: &dyn ScalarField = &Reciprocal { scale: 1.0 };
        let result = fourier_grid(|z| field.sample(z), 1, 4);
        assert!(matches!(result, Err(FourierError::FieldEvaluation { .. })));
    }

    #[test]
    fn ensure_finite_passes_finite_values() {
        let z = Complex64::new(1.0, -1.0);
        assert_eq!(ensure_finite(Complex64::new(0.0, 0.0), z).unwrap(), z);
        assert!(ensure_finite(Complex64::new(0.0, 0.0), Complex64::new(f64::NAN, 0.0)).is_err());
    }
}

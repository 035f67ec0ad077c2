//! Rendering coefficient maps as magnitude/phase reports.
//!
//! Each coefficient becomes a tuple `(n, m, magnitude, phase_degrees)` with
//! every component printed to three decimals, and tuples are joined by `", "`
//! in map order:
//!
//! ```text
//! (-1.000, -1.000, 0.235, 57.296), (-1.000, 0.000, 0.238, 28.648), ...
//! ```

use crate::coefficients::{Coefficient, CoefficientMap};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Magnitude/phase view of one coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoefficientRow {
    pub n: i64,
    pub m: i64,
    pub magnitude: f64,
    pub phase_degrees: f64,
}

impl From<&Coefficient> for CoefficientRow {
    fn from(c: &Coefficient) -> Self {
        Self {
            n: c.wavevector.n,
            m: c.wavevector.m,
            magnitude: c.value.norm(),
            phase_degrees: phase_degrees(c.value),
        }
    }
}

impl fmt::Display for CoefficientRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.3}, {:.3}, {:.3}, {:.3})",
            self.n as f64, self.m as f64, self.magnitude, self.phase_degrees
        )
    }
}

/// Phase angle of `z` in degrees, in `(-180, 180]`.
pub fn phase_degrees(z: Complex64) -> f64 {
    let degrees = z.arg().to_degrees();
    if degrees <= -180.0 {
        degrees + 360.0
    } else {
        degrees
    }
}

/// Magnitude/phase rows in map order.
pub fn rows(map: &CoefficientMap) -> Vec<CoefficientRow> {
    map.iter().map(CoefficientRow::from).collect()
}

/// Renders the whole map as a single comma-separated line of tuples.
pub fn format_report(map: &CoefficientMap) -> String {
    map.iter()
        .map(|c| CoefficientRow::from(c).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::fourier_grid;
    use crate::error::FourierError;
    use crate::wavevector::Wavevector;

    fn centered_square(z: Complex64) -> Result<f64, FourierError> {
        let inside = 0.25 < z.re && z.re < 0.75 && 0.25 < z.im && z.im < 0.75;
        Ok(if inside { 1.0 } else { 0.0 })
    }

    #[test]
    fn phase_of_positive_real_is_zero() {
        assert_eq!(phase_degrees(Complex64::new(2.0, 0.0)), 0.0);
    }

    #[test]
    fn phase_of_imaginary_unit_is_ninety() {
        assert!((phase_degrees(Complex64::new(0.0, 1.0)) - 90.0).abs() < 1e-12);
        assert!((phase_degrees(Complex64::new(0.0, -1.0)) + 90.0).abs() < 1e-12);
    }

    #[test]
    fn negative_real_axis_maps_to_plus_180() {
        assert!((phase_degrees(Complex64::new(-1.0, 0.0)) - 180.0).abs() < 1e-12);
        assert!((phase_degrees(Complex64::new(-1.0, -0.0)) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn row_display_uses_three_decimals_everywhere() {
        let row = CoefficientRow {
            n: -1,
            m: 2,
            magnitude: 0.123_456,
            phase_degrees: -45.0,
        };
        assert_eq!(row.to_string(), "(-1.000, 2.000, 0.123, -45.000)");
    }

    #[test]
    fn row_from_coefficient_takes_magnitude_and_phase() {
        let c = Coefficient {
            wavevector: Wavevector::new(0, 1),
            value: Complex64::new(0.0, -3.0),
        };
        let row = CoefficientRow::from(&c);
        assert_eq!((row.n, row.m), (0, 1));
        assert!((row.magnitude - 3.0).abs() < 1e-12);
        assert!((row.phase_degrees + 90.0).abs() < 1e-12);
    }

    #[test]
    fn single_entry_report_has_no_separator() {
        let map = fourier_grid(|_| Ok::<_, FourierError>(1.0), 0, 3).unwrap();
        assert_eq!(format_report(&map), "(0.000, 0.000, 1.000, 0.000)");
    }

    #[test]
    fn square_report_matches_known_output() {
        let map = fourier_grid(centered_square, 1, 100).unwrap();
        let report = format_report(&map);

        let tuples: Vec<&str> = report.split("), (").collect();
        assert_eq!(tuples.len(), 9, "report: {report}");
        assert!(report.starts_with("(-1.000, -1.000, 0.235, 57.296), "));
        assert!(report.ends_with(", (1.000, 1.000, 0.235, -57.296)"));
        assert!(report.contains("(-1.000, 0.000, 0.238, 28.648)"));
        assert!(report.contains("(0.000, 0.000, 0.240, 0.000)"));
        assert!(report.contains("(0.000, 1.000, 0.238, -28.648)"));
    }

    #[test]
    fn rows_follow_enumeration_order() {
        let map = fourier_grid(centered_square, 1, 20).unwrap();
        let order: Vec<(i64, i64)> = rows(&map).iter().map(|r| (r.n, r.m)).collect();
        assert_eq!(order[0], (-1, -1));
        assert_eq!(order[1], (-1, 0));
        assert_eq!(order[3], (0, -1));
        assert_eq!(order[8], (1, 1));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn phase_is_in_half_open_range(re in -10.0_f64..10.0, im in -10.0_f64..10.0) {
                let p = phase_degrees(Complex64::new(re, im));
                prop_assert!(p > -180.0 && p <= 180.0, "phase {p} for {re} + {im}i");
            }
        }
    }
}

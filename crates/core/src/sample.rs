//! Points of the unit square and the implicit grid of quadrature samples.
//!
//! A 2-D point is encoded as a [`Complex64`] with the real part holding `x`
//! and the imaginary part holding `y`. Field values and coefficients use the
//! same type, so the two meanings share one representation.

use crate::error::FourierError;
use num_complex::Complex64;

/// Planar dot product of two points in complex encoding: `Re(a * conj(b))`.
///
/// For `a = ax + ay i` and `b = bx + by i` this is `ax * bx + ay * by`.
pub fn complex_dot(a: Complex64, b: Complex64) -> f64 {
    (a * b.conj()).re
}

/// Uniform `S x S` grid of sample points covering `[0, 1) x [0, 1)`.
///
/// Samples are left-aligned: `x_i = i * dx` for `i in 0..S`, so the right and
/// top edges of the square are never sampled. Points are generated on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleGrid {
    samples: usize,
}

impl SampleGrid {
    /// Creates a grid with `samples` points per axis.
    ///
    /// Returns `FourierError::InvalidSampleCount` if `samples` is zero.
    pub fn new(samples: usize) -> Result<Self, FourierError> {
        if samples == 0 {
            return Err(FourierError::InvalidSampleCount(samples));
        }
        Ok(Self { samples })
    }

    /// Points per axis.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Grid spacing along either axis, `1 / S`.
    pub fn spacing(&self) -> f64 {
        1.0 / self.samples as f64
    }

    /// Area of one quadrature cell, `dx * dy`.
    pub fn cell_area(&self) -> f64 {
        let d = self.spacing();
        d * d
    }

    /// Iterates over every sample point, `y` outer and `x` inner.
    pub fn points(&self) -> impl Iterator<Item = Complex64> {
        let s = self.samples;
        let d = self.spacing();
        (0..s).flat_map(move |j| (0..s).map(move |i| Complex64::new(i as f64 * d, j as f64 * d)))
    }
}

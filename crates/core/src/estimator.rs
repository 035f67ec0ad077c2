//! Riemann-sum estimation of 2-D Fourier coefficients on the unit square.
//!
//! For a field `f` and wavevector `k = (n, m)` the estimate is
//!
//! ```text
//! c(k) = (1 / area) * sum_j sum_i f(x_i, y_j) * exp(-i * (n * x_i + m * y_j)) * dx * dy
//! ```
//!
//! over the left-aligned [`SampleGrid`]. The sum runs with `y` outer and `x`
//! inner, so repeated calls with the same inputs are bit-identical.
//!
//! Fields are plain closures `Complex64 -> Result<T, E>`. Real-valued fields
//! return `f64`, which is widened to `Complex64`. The first error a field
//! returns is passed back to the caller unchanged and aborts the estimate.

use crate::coefficients::{Coefficient, CoefficientMap};
use crate::error::FourierError;
use crate::sample::{complex_dot, SampleGrid};
use crate::wavevector::{wavevector_grid, Wavevector};
use num_complex::Complex64;
use tracing::{debug, trace};

/// Area of the integration domain.
///
/// The domain is always the unit square, so dividing by it changes nothing
/// today; it is where a non-unit lattice cell would enter the normalization.
pub const UNIT_SQUARE_AREA: f64 = 1.0;

/// Estimates the coefficient of `field` at an integer wavevector.
///
/// Returns `FourierError::InvalidSampleCount` (converted into `E`) before
/// evaluating the field if `samples` is zero.
pub fn estimate_coefficient<F, T, E>(
    field: F,
    wavevector: Wavevector,
    samples: usize,
) -> Result<Complex64, E>
where
    F: FnMut(Complex64) -> Result<T, E>,
    T: Into<Complex64>,
    E: From<FourierError>,
{
    estimate_at_frequency(field, wavevector.as_point(), samples)
}

/// Estimates the coefficient of `field` at an arbitrary angular wavevector
/// `frequency = kx + ky i`.
///
/// `(2 pi, 0)` is one full cycle across the unit interval along x.
pub fn estimate_at_frequency<F, T, E>(
    mut field: F,
    frequency: Complex64,
    samples: usize,
) -> Result<Complex64, E>
where
    F: FnMut(Complex64) -> Result<T, E>,
    T: Into<Complex64>,
    E: From<FourierError>,
{
    let grid = SampleGrid::new(samples)?;
    quadrature(&mut field, frequency, &grid)
}

/// Estimates every coefficient of the wavevector grid of `radius`.
///
/// Both arguments are validated before the field is evaluated. The first
/// field error aborts the whole grid; no partial map is returned.
pub fn fourier_grid<F, T, E>(
    mut field: F,
    radius: i64,
    samples: usize,
) -> Result<CoefficientMap, E>
where
    F: FnMut(Complex64) -> Result<T, E>,
    T: Into<Complex64>,
    E: From<FourierError>,
{
    let grid = SampleGrid::new(samples)?;
    let wavevectors = wavevector_grid(radius)?;
    debug!(
        radius,
        samples,
        wavevectors = wavevectors.len(),
        "estimating coefficient grid"
    );

    let mut entries = Vec::new();
    entries
        .try_reserve_exact(wavevectors.len())
        .map_err(|_| FourierError::RadiusTooLarge(radius))?;
    for wavevector in wavevectors {
        let value = quadrature(&mut field, wavevector.as_point(), &grid)?;
        trace!(%wavevector, re = value.re, im = value.im, "estimated coefficient");
        entries.push(Coefficient { wavevector, value });
    }

    Ok(CoefficientMap::from_ordered(radius, entries))
}

fn quadrature<F, T, E>(
    field: &mut F,
    frequency: Complex64,
    grid: &SampleGrid,
) -> Result<Complex64, E>
where
    F: FnMut(Complex64) -> Result<T, E>,
    T: Into<Complex64>,
{
    let d_area = grid.cell_area();
    let mut sum = Complex64::new(0.0, 0.0);
    for point in grid.points() {
        let value: Complex64 = field(point)?.into();
        let wave = Complex64::new(0.0, -complex_dot(frequency, point)).exp();
        sum += value * wave * d_area;
    }
    Ok(sum / UNIT_SQUARE_AREA)
}

//! Integer wavevectors and their enumeration over a square radius.

use crate::error::FourierError;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A spatial frequency `(n, m)` along the x and y axes.
///
/// Components act as angular frequencies: the phase at point `(x, y)` is
/// `n * x + m * y`, not `2 pi (n * x + m * y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Wavevector {
    pub n: i64,
    pub m: i64,
}

impl Wavevector {
    pub const ZERO: Wavevector = Wavevector { n: 0, m: 0 };

    pub fn new(n: i64, m: i64) -> Self {
        Self { n, m }
    }

    /// The wavevector in complex point encoding, `n + m i`.
    pub fn as_point(&self) -> Complex64 {
        Complex64::new(self.n as f64, self.m as f64)
    }
}

impl fmt::Display for Wavevector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.n, self.m)
    }
}

/// Number of wavevectors in the grid of the given radius, `(2R + 1)^2`.
///
/// Returns `FourierError::NegativeRadius` for `R < 0` and
/// `FourierError::RadiusTooLarge` if the count overflows `usize`.
pub fn grid_len(radius: i64) -> Result<usize, FourierError> {
    let side = grid_side(radius)?;
    side.checked_mul(side).ok_or(FourierError::RadiusTooLarge(radius))
}

/// Position of `wavevector` in the enumeration order of [`wavevector_grid`],
/// or `None` if it lies outside the radius.
pub fn grid_index(wavevector: Wavevector, radius: i64) -> Option<usize> {
    if radius < 0 {
        return None;
    }
    let in_range = |c: i64| (-radius..=radius).contains(&c);
    if !in_range(wavevector.n) || !in_range(wavevector.m) {
        return None;
    }
    let side = grid_side(radius).ok()?;
    let row = usize::try_from(wavevector.n + radius).ok()?;
    let col = usize::try_from(wavevector.m + radius).ok()?;
    row.checked_mul(side)?.checked_add(col)
}

/// All wavevectors with `n, m` in `[-R, R]`, `n` outer and `m` inner.
///
/// The result has `(2R + 1)^2` entries and depends only on `radius`. A grid
/// whose storage cannot be reserved fails with `FourierError::RadiusTooLarge`.
pub fn wavevector_grid(radius: i64) -> Result<Vec<Wavevector>, FourierError> {
    let len = grid_len(radius)?;
    let mut grid = Vec::new();
    grid.try_reserve_exact(len).map_err(|_| FourierError::RadiusTooLarge(radius))?;
    for n in -radius..=radius {
        for m in -radius..=radius {
            grid.push(Wavevector::new(n, m));
        }
    }
    Ok(grid)
}

/// Side length `2R + 1` of the square grid.
fn grid_side(radius: i64) -> Result<usize, FourierError> {
    if radius < 0 {
        return Err(FourierError::NegativeRadius(radius));
    }
    radius
        .checked_mul(2)
        .and_then(|d| d.checked_add(1))
        .and_then(|s| usize::try_from(s).ok())
        .ok_or(FourierError::RadiusTooLarge(radius))
}

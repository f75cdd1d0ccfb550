//! 2D separable transform and grid utilities.
//!
//! The 2D DFT factors into a 1D pass over every row followed by a 1D pass
//! over every column. Both passes run the *unscaled* kernel; for the
//! inverse direction a single global `1/(rows*cols)` is applied after both
//! passes complete, so no axis is ever divided twice.
//!
//! Also home to the real<->complex grid conversions and the spectrum-shift
//! helpers used by the high-pass blur pipeline.

use ndarray::{Array2, ArrayView2, Axis};
use num_complex::Complex;
use rayon::prelude::*;

use crate::error::FourierError;
use crate::fft::{transform_1d_unscaled, Direction};
use crate::float_trait::FourierFloat;

/// Row/column count at which a pass switches to rayon.
/// Set high enough that small grids skip the fork-join overhead.
const PARALLEL_LANE_THRESHOLD: usize = 64;

/// Which pass of a 2D transform just completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassKind {
    Rows,
    Columns,
}

/// Observer invoked after each pass of a 2D transform completes.
///
/// Receives the pass kind and the number of lanes transformed. Purely a
/// side channel for long-running transforms: it cannot alter numeric
/// results.
pub type PassObserver<'a> = &'a (dyn Fn(PassKind, usize) + Sync);

/// Compute the 2D DFT of `grid` in place.
///
/// Rows within a pass are independent and run in parallel for large grids;
/// the column pass starts only after every row completes. Empty grids are
/// a no-op. See [`crate::fft::transform_1d`] for the per-axis dispatch
/// rule (non-power-of-two axes route to Bluestein, so output dimensions
/// always equal input dimensions).
pub fn transform_2d<F: FourierFloat>(grid: &mut Array2<Complex<F>>, direction: Direction) {
    transform_2d_observed(grid, direction, None);
}

/// [`transform_2d`] with an optional per-pass progress observer.
pub fn transform_2d_observed<F: FourierFloat>(
    grid: &mut Array2<Complex<F>>,
    direction: Direction,
    observer: Option<PassObserver<'_>>,
) {
    let (rows, cols) = grid.dim();
    if rows == 0 || cols == 0 {
        return;
    }

    // 1. Transform rows
    if rows >= PARALLEL_LANE_THRESHOLD {
        let lanes: Vec<_> = grid.axis_iter_mut(Axis(0)).collect();
        lanes.into_par_iter().for_each(|mut row| {
            let buf = row.as_slice_mut().expect("row-major grid rows are contiguous");
            transform_1d_unscaled(buf, direction);
        });
    } else {
        for mut row in grid.axis_iter_mut(Axis(0)) {
            let buf = row.as_slice_mut().expect("row-major grid rows are contiguous");
            transform_1d_unscaled(buf, direction);
        }
    }
    if let Some(notify) = observer {
        notify(PassKind::Rows, rows);
    }

    // 2. Transform columns through a scratch buffer
    if cols >= PARALLEL_LANE_THRESHOLD {
        let transformed: Vec<Vec<Complex<F>>> = (0..cols)
            .into_par_iter()
            .map(|c| {
                let mut col_vec: Vec<Complex<F>> = (0..rows).map(|r| grid[[r, c]]).collect();
                transform_1d_unscaled(&mut col_vec, direction);
                col_vec
            })
            .collect();
        for (c, col_vec) in transformed.into_iter().enumerate() {
            for (r, value) in col_vec.into_iter().enumerate() {
                grid[[r, c]] = value;
            }
        }
    } else {
        let mut col_vec = vec![Complex::new(F::zero(), F::zero()); rows];
        for c in 0..cols {
            for r in 0..rows {
                col_vec[r] = grid[[r, c]];
            }
            transform_1d_unscaled(&mut col_vec, direction);
            for r in 0..rows {
                grid[[r, c]] = col_vec[r];
            }
        }
    }
    if let Some(notify) = observer {
        notify(PassKind::Columns, cols);
    }

    // 3. Single global normalization for the inverse direction
    if direction == Direction::Inverse {
        let scale = F::one() / F::usize_as(rows * cols);
        grid.mapv_inplace(|v| v.scale(scale));
    }
}

/// Build a complex grid from rows of real samples, imaginary parts zero.
///
/// Fails with `InvalidDimensions` when the rows are ragged.
pub fn from_real_samples<F: FourierFloat>(
    samples: &[Vec<F>],
) -> Result<Array2<Complex<F>>, FourierError> {
    let rows = samples.len();
    let cols = samples.first().map_or(0, Vec::len);
    for (r, row) in samples.iter().enumerate() {
        if row.len() != cols {
            return Err(FourierError::InvalidDimensions {
                detail: format!("row {} has {} samples, expected {}", r, row.len(), cols),
            });
        }
    }

    let mut grid = Array2::from_elem((rows, cols), Complex::new(F::zero(), F::zero()));
    for (r, row) in samples.iter().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            grid[[r, c]] = Complex::new(v, F::zero());
        }
    }
    Ok(grid)
}

/// Build a complex grid from an already-shaped real array.
pub fn grid_from_real<F: FourierFloat>(samples: ArrayView2<F>) -> Array2<Complex<F>> {
    samples.mapv(|v| Complex::new(v, F::zero()))
}

/// Extract the real components, for display or reconstruction.
pub fn to_real_samples<F: FourierFloat>(grid: &Array2<Complex<F>>) -> Array2<F> {
    grid.mapv(|v| v.re)
}

/// Swap quadrants so the DC bin moves to the grid center.
pub fn fftshift_2d<F: FourierFloat>(grid: &Array2<Complex<F>>) -> Array2<Complex<F>> {
    let (rows, cols) = grid.dim();
    if rows == 0 || cols == 0 {
        return grid.clone();
    }
    Array2::from_shape_fn((rows, cols), |(r, c)| {
        grid[[(r + rows.div_ceil(2)) % rows, (c + cols.div_ceil(2)) % cols]]
    })
}

/// Undo [`fftshift_2d`]. Distinct from it for odd dimensions.
pub fn ifftshift_2d<F: FourierFloat>(grid: &Array2<Complex<F>>) -> Array2<Complex<F>> {
    let (rows, cols) = grid.dim();
    if rows == 0 || cols == 0 {
        return grid.clone();
    }
    Array2::from_shape_fn((rows, cols), |(r, c)| {
        grid[[(r + rows / 2) % rows, (c + cols / 2) % cols]]
    })
}

/// Zero a centered block of a *shifted* spectrum, removing the lowest
/// frequencies. The block half-extent per axis is `dimension *
/// radius_fraction`. Returns the number of bins cleared.
pub fn suppress_low_frequencies<F: FourierFloat>(
    shifted: &mut Array2<Complex<F>>,
    radius_fraction: f64,
) -> usize {
    let (rows, cols) = shifted.dim();
    if rows == 0 || cols == 0 {
        return 0;
    }

    let half_r = (rows as f64 * radius_fraction) as usize;
    let half_c = (cols as f64 * radius_fraction) as usize;
    let center_r = rows / 2;
    let center_c = cols / 2;

    let r0 = center_r.saturating_sub(half_r);
    let r1 = (center_r + half_r + 1).min(rows);
    let c0 = center_c.saturating_sub(half_c);
    let c1 = (center_c + half_c + 1).min(cols);

    let zero = Complex::new(F::zero(), F::zero());
    let mut cleared = 0;
    for r in r0..r1 {
        for c in c0..c1 {
            shifted[[r, c]] = zero;
            cleared += 1;
        }
    }
    cleared
}

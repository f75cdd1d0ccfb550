//! Blur classification from frequency-domain energy.
//!
//! Two scores are provided:
//! - [`blur_score`]: the ratio of high-frequency to total spectral energy.
//!   A sharp image carries detail in the high bins; a blurry one does not,
//!   so a low ratio means blurry.
//! - [`detail_score`]: mean log-magnitude of a high-pass reconstruction
//!   (higher = sharper), the figure the shift/suppress pipeline in
//!   [`crate::transforms`] feeds.
//!
//! Both are pure functions over magnitudes; neither depends on how the
//! spectrum was computed.

use ndarray::Array2;
use num_complex::Complex;

use crate::error::FourierError;
use crate::float_trait::{checked_div, FourierFloat};

/// Default high-frequency cutoff as a fraction of each grid dimension.
const DEFAULT_CUTOFF_FRACTION: f64 = 0.2;

/// Default blur decision threshold on the energy ratio.
const DEFAULT_THRESHOLD: f64 = 0.2;

/// Magnitude floor applied before the logarithm in [`detail_score`].
/// A single zero-magnitude cell would otherwise drag the mean to -inf.
const LOG_MAGNITUDE_FLOOR: f64 = 1e-12;

/// Tunable knobs for the blur classifier.
///
/// Neither value is baked into the computation; the defaults match the
/// conventional `dimension / 5` cutoff and a 0.2 ratio threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlurConfig<F: FourierFloat> {
    /// High-frequency cutoff per axis, as a fraction of that dimension.
    /// A cell counts as high-frequency only when *both* its indices
    /// exceed their cutoff.
    pub cutoff_fraction: F,
    /// `is_blurry` when the energy ratio falls below this value.
    pub threshold: F,
}

impl<F: FourierFloat> Default for BlurConfig<F> {
    fn default() -> Self {
        Self {
            cutoff_fraction: F::from_f64_c(DEFAULT_CUTOFF_FRACTION),
            threshold: F::from_f64_c(DEFAULT_THRESHOLD),
        }
    }
}

impl<F: FourierFloat> BlurConfig<F> {
    pub fn new(cutoff_fraction: F, threshold: F) -> Self {
        Self {
            cutoff_fraction,
            threshold,
        }
    }
}

/// Result of scoring one spectrum. Computed per invocation, never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlurScore<F: FourierFloat> {
    /// Ratio of high-frequency to total energy, in `[0, 1]`.
    pub score: F,
    /// Whether `score` fell below the configured threshold.
    pub is_blurry: bool,
}

/// Score the blurriness of a frequency-domain grid.
///
/// `score = highFreqEnergy / totalEnergy`, where the high-frequency region
/// is every cell whose row *and* column index exceed
/// `dimension * cutoff_fraction`.
///
/// Fails with `InvalidDimensions` on an empty grid and `DegenerateInput`
/// when the total energy is zero (an all-zero spectrum has no ratio; it
/// must never be reported as NaN).
pub fn blur_score<F: FourierFloat>(
    grid: &Array2<Complex<F>>,
    config: &BlurConfig<F>,
) -> Result<BlurScore<F>, FourierError> {
    let (rows, cols) = grid.dim();
    if rows == 0 || cols == 0 {
        return Err(FourierError::InvalidDimensions {
            detail: format!("cannot score a {}x{} grid", rows, cols),
        });
    }

    let fraction = config
        .cutoff_fraction
        .to_f64()
        .unwrap_or(DEFAULT_CUTOFF_FRACTION);
    let cutoff_y = (rows as f64 * fraction) as usize;
    let cutoff_x = (cols as f64 * fraction) as usize;

    let mut total = F::zero();
    let mut high = F::zero();
    for ((y, x), value) in grid.indexed_iter() {
        let magnitude = value.norm();
        total += magnitude;
        if y > cutoff_y && x > cutoff_x {
            high += magnitude;
        }
    }

    if total == F::zero() {
        return Err(FourierError::DegenerateInput {
            detail: "zero total spectral energy",
        });
    }

    let score = high / total;
    Ok(BlurScore {
        score,
        is_blurry: score < config.threshold,
    })
}

/// Mean of `20 * ln|v|` over a reconstruction grid.
///
/// This is the sharpness figure of the classic high-pass pipeline: forward
/// transform, shift, suppress the centered low frequencies, unshift,
/// inverse transform, then score the surviving detail. Higher means
/// sharper. Magnitudes are floored at 1e-12 before the logarithm.
///
/// Fails with `InvalidDimensions` on an empty grid and `DegenerateInput`
/// when every magnitude is zero (a completely black reconstruction).
pub fn detail_score<F: FourierFloat>(grid: &Array2<Complex<F>>) -> Result<F, FourierError> {
    let (rows, cols) = grid.dim();
    if rows == 0 || cols == 0 {
        return Err(FourierError::InvalidDimensions {
            detail: format!("cannot score a {}x{} grid", rows, cols),
        });
    }

    let floor = F::from_f64_c(LOG_MAGNITUDE_FLOOR);
    let twenty = F::from_f64_c(20.0);

    let mut acc = F::zero();
    let mut max_magnitude = F::zero();
    for value in grid.iter() {
        let magnitude = value.norm();
        max_magnitude = max_magnitude.max(magnitude);
        acc += twenty * magnitude.max(floor).ln();
    }

    if max_magnitude == F::zero() {
        return Err(FourierError::DegenerateInput {
            detail: "completely black reconstruction",
        });
    }

    checked_div(acc, F::usize_as(rows * cols))
}

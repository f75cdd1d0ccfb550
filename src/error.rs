//! Error types for the transform engine and blur metric.

use thiserror::Error;

/// Errors surfaced by the transform engine and the blur metric.
///
/// All variants are local, recoverable conditions: the engine is
/// deterministic and side-effect-free, so a failed call simply produces no
/// result. Non-power-of-two lengths are *not* errors; they route to the
/// Bluestein path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FourierError {
    /// Scalar division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Input whose total energy is zero, e.g. an all-black image. Scoring
    /// it would produce NaN, which must never leak to callers.
    #[error("degenerate input: {detail}")]
    DegenerateInput {
        /// What was degenerate about the input.
        detail: &'static str,
    },

    /// Mismatched row lengths in a grid, or an otherwise unusable shape.
    #[error("invalid dimensions: {detail}")]
    InvalidDimensions {
        /// Which dimension constraint was violated.
        detail: String,
    },
}

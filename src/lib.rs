//! Fourier Blur-Detection Core Library
//!
//! Pure Rust implementation of a discrete Fourier transform engine
//! (iterative radix-2 Cooley-Tukey for power-of-two lengths, Bluestein's
//! chirp transform for everything else) and a blur metric built on the
//! distribution of spectral energy. This crate contains the transform and
//! scoring logic only; image decoding, display and mask post-processing
//! live with the caller.

pub mod blur;
pub mod error;
pub mod fft;
pub mod float_trait;
pub mod transforms;

// Re-export commonly used types at the crate root
pub use blur::{blur_score, detail_score, BlurConfig, BlurScore};
pub use error::FourierError;
pub use fft::{transform_1d, Direction};
pub use float_trait::{checked_div, FourierFloat};
pub use transforms::{
    fftshift_2d, from_real_samples, grid_from_real, ifftshift_2d, suppress_low_frequencies,
    to_real_samples, transform_2d, transform_2d_observed, PassKind, PassObserver,
};

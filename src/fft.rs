//! 1D discrete Fourier transform kernel.
//!
//! Two algorithms live here, selected deterministically by length:
//! - power-of-two lengths run an iterative in-place radix-2 Cooley-Tukey
//!   (bit-reversal permutation followed by a length-doubling butterfly
//!   network), with no per-call allocation;
//! - every other length runs Bluestein's chirp transform, which expresses
//!   the DFT as a convolution computed via two zero-padded power-of-two
//!   FFTs plus a pointwise multiply. Correct for any `n >= 1` at the cost
//!   of the padded length's extra work.
//!
//! The forward transform is a raw-sum DFT (no scaling). The inverse applies
//! a single `1/n` after the butterfly stages complete — never per stage.

use num_complex::Complex;

use crate::float_trait::FourierFloat;

/// Transform direction.
///
/// Forward uses twiddle factors `e^{-2*pi*i*k/len}`, Inverse uses the
/// positive sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Inverse,
}

/// Compute the DFT of `signal` in place.
///
/// Dispatch rule: a power-of-two length runs the radix-2 path, any other
/// length runs the Bluestein path. The choice is made once per call and
/// never changes the result, only the work done to get there.
///
/// `Direction::Inverse` divides the whole result by `n` exactly once after
/// the transform completes. An empty signal is a no-op and a length-1
/// signal is its own transform.
pub fn transform_1d<F: FourierFloat>(signal: &mut [Complex<F>], direction: Direction) {
    let n = signal.len();
    if n <= 1 {
        return;
    }

    transform_1d_unscaled(signal, direction);

    if direction == Direction::Inverse {
        let scale = F::one() / F::usize_as(n);
        for value in signal.iter_mut() {
            *value = value.scale(scale);
        }
    }
}

/// Unscaled transform: raw DFT sums in both directions.
///
/// The 2D engine uses this directly so it can apply its own single global
/// `1/(rows*cols)` instead of one `1/n` per axis.
pub(crate) fn transform_1d_unscaled<F: FourierFloat>(
    signal: &mut [Complex<F>],
    direction: Direction,
) {
    let n = signal.len();
    if n <= 1 {
        return;
    }

    if n.is_power_of_two() {
        radix2_in_place(signal, direction);
    } else {
        match direction {
            Direction::Forward => bluestein_forward(signal),
            Direction::Inverse => {
                // Unscaled inverse via the conjugation identity:
                // idft(x) * n = conj(dft(conj(x)))
                for value in signal.iter_mut() {
                    *value = value.conj();
                }
                bluestein_forward(signal);
                for value in signal.iter_mut() {
                    *value = value.conj();
                }
            }
        }
    }
}

/// Swap each element with its bit-reversed index, once per pair.
///
/// Only `i < j` pairs are swapped, so no element moves twice. Required
/// before the in-place length-doubling butterfly loop.
fn bit_reverse_permute<F: FourierFloat>(buf: &mut [Complex<F>]) {
    let n = buf.len();
    let bits = n.trailing_zeros();
    for i in 0..n {
        let j = i.reverse_bits() >> (usize::BITS - bits);
        if i < j {
            buf.swap(i, j);
        }
    }
}

/// Iterative in-place radix-2 Cooley-Tukey. `buf.len()` must be a power of
/// two. Leaves the result unscaled in both directions.
fn radix2_in_place<F: FourierFloat>(buf: &mut [Complex<F>], direction: Direction) {
    let n = buf.len();
    debug_assert!(n.is_power_of_two());
    if n <= 1 {
        return;
    }

    bit_reverse_permute(buf);

    let sign = match direction {
        Direction::Forward => -F::one(),
        Direction::Inverse => F::one(),
    };
    let two = F::from_f64_c(2.0);

    let mut len = 2;
    while len <= n {
        let angle = sign * two * F::PI / F::usize_as(len);
        let w_len = Complex::new(angle.cos(), angle.sin());
        let half = len / 2;

        for start in (0..n).step_by(len) {
            let mut w = Complex::new(F::one(), F::zero());
            for k in 0..half {
                let u = buf[start + k];
                let v = buf[start + k + half] * w;
                buf[start + k] = u + v;
                buf[start + k + half] = u - v;
                w *= w_len;
            }
        }
        len <<= 1;
    }
}

/// Chirp sequence `c_i = e^{i*pi*i^2/n}` for `i = 0..n`.
///
/// The exponent is reduced modulo `2n` before the trig call: `e^{i*pi*m/n}`
/// is periodic in `m` with period `2n`, and `i*i` overwhelms the float
/// mantissa long before `i*i mod 2n` does.
fn chirp_sequence<F: FourierFloat>(n: usize) -> Vec<Complex<F>> {
    let n_f = F::usize_as(n);
    (0..n)
        .map(|i| {
            let reduced = (i * i) % (2 * n);
            let angle = F::PI * F::usize_as(reduced) / n_f;
            Complex::new(angle.cos(), angle.sin())
        })
        .collect()
}

/// Bluestein's algorithm: forward DFT of arbitrary length as a convolution.
///
/// With chirp `c`, the DFT becomes `X_k = conj(c_k) * sum_i (x_i *
/// conj(c_i)) * c_{k-i}` — a circular convolution of `a_i = x_i * conj(c_i)`
/// with `b_i = c_i`, evaluated through length-`L` radix-2 FFTs where
/// `L = 2^ceil(log2(2n+1))`. The chirp has unit magnitude, so division by
/// `c_i` is multiplication by its conjugate.
fn bluestein_forward<F: FourierFloat>(signal: &mut [Complex<F>]) {
    let n = signal.len();
    let l = (2 * n + 1).next_power_of_two();
    let chirp = chirp_sequence::<F>(n);

    let zero = Complex::new(F::zero(), F::zero());
    let mut a = vec![zero; l];
    let mut b = vec![zero; l];

    a[0] = signal[0] * chirp[0].conj();
    b[0] = chirp[0];
    for i in 1..n {
        a[i] = signal[i] * chirp[i].conj();
        // b must be symmetric around index 0 (mod L) to realize the
        // c_{k-i} term for negative k-i.
        b[i] = chirp[i];
        b[l - i] = chirp[i];
    }

    radix2_in_place(&mut a, Direction::Forward);
    radix2_in_place(&mut b, Direction::Forward);
    for (ai, bi) in a.iter_mut().zip(b.iter()) {
        *ai *= *bi;
    }
    radix2_in_place(&mut a, Direction::Inverse);

    // The padded inverse pass above is unscaled; fold its 1/L in here.
    let scale = F::one() / F::usize_as(l);
    for (out, (conv, c)) in signal.iter_mut().zip(a.iter().zip(chirp.iter())) {
        *out = conv.scale(scale) * c.conj();
    }
}

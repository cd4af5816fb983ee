//! Full-circle twiddle vectors.

use alloc::vec::Vec;

use crate::num::Complex64;

/// Interleaved twiddle factors `[cos θ₀, sin θ₀, cos θ₁, sin θ₁, ...]` with
/// `θₖ = 2πk/n` for `k` in `0..n`.
///
/// The sign convention is positive; the consuming kernels conjugate as
/// needed. `n == 0` yields an empty vector.
pub fn twiddle(n: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(2 * n);
    for k in 0..n {
        let w = Complex64::root_of_unity(k, n);
        out.push(w.re);
        out.push(w.im);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size::TransformSize;
    use core::f64::consts::PI;

    #[test]
    fn interleaves_cos_and_sin() {
        for size in TransformSize::ALL {
            let n = size.len();
            let tw = twiddle(n);
            assert_eq!(tw.len(), 2 * n);
            for k in 0..n {
                let theta = 2.0 * PI * k as f64 / n as f64;
                assert!((tw[2 * k] - libm::cos(theta)).abs() < 1e-15, "cos k={k} n={n}");
                assert!((tw[2 * k + 1] - libm::sin(theta)).abs() < 1e-15, "sin k={k} n={n}");
            }
        }
    }

    #[test]
    fn quarter_turns_land_on_axes() {
        let tw = twiddle(16);
        // k = 4 is a quarter turn
        assert!(tw[8].abs() < 1e-15);
        assert!((tw[9] - 1.0).abs() < 1e-15);
        // k = 8 is a half turn
        assert!((tw[16] + 1.0).abs() < 1e-15);
        assert!(tw[17].abs() < 1e-15);
    }

    #[test]
    fn empty_for_zero() {
        assert!(twiddle(0).is_empty());
    }
}

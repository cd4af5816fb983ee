use core::f64::consts::PI;

/// Double-precision complex value stored as `(re, im)`.
///
/// The layout matches the interleaved `[cos, sin]` pairs written into the
/// generated tables, so a slice of `Complex64` and a slice of twice as many
/// `f64` describe the same data.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex64 {
    pub re: f64,
    pub im: f64,
}

impl Complex64 {
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    pub const fn zero() -> Self {
        Self { re: 0.0, im: 0.0 }
    }

    /// `cos(theta) + i·sin(theta)`.
    ///
    /// With `std` this uses the platform math library, the same one the
    /// shipped tables were generated with, so the printed literals agree to
    /// the last digit. `no_std` builds fall back to `libm`, which can differ
    /// in the final bit.
    #[cfg(feature = "std")]
    #[inline(always)]
    pub fn expi(theta: f64) -> Self {
        Self {
            re: f64::cos(theta),
            im: f64::sin(theta),
        }
    }

    #[cfg(not(feature = "std"))]
    #[inline(always)]
    pub fn expi(theta: f64) -> Self {
        Self {
            re: libm::cos(theta),
            im: libm::sin(theta),
        }
    }

    /// Positive-angle root of unity `exp(2πi·k/n)`.
    ///
    /// The angle is formed as `((2π)·k)/n`. Keeping that association order
    /// makes the low bits agree with tables produced by vectorised
    /// generators that scale a `0..n` ramp by `2π` before dividing by `n`.
    #[inline]
    pub fn root_of_unity(k: usize, n: usize) -> Self {
        let theta = 2.0 * PI * k as f64 / n as f64;
        Self::expi(theta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expi_quadrants() {
        let one = Complex64::expi(0.0);
        assert_eq!(one, Complex64::new(1.0, 0.0));
        let i = Complex64::expi(PI / 2.0);
        assert!(i.re.abs() < 1e-15);
        assert!((i.im - 1.0).abs() < 1e-15);
        let minus_one = Complex64::expi(PI);
        assert!((minus_one.re + 1.0).abs() < 1e-15);
        assert!(minus_one.im.abs() < 1e-15);
    }

    #[test]
    fn root_of_unity_is_on_unit_circle() {
        for n in [16usize, 64, 256] {
            for k in 0..n {
                let w = Complex64::root_of_unity(k, n);
                let mag = w.re * w.re + w.im * w.im;
                assert!((mag - 1.0).abs() < 1e-12, "|w|^2 = {mag} at k={k} n={n}");
            }
        }
    }

    #[test]
    fn root_of_unity_zero_is_exact() {
        assert_eq!(Complex64::root_of_unity(0, 4096), Complex64::new(1.0, 0.0));
    }
}

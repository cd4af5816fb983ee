//! Supported transform lengths and their radix-4 stage layout.
//!
//! The MVE kernels only ship tables for powers of four between 16 and 4096.
//! Each length fixes how many radix-4 stages the kernel runs and how many
//! complex coefficients every stride table holds, so both are looked up here
//! instead of being derived at the call site.

use core::fmt;

use crate::error::TwiddleError;

/// Transform length with a precomputed rearranged twiddle table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TransformSize {
    N16,
    N64,
    N256,
    N1024,
    N4096,
}

impl TransformSize {
    /// Every supported length, in the order the tables are emitted.
    pub const ALL: [TransformSize; 5] = [
        TransformSize::N16,
        TransformSize::N64,
        TransformSize::N256,
        TransformSize::N1024,
        TransformSize::N4096,
    ];

    /// Number of complex points `n`.
    pub const fn len(self) -> usize {
        match self {
            TransformSize::N16 => 16,
            TransformSize::N64 => 64,
            TransformSize::N256 => 256,
            TransformSize::N1024 => 1024,
            TransformSize::N4096 => 4096,
        }
    }

    /// Radix-4 stage count; also the length of each offset table.
    pub const fn num_stages(self) -> usize {
        match self {
            TransformSize::N16 => 2,
            TransformSize::N64 => 3,
            TransformSize::N256 => 4,
            TransformSize::N1024 => 5,
            TransformSize::N4096 => 6,
        }
    }

    /// Complex coefficients per stride table: `n/4 + n/16 + ... + 4`.
    pub const fn array_size(self) -> usize {
        match self {
            TransformSize::N16 => 4,
            TransformSize::N64 => 20,
            TransformSize::N256 => 84,
            TransformSize::N1024 => 340,
            TransformSize::N4096 => 1364,
        }
    }
}

impl TryFrom<usize> for TransformSize {
    type Error = TwiddleError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        TransformSize::ALL
            .iter()
            .copied()
            .find(|size| size.len() == n)
            .ok_or(TwiddleError::UnsupportedSize(n))
    }
}

impl fmt::Display for TransformSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_accepts_every_supported_length() {
        for size in TransformSize::ALL {
            assert_eq!(TransformSize::try_from(size.len()).unwrap(), size);
        }
    }

    #[test]
    fn lookup_rejects_other_lengths() {
        for n in [0usize, 4, 8, 32, 128, 512, 2048, 8192, 16384] {
            match TransformSize::try_from(n) {
                Err(TwiddleError::UnsupportedSize(m)) => assert_eq!(m, n),
                other => panic!("expected UnsupportedSize for {n}, got {other:?}"),
            }
        }
    }

    #[test]
    fn array_size_matches_geometric_stage_sum() {
        for size in TransformSize::ALL {
            let mut remaining = size.len();
            let mut total = 0;
            for _ in 0..size.num_stages() - 1 {
                remaining /= 4;
                total += remaining;
            }
            assert_eq!(total, size.array_size(), "n = {size}");
        }
    }

    #[test]
    fn sizes_are_ascending() {
        assert!(TransformSize::ALL.windows(2).all(|w| w[0] < w[1]));
        assert!(TransformSize::ALL
            .windows(2)
            .all(|w| w[0].len() < w[1].len()));
    }
}

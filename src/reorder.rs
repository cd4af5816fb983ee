//! Stage-major rearrangement of a twiddle vector for the radix-4 kernels.
//!
//! A radix-4 decimation stage with `m` butterflies needs `W^k`, `W^2k` and
//! `W^3k` for `k` in `0..m`, where `W` is the stage's base root of unity.
//! Rather than striding through the full-circle table at run time, the MVE
//! kernels read three contiguous tables, one per multiplier, holding the
//! coefficients of every stage back to back. The offset tables give the
//! starting index of each stage inside those tables.
//!
//! Stage `s` covers `n / 4^(s+1)` butterflies with base increment `4^s`,
//! so stride table `K` receives entries `K·i·4^s` of the twiddle vector.
//! Only `num_stages - 1` stages carry coefficients; the last offset slot is
//! left at zero and is part of the shipped table format.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::TwiddleError;
use crate::size::TransformSize;
use crate::twiddle::twiddle;

/// Multipliers of the three stride tables, in emission order.
pub const STRIDES: [usize; 3] = [1, 2, 3];

/// Rearranged coefficients and per-stage offsets for one transform size.
#[derive(Debug, Clone, PartialEq)]
pub struct StrideTables {
    pub size: TransformSize,
    /// Interleaved `(re, im)` coefficients, `2 * array_size` reals per table,
    /// indexed like [`STRIDES`].
    pub coefficients: [Vec<f64>; 3],
    /// Start of each stage inside the matching coefficient table, counted in
    /// reals. Length is `num_stages`; the last entry is always zero.
    pub offsets: [Vec<u32>; 3],
}

impl StrideTables {
    /// Compute the twiddle vector for `size` and rearrange it.
    pub fn new(size: TransformSize) -> Self {
        let coefs = twiddle(size.len());
        rearrange_unchecked(&coefs, size)
    }

    /// Coefficients of stage `stage` in stride table `table` (0-based).
    ///
    /// The unwritten final stage yields an empty slice. `None` if `table` is
    /// not below 3 or `stage` is not below `num_stages`.
    pub fn stage(&self, table: usize, stage: usize) -> Option<&[f64]> {
        let offsets = self.offsets.get(table)?;
        let coefficients = &self.coefficients[table];
        let last_written = self.size.num_stages() - 1;
        if stage > last_written {
            return None;
        }
        if stage == last_written {
            return Some(&[]);
        }
        let start = offsets[stage] as usize;
        let end = if stage + 1 < last_written {
            offsets[stage + 1] as usize
        } else {
            coefficients.len()
        };
        coefficients.get(start..end)
    }
}

/// Rearrange an interleaved twiddle vector into the three stride tables.
///
/// `coefs` must hold `2 * size.len()` reals, as produced by
/// [`twiddle`](crate::twiddle::twiddle).
pub fn rearrange(coefs: &[f64], size: TransformSize) -> Result<StrideTables, TwiddleError> {
    let expected = 2 * size.len();
    if coefs.len() != expected {
        return Err(TwiddleError::LengthMismatch {
            expected,
            actual: coefs.len(),
        });
    }
    Ok(rearrange_unchecked(coefs, size))
}

fn rearrange_unchecked(coefs: &[f64], size: TransformSize) -> StrideTables {
    let num_stages = size.num_stages();
    let table_len = 2 * size.array_size();

    let mut coefficients = [
        vec![0.0f64; table_len],
        vec![0.0f64; table_len],
        vec![0.0f64; table_len],
    ];
    let mut offsets = [
        vec![0u32; num_stages],
        vec![0u32; num_stages],
        vec![0u32; num_stages],
    ];
    let mut cursor = [0usize; 3];

    let mut incr = 1usize;
    let mut remaining = size.len();

    for stage in 0..num_stages - 1 {
        remaining >>= 2;
        let mut read = [0usize; 3];

        for t in 0..3 {
            offsets[t][stage] = cursor[t] as u32;
        }

        for _ in 0..remaining {
            for (t, &stride) in STRIDES.iter().enumerate() {
                let dst = cursor[t];
                let src = read[t];
                coefficients[t][dst] = coefs[src];
                coefficients[t][dst + 1] = coefs[src + 1];
                cursor[t] += 2;
                read[t] += incr * stride * 2;
            }
        }

        log::trace!(
            "n={} stage {} holds {} coefficients per table",
            size,
            stage,
            remaining
        );
        incr *= 4;
    }

    debug_assert!(cursor.iter().all(|&c| c == table_len));

    StrideTables {
        size,
        coefficients,
        offsets,
    }
}

use alloc::vec::Vec;
use num_complex::Complex64;

use crate::common::FftError;
use crate::kernel::precompute_twiddles;

/// Cosine/sine lookup tables for one transform length N.
///
/// Holds `N/2` entries each, `cos[i] = cos(-2πi/N)` and `sin[i] = sin(-2πi/N)`.
/// A table is either empty (never configured) or complete for its N.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TwiddleTable {
    n: usize,
    m: u32,
    cos: Vec<f64>,
    sin: Vec<f64>,
}

impl TwiddleTable {
    /// Builds the table for length `n`.
    pub fn new(n: usize) -> Result<Self, FftError> {
        if !n.is_power_of_two() {
            return Err(FftError::NotPowerOfTwo);
        }

        let mut cos = alloc::vec![0.0; n / 2];
        let mut sin = alloc::vec![0.0; n / 2];
        precompute_twiddles(&mut cos, &mut sin, n);

        Ok(Self {
            n,
            m: n.trailing_zeros(),
            cos,
            sin,
        })
    }

    /// Transform length N, or 0 for an empty table.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Number of butterfly stages, `log2(N)`.
    pub fn log2_len(&self) -> u32 {
        self.m
    }

    pub fn cos(&self) -> &[f64] {
        &self.cos
    }

    pub fn sin(&self) -> &[f64] {
        &self.sin
    }

    /// Twiddle factor `e^(-2πi·k/N)` for `k < N/2`.
    pub fn factor(&self, k: usize) -> Option<Complex64> {
        Some(Complex64::new(*self.cos.get(k)?, *self.sin.get(k)?))
    }
}

#[cfg(test)]
#[path = "twiddle_tests.rs"]
mod tests;

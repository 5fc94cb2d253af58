use num_complex::Complex64;
use tracing::{debug, trace};

use crate::common::{FftError, FftProcess};
use crate::kernel::{radix_2_dit_fft_core, radix_2_dit_fft_cplx};
use crate::twiddle::TwiddleTable;

/// Forward, unnormalized radix-2 FFT engine.
///
/// Owns the twiddle table for its current length and reuses it across
/// calls; the table is rebuilt only when [`Fft::configure`] is given a
/// different length. Each caller should own its engine, or serialize
/// access to a shared one (see `SharedFft`).
#[derive(Debug, Clone, Default)]
pub struct Fft {
    table: TwiddleTable,
}

impl Fft {
    /// Creates an engine with no length configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine configured for length `n`.
    pub fn with_len(n: usize) -> Result<Self, FftError> {
        let mut fft = Self::new();
        fft.configure(n)?;
        Ok(fft)
    }

    /// Sets the transform length and rebuilds the twiddle table.
    ///
    /// On error the previous configuration is kept.
    pub fn configure(&mut self, n: usize) -> Result<(), FftError> {
        if self.is_configured() && self.table.len() == n {
            trace!(n, "twiddle table reused");
            return Ok(());
        }

        let table = TwiddleTable::new(n)?;
        debug!(n, m = table.log2_len(), "twiddle table rebuilt");
        self.table = table;
        Ok(())
    }

    pub fn is_configured(&self) -> bool {
        !self.table.is_empty()
    }

    /// Configured transform length N, or 0.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Number of butterfly stages, `log2(N)`.
    pub fn log2_len(&self) -> u32 {
        self.table.log2_len()
    }

    pub fn twiddles(&self) -> &TwiddleTable {
        &self.table
    }

    /// Executes the FFT in-place on split real/imaginary buffers.
    ///
    /// Both slices must hold exactly N samples; nothing is written when
    /// that check fails.
    pub fn apply_transform(&self, real: &mut [f64], imag: &mut [f64]) -> Result<(), FftError> {
        self.check_len(real.len())?;
        self.check_len(imag.len())?;

        radix_2_dit_fft_core(
            real,
            imag,
            self.table.cos(),
            self.table.sin(),
            self.table.log2_len(),
        );
        Ok(())
    }

    /// Executes the same transform on an interleaved complex buffer.
    pub fn process(&self, buffer: &mut [Complex64]) -> Result<(), FftError> {
        self.check_len(buffer.len())?;

        radix_2_dit_fft_cplx(
            buffer,
            self.table.cos(),
            self.table.sin(),
            self.table.log2_len(),
        );
        Ok(())
    }

    fn check_len(&self, len: usize) -> Result<(), FftError> {
        if !self.is_configured() {
            return Err(FftError::NotConfigured);
        }
        if len != self.table.len() {
            return Err(FftError::SizeMismatch);
        }
        Ok(())
    }
}

impl FftProcess<Complex64> for Fft {
    fn process(&self, buffer: &mut [Complex64]) -> Result<(), FftError> {
        self.process(buffer)
    }
}

#[cfg(test)]
#[path = "fft_tests.rs"]
mod tests;

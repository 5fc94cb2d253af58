//! Engine shared between threads behind a lock.

use parking_lot::Mutex;
use tracing::debug;

use crate::common::FftError;
use crate::fft::Fft;

/// An [`Fft`] that several callers can use concurrently.
///
/// Every call takes the lock, so reconfiguration never races a transform
/// reading the twiddle table. Callers that do not share should prefer
/// their own [`Fft`].
#[derive(Debug, Default)]
pub struct SharedFft {
    inner: Mutex<Fft>,
}

impl SharedFft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_len(n: usize) -> Result<Self, FftError> {
        Ok(Self {
            inner: Mutex::new(Fft::with_len(n)?),
        })
    }

    /// Currently configured length, or 0.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Transforms `real`/`imag` in place, first switching the engine to
    /// `real.len()` if it is configured for another length.
    pub fn transform(&self, real: &mut [f64], imag: &mut [f64]) -> Result<(), FftError> {
        if real.len() != imag.len() {
            return Err(FftError::SizeMismatch);
        }

        let mut fft = self.inner.lock();
        if fft.len() != real.len() {
            debug!(from = fft.len(), to = real.len(), "shared engine reconfigured");
            fft.configure(real.len())?;
        }
        fft.apply_transform(real, imag)
    }

    /// Runs `f` with exclusive access to the engine.
    pub fn with<R>(&self, f: impl FnOnce(&mut Fft) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

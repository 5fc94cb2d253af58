// src/common.rs

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FftError {
    /// Requested transform length is not an exact power of two.
    NotPowerOfTwo,
    /// A data buffer does not hold exactly N samples.
    SizeMismatch,
    /// The engine has no transform length yet.
    NotConfigured,
}

impl FftError {
    /// True for errors raised while configuring a length, as opposed to
    /// caller contract violations on a transform call.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, FftError::NotPowerOfTwo)
    }
}

use core::fmt;

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::NotPowerOfTwo => write!(f, "FFT length must be a power of two"),
            FftError::SizeMismatch => write!(f, "Data buffer size does not match FFT size"),
            FftError::NotConfigured => write!(f, "FFT length has not been configured"),
        }
    }
}

/// Forward, unnormalized transform of a buffer of `T`, in place.
pub trait FftProcess<T> {
    fn process(&self, buffer: &mut [T]) -> Result<(), FftError>;
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

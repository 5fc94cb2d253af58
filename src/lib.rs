#![cfg_attr(not(feature = "std"), no_std)]

//! In-place radix-2 decimation-in-time FFT over split real/imaginary
//! `f64` buffers, with a cached twiddle-factor table per transform length.

extern crate alloc;

// Tests use std even when the library is built without it.
#[cfg(all(test, not(feature = "std")))]
extern crate std;

pub mod common;
mod kernel;
pub mod fft;
pub mod twiddle;

#[cfg(feature = "std")]
pub mod shared;

pub use common::{FftError, FftProcess};
pub use fft::Fft;
pub use twiddle::TwiddleTable;

#[cfg(feature = "std")]
pub use shared::SharedFft;

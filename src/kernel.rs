// src/kernel.rs

use core::f64::consts::PI;
use num_complex::Complex64;

/// Fills `cos`/`sin` with `cos(-2πi/N)` and `sin(-2πi/N)` for `i` in `0..N/2`.
pub(crate) fn precompute_twiddles(cos: &mut [f64], sin: &mut [f64], n: usize) {
    for i in 0..(n / 2) {
        let angle = -2.0 * PI * (i as f64) / (n as f64);
        let (s, c) = sin_cos(angle);
        cos[i] = c;
        sin[i] = s;
    }
}

/// Platform-agnostic sin/cos
fn sin_cos(angle: f64) -> (f64, f64) {
    #[cfg(feature = "std")]
    return (angle.sin(), angle.cos());

    #[cfg(not(feature = "std"))]
    return (libm::sin(angle), libm::cos(angle));
}

/// Walks the incremental bit-reversal counter for length `n` and calls
/// `swap(i, j)` for every pair with `i < j`.
pub(crate) fn for_each_bitrev_swap(n: usize, mut swap: impl FnMut(usize, usize)) {
    let mut j = 0;
    for i in 1..n.saturating_sub(1) {
        let mut bit = n >> 1;
        while j >= bit {
            j -= bit;
            bit >>= 1;
        }
        j += bit;
        if i < j {
            swap(i, j);
        }
    }
}

/// Runs the `m` butterfly stages for length `n = 2^m`, calling
/// `butterfly(top, bottom, c, s)` once per pair per stage.
///
/// Within a stage, `a` walks the half-length table with a stride of
/// `2^(m - s - 1)` so every twiddle is a table read.
pub(crate) fn for_each_butterfly(
    n: usize,
    m: u32,
    cos: &[f64],
    sin: &[f64],
    mut butterfly: impl FnMut(usize, usize, f64, f64),
) {
    for s in 0..m {
        let half = 1usize << s;
        let full = half << 1;
        let stride = 1usize << (m - s - 1);
        let mut a = 0;

        for j in 0..half {
            let c = cos[a];
            let sn = sin[a];
            a += stride;

            let mut k = j;
            while k < n {
                butterfly(k, k + half, c, sn);
                k += full;
            }
        }
    }
}

/// Forward radix-2 DIT FFT over split real/imaginary buffers of length `2^m`.
pub(crate) fn radix_2_dit_fft_core(
    real: &mut [f64],
    imag: &mut [f64],
    cos: &[f64],
    sin: &[f64],
    m: u32,
) {
    let n = real.len();

    // 1. Bit-reverse
    for_each_bitrev_swap(n, |i, j| {
        real.swap(i, j);
        imag.swap(i, j);
    });

    // 2. Butterfly
    for_each_butterfly(n, m, cos, sin, |k, l, c, s| {
        let t1 = c * real[l] - s * imag[l];
        let t2 = s * real[l] + c * imag[l];
        real[l] = real[k] - t1;
        imag[l] = imag[k] - t2;
        real[k] += t1;
        imag[k] += t2;
    });
}

/// Same transform as [`radix_2_dit_fft_core`] over an interleaved buffer.
pub(crate) fn radix_2_dit_fft_cplx(buffer: &mut [Complex64], cos: &[f64], sin: &[f64], m: u32) {
    let n = buffer.len();

    for_each_bitrev_swap(n, |i, j| buffer.swap(i, j));

    for_each_butterfly(n, m, cos, sin, |k, l, c, s| {
        let t = buffer[l] * Complex64::new(c, s);
        let a = buffer[k];
        buffer[k] = a + t;
        buffer[l] = a - t;
    });
}

#[cfg(test)]
#[path = "kernel_tests.rs"]
mod tests;

//! Property-based tests for the forward transform.

use std::f64::consts::PI;

use proptest::prelude::*;

use radix2_fft::Fft;

/// O(N²) reference DFT with the same sign convention.
fn naive_dft(real: &[f64], imag: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = real.len();
    let mut out_re = vec![0.0; n];
    let mut out_im = vec![0.0; n];
    for k in 0..n {
        for t in 0..n {
            let angle = -2.0 * PI * ((k * t) % n) as f64 / n as f64;
            let (s, c) = angle.sin_cos();
            out_re[k] += real[t] * c - imag[t] * s;
            out_im[k] += real[t] * s + imag[t] * c;
        }
    }
    (out_re, out_im)
}

fn transform(fft: &Fft, real: &[f64], imag: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let mut re = real.to_vec();
    let mut im = imag.to_vec();
    fft.apply_transform(&mut re, &mut im).unwrap();
    (re, im)
}

/// A length `2^m` and two sample vectors of that length.
fn signal() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (0u32..=8).prop_flat_map(|m| {
        let n = 1usize << m;
        (
            prop::collection::vec(-1000.0f64..1000.0, n),
            prop::collection::vec(-1000.0f64..1000.0, n),
        )
    })
}

fn close(a: f64, b: f64, scale: f64) -> bool {
    (a - b).abs() <= 1e-9 * scale.max(1.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The fast transform agrees with the direct DFT sum.
    #[test]
    fn matches_naive_dft((real, imag) in signal()) {
        let n = real.len();
        let fft = Fft::with_len(n).unwrap();
        let (fast_re, fast_im) = transform(&fft, &real, &imag);
        let (slow_re, slow_im) = naive_dft(&real, &imag);

        let scale = 1000.0 * n as f64;
        for k in 0..n {
            prop_assert!(close(fast_re[k], slow_re[k], scale), "bin {} re: {} vs {}", k, fast_re[k], slow_re[k]);
            prop_assert!(close(fast_im[k], slow_im[k], scale), "bin {} im: {} vs {}", k, fast_im[k], slow_im[k]);
        }
    }

    /// FFT(A + c·B) == FFT(A) + c·FFT(B).
    #[test]
    fn linearity((a_re, a_im) in signal(), seed in any::<u64>(), c in -10.0f64..10.0) {
        let n = a_re.len();
        let fft = Fft::with_len(n).unwrap();

        let b_re: Vec<f64> = (0..n).map(|i| ((seed.wrapping_add(i as u64) % 97) as f64) - 48.0).collect();
        let b_im: Vec<f64> = (0..n).map(|i| ((seed.rotate_left(7).wrapping_add(3 * i as u64) % 89) as f64) - 44.0).collect();

        let mix_re: Vec<f64> = a_re.iter().zip(&b_re).map(|(a, b)| a + c * b).collect();
        let mix_im: Vec<f64> = a_im.iter().zip(&b_im).map(|(a, b)| a + c * b).collect();

        let (fa_re, fa_im) = transform(&fft, &a_re, &a_im);
        let (fb_re, fb_im) = transform(&fft, &b_re, &b_im);
        let (fm_re, fm_im) = transform(&fft, &mix_re, &mix_im);

        let scale = 2000.0 * n as f64;
        for k in 0..n {
            prop_assert!(close(fm_re[k], fa_re[k] + c * fb_re[k], scale));
            prop_assert!(close(fm_im[k], fa_im[k] + c * fb_im[k], scale));
        }
    }

    /// Transforming twice and scaling by 1/N gives back the time-reversed input.
    #[test]
    fn double_transform_reverses((real, imag) in signal()) {
        let n = real.len();
        let fft = Fft::with_len(n).unwrap();
        let (once_re, once_im) = transform(&fft, &real, &imag);
        let (twice_re, twice_im) = transform(&fft, &once_re, &once_im);

        for i in 0..n {
            let src = (n - i) % n;
            prop_assert!(close(twice_re[i] / n as f64, real[src], 1000.0));
            prop_assert!(close(twice_im[i] / n as f64, imag[src], 1000.0));
        }
    }

    /// Reusing the cached table yields bit-identical output.
    #[test]
    fn table_reuse_is_deterministic((real, imag) in signal()) {
        let fft = Fft::with_len(real.len()).unwrap();
        prop_assert_eq!(transform(&fft, &real, &imag), transform(&fft, &real, &imag));
    }
}

proptest! {
    /// Only exact powers of two configure.
    #[test]
    fn configure_accepts_only_powers_of_two(n in 0usize..100_000) {
        let result = Fft::with_len(n);
        prop_assert_eq!(result.is_ok(), n.is_power_of_two());
    }
}

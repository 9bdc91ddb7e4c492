// Resona
// Copyright (c) 2026 The Project Resona Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `tdac` module implements the Time Domain Aliasing Cancellation (TDAC) folding and unfolding
//! steps that turn the DCT-IV into the Modified Discrete Cosine Transform (MDCT) and its inverse.
//!
//! A frame of `2N` windowed samples is split into quarters `A`, `B`, `C`, `D`, and folded into `N`
//! samples `(-C' - D, A - B')`, where `'` denotes reversal. The DCT-IV of the folded samples is the
//! MDCT of the frame. Unfolding the inverse DCT-IV produces a frame with time domain aliasing that
//! cancels when consecutive frames, windowed by a Princen-Bradley window, are overlapped by `N`
//! samples and added.

use super::complex::FftFloat;

use crate::errors::{length_error, Result};

/// Fold a frame of `2N` samples into the `N` input samples of the DCT-IV.
///
/// The length of `input` must be divisible by 4, and twice the length of `output`.
pub fn prepare_input<F: FftFloat>(input: &[F], output: &mut [F]) -> Result<()> {
    if input.len() % 4 != 0 {
        return length_error("tdac input length must be divisible by 4");
    }

    if input.len() != 2 * output.len() {
        return length_error("tdac input length must be twice the output length");
    }

    let q = input.len() / 4;

    let (a, rest) = input.split_at(q);
    let (b, rest) = rest.split_at(q);
    let (c, d) = rest.split_at(q);

    let (front, back) = output.split_at_mut(q);

    for (i, out) in front.iter_mut().enumerate() {
        *out = -c[q - 1 - i] - d[i];
    }

    for (i, out) in back.iter_mut().enumerate() {
        *out = a[i] - b[q - 1 - i];
    }

    Ok(())
}

/// Unfold the `N` output samples of the inverse DCT-IV into a frame of `2N` samples.
///
/// The length of `input` must be even, and half the length of `output`.
pub fn post_process<F: FftFloat>(input: &[F], output: &mut [F]) -> Result<()> {
    if input.len() % 2 != 0 {
        return length_error("tdac input length must be even");
    }

    if output.len() != 2 * input.len() {
        return length_error("tdac output length must be twice the input length");
    }

    let q = input.len() / 2;

    let (f, k) = input.split_at(q);

    let (ab, cd) = output.split_at_mut(2 * q);
    let (a, b) = ab.split_at_mut(q);
    let (c, d) = cd.split_at_mut(q);

    for i in 0..q {
        a[i] = k[i];
        b[i] = -k[q - 1 - i];
        c[i] = -f[q - 1 - i];
        d[i] = -f[i];
    }

    Ok(())
}

/// Generate a `len`-point sine window, `w[n] = sin(pi * (n + 1/2) / len)`.
///
/// The sine window satisfies the Princen-Bradley condition, `w[n]^2 + w[n + len/2]^2 = 1`.
pub fn sine_window<F: FftFloat>(len: usize) -> Vec<F> {
    let step = std::f64::consts::PI / len as f64;

    (0..len).map(|n| F::from_f64_lossy(((n as f64 + 0.5) * step).sin())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::dct::Dct4;
    use crate::errors::Error;

    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn verify_prepare_input() {
        let input = [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let mut output = [0.0; 4];

        prepare_input(&input, &mut output).unwrap();

        // A = [1, 2], B = [3, 4], C = [5, 6], D = [7, 8]
        assert_eq!(output, [-6.0 - 7.0, -5.0 - 8.0, 1.0 - 4.0, 2.0 - 3.0]);
    }

    #[test]
    fn verify_post_process() {
        let input = [1.0f64, 2.0, 3.0, 4.0];
        let mut output = [0.0; 8];

        post_process(&input, &mut output).unwrap();

        // F = [1, 2], K = [3, 4]
        assert_eq!(output, [3.0, 4.0, -4.0, -3.0, -2.0, -1.0, -1.0, -2.0]);
    }

    #[test]
    fn verify_tdac_errors() {
        let mut output = [0.0f32; 3];
        assert!(matches!(prepare_input(&[0.0; 6], &mut output), Err(Error::LengthMismatch(_))));

        let mut output = [0.0f32; 2];
        assert!(matches!(prepare_input(&[0.0; 8], &mut output), Err(Error::LengthMismatch(_))));

        let mut output = [0.0f32; 6];
        assert!(matches!(post_process(&[0.0; 3], &mut output), Err(Error::LengthMismatch(_))));

        let mut output = [9.0f32; 6];
        assert!(matches!(post_process(&[0.0; 4], &mut output), Err(Error::LengthMismatch(_))));
        assert_eq!(output, [9.0; 6]);
    }

    #[test]
    fn verify_sine_window() {
        let window = sine_window::<f64>(64);

        for i in 0..32 {
            let sum = window[i] * window[i] + window[i + 32] * window[i + 32];
            assert!((sum - 1.0).abs() < 1e-15);
            assert!((window[i] - window[63 - i]).abs() < 1e-15);
        }
    }

    #[test]
    fn verify_tdac_reconstruction() {
        const N: usize = 32;
        const FRAMES: usize = 8;

        let mut rng = SmallRng::seed_from_u64(0x7dac);

        let signal: Vec<f64> = (0..(FRAMES + 1) * N).map(|_| rng.random_range(-1.0..1.0)).collect();
        let window = sine_window::<f64>(2 * N);

        let mut dct = Dct4::<f64>::new(N).unwrap();
        let mut output = vec![0.0; signal.len()];

        for frame in 0..FRAMES {
            let span = frame * N..frame * N + 2 * N;

            // Analysis.
            let windowed: Vec<f64> =
                signal[span.clone()].iter().zip(&window).map(|(s, w)| s * w).collect();

            let mut coefs = [0.0; N];
            prepare_input(&windowed, &mut coefs).unwrap();
            dct.dct_iv_inplace(&mut coefs).unwrap();

            // Synthesis.
            dct.inverse_dct_iv_inplace(&mut coefs).unwrap();

            let mut unfolded = [0.0; 2 * N];
            post_process(&coefs, &mut unfolded).unwrap();

            for ((out, s), w) in output[span].iter_mut().zip(&unfolded).zip(&window) {
                *out += s * w;
            }
        }

        // Every sample covered by two frames is reconstructed.
        for i in N..FRAMES * N {
            assert!((output[i] - signal[i]).abs() < 1e-12, "sample {}", i);
        }
    }
}

// Resona Check Tool
// Copyright (c) 2026 The Project Resona Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use resona_core::dsp::autocorr::{autocorrelation_direct, autocorrelation_fft};
use resona_core::dsp::complex::Complex64;
use resona_core::dsp::dct::Dct4;
use resona_core::dsp::fft::{fft, FftMode};
use resona_core::dsp::lpc::LinearPredictor;
use resona_core::dsp::tdac::{post_process, prepare_input, sine_window};
use resona_core::dsp::wavelet::Wavelet;
use resona_core::errors::Result;

use crate::{CheckOptions, Transform};

/// The accumulated result of checking one transform over a range of sizes.
#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub transform: &'static str,
    pub n_sizes: u32,
    pub n_failed_sizes: u32,
    pub abs_max_delta: f64,
}

impl CheckResult {
    fn new(transform: Transform) -> Self {
        CheckResult { transform: transform.name(), n_sizes: 0, n_failed_sizes: 0, abs_max_delta: 0.0 }
    }

    /// Account for the maximum delta observed at a single size.
    fn record(&mut self, size: usize, delta: f64, opts: &CheckOptions) {
        debug!("{}: size={}, delta={:e}", self.transform, size, delta);

        // NaN never compares as within tolerance.
        let passed = delta <= opts.tolerance;

        if !passed {
            warn!("{}: size={} exceeds the tolerance, delta={:e}", self.transform, size, delta);

            if !opts.is_quiet {
                println!(
                    "[FAIL] transform={:>8}, size={:>8}, delta={:e}",
                    self.transform, size, delta
                );
            }

            self.n_failed_sizes += 1;
        }

        self.n_sizes += 1;
        self.abs_max_delta = self.abs_max_delta.max(delta);
    }

    pub fn is_pass(&self) -> bool {
        self.n_failed_sizes == 0
    }
}

fn max_delta(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(a, b)| (a - b).abs()).fold(0.0, f64::max)
}

fn random_signal(rng: &mut SmallRng, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.random_range(-1.0..1.0)).collect()
}

/// Forward then backward FFT of a random complex signal.
fn check_fft(rng: &mut SmallRng, size: usize) -> Result<f64> {
    let input: Vec<Complex64> = (0..size)
        .map(|_| Complex64::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)))
        .collect();

    let mut x = input.clone();

    fft(&mut x, FftMode::Forward)?;
    fft(&mut x, FftMode::Backward)?;

    Ok(x.iter().zip(&input).map(|(a, b)| (a - b).norm()).fold(0.0, f64::max))
}

/// DCT-IV then inverse DCT-IV of a random signal.
fn check_dct(rng: &mut SmallRng, size: usize) -> Result<f64> {
    let input = random_signal(rng, size);

    let mut dct = Dct4::new(size)?;
    let mut x = input.clone();

    dct.dct_iv_inplace(&mut x)?;
    dct.inverse_dct_iv_inplace(&mut x)?;

    Ok(max_delta(&x, &input))
}

/// Sine windowed MDCT analysis and synthesis with overlap-add over several frames of `size`
/// samples each.
fn check_tdac(rng: &mut SmallRng, size: usize) -> Result<f64> {
    const N_FRAMES: usize = 4;

    let signal = random_signal(rng, (N_FRAMES + 1) * size);
    let window = sine_window::<f64>(2 * size);

    let mut dct = Dct4::new(size)?;

    let mut coefs = vec![0.0; size];
    let mut frame = vec![0.0; 2 * size];
    let mut output = vec![0.0; signal.len()];

    for i in 0..N_FRAMES {
        let span = i * size..(i + 2) * size;

        for ((f, s), w) in frame.iter_mut().zip(&signal[span.clone()]).zip(&window) {
            *f = s * w;
        }

        prepare_input(&frame, &mut coefs)?;
        dct.dct_iv_inplace(&mut coefs)?;
        dct.inverse_dct_iv_inplace(&mut coefs)?;
        post_process(&coefs, &mut frame)?;

        for ((o, f), w) in output[span].iter_mut().zip(&frame).zip(&window) {
            *o += f * w;
        }
    }

    // Only the samples covered by two frames can be reconstructed.
    let interior = size..N_FRAMES * size;

    Ok(max_delta(&output[interior.clone()], &signal[interior]))
}

/// Forward then inverse multi-level wavelet transform of a random integer signal, which must be
/// exact, and of a random floating point signal.
fn check_wavelet(rng: &mut SmallRng, wavelet: Wavelet, size: usize) -> Result<f64> {
    let input: Vec<i32> = (0..size).map(|_| rng.random()).collect();

    let mut x = input.clone();

    wavelet.forward(&mut x)?;
    wavelet.inverse(&mut x)?;

    if x != input {
        return Ok(f64::INFINITY);
    }

    let input = random_signal(rng, size);

    let mut x = input.clone();

    wavelet.forward(&mut x)?;
    wavelet.inverse(&mut x)?;

    Ok(max_delta(&x, &input))
}

/// Direct and FFT autocorrelation of a random signal, relative to the signal energy.
fn check_autocorr(rng: &mut SmallRng, size: usize) -> Result<f64> {
    let data = random_signal(rng, size);

    let direct = autocorrelation_direct(&data, size - 1)?;
    let via_fft = autocorrelation_fft(&data, size - 1)?;

    Ok(max_delta(&direct, &via_fft) / direct[0].max(1.0))
}

/// Train a first order predictor on a decaying exponential, and extrapolate `size` samples of it.
fn check_lpc(rng: &mut SmallRng, size: usize) -> Result<f64> {
    // On a window of n samples the autocorrelation method biases the coefficient by a factor of
    // (1 - r^(2n - 2)) / (1 - r^2n). The training window must be long enough for that factor to
    // round to 1.
    const MIN_TRAIN_LEN: usize = 4096;

    let ratio: f64 = rng.random_range(0.5..0.95);

    let data: Vec<f64> = (0..size.max(MIN_TRAIN_LEN)).map(|n| ratio.powi(n as i32)).collect();

    let mut lpc = LinearPredictor::new();
    lpc.initialize(&data, 1)?;

    let mut output = vec![0.0; size];
    lpc.predict(&data[..1], &mut output);

    Ok(max_delta(&output, &data[..size]))
}

/// Check a transform over every power-of-two size in the configured range.
pub fn run_check(transform: Transform, opts: &CheckOptions) -> Result<CheckResult> {
    let mut rng = SmallRng::seed_from_u64(opts.seed);
    let mut result = CheckResult::new(transform);

    let mut size = opts.min_size;

    while size <= opts.max_size {
        let delta = match transform {
            Transform::Fft => Some(check_fft(&mut rng, size)?),
            Transform::Dct => Some(check_dct(&mut rng, size)?),
            Transform::Haar => Some(check_wavelet(&mut rng, Wavelet::Haar, size)?),
            Transform::Cdf53 => Some(check_wavelet(&mut rng, Wavelet::Cdf53, size)?),
            // Folding requires the frame to split into quarters.
            Transform::Tdac if size >= 2 => Some(check_tdac(&mut rng, size)?),
            // A predictor needs at least one sample more than its order.
            Transform::Lpc if size >= 2 => Some(check_lpc(&mut rng, size)?),
            Transform::Autocorr => Some(check_autocorr(&mut rng, size)?),
            _ => None,
        };

        match delta {
            Some(delta) => result.record(size, delta, opts),
            None => debug!("{}: size={} skipped", transform.name(), size),
        }

        size <<= 1;
    }

    Ok(result)
}

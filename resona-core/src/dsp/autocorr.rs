// Resona
// Copyright (c) 2026 The Project Resona Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `autocorr` module computes the (biased) autocorrelation of a real signal.
//!
//! For lag `d`, the autocorrelation is `r[d] = sum(x[i + d] * x[i])` over all valid `i`. It may be
//! computed directly in `O(N * order)`, or via the FFT in `O(N log N)`. The FFT path is only taken
//! for power-of-two lengths when the order is large enough to make it worthwhile.

use log::trace;

use super::complex::{Complex, FftFloat};
use super::fft::{fft, FftMode};

use crate::errors::{order_error, Result};
use crate::util::bits::{count_bits, is_power_of_two};

/// Returns true if the FFT should be used to compute `order + 1` lags of the autocorrelation of a
/// `len` sample signal.
pub fn use_fft(len: usize, order: usize) -> bool {
    is_power_of_two(len) && order + 1 > count_bits(len) as usize
}

/// Compute lags `0..=order` of the autocorrelation of `data`.
///
/// If `use_fft_if_possible` is true, and [`use_fft`] agrees, the autocorrelation is computed via
/// the FFT. Otherwise it is computed directly. The order must be less than the length of `data`.
pub fn autocorrelation<F: FftFloat>(
    data: &[F],
    order: usize,
    use_fft_if_possible: bool,
) -> Result<Vec<F>> {
    if use_fft_if_possible && use_fft(data.len(), order) {
        trace!("autocorrelation: fft path (len={}, order={})", data.len(), order);
        autocorrelation_fft(data, order)
    }
    else {
        trace!("autocorrelation: direct path (len={}, order={})", data.len(), order);
        autocorrelation_direct(data, order)
    }
}

/// Compute lags `0..=order` of the autocorrelation of `data` directly.
pub fn autocorrelation_direct<F: FftFloat>(data: &[F], order: usize) -> Result<Vec<F>> {
    if order >= data.len() {
        return order_error(order, data.len());
    }

    let acorr = (0..=order)
        .map(|d| data[d..].iter().zip(data).fold(F::zero(), |acc, (&a, &b)| acc + a * b))
        .collect();

    Ok(acorr)
}

/// Compute lags `0..=order` of the autocorrelation of `data` via the FFT.
///
/// The length of `data` must be a power of two.
pub fn autocorrelation_fft<F: FftFloat>(data: &[F], order: usize) -> Result<Vec<F>> {
    if order >= data.len() {
        return order_error(order, data.len());
    }

    // Zero pad to at least twice the signal length so that the circular correlation computed by
    // the FFT equals the linear correlation for every lag.
    let padded_len = (2 * data.len()).next_power_of_two();

    let mut buf = vec![Complex::<F>::default(); padded_len];

    for (z, &s) in buf.iter_mut().zip(data) {
        z.re = s;
    }

    fft(&mut buf, FftMode::Forward)?;

    for z in buf.iter_mut() {
        *z = Complex::new(z.norm_sqr(), F::zero());
    }

    fft(&mut buf, FftMode::Backward)?;

    // The forward transform scaled each bin by 1/N, and the power spectrum therefore by 1/N^2. The
    // unscaled backward transform restores one factor of N.
    let scale = F::from_len(padded_len);

    Ok(buf[..=order].iter().map(|z| z.re * scale).collect())
}

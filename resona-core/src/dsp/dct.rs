// Resona
// Copyright (c) 2026 The Project Resona Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `dct` module implements the Discrete Cosine Transform Type-IV (DCT-IV).
//!
//! The DCT-IV is computed by embedding the input, with odd and even symmetry, into a complex
//! sequence 8 times longer than the input and taking its forward FFT. The result is the DCT-IV
//! scaled by `1/(2N)`:
//!
//! ```text
//! X[k] = 1/(2N) * sum(x[n] * cos(pi/N * (n + 1/2) * (k + 1/2)))
//! ```
//!
//! The inverse transform multiplies by `8N` instead, such that the inverse undoes the forward
//! transform exactly (up to rounding).

use super::complex::{Complex, FftFloat};
use super::fft::{fft, FftMode};

use crate::errors::{check_power_of_two, length_error, Result};

/// The Discrete Cosine Transform Type-IV of a fixed size.
///
/// Holds the scratch buffer required to compute the transform such that repeated transforms do
/// not allocate.
pub struct Dct4<F: FftFloat> {
    n: usize,
    buf: Box<[Complex<F>]>,
}

impl<F: FftFloat> Dct4<F> {
    /// Instantiate a `n`-point DCT-IV.
    ///
    /// The value of `n` must be a power of two.
    pub fn new(n: usize) -> Result<Self> {
        check_power_of_two(n)?;

        let buf = vec![Default::default(); 8 * n].into_boxed_slice();

        Ok(Dct4 { n, buf })
    }

    /// Get the size of the transform.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Compute the scaled DCT-IV of `x` in-place.
    pub fn dct_iv_inplace(&mut self, x: &mut [F]) -> Result<()> {
        self.transform(x)
    }

    /// Compute the inverse of [`Dct4::dct_iv_inplace`] in-place.
    pub fn inverse_dct_iv_inplace(&mut self, x: &mut [F]) -> Result<()> {
        self.transform(x)?;

        let scale = F::from_len(8 * self.n);

        for s in x.iter_mut() {
            *s = *s * scale;
        }

        Ok(())
    }

    fn transform(&mut self, x: &mut [F]) -> Result<()> {
        if x.len() != self.n {
            return length_error("dct-iv input length does not match the transform size");
        }

        let n = self.n;
        let buf = &mut self.buf;

        buf.fill(Default::default());

        for (k, &s) in x.iter().enumerate() {
            let pos = Complex::new(s, F::zero());
            let neg = Complex::new(-s, F::zero());

            buf[2 * k + 1] = pos;
            buf[8 * n - 2 * k - 1] = pos;
            buf[4 * n + 2 * k + 1] = neg;
            buf[4 * n - 2 * k - 1] = neg;
        }

        fft(buf, FftMode::Forward)?;

        for (k, s) in x.iter_mut().enumerate() {
            *s = buf[2 * k + 1].re;
        }

        Ok(())
    }
}

/// Compute the scaled DCT-IV of `x` in-place using a transient [`Dct4`].
pub fn dct_iv<F: FftFloat>(x: &mut [F]) -> Result<()> {
    Dct4::new(x.len())?.dct_iv_inplace(x)
}

/// Compute the inverse scaled DCT-IV of `x` in-place using a transient [`Dct4`].
pub fn inverse_dct_iv<F: FftFloat>(x: &mut [F]) -> Result<()> {
    Dct4::new(x.len())?.inverse_dct_iv_inplace(x)
}

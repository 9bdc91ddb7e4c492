// Resona
// Copyright (c) 2026 The Project Resona Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::dsp::complex::{Complex, FftFloat};
use crate::dsp::fft::FftMode;
use crate::errors::{check_power_of_two, Result};

/// Calculate the FFT of `x` in-place.
///
/// The length of `x` must be a power of two, otherwise an error is returned and `x` is left
/// untouched.
pub fn fft<F: FftFloat>(x: &mut [Complex<F>], mode: FftMode) -> Result<()> {
    let n = x.len();

    check_power_of_two(n)?;

    let mut planner = rustfft::FftPlanner::<F>::new();

    // RustFFT uses the same sign convention, but never normalizes.
    let fft = match mode {
        FftMode::Forward => planner.plan_fft_forward(n),
        FftMode::Backward => planner.plan_fft_inverse(n),
    };

    fft.process(x);

    // Output scale.
    if mode == FftMode::Forward {
        let n = F::from_len(n);

        for v in x.iter_mut() {
            *v = v.unscale(n);
        }
    }

    Ok(())
}

// Resona
// Copyright (c) 2026 The Project Resona Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::dsp::complex::{rotate_quarter, Complex, FftFloat};
use crate::dsp::fft::{root_of_unity_f64, FftMode};
use crate::errors::{check_power_of_two, Result};
use crate::util::bits::{count_bits, reverse_bits_width};

/// Calculate the FFT of `x` in-place.
///
/// The length of `x` must be a power of two, otherwise an error is returned and `x` is left
/// untouched.
pub fn fft<F: FftFloat>(x: &mut [Complex<F>], mode: FftMode) -> Result<()> {
    let n = x.len();

    check_power_of_two(n)?;

    if n == 1 {
        return Ok(());
    }

    let forward = mode == FftMode::Forward;

    // Bit reversal permutation. Only swap when the reversed index is greater to avoid swapping
    // each pair twice.
    let bits = count_bits(n);

    for i in 0..n {
        let j = reverse_bits_width(i, bits);

        if j > i {
            x.swap(i, j);
        }
    }

    // Size 2 butterflies. The only twiddle factor is 1.
    for pair in x.chunks_exact_mut(2) {
        let p = pair[0];
        let q = pair[1];

        pair[0] = p + q;
        pair[1] = p - q;
    }

    // Size 4 butterflies. The twiddle factors are 1, and -j (forward) or +j (backward).
    if n >= 4 {
        for quad in x.chunks_exact_mut(4) {
            let p0 = quad[0];
            let p1 = quad[1];
            let q0 = quad[2];
            let q1 = rotate_quarter(quad[3], forward);

            quad[0] = p0 + q0;
            quad[1] = p1 + q1;
            quad[2] = p0 - q0;
            quad[3] = p1 - q1;
        }
    }

    // Size 8 and greater butterflies.
    let mut twiddle = Vec::with_capacity(n >> 1);

    let mut level = 3;
    let mut m = 8;

    while m <= n {
        let m_half = m >> 1;

        let root = match mode {
            FftMode::Forward => root_of_unity_f64(level).conj(),
            FftMode::Backward => root_of_unity_f64(level),
        };

        // Generate the twiddle factors for this level by repeated multiplication of the root.
        // The recurrence is evaluated in 64-bit precision for both sample types.
        twiddle.clear();

        let mut w = Complex::new(1.0f64, 0.0);

        for _ in 0..m_half {
            twiddle.push(Complex::new(F::from_f64_lossy(w.re), F::from_f64_lossy(w.im)));
            w = w * root;
        }

        for block in x.chunks_exact_mut(m) {
            let (even, odd) = block.split_at_mut(m_half);

            for ((e, o), &w) in even.iter_mut().zip(odd.iter_mut()).zip(twiddle.iter()) {
                let p = *e;
                let q = *o * w;

                *e = p + q;
                *o = p - q;
            }
        }

        m <<= 1;
        level += 1;
    }

    // Output scale.
    if forward {
        let n = F::from_len(n);

        for v in x.iter_mut() {
            *v = v.unscale(n);
        }
    }

    Ok(())
}

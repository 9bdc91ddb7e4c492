// Resona
// Copyright (c) 2026 The Project Resona Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `fft` module implements the Fast Fourier Transform (FFT).
//!
//! The complex FFT in this module is an in-place, iterative, radix-2 Cooley-Tukey decimation in
//! time transform over any power-of-two length.
//!
//! The normalization convention is asymmetric: the [`FftMode::Forward`] (analysis) transform is
//! scaled by `1/N`, while the [`FftMode::Backward`] (synthesis) transform is not scaled at all.
//! Therefore, a forward transform followed by a backward transform reproduces the input. The DCT-IV
//! and the FFT-based autocorrelation depend on this convention.

use std::f64::consts::TAU;

use super::complex::{Complex, FftFloat};

#[cfg(any(feature = "opt-simd-sse", feature = "opt-simd-avx", feature = "opt-simd-neon"))]
mod simd;

#[cfg(any(feature = "opt-simd-sse", feature = "opt-simd-avx", feature = "opt-simd-neon"))]
pub use simd::*;

#[cfg(not(any(feature = "opt-simd-sse", feature = "opt-simd-avx", feature = "opt-simd-neon")))]
mod no_simd;
#[cfg(not(any(
    feature = "opt-simd-sse",
    feature = "opt-simd-avx",
    feature = "opt-simd-neon"
)))]
pub use no_simd::*;

/// The direction of a FFT.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FftMode {
    /// The normalized analysis transform, `X[k] = 1/N * sum(x[n] * e^(-j*2*pi*k*n/N))`.
    Forward,
    /// The unnormalized synthesis transform, `x[n] = sum(X[k] * e^(j*2*pi*k*n/N))`.
    Backward,
}

/// The principal `2^k`-th roots of unity, `e^(j*2*pi/2^k)`, as `(re, im)` pairs for `k = 0..=16`.
#[rustfmt::skip]
const ROOTS_OF_UNITY: [(f64, f64); 17] = [
    ( 1.0,                0.0                    ), // 2^0
    (-1.0,                0.0                    ), // 2^1
    ( 0.0,                1.0                    ), // 2^2
    ( 0.7071067811865476, 0.7071067811865475     ), // 2^3
    ( 0.9238795325112867, 0.3826834323650898     ), // 2^4
    ( 0.9807852804032304, 0.19509032201612825    ), // 2^5
    ( 0.9951847266721969, 0.0980171403295606     ), // 2^6
    ( 0.9987954562051724, 0.049067674327418015   ), // 2^7
    ( 0.9996988186962042, 0.024541228522912288   ), // 2^8
    ( 0.9999247018391445, 0.012271538285719925   ), // 2^9
    ( 0.9999811752826011, 0.006135884649154475   ), // 2^10
    ( 0.9999952938095762, 0.003067956762965976   ), // 2^11
    ( 0.9999988234517019, 0.0015339801862847655  ), // 2^12
    ( 0.9999997058628822, 0.0007669903187427045  ), // 2^13
    ( 0.9999999264657179, 0.00038349518757139556 ), // 2^14
    ( 0.9999999816164293, 0.0001917475973107033  ), // 2^15
    ( 0.9999999954041073, 9.587379909597734e-05  ), // 2^16
];

/// Get the principal `2^level`-th root of unity, `e^(j*2*pi/2^level)`, in 64-bit precision.
///
/// Levels beyond the pre-computed table are computed analytically.
pub(crate) fn root_of_unity_f64(level: u32) -> Complex<f64> {
    match ROOTS_OF_UNITY.get(level as usize) {
        Some(&(re, im)) => Complex::new(re, im),
        None => Complex::from_polar(1.0, TAU * 0.5f64.powi(level as i32)),
    }
}

/// Get the principal `2^level`-th root of unity, `e^(j*2*pi/2^level)`.
pub fn root_of_unity<F: FftFloat>(level: u32) -> Complex<F> {
    let root = root_of_unity_f64(level);
    Complex::new(F::from_f64_lossy(root.re), F::from_f64_lossy(root.im))
}

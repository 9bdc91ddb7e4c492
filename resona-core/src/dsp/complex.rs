// Resona
// Copyright (c) 2026 The Project Resona Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `complex` module defines the complex number and floating point types used by the FFT and
//! the transforms derived from it.

use std::fmt;

use num_traits::{Float, FloatConst};

pub use num_complex::Complex;

/// A single precision complex number.
pub type Complex32 = Complex<f32>;

/// A double precision complex number.
pub type Complex64 = Complex<f64>;

#[cfg(any(feature = "opt-simd-sse", feature = "opt-simd-avx", feature = "opt-simd-neon"))]
mod backend {
    pub trait BackendFloat: rustfft::FftNum {}

    impl<T: rustfft::FftNum> BackendFloat for T {}
}

#[cfg(not(any(feature = "opt-simd-sse", feature = "opt-simd-avx", feature = "opt-simd-neon")))]
mod backend {
    pub trait BackendFloat {}

    impl<T> BackendFloat for T {}
}

/// A floating point type that the FFT, and all transforms built upon it, may operate on.
///
/// Implemented for `f32` and `f64`.
pub trait FftFloat:
    Float + FloatConst + Default + fmt::Debug + Send + Sync + 'static + backend::BackendFloat
{
    /// Convert a 64-bit float to this type, rounding to the nearest representable value.
    fn from_f64_lossy(val: f64) -> Self;

    /// Convert a count (such as a transform length) to this type.
    #[inline(always)]
    fn from_len(len: usize) -> Self {
        Self::from_f64_lossy(len as f64)
    }
}

impl FftFloat for f32 {
    #[inline(always)]
    fn from_f64_lossy(val: f64) -> Self {
        val as f32
    }
}

impl FftFloat for f64 {
    #[inline(always)]
    fn from_f64_lossy(val: f64) -> Self {
        val
    }
}

/// Multiply `z` by `-j` (`forward == true`), or `+j`, by exchanging its components.
#[inline(always)]
pub(crate) fn rotate_quarter<F: FftFloat>(z: Complex<F>, forward: bool) -> Complex<F> {
    if forward {
        Complex::new(z.im, -z.re)
    }
    else {
        Complex::new(-z.im, z.re)
    }
}

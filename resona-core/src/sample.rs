// Resona
// Copyright (c) 2026 The Project Resona Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `sample` module defines the sample trait used by the in-place transforms and any
//! non-primitive sample data types.

use std::fmt;

use crate::util::bits::sign_extend_leq32_to_i32;

/// SampleFormat describes the data encoding for a sample.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SampleFormat {
    /// Signed 8-bit integer.
    S8,
    /// Signed 16-bit integer.
    S16,
    /// Signed 24-bit integer.
    S24,
    /// Signed 32-bit integer.
    S32,
    /// Single precision (32-bit) floating point.
    F32,
    /// Double precision (64-bit) floating point.
    F64,
}

/// `Sample` provides the arithmetic required by the lifting-scheme transforms regardless of the
/// underlying data type.
///
/// For integer samples all arithmetic wraps, and the lifting steps are arithmetic right shifts
/// (rounding toward negative infinity) with a rounding bias. Applying the same step on the same
/// operands always yields the same value, therefore adding and later subtracting a step is exactly
/// reversible even if an intermediate result overflowed. For floating point samples the steps are
/// plain multiplications.
pub trait Sample: Copy + Clone + Default + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// A unique enum value representing the sample format.
    const FORMAT: SampleFormat;

    /// The effective number of bits of the sample format.
    const EFF_BITS: u32;

    /// The zero value.
    const ZERO: Self;

    /// Adds `rhs`, wrapping on overflow for integer samples.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Subtracts `rhs`, wrapping on overflow for integer samples.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// The Haar update step: `a >> 1`, or `a * 0.5`.
    fn halve(a: Self) -> Self;

    /// The CDF 5/3 predict step: `(a + b) >> 1`, or `(a + b) * 0.5`.
    fn predict(a: Self, b: Self) -> Self;

    /// The CDF 5/3 update step: `(a + b + 2) >> 2`, or `(a + b) * 0.25`.
    fn update(a: Self, b: Self) -> Self;

    /// The CDF 5/3 update step for a sample with a single neighbour: `(a + 1) >> 1`, or
    /// `a * 0.5`.
    fn update_edge(a: Self) -> Self;
}

macro_rules! int_sample_impl {
    ($t:ty, $format:expr) => {
        impl Sample for $t {
            const FORMAT: SampleFormat = $format;
            const EFF_BITS: u32 = <$t>::BITS;
            const ZERO: Self = 0;

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$t>::wrapping_sub(self, rhs)
            }

            #[inline(always)]
            fn halve(a: Self) -> Self {
                a >> 1
            }

            #[inline(always)]
            fn predict(a: Self, b: Self) -> Self {
                a.wrapping_add(b) >> 1
            }

            #[inline(always)]
            fn update(a: Self, b: Self) -> Self {
                a.wrapping_add(b).wrapping_add(2) >> 2
            }

            #[inline(always)]
            fn update_edge(a: Self) -> Self {
                a.wrapping_add(1) >> 1
            }
        }
    };
}

int_sample_impl!(i8, SampleFormat::S8);
int_sample_impl!(i16, SampleFormat::S16);
int_sample_impl!(i32, SampleFormat::S32);

macro_rules! float_sample_impl {
    ($t:ty, $format:expr, $eff_bits:expr) => {
        impl Sample for $t {
            const FORMAT: SampleFormat = $format;
            const EFF_BITS: u32 = $eff_bits;
            const ZERO: Self = 0.0;

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline(always)]
            fn wrapping_sub(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline(always)]
            fn halve(a: Self) -> Self {
                a * 0.5
            }

            #[inline(always)]
            fn predict(a: Self, b: Self) -> Self {
                (a + b) * 0.5
            }

            #[inline(always)]
            fn update(a: Self, b: Self) -> Self {
                (a + b) * 0.25
            }

            #[inline(always)]
            fn update_edge(a: Self) -> Self {
                a * 0.5
            }
        }
    };
}

float_sample_impl!(f32, SampleFormat::F32, 24);
float_sample_impl!(f64, SampleFormat::F64, 53);

/// A signed 24-bit integer sample with an internal signed 32-bit integer representation.
///
/// All arithmetic wraps modulo 2^24, and the result is always sign-extended into the backing
/// `i32`. Therefore, an `i24` is always within the valid 24-bit range.
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct i24(i32);

impl i24 {
    /// The largest value that can be represented by this integer type.
    pub const MAX: i24 = i24(8_388_607);
    /// The smallest value that can be represented by this integer type.
    pub const MIN: i24 = i24(-8_388_608);

    /// Create an `i24` from the low 24 bits of `val`, discarding the upper 8 bits.
    #[inline(always)]
    pub fn wrapping_from(val: i32) -> i24 {
        i24(sign_extend_leq32_to_i32(val as u32, 24))
    }

    /// Get the underlying `i32` backing this `i24`.
    #[inline(always)]
    pub fn inner(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for i24 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i16> for i24 {
    fn from(val: i16) -> Self {
        i24(i32::from(val))
    }
}

impl From<i8> for i24 {
    fn from(val: i8) -> Self {
        i24(i32::from(val))
    }
}

impl From<i24> for i32 {
    fn from(val: i24) -> Self {
        val.0
    }
}

impl core::ops::Add<i24> for i24 {
    type Output = i24;

    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Sample::wrapping_add(self, other)
    }
}

impl core::ops::Sub<i24> for i24 {
    type Output = i24;

    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Sample::wrapping_sub(self, other)
    }
}

impl core::ops::Neg for i24 {
    type Output = i24;

    #[inline(always)]
    fn neg(self) -> Self {
        i24::wrapping_from(self.0.wrapping_neg())
    }
}

impl Sample for i24 {
    const FORMAT: SampleFormat = SampleFormat::S24;
    const EFF_BITS: u32 = 24;
    const ZERO: Self = i24(0);

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        i24::wrapping_from(self.0.wrapping_add(rhs.0))
    }

    #[inline(always)]
    fn wrapping_sub(self, rhs: Self) -> Self {
        i24::wrapping_from(self.0.wrapping_sub(rhs.0))
    }

    #[inline(always)]
    fn halve(a: Self) -> Self {
        i24(a.0 >> 1)
    }

    #[inline(always)]
    fn predict(a: Self, b: Self) -> Self {
        i24(a.wrapping_add(b).0 >> 1)
    }

    #[inline(always)]
    fn update(a: Self, b: Self) -> Self {
        i24(a.wrapping_add(b).wrapping_add(i24(2)).0 >> 2)
    }

    #[inline(always)]
    fn update_edge(a: Self) -> Self {
        i24(a.wrapping_add(i24(1)).0 >> 1)
    }
}

// Resona
// Copyright (c) 2026 The Project Resona Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `wavelet` module implements reversible discrete wavelet transforms using the lifting
//! scheme.
//!
//! Two wavelets are provided: the Haar wavelet, and the Cohen-Daubechies-Feauveau (CDF) 5/3
//! wavelet (also known as the LeGall 5/3 wavelet). Both operate in-place on any [`Sample`] type.
//!
//! A single level of the transform de-interleaves the signal such that the low-pass (approximation)
//! coefficients occupy the front half of the buffer, and the high-pass (detail) coefficients occupy
//! the back half. The multi-level transforms repeatedly apply a single level to the low-pass
//! coefficients of the previous level.
//!
//! For integer samples all arithmetic wraps on overflow. Since each lifting step is undone by
//! re-computing the same step from the same operands, the inverse transform reconstructs the
//! original signal exactly for any input, including inputs that overflow during the transform.
//!
//! For CDF 5/3, the signal is symmetrically extended at its boundaries. At the right boundary
//! the prediction of the last odd sample uses its left neighbour twice, and at the left boundary
//! the update of the first even sample uses its right neighbour twice.

use crate::errors::{check_power_of_two, length_error, Result};
use crate::sample::Sample;
use crate::split::{merge_odd_even, split_odd_even};

/// A reversible wavelet.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Wavelet {
    /// The Haar wavelet.
    Haar,
    /// The CDF 5/3 (LeGall 5/3) wavelet.
    Cdf53,
}

impl Wavelet {
    /// Apply the multi-level forward transform to `x` in-place.
    pub fn forward<T: Sample>(&self, x: &mut [T]) -> Result<()> {
        match self {
            Wavelet::Haar => haar_forward(x),
            Wavelet::Cdf53 => cdf53_forward(x),
        }
    }

    /// Apply the multi-level inverse transform to `x` in-place.
    pub fn inverse<T: Sample>(&self, x: &mut [T]) -> Result<()> {
        match self {
            Wavelet::Haar => haar_inverse(x),
            Wavelet::Cdf53 => cdf53_inverse(x),
        }
    }
}

/// Apply a single level of the forward Haar transform to `x` in-place.
///
/// The length of `x` must be even.
pub fn haar_forward_level<T: Sample>(x: &mut [T]) -> Result<()> {
    let (even, odd) = split_odd_even(x)?;

    for (e, o) in even.iter_mut().zip(odd.iter_mut()) {
        *o = o.wrapping_sub(*e);
        *e = e.wrapping_add(T::halve(*o));
    }

    Ok(())
}

/// Apply a single level of the inverse Haar transform to `x` in-place.
///
/// The length of `x` must be even.
pub fn haar_inverse_level<T: Sample>(x: &mut [T]) -> Result<()> {
    if x.len() % 2 != 0 {
        return length_error("wavelet level requires an even length");
    }

    let (even, odd) = x.split_at_mut(x.len() / 2);

    for (e, o) in even.iter_mut().zip(odd.iter_mut()) {
        *e = e.wrapping_sub(T::halve(*o));
        *o = o.wrapping_add(*e);
    }

    merge_odd_even(x)
}

/// Apply a single level of the forward CDF 5/3 transform to `x` in-place.
///
/// The length of `x` must be even.
pub fn cdf53_forward_level<T: Sample>(x: &mut [T]) -> Result<()> {
    let (even, odd) = split_odd_even(x)?;

    let h = even.len();

    if h == 0 {
        return Ok(());
    }

    // Predict.
    for i in 0..h - 1 {
        odd[i] = odd[i].wrapping_sub(T::predict(even[i], even[i + 1]));
    }

    odd[h - 1] = odd[h - 1].wrapping_sub(even[h - 1]);

    // Update.
    even[0] = even[0].wrapping_add(T::update_edge(odd[0]));

    for i in 1..h {
        even[i] = even[i].wrapping_add(T::update(odd[i - 1], odd[i]));
    }

    Ok(())
}

/// Apply a single level of the inverse CDF 5/3 transform to `x` in-place.
///
/// The length of `x` must be even.
pub fn cdf53_inverse_level<T: Sample>(x: &mut [T]) -> Result<()> {
    if x.len() % 2 != 0 {
        return length_error("wavelet level requires an even length");
    }

    let (even, odd) = x.split_at_mut(x.len() / 2);

    let h = even.len();

    if h == 0 {
        return Ok(());
    }

    // Undo update.
    even[0] = even[0].wrapping_sub(T::update_edge(odd[0]));

    for i in 1..h {
        even[i] = even[i].wrapping_sub(T::update(odd[i - 1], odd[i]));
    }

    // Undo predict.
    odd[h - 1] = odd[h - 1].wrapping_add(even[h - 1]);

    for i in 0..h - 1 {
        odd[i] = odd[i].wrapping_add(T::predict(even[i], even[i + 1]));
    }

    merge_odd_even(x)
}

/// Apply every level of a forward transform, from the finest to the coarsest.
fn forward_levels<T, L>(x: &mut [T], level: L) -> Result<()>
where
    T: Sample,
    L: Fn(&mut [T]) -> Result<()>,
{
    check_power_of_two(x.len())?;

    let mut len = x.len();

    while len >= 2 {
        level(&mut x[..len])?;
        len >>= 1;
    }

    Ok(())
}

/// Apply every level of an inverse transform. The coarser levels, stored in the front half, must
/// be inverted before the current level.
fn inverse_levels<T, L>(x: &mut [T], level: &L) -> Result<()>
where
    T: Sample,
    L: Fn(&mut [T]) -> Result<()>,
{
    if x.len() < 2 {
        return Ok(());
    }

    let half = x.len() / 2;

    inverse_levels(&mut x[..half], level)?;

    level(x)
}

/// Apply the multi-level forward Haar transform to `x` in-place.
///
/// The length of `x` must be a power of two.
pub fn haar_forward<T: Sample>(x: &mut [T]) -> Result<()> {
    forward_levels(x, haar_forward_level)
}

/// Apply the multi-level inverse Haar transform to `x` in-place.
///
/// The length of `x` must be a power of two.
pub fn haar_inverse<T: Sample>(x: &mut [T]) -> Result<()> {
    check_power_of_two(x.len())?;
    inverse_levels(x, &haar_inverse_level)
}

/// Apply the multi-level forward CDF 5/3 transform to `x` in-place.
///
/// The length of `x` must be a power of two.
pub fn cdf53_forward<T: Sample>(x: &mut [T]) -> Result<()> {
    forward_levels(x, cdf53_forward_level)
}

/// Apply the multi-level inverse CDF 5/3 transform to `x` in-place.
///
/// The length of `x` must be a power of two.
pub fn cdf53_inverse<T: Sample>(x: &mut [T]) -> Result<()> {
    check_power_of_two(x.len())?;
    inverse_levels(x, &cdf53_inverse_level)
}

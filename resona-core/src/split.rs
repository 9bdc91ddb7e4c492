// Resona
// Copyright (c) 2026 The Project Resona Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `split` module provides utilities to partition a buffer into halves, quarters, or its even
//! and odd indexed elements.
//!
//! Halves and quarters are disjoint views into the source buffer. Splitting into even and odd
//! elements permutes the source buffer such that the even indexed elements occupy the front half
//! and the odd indexed elements occupy the back half. This requires a temporary copy of the
//! buffer.

use crate::errors::{length_error, Result};

/// Split `source` into two equal length halves.
///
/// The length of `source` must be even.
pub fn split_half<T>(source: &mut [T]) -> Result<(&mut [T], &mut [T])> {
    if source.len() % 2 != 0 {
        return length_error("split into halves requires an even length");
    }

    let mid = source.len() / 2;
    Ok(source.split_at_mut(mid))
}

/// Split `source` into four equal length quarters.
///
/// The length of `source` must be divisible by 4.
#[allow(clippy::type_complexity)]
pub fn split_quarter<T>(source: &mut [T]) -> Result<(&mut [T], &mut [T], &mut [T], &mut [T])> {
    if source.len() % 4 != 0 {
        return length_error("split into quarters requires a length divisible by 4");
    }

    let (front, back) = split_half(source)?;
    let (q1, q2) = split_half(front)?;
    let (q3, q4) = split_half(back)?;

    Ok((q1, q2, q3, q4))
}

/// De-interleave `source` so that its even indexed elements occupy the front half, and its odd
/// indexed elements occupy the back half. Returns the front (even) and back (odd) halves.
///
/// The length of `source` must be even. The relative order of the elements within each half is
/// preserved.
pub fn split_odd_even<T: Copy>(source: &mut [T]) -> Result<(&mut [T], &mut [T])> {
    if source.len() % 2 != 0 {
        return length_error("split into even and odd elements requires an even length");
    }

    let interleaved = source.to_vec();
    let (even, odd) = source.split_at_mut(interleaved.len() / 2);

    for ((pair, e), o) in interleaved.chunks_exact(2).zip(even.iter_mut()).zip(odd.iter_mut()) {
        *e = pair[0];
        *o = pair[1];
    }

    Ok((even, odd))
}

/// Re-interleave a buffer previously de-interleaved by [`split_odd_even`].
///
/// The length of `source` must be even.
pub fn merge_odd_even<T: Copy>(source: &mut [T]) -> Result<()> {
    if source.len() % 2 != 0 {
        return length_error("merge of even and odd elements requires an even length");
    }

    let split = source.to_vec();
    let (even, odd) = split.split_at(split.len() / 2);

    for ((pair, &e), &o) in source.chunks_exact_mut(2).zip(even.iter()).zip(odd.iter()) {
        pair[0] = e;
        pair[1] = o;
    }

    Ok(())
}

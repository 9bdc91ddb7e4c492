// Resona
// Copyright (c) 2026 The Project Resona Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Project Resona core: reversible numeric transforms and linear prediction for audio-style
//! codecs.
//!
//! All transforms operate in-place on caller-owned buffers. Lengths are validated before any
//! sample is touched, and a violated precondition is reported through [`errors::Error`].

pub mod checksum;
pub mod dsp;
pub mod errors;
pub mod sample;
pub mod split;
pub mod util;

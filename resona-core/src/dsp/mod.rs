// Resona
// Copyright (c) 2026 The Project Resona Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `dsp` module provides the reversible transforms and the linear predictor.

pub mod autocorr;
pub mod complex;
pub mod dct;
pub mod fft;
pub mod lpc;
pub mod tdac;
pub mod wavelet;

// Resona
// Copyright (c) 2026 The Project Resona Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `lpc` module implements a linear predictor trained by the Levinson-Durbin recursion.
//!
//! A linear predictor of order `p` models each sample as a linear combination of the `p` samples
//! preceding it:
//!
//! ```text
//! x[n] = -(a[0] * x[n - 1] + a[1] * x[n - 2] + ... + a[p - 1] * x[n - p])
//! ```
//!
//! The coefficients `a` minimize the prediction error energy of the training data, and are found
//! by solving the Toeplitz system formed by its autocorrelation.

use log::debug;
use num_traits::Float;

use super::autocorr::autocorrelation;
use super::complex::FftFloat;

use crate::errors::{order_error, Result};

/// A linear predictor.
#[derive(Clone, Debug, Default)]
pub struct LinearPredictor<F: FftFloat = f64> {
    coefficients: Vec<F>,
    reflection: Vec<F>,
}

impl<F: FftFloat> LinearPredictor<F> {
    /// Instantiate an empty (order 0) linear predictor.
    pub fn new() -> Self {
        LinearPredictor { coefficients: Vec::new(), reflection: Vec::new() }
    }

    /// Train an order `order` predictor on `data`.
    ///
    /// On success, returns the prediction error energy after each step of the recursion. The order
    /// must be less than the length of `data`. If `data` has no energy, all coefficients and errors
    /// are zero.
    pub fn initialize(&mut self, data: &[F], order: usize) -> Result<Vec<F>> {
        if order >= data.len() {
            return order_error(order, data.len());
        }

        let acorr = autocorrelation(data, order, true)?;

        let mut coefficients = vec![F::zero(); order];
        let mut reflection = vec![F::zero(); order];
        let mut errors = vec![F::zero(); order];

        if Float::abs(acorr[0]) < F::epsilon() {
            debug!("lpc: signal has no energy, all coefficients are zero");
        }
        else {
            // The prediction filter, a[0] is always 1.
            let mut a = Vec::with_capacity(order + 1);
            a.push(F::one());

            let mut err = acorr[0];
            let min_err = acorr[0] * F::epsilon();

            for k in 0..order {
                if err <= min_err {
                    debug!("lpc: prediction error vanished at step {} of {}", k, order);
                    break;
                }

                // a[i] pairs with acorr[k + 1 - i].
                let dot = a
                    .iter()
                    .zip(acorr[1..=k + 1].iter().rev())
                    .fold(F::zero(), |acc, (&ai, &r)| acc + ai * r);

                let lambda = -dot / err;

                // a' = u + lambda * v, where u is a extended by a zero, and v is u reversed.
                a.push(F::zero());

                let u = a.clone();

                for (i, ai) in a.iter_mut().enumerate() {
                    *ai = u[i] + lambda * u[k + 1 - i];
                }

                err = err * (F::one() - lambda * lambda);

                errors[k] = err;
                reflection[k] = lambda;
            }

            for (c, &ai) in coefficients.iter_mut().zip(&a[1..]) {
                *c = ai;
            }
        }

        self.coefficients = coefficients;
        self.reflection = reflection;

        Ok(errors)
    }

    /// Extrapolate a signal into `output`.
    ///
    /// The first `order` samples of `output` are seeded from `first` (as many as are available),
    /// and the remainder are predicted from the samples before them.
    pub fn predict(&self, first: &[F], output: &mut [F]) {
        let seed = self.order().min(first.len()).min(output.len());

        output[..seed].copy_from_slice(&first[..seed]);
        output[seed..].fill(F::zero());

        for i in seed..output.len() {
            let (history, rest) = output.split_at_mut(i);

            let sum = self
                .coefficients
                .iter()
                .zip(history.iter().rev())
                .fold(F::zero(), |acc, (&c, &s)| acc + c * s);

            rest[0] = rest[0] - sum;
        }
    }

    /// Get the prediction coefficients.
    pub fn coefficients(&self) -> &[F] {
        &self.coefficients
    }

    /// Get the reflection coefficients, one per step of the recursion.
    pub fn reflection_coefficients(&self) -> &[F] {
        &self.reflection
    }

    /// Get the order of the predictor.
    pub fn order(&self) -> usize {
        self.coefficients.len()
    }

    /// Reset the predictor to order 0.
    pub fn reset(&mut self) {
        self.coefficients.clear();
        self.reflection.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::autocorr::autocorrelation_direct;
    use crate::errors::Error;

    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    /// Solve the normal equations `R * a = -r` by Gaussian elimination with partial pivoting, where
    /// `R` is the Toeplitz matrix `R[i][j] = acorr[|i - j|]` and `r[i] = acorr[i + 1]`.
    fn solve_normal_equations(acorr: &[f64], order: usize) -> Vec<f64> {
        let mut m: Vec<Vec<f64>> = (0..order)
            .map(|i| {
                let mut row: Vec<f64> = (0..order).map(|j| acorr[i.abs_diff(j)]).collect();
                row.push(-acorr[i + 1]);
                row
            })
            .collect();

        for col in 0..order {
            let pivot = (col..order)
                .max_by(|&a, &b| m[a][col].abs().total_cmp(&m[b][col].abs()))
                .unwrap();

            m.swap(col, pivot);

            for row in col + 1..order {
                let f = m[row][col] / m[col][col];

                for j in col..=order {
                    let v = f * m[col][j];
                    m[row][j] -= v;
                }
            }
        }

        let mut a = vec![0.0; order];

        for i in (0..order).rev() {
            let sum: f64 = (i + 1..order).map(|j| m[i][j] * a[j]).sum();
            a[i] = (m[i][order] - sum) / m[i][i];
        }

        a
    }

    #[test]
    fn verify_zero_signal() {
        let mut lpc = LinearPredictor::<f64>::new();

        let errors = lpc.initialize(&[0.0; 32], 8).unwrap();

        assert_eq!(lpc.order(), 8);
        assert_eq!(errors, [0.0; 8]);
        assert_eq!(lpc.coefficients(), [0.0; 8]);
        assert_eq!(lpc.reflection_coefficients(), [0.0; 8]);

        let mut output = [1.0; 16];
        lpc.predict(&[0.0; 8], &mut output);
        assert_eq!(output, [0.0; 16]);
    }

    #[test]
    fn verify_first_order() {
        // x[n] = 0.9^n is perfectly predicted by x[n] = 0.9 * x[n - 1].
        let data: Vec<f64> = (0..256).map(|n| 0.9f64.powi(n)).collect();

        let mut lpc = LinearPredictor::new();
        let errors = lpc.initialize(&data, 1).unwrap();

        assert_eq!(lpc.coefficients().len(), 1);
        assert!((lpc.coefficients()[0] + 0.9).abs() < 1e-6);
        assert_eq!(lpc.coefficients()[0], lpc.reflection_coefficients()[0]);
        // Only the first sample is unpredictable.
        assert!((errors[0] - 1.0).abs() < 1e-9);

        let mut output = [0.0; 32];
        lpc.predict(&data[..1], &mut output);

        for (a, e) in output.iter().zip(&data) {
            assert!((a - e).abs() < 1e-6);
        }
    }

    #[test]
    fn verify_error_non_increasing() {
        let mut rng = SmallRng::seed_from_u64(0x1bc0);

        let data: Vec<f64> = (0..512).map(|_| rng.random_range(-1.0..1.0)).collect();

        let mut lpc = LinearPredictor::new();

        // Order 32 takes the FFT autocorrelation path.
        let errors = lpc.initialize(&data, 32).unwrap();

        let energy: f64 = data.iter().map(|s| s * s).sum();

        assert!(errors[0] <= energy);

        for pair in errors.windows(2) {
            assert!(pair[1] <= pair[0]);
            assert!(pair[1] >= 0.0);
        }

        for &k in lpc.reflection_coefficients() {
            assert!(k.abs() < 1.0);
        }
    }

    #[test]
    fn verify_levinson_matches_toeplitz_solve() {
        let mut rng = SmallRng::seed_from_u64(0x7e1d);

        // Random noise through a one pole low-pass filter, so that neighbouring lags correlate.
        let mut state = 0.0;

        let data: Vec<f64> = (0..256)
            .map(|_| {
                state = 0.6 * state + rng.random_range(-1.0..1.0);
                state
            })
            .collect();

        let mut lpc = LinearPredictor::new();

        for order in 2..=8 {
            lpc.initialize(&data, order).unwrap();

            let acorr = autocorrelation_direct(&data, order).unwrap();
            let expected = solve_normal_equations(&acorr, order);

            assert_eq!(lpc.order(), order);

            for (d, (a, e)) in lpc.coefficients().iter().zip(&expected).enumerate() {
                assert!((a - e).abs() < 1e-9, "order={}, d={}, {} != {}", order, d, a, e);
            }
        }
    }

    #[test]
    fn verify_sinusoid() {
        // A sinusoid obeys x[n] = 2cos(w) * x[n - 1] - x[n - 2]. Over a finite window the trained
        // coefficients are damped slightly towards zero, so compare against the normal equations.
        let data: Vec<f64> = (0..256).map(|n| (0.3 * n as f64).sin()).collect();

        let mut lpc = LinearPredictor::new();
        let errors = lpc.initialize(&data, 2).unwrap();

        let acorr = autocorrelation_direct(&data, 2).unwrap();
        let expected = solve_normal_equations(&acorr, 2);

        for (a, e) in lpc.coefficients().iter().zip(&expected) {
            assert!((a - e).abs() < 1e-9);
        }

        assert!((lpc.coefficients()[0] + 2.0 * 0.3f64.cos()).abs() < 0.05);
        assert!((lpc.coefficients()[1] - 1.0).abs() < 0.05);
        assert!(errors[1] < 0.1 * errors[0]);

        // Second order prediction stays close to the sinusoid over one and a half periods.
        let mut output = [0.0; 32];
        lpc.predict(&data[..2], &mut output);

        for (a, e) in output.iter().zip(&data) {
            assert!((a - e).abs() < 0.3);
        }
    }

    #[test]
    fn verify_predict_seeding() {
        let mut lpc = LinearPredictor::<f32>::new();

        let data: Vec<f32> = (0..64).map(|n| 0.5f32.powi(n)).collect();
        lpc.initialize(&data, 2).unwrap();

        // Fewer seed samples than the order.
        let mut output = [7.0; 4];
        lpc.predict(&[1.0], &mut output);
        assert_eq!(output[0], 1.0);

        // Fewer output samples than the order.
        let mut output = [7.0; 1];
        lpc.predict(&[3.0, 4.0], &mut output);
        assert_eq!(output, [3.0]);
    }

    #[test]
    fn verify_order_too_large() {
        let mut lpc = LinearPredictor::<f64>::new();
        lpc.initialize(&[1.0, -1.0, 0.5, 0.25], 2).unwrap();

        assert_eq!(lpc.initialize(&[1.0; 4], 4), Err(Error::OrderTooLarge { order: 4, len: 4 }));
        assert_eq!(lpc.order(), 2);

        lpc.reset();
        assert_eq!(lpc.order(), 0);
        assert!(lpc.reflection_coefficients().is_empty());

        // An order 0 predictor outputs zero.
        let mut output = [1.0; 4];
        lpc.predict(&[5.0], &mut output);
        assert_eq!(output, [0.0; 4]);
    }
}

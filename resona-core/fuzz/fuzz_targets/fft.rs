#![no_main]

use libfuzzer_sys::fuzz_target;

use resona_core::dsp::complex::Complex;
use resona_core::dsp::fft::{fft, FftMode};

fuzz_target!(|data: Vec<f32>| {
    let input: Vec<Complex<f64>> = data
        .chunks_exact(2)
        .filter(|pair| pair[0].is_finite() && pair[1].is_finite())
        .map(|pair| Complex::new(f64::from(pair[0]), f64::from(pair[1])))
        .collect();

    let len = input.len();

    let mut actual = input.clone();

    if !len.is_power_of_two() {
        assert!(fft(&mut actual, FftMode::Forward).is_err());
        assert_eq!(actual, input);
        return;
    }

    fft(&mut actual, FftMode::Backward).unwrap();

    // RustFFT never normalizes and uses the same sign convention for the inverse transform.
    let mut expected = input.clone();
    rustfft::FftPlanner::<f64>::new().plan_fft_inverse(len).process(&mut expected);

    let scale = input.iter().map(|z| z.norm()).fold(1.0, f64::max) * len as f64;

    for (a, e) in actual.iter().zip(&expected) {
        assert!((a - e).norm() <= 1e-9 * scale);
    }
});

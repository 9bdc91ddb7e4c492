#![no_main]

use libfuzzer_sys::fuzz_target;

use resona_core::dsp::wavelet::Wavelet;

fuzz_target!(|data: Vec<i32>| {
    for wavelet in [Wavelet::Haar, Wavelet::Cdf53] {
        let mut x = data.clone();

        if !data.len().is_power_of_two() {
            assert!(wavelet.forward(&mut x).is_err());
            assert_eq!(x, data);
            continue;
        }

        wavelet.forward(&mut x).unwrap();
        wavelet.inverse(&mut x).unwrap();

        assert_eq!(x, data);

        let mut x: Vec<i16> = data.iter().map(|&s| s as i16).collect();
        let copy = x.clone();

        wavelet.forward(&mut x).unwrap();
        wavelet.inverse(&mut x).unwrap();

        assert_eq!(x, copy);
    }
});

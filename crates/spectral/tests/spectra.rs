//! Integration tests: both estimators agree on clean periodic signals, and
//! the colour fit distinguishes white from reddened noise.

use approx::assert_relative_eq;
use envpred_spectral::{
    fft_periodogram, lomb_scargle, noise_colour, spectrum, Sampling, SpectralError,
    SpectralMethod,
};
use std::f64::consts::PI;

fn sinusoid(n: usize, period: f64) -> Vec<f64> {
    (0..n).map(|i| (2.0 * PI * i as f64 / period).sin()).collect()
}

#[test]
fn estimators_agree_on_peak_frequency() {
    let n = 256;
    let values = sinusoid(n, 16.0);
    let times: Vec<f64> = (0..n).map(|i| i as f64).collect();

    let fft_table = fft_periodogram(&values, 1.0).unwrap();
    let ls_table = lomb_scargle(&times, &values, 1.0).unwrap();

    let fft_peak = fft_table
        .rows()
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap())
        .unwrap()
        .0;
    let ls_peak = ls_table
        .rows()
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap())
        .unwrap()
        .0;

    assert_relative_eq!(fft_peak, 1.0 / 16.0, epsilon = 1e-12);
    assert_relative_eq!(ls_peak, fft_peak, epsilon = 1e-12);
}

#[test]
fn both_tables_share_the_frequency_band() {
    let n = 200;
    let values = sinusoid(n, 10.0);
    let times: Vec<f64> = (0..n).map(|i| i as f64).collect();

    let fft_table = fft_periodogram(&values, 1.0).unwrap();
    let ls_table = lomb_scargle(&times, &values, 1.0).unwrap();

    assert_eq!(fft_table.frequencies(), ls_table.frequencies());
    assert_relative_eq!(fft_table.frequencies()[0], 0.01, epsilon = 1e-12);
    assert_relative_eq!(*fft_table.frequencies().last().unwrap(), 0.5, epsilon = 1e-12);
}

#[test]
fn dispatch_routes_by_method() {
    let n = 64;
    let values = sinusoid(n, 8.0);
    let times: Vec<f64> = (0..n).map(|i| i as f64).collect();

    assert!(spectrum(SpectralMethod::Regular, Sampling::Regular, &times, &values, 1.0).is_ok());
    assert!(spectrum(SpectralMethod::Irregular, Sampling::Irregular, &times, &values, 1.0).is_ok());
    assert!(matches!(
        spectrum(SpectralMethod::Regular, Sampling::Irregular, &times, &values, 1.0),
        Err(SpectralError::IncompatibleSampling)
    ));
}

#[test]
fn white_noise_colour_is_near_zero() {
    // Deterministic pseudo-random white noise (LCG), no rand dependency.
    let mut state = 12345_u64;
    let mut next = || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 33) as f64 / (1u64 << 31) as f64 - 1.0
    };
    let values: Vec<f64> = (0..2048).map(|_| next()).collect();

    let table = fft_periodogram(&values, 1.0).unwrap();
    let fit = noise_colour(&table).unwrap();
    assert!(
        fit.colour() < 0.25,
        "white noise should be near colour 0, got {}",
        fit.colour()
    );
}

#[test]
fn integrated_noise_is_reddened() {
    // A random walk has a 1/f^2 spectrum; its colour must far exceed white.
    let mut state = 99_u64;
    let mut next = || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 33) as f64 / (1u64 << 31) as f64 - 1.0
    };
    let mut walk = Vec::with_capacity(2048);
    let mut acc = 0.0;
    for _ in 0..2048 {
        acc += next();
        walk.push(acc);
    }

    let table = fft_periodogram(&walk, 1.0).unwrap();
    let fit = noise_colour(&table).unwrap();
    assert!(
        fit.colour() > 1.2,
        "random walk should be strongly reddened, got {}",
        fit.colour()
    );
}

//! FFT periodogram for evenly spaced series.

use num_complex::Complex;
use rustfft::FftPlanner;
use tracing::debug;

use crate::error::SpectralError;
use crate::frequency_grid;
use crate::table::SpectrumTable;

/// Discrete power spectrum of an evenly spaced, de-meaned series.
///
/// Power at frequency `k / (n * delta)` is `|X_k|^2 / n` for the DFT
/// coefficient `X_k`, reported over the band `[2/(n*delta), 1/(2*delta)]`.
///
/// # Errors
///
/// Returns [`SpectralError::MissingValues`] if any value is non-finite (the
/// FFT has no way to skip them; the Lomb-Scargle method does),
/// [`SpectralError::InvalidDelta`] for a non-positive or non-finite delta,
/// and [`SpectralError::TooFewFrequencies`] when the band holds fewer than
/// 2 rows.
pub fn fft_periodogram(values: &[f64], delta: f64) -> Result<SpectrumTable, SpectralError> {
    if !delta.is_finite() || delta <= 0.0 {
        return Err(SpectralError::InvalidDelta { delta });
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(SpectralError::MissingValues);
    }

    let n = values.len();
    let freqs = frequency_grid(n, delta);
    if freqs.len() < 2 {
        return Err(SpectralError::TooFewFrequencies { n_rows: freqs.len() });
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let mut buffer: Vec<Complex<f64>> = values
        .iter()
        .map(|&v| Complex::new(v - mean, 0.0))
        .collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);
    fft.process(&mut buffer);

    // Band is k = 2..=n/2; aligned with frequency_grid.
    let powers: Vec<f64> = (2..=n / 2).map(|k| buffer[k].norm_sqr() / n as f64).collect();

    debug!(n, delta, n_rows = powers.len(), "computed FFT periodogram");
    Ok(SpectrumTable::new(freqs, powers))
}

//! Power spectra and noise-colour estimation for the envpred pipeline.
//!
//! Two estimators produce the same [`SpectrumTable`] shape: an FFT
//! periodogram for evenly spaced series and a Lomb-Scargle periodogram for
//! irregular ones. Both confine reported frequencies to the band between
//! `2 / (n * delta)` and the Nyquist frequency `1 / (2 * delta)`. The noise
//! colour is the absolute slope of an OLS fit of log10 power on log10
//! frequency over that band.

mod colour;
mod error;
mod fft;
mod lomb;
mod table;

pub use colour::{noise_colour, NoiseFit};
pub use error::SpectralError;
pub use fft::fft_periodogram;
pub use lomb::lomb_scargle;
pub use table::SpectrumTable;

/// How the caller declares the series to be sampled in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sampling {
    /// Evenly spaced observations (equal date deltas).
    #[default]
    Regular,
    /// Unevenly spaced observations.
    Irregular,
}

/// Which spectral estimator to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpectralMethod {
    /// FFT periodogram. Requires regular sampling and no missing values.
    #[default]
    Regular,
    /// Lomb-Scargle periodogram. Tolerates irregular sampling and missing
    /// values (they are omitted from the sums).
    Irregular,
}

/// Produces a spectrum table with the estimator selected by `method`.
///
/// `times` is the elapsed-day predictor aligned with `values`; `delta` is the
/// nominal sampling interval in the same units.
///
/// # Errors
///
/// Returns [`SpectralError::IncompatibleSampling`] when the regular method is
/// asked to handle irregularly sampled data, and propagates the estimator
/// errors otherwise.
pub fn spectrum(
    method: SpectralMethod,
    sampling: Sampling,
    times: &[f64],
    values: &[f64],
    delta: f64,
) -> Result<SpectrumTable, SpectralError> {
    match method {
        SpectralMethod::Regular => {
            if sampling == Sampling::Irregular {
                return Err(SpectralError::IncompatibleSampling);
            }
            fft_periodogram(values, delta)
        }
        SpectralMethod::Irregular => lomb_scargle(times, values, delta),
    }
}

/// Frequencies `k / (n * delta)` for `k = 2..=n/2`: the band from
/// `2 / (n * delta)` up to the Nyquist frequency.
pub(crate) fn frequency_grid(n: usize, delta: f64) -> Vec<f64> {
    (2..=n / 2)
        .map(|k| k as f64 / (n as f64 * delta))
        .collect()
}

//! Noise colour: power-law exponent of the spectrum.

use envpred_regression::{ols, OlsFit, RegressionError};

use crate::error::SpectralError;
use crate::table::SpectrumTable;

/// A fitted `1/f^theta` power-law noise model.
///
/// Keeps the full log-log regression so downstream consumers can report fit
/// quality or draw the fitted line over the spectrum.
#[derive(Debug, Clone)]
pub struct NoiseFit {
    /// Spectral exponent theta (absolute log-log slope). 0 is white noise.
    colour: f64,
    /// The underlying OLS fit of log10 power on log10 frequency.
    fit: OlsFit,
}

impl NoiseFit {
    /// Returns the spectral exponent theta.
    pub fn colour(&self) -> f64 {
        self.colour
    }

    /// Returns the signed log-log slope (usually negative for reddened noise).
    pub fn slope(&self) -> f64 {
        self.fit.slope()
    }

    /// Returns the log-log intercept.
    pub fn intercept(&self) -> f64 {
        self.fit.intercept()
    }

    /// Returns the coefficient of determination of the log-log fit.
    pub fn r_squared(&self) -> f64 {
        self.fit.r_squared()
    }

    /// Returns the two-sided p-value for the log-log slope.
    pub fn slope_p_value(&self) -> f64 {
        self.fit.slope_p_value()
    }
}

/// Fits log10 power against log10 frequency and reports `theta = |slope|`.
///
/// Rows with zero power drop out of the fit (their log is non-finite and the
/// regression excludes non-finite pairs).
///
/// # Errors
///
/// Returns [`SpectralError::TooFewFrequencies`] when fewer than 2 usable rows
/// remain.
pub fn noise_colour(spectrum: &SpectrumTable) -> Result<NoiseFit, SpectralError> {
    let log_freq: Vec<f64> = spectrum.frequencies().iter().map(|f| f.log10()).collect();
    let log_power: Vec<f64> = spectrum.powers().iter().map(|p| p.log10()).collect();

    let fit = ols(&log_freq, &log_power).map_err(|e| match e {
        RegressionError::TooFewPoints { n_finite } => {
            SpectralError::TooFewFrequencies { n_rows: n_finite }
        }
        // Frequencies are strictly increasing, so a constant predictor can
        // only mean a degenerate table.
        RegressionError::ConstantPredictor | RegressionError::LengthMismatch { .. } => {
            SpectralError::TooFewFrequencies { n_rows: spectrum.len() }
        }
    })?;

    Ok(NoiseFit {
        colour: fit.slope().abs(),
        fit,
    })
}

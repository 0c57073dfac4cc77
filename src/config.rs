//! Configuration for a predictability run.

use envpred_colwell::DEFAULT_N_STATES;
use envpred_spectral::{Sampling, SpectralMethod};

use crate::error::EnvPredError;

/// Options for [`predictability`](crate::predictability).
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use envpred::{PredictabilityConfig, Sampling, SpectralMethod};
///
/// let config = PredictabilityConfig::new()
///     .with_delta(1.0)
///     .with_sampling(Sampling::Irregular)
///     .with_noise_method(SpectralMethod::Irregular);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct PredictabilityConfig {
    /// Nominal sampling interval in days.
    delta: f64,
    /// How the series is sampled in time.
    sampling: Sampling,
    /// Whether to linearly interpolate interior missing values before
    /// detrending.
    interpolate_missing: bool,
    /// Which spectral estimator feeds the noise-colour fit.
    noise_method: SpectralMethod,
    /// Number of Colwell states.
    n_states: usize,
}

impl PredictabilityConfig {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: `delta = 1.0`, `sampling = Regular`,
    /// `interpolate_missing = false`, `noise_method = Regular`,
    /// `n_states = 11`.
    pub fn new() -> Self {
        Self {
            delta: 1.0,
            sampling: Sampling::Regular,
            interpolate_missing: false,
            noise_method: SpectralMethod::Regular,
            n_states: DEFAULT_N_STATES,
        }
    }

    /// Sets the nominal sampling interval in days.
    pub fn with_delta(mut self, delta: f64) -> Self {
        self.delta = delta;
        self
    }

    /// Declares how the series is sampled in time.
    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Enables linear interpolation of interior missing values.
    pub fn with_interpolate_missing(mut self, interpolate: bool) -> Self {
        self.interpolate_missing = interpolate;
        self
    }

    /// Selects the spectral estimator for the noise colour.
    pub fn with_noise_method(mut self, method: SpectralMethod) -> Self {
        self.noise_method = method;
        self
    }

    /// Sets the number of Colwell states.
    pub fn with_n_states(mut self, n_states: usize) -> Self {
        self.n_states = n_states;
        self
    }

    /// Returns the nominal sampling interval.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Returns the declared sampling distribution.
    pub fn sampling(&self) -> Sampling {
        self.sampling
    }

    /// Returns whether interior missing values are interpolated.
    pub fn interpolate_missing(&self) -> bool {
        self.interpolate_missing
    }

    /// Returns the spectral estimator selection.
    pub fn noise_method(&self) -> SpectralMethod {
        self.noise_method
    }

    /// Returns the number of Colwell states.
    pub fn n_states(&self) -> usize {
        self.n_states
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EnvPredError::InvalidArgument`] if delta is non-finite or
    /// non-positive, or if `n_states < 2`.
    pub fn validate(&self) -> Result<(), EnvPredError> {
        if !self.delta.is_finite() || self.delta <= 0.0 {
            return Err(EnvPredError::InvalidArgument(format!(
                "delta must be finite and positive, got {}",
                self.delta
            )));
        }
        if self.n_states < 2 {
            return Err(EnvPredError::InvalidArgument(format!(
                "n_states must be >= 2, got {}",
                self.n_states
            )));
        }
        Ok(())
    }
}

impl Default for PredictabilityConfig {
    fn default() -> Self {
        Self::new()
    }
}

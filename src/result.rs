//! The assembled predictability record.

use serde::Serialize;

use envpred_spectral::{NoiseFit, SpectrumTable};

use crate::detrend::DetrendResult;
use crate::error::EnvPredError;
use crate::seasonal::SeasonalDecomposition;

/// Every scalar descriptor computed for one series, plus the intermediate
/// series a visualization layer may want.
///
/// Created once per invocation and immutable afterwards. The scalar block
/// serialises to JSON; the attached series are reachable through accessors
/// only.
#[derive(Debug, Clone, Serialize)]
pub struct PredictabilityStats {
    // Descriptive.
    pub(crate) n: usize,
    pub(crate) n_missing: usize,
    pub(crate) proportion_missing: f64,
    pub(crate) n_days: i64,
    pub(crate) n_months: usize,
    pub(crate) n_years: f64,
    pub(crate) nominal_frequency: f64,
    pub(crate) nyquist_frequency: f64,
    pub(crate) raw_mean: f64,
    pub(crate) raw_variance: f64,
    pub(crate) raw_cv: f64,
    // Seasonality.
    pub(crate) predicted_variance: f64,
    pub(crate) unpredicted_variance: f64,
    pub(crate) bounded_seasonality: f64,
    pub(crate) unbounded_seasonality: f64,
    // Noise.
    pub(crate) noise_colour: f64,
    // Colwell.
    pub(crate) constancy: f64,
    pub(crate) contingency: f64,
    pub(crate) predictability: f64,
    // Attached series for plotting; not part of the scalar record.
    #[serde(skip)]
    pub(crate) detrend: DetrendResult,
    #[serde(skip)]
    pub(crate) decomposition: SeasonalDecomposition,
    #[serde(skip)]
    pub(crate) spectrum: SpectrumTable,
    #[serde(skip)]
    pub(crate) noise_fit: Option<NoiseFit>,
}

impl PredictabilityStats {
    /// Series length.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of missing observations.
    pub fn n_missing(&self) -> usize {
        self.n_missing
    }

    /// Proportion of missing observations.
    pub fn proportion_missing(&self) -> f64 {
        self.proportion_missing
    }

    /// Inclusive span in days.
    pub fn n_days(&self) -> i64 {
        self.n_days
    }

    /// Distinct calendar months spanned.
    pub fn n_months(&self) -> usize {
        self.n_months
    }

    /// Span in years (`n_months / 12`).
    pub fn n_years(&self) -> f64 {
        self.n_years
    }

    /// Nominal sampling frequency `1 / delta`.
    pub fn nominal_frequency(&self) -> f64 {
        self.nominal_frequency
    }

    /// Nyquist frequency `1 / (2 * delta)`.
    pub fn nyquist_frequency(&self) -> f64 {
        self.nyquist_frequency
    }

    /// Mean of the raw values, missing ignored.
    pub fn raw_mean(&self) -> f64 {
        self.raw_mean
    }

    /// Sample variance of the raw values, missing ignored.
    pub fn raw_variance(&self) -> f64 {
        self.raw_variance
    }

    /// Coefficient of variation of the raw values.
    pub fn raw_cv(&self) -> f64 {
        self.raw_cv
    }

    /// Variance of the interpolated seasonal curve.
    pub fn predicted_variance(&self) -> f64 {
        self.predicted_variance
    }

    /// Variance of the unpredicted residuals.
    pub fn unpredicted_variance(&self) -> f64 {
        self.unpredicted_variance
    }

    /// Bounded seasonality `predicted / (predicted + unpredicted)`.
    pub fn bounded_seasonality(&self) -> f64 {
        self.bounded_seasonality
    }

    /// Unbounded seasonality `predicted / unpredicted`.
    pub fn unbounded_seasonality(&self) -> f64 {
        self.unbounded_seasonality
    }

    /// Spectral exponent theta of the unpredicted residuals.
    pub fn noise_colour(&self) -> f64 {
        self.noise_colour
    }

    /// Colwell constancy.
    pub fn constancy(&self) -> f64 {
        self.constancy
    }

    /// Colwell contingency.
    pub fn contingency(&self) -> f64 {
        self.contingency
    }

    /// Colwell predictability (constancy + contingency).
    pub fn predictability(&self) -> f64 {
        self.predictability
    }

    /// The detrending output (predictor and residuals).
    pub fn detrend(&self) -> &DetrendResult {
        &self.detrend
    }

    /// The seasonal decomposition (curve and unpredicted residuals).
    pub fn decomposition(&self) -> &SeasonalDecomposition {
        &self.decomposition
    }

    /// The spectrum the noise colour was fitted on.
    pub fn spectrum(&self) -> &SpectrumTable {
        &self.spectrum
    }

    /// The fitted noise model (slope, intercept, R², p-value).
    ///
    /// `None` when the spectrum was degenerate (no positive power to fit);
    /// [`noise_colour`](Self::noise_colour) is NaN in that case.
    pub fn noise_fit(&self) -> Option<&NoiseFit> {
        self.noise_fit.as_ref()
    }

    /// Serialises the scalar record to a JSON string.
    ///
    /// Non-finite scalars serialise as `null`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvPredError::InvalidInput`] if serialization fails, which
    /// would indicate a bug rather than bad user input.
    pub fn to_json(&self) -> Result<String, EnvPredError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| EnvPredError::InvalidInput(format!("serialization error: {e}")))
    }
}

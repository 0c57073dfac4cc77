//! # envpred
//!
//! Statistical descriptors of environmental time series: linear-trend
//! removal, monthly seasonal decomposition, spectral noise colour, and
//! Colwell's (1974) constancy / contingency / predictability.
//!
//! The pipeline runs detrend → monthly seasonal interpolation → residual
//! split, feeds the unpredicted residuals into a spectral colour fit, and
//! independently discretises the raw series for the Colwell metrics:
//!
//! ```text
//! values + dates ─► detrend ─► seasonal decomposition ─► seasonality ratios
//!                                        │
//!                                        └► spectrum ─► noise colour
//! values + dates ─► month×year means ─► contingency table ─► C, M, P
//! ```
//!
//! Everything is pure, synchronous, and single-threaded; a call owns its
//! intermediates and returns one immutable [`PredictabilityStats`] record.
//!
//! ## Quick start
//!
//! ```
//! use chrono::NaiveDate;
//! use envpred::{predictability, PredictabilityConfig, Series};
//!
//! // Ten years of daily observations with an annual cycle.
//! let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
//! let dates: Vec<NaiveDate> = (0..3650u64).map(|i| start + chrono::Days::new(i)).collect();
//! let values: Vec<f64> = (0..3650)
//!     .map(|i| (2.0 * std::f64::consts::PI * i as f64 / 365.25).sin())
//!     .collect();
//!
//! let series = Series::new(values, dates).unwrap();
//! let stats = predictability(&series, &PredictabilityConfig::new()).unwrap();
//! assert!(stats.bounded_seasonality() > 0.95);
//! ```

mod config;
mod detrend;
mod error;
mod result;
mod seasonal;
mod series;

use chrono::Datelike;
use tracing::{debug, warn};

use envpred_calendar::{day_offset, elapsed_days, month_sequence};
use envpred_spectral::{noise_colour, spectrum, SpectralError};

pub use config::PredictabilityConfig;
pub use detrend::{detrend, DetrendResult};
pub use error::EnvPredError;
pub use result::PredictabilityStats;
pub use seasonal::{decompose, seasonality, SeasonalDecomposition, Seasonality};
pub use series::Series;

// Building blocks re-exported for callers assembling custom pipelines.
pub use envpred_colwell::{ColwellStats, DEFAULT_N_STATES};
pub use envpred_regression::OlsFit;
pub use envpred_spectral::{NoiseFit, Sampling, SpectralMethod, SpectrumTable};

/// Advisory threshold: below this many distinct months the seasonal and
/// spectral estimates lose reliability.
const SHORT_SERIES_MONTHS: usize = 120;

/// Runs the full predictability pipeline over one series.
///
/// Advisory conditions (short span, missing values without interpolation,
/// partial first/last years) log warnings and continue; numeric edge cases
/// (zero variances, degenerate spectra) propagate as non-finite scalars in
/// the record. Only input faults and genuinely unusable data fail.
///
/// # Errors
///
/// Returns [`EnvPredError::InvalidArgument`] for a bad configuration,
/// [`EnvPredError::InsufficientData`] when too few usable observations
/// remain at any stage, and [`EnvPredError::IncompatibleMethod`] when the
/// regular spectral method meets missing values or irregularly flagged data.
pub fn predictability(
    series: &Series,
    config: &PredictabilityConfig,
) -> Result<PredictabilityStats, EnvPredError> {
    config.validate()?;

    let months = month_sequence(series.first_date(), series.last_date());
    diagnose(series, config, months.len());

    let predictor = elapsed_days(series.dates())?;

    let values: Vec<f64> = if config.interpolate_missing() && series.n_missing() > 0 {
        warn!(
            n_missing = series.n_missing(),
            "interpolating interior missing values before detrending"
        );
        envpred_stats::interpolate_gaps(series.values(), &predictor)
    } else {
        series.values().to_vec()
    };

    let detrended = detrend(&predictor, &values)?;
    let decomposition = decompose(&detrended, series.dates());
    let season = seasonality(&decomposition);
    debug!(
        predicted_variance = season.predicted_variance(),
        unpredicted_variance = season.unpredicted_variance(),
        "seasonal decomposition complete"
    );

    let table = spectrum(
        config.noise_method(),
        config.sampling(),
        detrended.predictor(),
        decomposition.unpredicted_residuals(),
        config.delta(),
    )?;
    // A spectrum with rows but no positive power (e.g. all-zero residuals
    // after a perfect trend fit) is a valid degenerate answer: the colour is
    // undefined rather than an error.
    let noise_fit = match noise_colour(&table) {
        Ok(fit) => {
            debug!(colour = fit.colour(), "fitted noise colour");
            Some(fit)
        }
        Err(SpectralError::TooFewFrequencies { .. }) => {
            warn!("spectrum has no positive power; noise colour is undefined");
            None
        }
        Err(e) => return Err(e.into()),
    };

    // Colwell runs on the raw values, independent of the detrending pass.
    let colwell_stats =
        envpred_colwell::colwell(series.values(), series.dates(), config.n_states())?;

    Ok(PredictabilityStats {
        n: series.len(),
        n_missing: series.n_missing(),
        proportion_missing: series.proportion_missing(),
        n_days: day_offset(series.first_date(), series.last_date()) + 1,
        n_months: months.len(),
        n_years: months.len() as f64 / 12.0,
        nominal_frequency: 1.0 / config.delta(),
        nyquist_frequency: 1.0 / (2.0 * config.delta()),
        raw_mean: envpred_stats::mean(series.values()),
        raw_variance: envpred_stats::variance(series.values()),
        raw_cv: envpred_stats::coefficient_of_variation(series.values()),
        predicted_variance: season.predicted_variance(),
        unpredicted_variance: season.unpredicted_variance(),
        bounded_seasonality: season.bounded(),
        unbounded_seasonality: season.unbounded(),
        noise_colour: noise_fit.as_ref().map_or(f64::NAN, NoiseFit::colour),
        constancy: colwell_stats.constancy(),
        contingency: colwell_stats.contingency(),
        predictability: colwell_stats.predictability(),
        detrend: detrended,
        decomposition,
        spectrum: table,
        noise_fit,
    })
}

/// Computes Colwell's metrics alone, on the raw series.
///
/// `n_states` defaults to 11 in [`PredictabilityConfig`]; pass
/// [`DEFAULT_N_STATES`] to match.
///
/// # Errors
///
/// Returns [`EnvPredError::InvalidArgument`] for `n_states < 2` and
/// [`EnvPredError::InsufficientData`] for an all-missing series.
pub fn colwell(series: &Series, n_states: usize) -> Result<ColwellStats, EnvPredError> {
    envpred_colwell::colwell(series.values(), series.dates(), n_states).map_err(Into::into)
}

/// Computes Colwell's metrics with the default 11 states.
///
/// # Errors
///
/// See [`colwell`].
pub fn colwell_default(series: &Series) -> Result<ColwellStats, EnvPredError> {
    colwell(series, DEFAULT_N_STATES)
}

/// Warn-and-continue diagnostics; none of these abort the run.
fn diagnose(series: &Series, config: &PredictabilityConfig, n_months: usize) {
    if n_months < SHORT_SERIES_MONTHS {
        warn!(
            n_months,
            threshold = SHORT_SERIES_MONTHS,
            "series spans few months; seasonal and spectral estimates may be unreliable"
        );
    }
    if series.n_missing() > 0 && !config.interpolate_missing() {
        warn!(
            n_missing = series.n_missing(),
            "series contains missing values; aggregations ignore them"
        );
    }
    // Complete-year coverage means the last month immediately precedes the
    // first month in cyclic order.
    let first_month = series.first_date().month0();
    let last_month = series.last_date().month0();
    if (last_month + 1) % 12 != first_month {
        warn!(
            start_month = first_month + 1,
            end_month = last_month + 1,
            "series does not span whole calendar years; monthly means are unbalanced"
        );
    }
}

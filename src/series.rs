//! Validated input series: one value per strictly increasing date.

use chrono::NaiveDate;

use crate::error::EnvPredError;

/// An environmental time series.
///
/// Values use NaN as the missing sentinel; dates are strictly increasing with
/// one observation per date. The pipeline never mutates a series, it only
/// derives new vectors from it.
#[derive(Debug, Clone)]
pub struct Series {
    values: Vec<f64>,
    dates: Vec<NaiveDate>,
}

impl Series {
    /// Builds a series after validating its shape.
    ///
    /// # Errors
    ///
    /// Returns [`EnvPredError::InvalidInput`] when the vectors differ in
    /// length, hold fewer than 2 observations, or the dates are not strictly
    /// increasing.
    pub fn new(values: Vec<f64>, dates: Vec<NaiveDate>) -> Result<Self, EnvPredError> {
        if values.len() != dates.len() {
            return Err(EnvPredError::InvalidInput(format!(
                "values length {} does not match dates length {}",
                values.len(),
                dates.len()
            )));
        }
        if values.len() < 2 {
            return Err(EnvPredError::InvalidInput(format!(
                "need at least 2 observations, got {}",
                values.len()
            )));
        }
        if let Some(pos) = dates.windows(2).position(|w| w[1] <= w[0]) {
            return Err(EnvPredError::InvalidInput(format!(
                "dates must be strictly increasing, violated at index {}",
                pos + 1
            )));
        }

        Ok(Self { values, dates })
    }

    /// Returns the values (NaN marks missing observations).
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the dates.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: construction requires at least 2 observations.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// First observation date.
    pub fn first_date(&self) -> NaiveDate {
        self.dates[0]
    }

    /// Last observation date.
    pub fn last_date(&self) -> NaiveDate {
        self.dates[self.dates.len() - 1]
    }

    /// Number of missing (non-finite) values.
    pub fn n_missing(&self) -> usize {
        envpred_stats::count_missing(&self.values)
    }

    /// Proportion of missing values.
    pub fn proportion_missing(&self) -> f64 {
        self.n_missing() as f64 / self.len() as f64
    }
}

//! Month-year binning and the state-by-month contingency table.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::error::ColwellError;

/// A state-by-month count matrix.
///
/// Rows are discretised value states (equal-width intervals over the observed
/// range of month-year means), columns are calendar months 1..=12. A cell
/// counts the (month, year) combinations whose mean fell into that state.
#[derive(Debug, Clone)]
pub struct ColwellTable {
    /// counts[state][month - 1]
    counts: Vec<[u32; 12]>,
    n_states: usize,
    total: u32,
}

impl ColwellTable {
    /// Builds the table from a raw series.
    ///
    /// # Errors
    ///
    /// Returns [`ColwellError::InvalidStates`] for `n_states < 2`,
    /// [`ColwellError::LengthMismatch`] for misaligned inputs, and
    /// [`ColwellError::AllMissing`] if every (month, year) cell is empty.
    pub fn build(
        values: &[f64],
        dates: &[NaiveDate],
        n_states: usize,
    ) -> Result<Self, ColwellError> {
        if n_states < 2 {
            return Err(ColwellError::InvalidStates { n_states });
        }
        if values.len() != dates.len() {
            return Err(ColwellError::LengthMismatch {
                values_len: values.len(),
                dates_len: dates.len(),
            });
        }

        let means = month_year_means(values, dates);
        if means.is_empty() {
            return Err(ColwellError::AllMissing);
        }

        let min = means.values().cloned().fold(f64::INFINITY, f64::min);
        let max = means.values().cloned().fold(f64::NEG_INFINITY, f64::max);

        let mut counts = vec![[0u32; 12]; n_states];
        let mut total = 0u32;
        for (&(_, month), &mean) in &means {
            let state = discretise(mean, min, max, n_states);
            counts[state][(month - 1) as usize] += 1;
            total += 1;
        }

        Ok(Self {
            counts,
            n_states,
            total,
        })
    }

    /// Number of value states (rows).
    pub fn n_states(&self) -> usize {
        self.n_states
    }

    /// Grand total of cell counts.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Count for one (state, month) cell; `month` is 1..=12.
    pub fn count(&self, state: usize, month: u32) -> u32 {
        self.counts[state][(month - 1) as usize]
    }

    /// Column sums `X[month]` over all states, indexed by month - 1.
    pub fn month_sums(&self) -> [u32; 12] {
        let mut sums = [0u32; 12];
        for row in &self.counts {
            for (m, &c) in row.iter().enumerate() {
                sums[m] += c;
            }
        }
        sums
    }

    /// Row sums `Y[state]` over all months.
    pub fn state_sums(&self) -> Vec<u32> {
        self.counts
            .iter()
            .map(|row| row.iter().sum::<u32>())
            .collect()
    }

    /// Iterates over all cell counts.
    pub fn cells(&self) -> impl Iterator<Item = u32> + '_ {
        self.counts.iter().flat_map(|row| row.iter().copied())
    }
}

/// Mean of the finite values in each (year, month) cell; empty cells omitted.
fn month_year_means(values: &[f64], dates: &[NaiveDate]) -> BTreeMap<(i32, u32), f64> {
    let mut sums: BTreeMap<(i32, u32), (f64, u32)> = BTreeMap::new();
    for (&v, d) in values.iter().zip(dates.iter()) {
        if v.is_finite() {
            let entry = sums.entry((d.year(), d.month())).or_insert((0.0, 0));
            entry.0 += v;
            entry.1 += 1;
        }
    }
    sums.into_iter()
        .map(|(key, (sum, count))| (key, sum / count as f64))
        .collect()
}

/// Maps a mean into its state index: equal-width, left-closed intervals over
/// `[min, max]`, with the maximum clamped into the top state.
fn discretise(value: f64, min: f64, max: f64, n_states: usize) -> usize {
    let range = max - min;
    if range <= 0.0 {
        return 0;
    }
    let idx = ((value - min) / range * n_states as f64).floor() as usize;
    idx.min(n_states - 1)
}

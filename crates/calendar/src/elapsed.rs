//! Elapsed-day predictor derivation.

use chrono::NaiveDate;

use crate::error::CalendarError;

/// Signed whole days from `origin` to `date`.
pub fn day_offset(origin: NaiveDate, date: NaiveDate) -> i64 {
    (date - origin).num_days()
}

/// Converts a sorted date vector into elapsed whole days since the first date.
///
/// The first element is always `0.0` and the sequence is strictly increasing,
/// matching the date deltas exactly.
///
/// # Errors
///
/// Returns [`CalendarError::EmptyDates`] for an empty slice and
/// [`CalendarError::NotIncreasing`] if any date is not strictly after its
/// predecessor.
pub fn elapsed_days(dates: &[NaiveDate]) -> Result<Vec<f64>, CalendarError> {
    let first = *dates.first().ok_or(CalendarError::EmptyDates)?;

    for (i, pair) in dates.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(CalendarError::NotIncreasing { index: i + 1 });
        }
    }

    Ok(dates.iter().map(|&d| day_offset(first, d) as f64).collect())
}

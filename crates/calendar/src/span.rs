//! Month sequences and midpoint interpolation knots.
//!
//! The seasonal interpolation in the main pipeline anchors one knot per
//! (month, year) combination spanned by the observations. The knot's
//! x-coordinate is the median date of a synthetic daily calendar covering
//! that month in full, which for equally spaced days is the month midpoint.
//! Working at daily resolution keeps months of different lengths (and leap
//! Februaries) correct without special cases.

use chrono::{Datelike, NaiveDate};

use crate::elapsed::day_offset;
use crate::month::last_day_of_month;

/// A calendar month with year context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1..=12).
    pub month: u32,
}

impl YearMonth {
    /// The month immediately after this one, wrapping December to January.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

/// An interpolation knot at the midpoint of one (month, year) combination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthMidpoint {
    /// The month this knot belongs to.
    pub year_month: YearMonth,
    /// Midpoint as fractional days relative to the supplied origin date.
    ///
    /// Negative when the origin falls late in the first month.
    pub offset: f64,
}

/// Every distinct (year, month) pair from `first`'s month through `last`'s
/// month, inclusive, in calendar order.
///
/// Returns an empty vector if `last` precedes `first`.
pub fn month_sequence(first: NaiveDate, last: NaiveDate) -> Vec<YearMonth> {
    let end = YearMonth {
        year: last.year(),
        month: last.month(),
    };
    let mut current = YearMonth {
        year: first.year(),
        month: first.month(),
    };

    let mut months = Vec::new();
    while current <= end {
        months.push(current);
        current = current.next();
    }
    months
}

/// Midpoint knots for every month spanned by `[first, last]`, with
/// x-coordinates expressed as fractional days since `origin`.
///
/// Each month is treated as its full synthetic daily calendar (1st through
/// true last day); the median of those equally spaced days is the first day's
/// offset plus `(length - 1) / 2`, landing on a half day for even-length
/// months.
pub fn month_midpoints(first: NaiveDate, last: NaiveDate, origin: NaiveDate) -> Vec<MonthMidpoint> {
    month_sequence(first, last)
        .into_iter()
        .map(|ym| {
            let month_start = NaiveDate::from_ymd_opt(ym.year, ym.month, 1)
                .expect("day 1 is valid in every month");
            let length = last_day_of_month(ym.year, ym.month);
            let offset = day_offset(origin, month_start) as f64 + (length - 1) as f64 / 2.0;
            MonthMidpoint {
                year_month: ym,
                offset,
            }
        })
        .collect()
}

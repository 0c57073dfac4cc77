//! Integration tests covering month spans across leap boundaries.

use approx::assert_relative_eq;
use chrono::NaiveDate;
use envpred_calendar::{elapsed_days, month_midpoints, month_sequence, CalendarError};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn decade_of_months() {
    // Jan 1990 through Dec 1999 inclusive: 120 months.
    let months = month_sequence(ymd(1990, 1, 15), ymd(1999, 12, 3));
    assert_eq!(months.len(), 120);
}

#[test]
fn knots_span_full_first_and_last_months() {
    // Observations start mid-January and end mid-March, but the knots cover
    // the full synthetic calendar: Jan, Feb, Mar.
    let first = ymd(2020, 1, 20);
    let last = ymd(2020, 3, 10);
    let knots = month_midpoints(first, last, first);
    assert_eq!(knots.len(), 3);

    // Jan 2020 midpoint is Jan 16 -> 4 days before Jan 20.
    assert_relative_eq!(knots[0].offset, -4.0);
    // Feb 2020 (leap, 29 days) midpoint is Feb 15 -> 26 days after Jan 20.
    assert_relative_eq!(knots[1].offset, 26.0);
    // Mar 2020 midpoint is Mar 16 -> 56 days after Jan 20.
    assert_relative_eq!(knots[2].offset, 56.0);
}

#[test]
fn elapsed_days_over_leap_year() {
    let dates: Vec<NaiveDate> = vec![ymd(2019, 12, 31), ymd(2020, 12, 31), ymd(2021, 12, 31)];
    let days = elapsed_days(&dates).unwrap();
    assert_eq!(days, vec![0.0, 366.0, 731.0]);
}

#[test]
fn elapsed_days_rejects_unsorted() {
    let dates = vec![ymd(2020, 1, 2), ymd(2020, 1, 1)];
    assert!(matches!(
        elapsed_days(&dates),
        Err(CalendarError::NotIncreasing { index: 1 })
    ));
}

//! Leap years and month lengths.

/// Month lengths for non-leap years.
const MONTH_DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns whether `year` is a Gregorian leap year.
///
/// Divisible by 4, except century years not divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the true last calendar day of `month` in `year` (28..=31).
///
/// February reports 29 in leap years.
///
/// # Panics
///
/// Panics if `month` is outside 1..=12. Callers derive months from
/// validated `chrono::NaiveDate` values, which guarantee the range.
pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    assert!(
        (1..=12).contains(&month),
        "last_day_of_month: month must be in 1..=12"
    );
    if month == 2 && is_leap_year(year) {
        29
    } else {
        MONTH_DAYS[(month - 1) as usize]
    }
}

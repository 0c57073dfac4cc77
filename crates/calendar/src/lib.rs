//! # envpred-calendar
//!
//! Gregorian date arithmetic for the envpred predictability pipeline.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["sorted dates"] -->|"elapsed_days()"| B["predictor (whole days)"]
//!     A -->|"month_sequence()"| C["Vec of YearMonth"]
//!     C -->|"month_midpoints()"| D["interpolation knots"]
//!     E["(year, month)"] -->|"last_day_of_month()"| F["28..=31"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use envpred_calendar::{elapsed_days, last_day_of_month, month_sequence};
//!
//! let dates = vec![
//!     NaiveDate::from_ymd_opt(2020, 1, 15).unwrap(),
//!     NaiveDate::from_ymd_opt(2020, 2, 15).unwrap(),
//! ];
//! let predictor = elapsed_days(&dates).unwrap();
//! assert_eq!(predictor, vec![0.0, 31.0]);
//!
//! assert_eq!(last_day_of_month(2020, 2), 29); // leap year
//! assert_eq!(month_sequence(dates[0], dates[1]).len(), 2);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `elapsed` | Elapsed-day predictor derivation |
//! | `month` | Leap years and month lengths |
//! | `span` | Month sequences and midpoint interpolation knots |
//! | `error` | Error types |

mod elapsed;
mod error;
mod month;
mod span;

pub use elapsed::{day_offset, elapsed_days};
pub use error::CalendarError;
pub use month::{is_leap_year, last_day_of_month};
pub use span::{month_midpoints, month_sequence, MonthMidpoint, YearMonth};

//! Colwell (1974) constancy, contingency, and predictability.
//!
//! The raw series is averaged into (month, year) cells, the cell means are
//! quantised into a fixed number of equal-width states, and a state-by-month
//! contingency table yields three Shannon-entropy metrics:
//!
//! - **constancy** `C = 1 - H(Y) / log2(s)` — how invariant monthly states
//!   are across years;
//! - **contingency** `M = (H(X) + H(Y) - H(XY)) / log2(s)` — how consistently
//!   the monthly pattern repeats across years;
//! - **predictability** `P = C + M`.
//!
//! This pass deliberately works on the raw values, independent of the
//! detrend-and-deseason pipeline elsewhere in envpred.

mod error;
mod metrics;
mod table;

use chrono::NaiveDate;
use tracing::debug;

pub use error::ColwellError;
pub use metrics::ColwellStats;
pub use table::ColwellTable;

/// Default number of states used to quantise month-year means.
pub const DEFAULT_N_STATES: usize = 11;

/// Computes Colwell's metrics for a raw series.
///
/// NaN values are ignored inside each (month, year) cell; cells with no
/// finite observation are dropped.
///
/// # Errors
///
/// Returns [`ColwellError::InvalidStates`] for `n_states < 2`,
/// [`ColwellError::LengthMismatch`] for misaligned inputs, and
/// [`ColwellError::AllMissing`] if no usable observation remains.
pub fn colwell(
    values: &[f64],
    dates: &[NaiveDate],
    n_states: usize,
) -> Result<ColwellStats, ColwellError> {
    let table = ColwellTable::build(values, dates, n_states)?;
    debug!(
        n_states,
        n_cells = table.total(),
        "built Colwell contingency table"
    );
    Ok(ColwellStats::from_table(&table))
}

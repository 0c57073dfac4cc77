//! Monthly seasonal decomposition and seasonality strength.
//!
//! Residuals are averaged by calendar month (year-independent), one
//! interpolation knot is placed at the midpoint of every (month, year)
//! combination spanned by the series, and a piecewise-linear curve through
//! the knots is evaluated at each observation date. Extrapolation clamps to
//! the nearest knot value.

use chrono::{Datelike, NaiveDate};
use envpred_calendar::month_midpoints;
use tracing::debug;

use crate::detrend::DetrendResult;

/// Output of the seasonal decomposition step, aligned with the input series.
#[derive(Debug, Clone)]
pub struct SeasonalDecomposition {
    interpolated_season: Vec<f64>,
    unpredicted_residuals: Vec<f64>,
}

impl SeasonalDecomposition {
    /// The seasonal curve sampled at each observation date.
    pub fn interpolated_season(&self) -> &[f64] {
        &self.interpolated_season
    }

    /// Residuals left after removing the seasonal curve.
    pub fn unpredicted_residuals(&self) -> &[f64] {
        &self.unpredicted_residuals
    }
}

/// Variance split between the seasonal curve and what it leaves behind.
#[derive(Debug, Clone, Copy)]
pub struct Seasonality {
    predicted_variance: f64,
    unpredicted_variance: f64,
    unbounded: f64,
    bounded: f64,
}

impl Seasonality {
    /// Sample variance of the interpolated seasonal curve.
    pub fn predicted_variance(&self) -> f64 {
        self.predicted_variance
    }

    /// Sample variance of the unpredicted residuals.
    pub fn unpredicted_variance(&self) -> f64 {
        self.unpredicted_variance
    }

    /// `predicted / unpredicted`. Non-finite when the denominator is zero;
    /// that is a valid computed answer, not an input fault.
    pub fn unbounded(&self) -> f64 {
        self.unbounded
    }

    /// `predicted / (predicted + unpredicted)`, confined to [0, 1] when both
    /// variances are positive.
    pub fn bounded(&self) -> f64 {
        self.bounded
    }
}

/// Decomposes detrended residuals into a monthly seasonal curve and the
/// unpredicted remainder.
///
/// A month never observed with a finite residual contributes no knot; with a
/// single usable knot the curve degenerates to a constant. Both cases proceed
/// without error.
pub fn decompose(detrended: &DetrendResult, dates: &[NaiveDate]) -> SeasonalDecomposition {
    let residuals = detrended.residuals();
    let predictor = detrended.predictor();

    // Year-independent monthly means, skipping missing residuals.
    let mut sums = [0.0f64; 12];
    let mut counts = [0u32; 12];
    for (&r, d) in residuals.iter().zip(dates.iter()) {
        if r.is_finite() {
            let m = (d.month() - 1) as usize;
            sums[m] += r;
            counts[m] += 1;
        }
    }

    // One knot per (month, year) spanned by the synthetic calendar; knots
    // for months without a mean drop out, the rest reuse the same mean
    // across years.
    let first = dates[0];
    let last = dates[dates.len() - 1];
    let mut knot_x = Vec::new();
    let mut knot_y = Vec::new();
    for knot in month_midpoints(first, last, first) {
        let m = (knot.year_month.month - 1) as usize;
        if counts[m] > 0 {
            knot_x.push(knot.offset);
            knot_y.push(sums[m] / f64::from(counts[m]));
        }
    }
    debug!(n_knots = knot_x.len(), "built seasonal interpolation knots");

    let interpolated_season: Vec<f64> = if knot_x.is_empty() {
        // Unreachable after a successful detrend; kept total for safety.
        vec![f64::NAN; residuals.len()]
    } else {
        predictor
            .iter()
            .map(|&x| interp_clamped(&knot_x, &knot_y, x))
            .collect()
    };

    let unpredicted_residuals: Vec<f64> = residuals
        .iter()
        .zip(interpolated_season.iter())
        .map(|(&r, &s)| r - s)
        .collect();

    SeasonalDecomposition {
        interpolated_season,
        unpredicted_residuals,
    }
}

/// Variance ratios for a decomposition.
pub fn seasonality(decomposition: &SeasonalDecomposition) -> Seasonality {
    let predicted_variance = envpred_stats::variance(decomposition.interpolated_season());
    let unpredicted_variance = envpred_stats::variance(decomposition.unpredicted_residuals());

    Seasonality {
        predicted_variance,
        unpredicted_variance,
        unbounded: predicted_variance / unpredicted_variance,
        bounded: predicted_variance / (predicted_variance + unpredicted_variance),
    }
}

/// Piecewise-linear interpolation through sorted knots, clamped at both ends.
fn interp_clamped(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    let last = xs.len() - 1;
    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[last] {
        return ys[last];
    }
    let i = xs.partition_point(|&k| k < x);
    let t = (x - xs[i - 1]) / (xs[i] - xs[i - 1]);
    ys[i - 1] + t * (ys[i] - ys[i - 1])
}

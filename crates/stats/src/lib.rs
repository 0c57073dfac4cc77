//! Missing-aware scalar statistics for the envpred pipeline.
//!
//! NaN is the missing-value sentinel throughout envpred, mirroring R's
//! `na.rm = TRUE` semantics: aggregations run over the present (finite)
//! values only, and return NaN when nothing usable remains.

/// Arithmetic mean over the finite values. NaN if none are finite.
pub fn mean(data: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for &x in data {
        if x.is_finite() {
            sum += x;
            count += 1;
        }
    }
    if count == 0 {
        return f64::NAN;
    }
    sum / count as f64
}

/// Sample variance with N-1 denominator over the finite values (matching R's
/// `var(x, na.rm = TRUE)`). NaN if fewer than 2 finite values.
pub fn variance(data: &[f64]) -> f64 {
    let m = mean(data);
    if m.is_nan() {
        return f64::NAN;
    }
    let mut sum_sq = 0.0;
    let mut count = 0usize;
    for &x in data {
        if x.is_finite() {
            sum_sq += (x - m) * (x - m);
            count += 1;
        }
    }
    if count < 2 {
        return f64::NAN;
    }
    sum_sq / (count - 1) as f64
}

/// Sample standard deviation over the finite values.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Coefficient of variation, `sd / mean`, over the finite values.
///
/// Non-finite when the mean is zero or the data are degenerate; the division
/// is left to propagate rather than raise.
pub fn coefficient_of_variation(data: &[f64]) -> f64 {
    sd(data) / mean(data)
}

/// Number of non-finite (missing) entries.
pub fn count_missing(data: &[f64]) -> usize {
    data.iter().filter(|x| !x.is_finite()).count()
}

/// Linearly interpolates interior missing runs of `values` against positions
/// `x` (strictly increasing, same length).
///
/// Leading and trailing missing values have no bracketing observations and
/// stay missing. Mirrors `zoo::na.approx(..., na.rm = FALSE)`.
///
/// # Panics
///
/// Panics if the slices differ in length (caller validates shape upstream).
pub fn interpolate_gaps(values: &[f64], x: &[f64]) -> Vec<f64> {
    assert_eq!(
        values.len(),
        x.len(),
        "interpolate_gaps: values and x must have the same length"
    );

    let mut out = values.to_vec();
    let mut prev: Option<usize> = None;

    for i in 0..values.len() {
        if values[i].is_finite() {
            if let Some(p) = prev {
                // Fill the open gap (p, i) from the bracketing values.
                if i > p + 1 {
                    let x0 = x[p];
                    let x1 = x[i];
                    let y0 = values[p];
                    let y1 = values[i];
                    for (j, slot) in out.iter_mut().enumerate().take(i).skip(p + 1) {
                        let t = (x[j] - x0) / (x1 - x0);
                        *slot = y0 + t * (y1 - y0);
                    }
                }
            }
            prev = Some(i);
        }
    }

    out
}

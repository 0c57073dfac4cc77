//! Simple ordinary least squares with finite-pair filtering.

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::RegressionError;

/// A fitted simple-regression line `y = intercept + slope * x`.
#[derive(Debug, Clone)]
pub struct OlsFit {
    /// Fitted slope.
    slope: f64,
    /// Fitted intercept.
    intercept: f64,
    /// Coefficient of determination. NaN when total variance is zero.
    r_squared: f64,
    /// Standard error of the slope. NaN with fewer than 3 points.
    slope_std_err: f64,
    /// Two-sided p-value for slope != 0. NaN with fewer than 3 points.
    slope_p_value: f64,
    /// Number of finite pairs used in the fit.
    n_used: usize,
}

impl OlsFit {
    /// Returns the fitted slope.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Returns the fitted intercept.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Returns the coefficient of determination.
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    /// Returns the standard error of the slope.
    pub fn slope_std_err(&self) -> f64 {
        self.slope_std_err
    }

    /// Returns the two-sided p-value for the slope.
    pub fn slope_p_value(&self) -> f64 {
        self.slope_p_value
    }

    /// Returns the number of finite pairs used in the fit.
    pub fn n_used(&self) -> usize {
        self.n_used
    }

    /// Evaluates the fitted line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Residuals `y[i] - predict(x[i])`, aligned with the input.
    ///
    /// Positions where `y` is missing yield a missing (NaN) residual.
    pub fn residuals(&self, x: &[f64], y: &[f64]) -> Vec<f64> {
        x.iter()
            .zip(y.iter())
            .map(|(&xi, &yi)| yi - self.predict(xi))
            .collect()
    }
}

/// Fits `y = intercept + slope * x` over the finite pairs.
///
/// # Errors
///
/// Returns [`RegressionError::LengthMismatch`] for unequal slice lengths,
/// [`RegressionError::TooFewPoints`] when fewer than 2 finite pairs remain,
/// and [`RegressionError::ConstantPredictor`] when x has no spread.
pub fn ols(x: &[f64], y: &[f64]) -> Result<OlsFit, RegressionError> {
    if x.len() != y.len() {
        return Err(RegressionError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }

    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y.iter())
        .filter(|(xi, yi)| xi.is_finite() && yi.is_finite())
        .map(|(&xi, &yi)| (xi, yi))
        .collect();

    let n = pairs.len();
    if n < 2 {
        return Err(RegressionError::TooFewPoints { n_finite: n });
    }

    let nf = n as f64;
    let mx: f64 = pairs.iter().map(|(xi, _)| xi).sum::<f64>() / nf;
    let my: f64 = pairs.iter().map(|(_, yi)| yi).sum::<f64>() / nf;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    let mut syy = 0.0;
    for &(xi, yi) in &pairs {
        let dx = xi - mx;
        let dy = yi - my;
        sxx += dx * dx;
        sxy += dx * dy;
        syy += dy * dy;
    }

    if sxx == 0.0 {
        return Err(RegressionError::ConstantPredictor);
    }

    let slope = sxy / sxx;
    let intercept = my - slope * mx;

    // Residual sum of squares via the identity SSE = Syy - slope * Sxy,
    // clamped at zero against rounding on perfect fits.
    let sse = (syy - slope * sxy).max(0.0);
    let r_squared = if syy > 0.0 { 1.0 - sse / syy } else { f64::NAN };

    // Slope inference needs residual degrees of freedom (n - 2 > 0).
    let (slope_std_err, slope_p_value) = if n > 2 {
        let s2 = sse / (n - 2) as f64;
        let se = (s2 / sxx).sqrt();
        let p = if se > 0.0 {
            let t = (slope / se).abs();
            match StudentsT::new(0.0, 1.0, (n - 2) as f64) {
                Ok(dist) => 2.0 * (1.0 - dist.cdf(t)),
                Err(_) => f64::NAN,
            }
        } else {
            // Exact fit: the slope is determined, not tested.
            0.0
        };
        (se, p)
    } else {
        (f64::NAN, f64::NAN)
    };

    Ok(OlsFit {
        slope,
        intercept,
        r_squared,
        slope_std_err,
        slope_p_value,
        n_used: n,
    })
}

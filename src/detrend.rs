//! Linear trend removal against elapsed days.

use envpred_regression::{ols, OlsFit};

use crate::error::EnvPredError;

/// Output of the detrending step.
///
/// The residuals align with the input: positions with a missing value carry a
/// missing residual, and the fitted line plus residuals reconstructs every
/// present value.
#[derive(Debug, Clone)]
pub struct DetrendResult {
    predictor: Vec<f64>,
    residuals: Vec<f64>,
    fit: OlsFit,
}

impl DetrendResult {
    /// Elapsed whole days since the first observation (first element 0).
    pub fn predictor(&self) -> &[f64] {
        &self.predictor
    }

    /// Residuals after removing the fitted trend.
    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    /// The fitted trend line.
    pub fn fit(&self) -> &OlsFit {
        &self.fit
    }
}

/// Removes the OLS trend of `values` on `predictor`.
///
/// Missing values are excluded from the fit but keep their positions in the
/// residual vector.
///
/// # Errors
///
/// Returns [`EnvPredError::InsufficientData`] when fewer than 2 finite values
/// remain for the fit.
pub fn detrend(predictor: &[f64], values: &[f64]) -> Result<DetrendResult, EnvPredError> {
    let fit = ols(predictor, values)?;
    let residuals = fit.residuals(predictor, values);
    Ok(DetrendResult {
        predictor: predictor.to_vec(),
        residuals,
        fit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn removes_a_pure_ramp() {
        let predictor: Vec<f64> = (0..50).map(|i| i as f64).collect();
        let values: Vec<f64> = predictor.iter().map(|&x| 3.0 + 0.25 * x).collect();
        let result = detrend(&predictor, &values).unwrap();

        assert_relative_eq!(result.fit().slope(), 0.25, epsilon = 1e-12);
        assert_relative_eq!(result.fit().intercept(), 3.0, epsilon = 1e-12);
        for &r in result.residuals() {
            assert_relative_eq!(r, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn round_trip_reconstructs_present_values() {
        let predictor: Vec<f64> = (0..20).map(|i| i as f64 * 7.0).collect();
        let mut values: Vec<f64> = predictor
            .iter()
            .map(|&x| 1.5 - 0.1 * x + (x * 0.9).sin())
            .collect();
        values[4] = f64::NAN;

        let result = detrend(&predictor, &values).unwrap();
        for i in 0..values.len() {
            if values[i].is_finite() {
                assert_relative_eq!(
                    result.fit().predict(predictor[i]) + result.residuals()[i],
                    values[i],
                    epsilon = 1e-10
                );
            } else {
                assert!(result.residuals()[i].is_nan());
            }
        }
    }

    #[test]
    fn all_missing_is_insufficient() {
        let predictor = vec![0.0, 1.0, 2.0];
        let values = vec![f64::NAN; 3];
        assert!(matches!(
            detrend(&predictor, &values),
            Err(EnvPredError::InsufficientData(_))
        ));
    }

    #[test]
    fn one_finite_value_is_insufficient() {
        let predictor = vec![0.0, 1.0, 2.0];
        let values = vec![5.0, f64::NAN, f64::NAN];
        assert!(matches!(
            detrend(&predictor, &values),
            Err(EnvPredError::InsufficientData(_))
        ));
    }
}

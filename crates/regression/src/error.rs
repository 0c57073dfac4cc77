//! Error types for the envpred-regression crate.

/// Error type for all fallible operations in the envpred-regression crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegressionError {
    /// Returned when x and y differ in length.
    #[error("x length {x_len} does not match y length {y_len}")]
    LengthMismatch {
        /// Length of the x slice.
        x_len: usize,
        /// Length of the y slice.
        y_len: usize,
    },

    /// Returned when fewer than 2 finite (x, y) pairs are available.
    #[error("need at least 2 finite pairs to fit a line, got {n_finite}")]
    TooFewPoints {
        /// Number of finite pairs found.
        n_finite: usize,
    },

    /// Returned when the predictor is constant across all finite pairs.
    #[error("predictor is constant, slope is undefined")]
    ConstantPredictor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_length_mismatch() {
        let e = RegressionError::LengthMismatch { x_len: 3, y_len: 5 };
        assert_eq!(e.to_string(), "x length 3 does not match y length 5");
    }

    #[test]
    fn error_too_few_points() {
        let e = RegressionError::TooFewPoints { n_finite: 1 };
        assert_eq!(
            e.to_string(),
            "need at least 2 finite pairs to fit a line, got 1"
        );
    }

    #[test]
    fn error_constant_predictor() {
        let e = RegressionError::ConstantPredictor;
        assert_eq!(e.to_string(), "predictor is constant, slope is undefined");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<RegressionError>();
    }
}

//! Error types for the envpred-spectral crate.

/// Error type for all fallible operations in the envpred-spectral crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpectralError {
    /// Returned when delta is non-finite or non-positive.
    #[error("delta must be finite and positive, got {delta}")]
    InvalidDelta {
        /// The invalid delta value.
        delta: f64,
    },

    /// Returned when times and values differ in length.
    #[error("times length {times_len} does not match values length {values_len}")]
    LengthMismatch {
        /// Length of the times slice.
        times_len: usize,
        /// Length of the values slice.
        values_len: usize,
    },

    /// Returned when the regular method meets missing values.
    #[error(
        "series contains missing values, which the regular spectrum cannot handle; \
         use the irregular (Lomb-Scargle) method"
    )]
    MissingValues,

    /// Returned when the regular method is selected for irregularly sampled data.
    #[error(
        "the regular spectrum requires evenly spaced observations; \
         use the irregular (Lomb-Scargle) method"
    )]
    IncompatibleSampling,

    /// Returned when too few usable observations remain.
    #[error("need at least {needed} usable observations for a spectrum, got {n_finite}")]
    TooFewPoints {
        /// Number of finite observations found.
        n_finite: usize,
        /// Minimum required.
        needed: usize,
    },

    /// Returned when the spectrum has fewer than 2 rows to fit the colour on.
    #[error("spectrum has {n_rows} usable rows, need at least 2 for the colour fit")]
    TooFewFrequencies {
        /// Number of usable spectrum rows.
        n_rows: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_delta() {
        let e = SpectralError::InvalidDelta { delta: 0.0 };
        assert_eq!(e.to_string(), "delta must be finite and positive, got 0");
    }

    #[test]
    fn error_length_mismatch() {
        let e = SpectralError::LengthMismatch {
            times_len: 4,
            values_len: 5,
        };
        assert_eq!(
            e.to_string(),
            "times length 4 does not match values length 5"
        );
    }

    #[test]
    fn error_missing_values_recommends_alternative() {
        let msg = SpectralError::MissingValues.to_string();
        assert!(msg.contains("irregular (Lomb-Scargle) method"));
    }

    #[test]
    fn error_too_few_points() {
        let e = SpectralError::TooFewPoints {
            n_finite: 2,
            needed: 3,
        };
        assert_eq!(
            e.to_string(),
            "need at least 3 usable observations for a spectrum, got 2"
        );
    }

    #[test]
    fn error_too_few_frequencies() {
        let e = SpectralError::TooFewFrequencies { n_rows: 1 };
        assert_eq!(
            e.to_string(),
            "spectrum has 1 usable rows, need at least 2 for the colour fit"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<SpectralError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<SpectralError>();
    }
}

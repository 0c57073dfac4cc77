//! Error types for the envpred-colwell crate.

/// Error type for all fallible operations in the envpred-colwell crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColwellError {
    /// Returned when fewer than 2 states are requested.
    #[error("n_states must be >= 2, got {n_states}")]
    InvalidStates {
        /// The invalid state count.
        n_states: usize,
    },

    /// Returned when values and dates differ in length.
    #[error("values length {values_len} does not match dates length {dates_len}")]
    LengthMismatch {
        /// Length of the values slice.
        values_len: usize,
        /// Length of the dates slice.
        dates_len: usize,
    },

    /// Returned when no finite observation remains after binning.
    #[error("all values are missing, nothing to discretise")]
    AllMissing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_states() {
        let e = ColwellError::InvalidStates { n_states: 0 };
        assert_eq!(e.to_string(), "n_states must be >= 2, got 0");
    }

    #[test]
    fn error_length_mismatch() {
        let e = ColwellError::LengthMismatch {
            values_len: 10,
            dates_len: 9,
        };
        assert_eq!(
            e.to_string(),
            "values length 10 does not match dates length 9"
        );
    }

    #[test]
    fn error_all_missing() {
        let e = ColwellError::AllMissing;
        assert_eq!(e.to_string(), "all values are missing, nothing to discretise");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<ColwellError>();
    }
}

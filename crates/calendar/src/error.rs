//! Error types for the envpred-calendar crate.

/// Error type for all fallible operations in the envpred-calendar crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when the date slice is empty.
    #[error("no dates provided")]
    EmptyDates,

    /// Returned when dates are not strictly increasing.
    #[error("dates must be strictly increasing, violated at index {index}")]
    NotIncreasing {
        /// Index of the first date that is <= its predecessor.
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_dates() {
        let e = CalendarError::EmptyDates;
        assert_eq!(e.to_string(), "no dates provided");
    }

    #[test]
    fn error_not_increasing() {
        let e = CalendarError::NotIncreasing { index: 3 };
        assert_eq!(
            e.to_string(),
            "dates must be strictly increasing, violated at index 3"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}

//! Top-level error type: the four failure kinds of the pipeline.

use envpred_calendar::CalendarError;
use envpred_colwell::ColwellError;
use envpred_regression::RegressionError;
use envpred_spectral::SpectralError;

/// Error type for the envpred pipeline entry points.
///
/// Member-crate errors convert into one of four kinds; the original message
/// is preserved in the payload.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EnvPredError {
    /// Shape, ordering, or type violations: mismatched lengths, unsorted dates.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Too few usable observations for a fit, spectrum, or entropy sum.
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// The selected method cannot handle the data as flagged.
    #[error("incompatible method: {0}")]
    IncompatibleMethod(String),

    /// An option is outside its valid domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<CalendarError> for EnvPredError {
    fn from(e: CalendarError) -> Self {
        EnvPredError::InvalidInput(e.to_string())
    }
}

impl From<RegressionError> for EnvPredError {
    fn from(e: RegressionError) -> Self {
        match e {
            RegressionError::LengthMismatch { .. } => EnvPredError::InvalidInput(e.to_string()),
            RegressionError::TooFewPoints { .. } | RegressionError::ConstantPredictor => {
                EnvPredError::InsufficientData(e.to_string())
            }
        }
    }
}

impl From<SpectralError> for EnvPredError {
    fn from(e: SpectralError) -> Self {
        match e {
            SpectralError::InvalidDelta { .. } => EnvPredError::InvalidArgument(e.to_string()),
            SpectralError::LengthMismatch { .. } => EnvPredError::InvalidInput(e.to_string()),
            SpectralError::MissingValues | SpectralError::IncompatibleSampling => {
                EnvPredError::IncompatibleMethod(e.to_string())
            }
            SpectralError::TooFewPoints { .. } | SpectralError::TooFewFrequencies { .. } => {
                EnvPredError::InsufficientData(e.to_string())
            }
        }
    }
}

impl From<ColwellError> for EnvPredError {
    fn from(e: ColwellError) -> Self {
        match e {
            ColwellError::InvalidStates { .. } => EnvPredError::InvalidArgument(e.to_string()),
            ColwellError::LengthMismatch { .. } => EnvPredError::InvalidInput(e.to_string()),
            ColwellError::AllMissing => EnvPredError::InsufficientData(e.to_string()),
        }
    }
}

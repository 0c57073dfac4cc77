//! Ordinary least squares for the envpred pipeline.
//!
//! One simple-regression provider shared by the detrending step (value on
//! elapsed days) and the noise-colour step (log power on log frequency).
//! Pairs with a non-finite member are excluded from the fit, mirroring R's
//! `lm(..., na.action = na.omit)`.

mod error;
mod ols;

pub use error::RegressionError;
pub use ols::{ols, OlsFit};

//! Error types for signal parameters and generation.

use thiserror::Error;

use crate::params::Param;

/// Errors from parameter validation, modulation index, and signal config.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SignalError {
    #[error("{param} must be a finite number, got {value}")]
    NonFinite { param: &'static str, value: f64 },

    #[error("{param} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        param: Param,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("message amplitude must not be negative, got {0}")]
    Negative(f64),

    #[error("carrier amplitude must be positive to compute a modulation index, got {0}")]
    ZeroCarrier(f64),

    #[error("invalid signal config: {0}")]
    InvalidConfig(String),
}

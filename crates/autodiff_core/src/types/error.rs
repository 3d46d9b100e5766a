//! Error types for structured error handling.
//!
//! This module provides:
//! - `OperatorError`: Domain errors raised by forward operators
//! - `OperatorResult`: Result alias used by fallible operators

use thiserror::Error;

/// Domain errors raised by forward operators.
///
/// Forward operators reject inputs outside their mathematical domain
/// immediately. These are programming or data errors, never transient,
/// so callers should guard inputs rather than retry.
///
/// # Variants
/// - `NonPositiveLogarithm`: `log` called with `x <= 0`
/// - `ZeroReciprocal`: `inv` called with `x == 0`
///
/// # Examples
/// ```
/// use autodiff_core::types::OperatorError;
///
/// let err = OperatorError::NonPositiveLogarithm { value: -1.0 };
/// assert_eq!(
///     format!("{}", err),
///     "Logarithm undefined for non-positive input: -1"
/// );
/// assert_eq!(err.operator(), "log");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperatorError {
    /// Logarithm of a non-positive number.
    #[error("Logarithm undefined for non-positive input: {value}")]
    NonPositiveLogarithm {
        /// The rejected input
        value: f64,
    },

    /// Reciprocal of zero.
    #[error("Cannot compute reciprocal of zero")]
    ZeroReciprocal,
}

impl OperatorError {
    /// Name of the forward operator that raised this error.
    pub fn operator(&self) -> &'static str {
        match self {
            OperatorError::NonPositiveLogarithm { .. } => "log",
            OperatorError::ZeroReciprocal => "inv",
        }
    }
}

/// Result type returned by fallible forward operators.
pub type OperatorResult<T> = Result<T, OperatorError>;

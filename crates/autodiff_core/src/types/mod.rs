//! Core error and numeric types.
//!
//! This module provides:
//! - `dual`: Dual number type integration with num-dual for verifying backward rules (when `num-dual-mode` feature is enabled)
//! - `error`: Structured error types for forward operators
//!
//! # Re-exports
//!
//! - [`OperatorError`], [`OperatorResult`] from `error`

#[cfg(feature = "num-dual-mode")]
pub mod dual;
pub mod error;

pub use error::{OperatorError, OperatorResult};

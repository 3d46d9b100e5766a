//! Elementary scalar operators and their derivative rules.
//!
//! ## Modules
//!
//! - [`operators`]: Forward operators (`mul`, `add`, `sigmoid`, `log`, ...)
//! - [`derivatives`]: Backward rules scaled by an upstream signal
//! - [`unary`]: [`UnaryOp`] tagging each unary forward/backward pair
//! - `config`: [`ToleranceConfig`] for approximate comparison
//!
//! ## Example
//!
//! ```
//! use autodiff_core::math::{derivatives, operators, UnaryOp};
//!
//! let x = 2.0_f64;
//! let y = operators::relu(x);
//! assert_eq!(derivatives::relu_back(x, 1.0), 1.0);
//! assert_eq!(UnaryOp::Relu.forward(x).unwrap(), y);
//! ```

mod config;
pub mod derivatives;
pub mod operators;
pub mod unary;

// Re-export public types at module level
pub use config::ToleranceConfig;
pub use unary::UnaryOp;

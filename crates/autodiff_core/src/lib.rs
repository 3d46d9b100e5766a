//! # autodiff_core: Scalar Kernel for a Minimal Differentiable-Programming Library
//!
//! ## Layer 1 (Foundation) Role
//!
//! autodiff_core is the bottom layer of the library, providing:
//! - Elementary forward operators (`math::operators`)
//! - Pointwise backward (derivative) rules (`math::derivatives`)
//! - Static-dispatch pairing of forward and backward rules (`math::unary`)
//! - Tolerance configuration for approximate comparison (`math::config`)
//! - Lazy map / zip_with / reduce combinators (`functional`)
//! - Error types: `OperatorError` (`types::error`)
//!
//! ## Error Policy
//!
//! Forward operators fail on inputs outside their domain (`log` on non-positive
//! values, `inv` on zero) and return [`types::OperatorError`]. Backward rules at
//! the same boundary return a zero gradient instead, so a backward pass never
//! aborts on an edge-of-domain value.
//!
//! ## Dependencies
//!
//! - num-traits: Traits for generic numerical computation
//! - num-dual: Dual numbers for verifying backward rules (optional)
//! - thiserror: Error derivation
//! - tracing: Structured diagnostic events (no subscriber is installed here)
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use autodiff_core::functional::{add_lists, neg_list, sum};
//! use autodiff_core::math::derivatives::log_back;
//! use autodiff_core::math::operators::{inv, log, sigmoid};
//!
//! // Forward operators
//! assert!((sigmoid(0.0_f64) - 0.5).abs() < 1e-12);
//! assert_eq!(log(100.0_f64).unwrap(), 2.0);
//! assert!(inv(0.0_f64).is_err());
//!
//! // Backward rules zero the gradient at singular points
//! assert_eq!(log_back(0.0_f64, 3.0), 0.0);
//!
//! // Sequence combinators
//! let total = sum(add_lists(vec![1.0, 2.0, 3.0], vec![10.0, 20.0]));
//! assert_eq!(total, 33.0);
//! let negated: Vec<f64> = neg_list(vec![1.0, -2.0]).collect();
//! assert_eq!(negated, vec![-1.0, 2.0]);
//! ```
//!
//! ## Feature Flags
//!
//! - `num-dual-mode` (default): Expose `types::dual::DualNumber` for verification
//! - `serde`: Enable serialisation for `OperatorError`, `ToleranceConfig`, `UnaryOp`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod functional;
pub mod math;
pub mod traits;
pub mod types;

//! Dual number type integration for verifying derivative rules.
//!
//! Every backward rule in [`crate::math::derivatives`] is hand-written. This
//! module exposes num-dual's `Dual64` so the rules can be checked against
//! forward-mode automatic differentiation of the matching forward operator.
//!
//! ## Usage
//!
//! ```
//! use autodiff_core::math::derivatives::inv_back;
//! use autodiff_core::types::dual::DualNumber;
//! use num_dual::DualNum;
//!
//! let x = DualNumber::new(4.0, 1.0);
//! let d = 3.0;
//!
//! // d/dx (1/x) at x = 4, scaled by the upstream signal
//! let expected = x.recip().eps * d;
//! assert!((inv_back(4.0, d) - expected).abs() < 1e-12);
//! ```

/// Type alias for num-dual's Dual64 (f64-based dual numbers).
///
/// - `re`: Real part (function value)
/// - `eps`: Dual part (derivative)
///
/// NOTE: `DualNumber` does NOT implement `num_traits::Float`, so the
/// generic operators cannot be evaluated on it directly. Verification
/// re-expresses each forward formula with `num_dual::DualNum` methods.
pub type DualNumber = num_dual::Dual64;

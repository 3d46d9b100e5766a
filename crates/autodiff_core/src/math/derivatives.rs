//! Backward (derivative) rules for the elementary operators.
//!
//! Each rule takes the original forward input and an upstream signal `d` and
//! returns the local gradient contribution under the chain rule:
//!
//! ```text
//! op_back(x, d) = op'(x) * d
//! ```
//!
//! Unlike the forward operators, backward rules never fail. At a singular or
//! non-differentiable point they return a zero gradient, matching the usual
//! subgradient convention, so a backward pass revisiting an edge-of-domain
//! value cannot abort.

use num_traits::Float;
use tracing::trace;

use super::operators::sigmoid;

/// Derivative of `log` times the upstream signal.
///
/// # Mathematical Definition
/// ```text
/// log_back(x, d) = (1 / x) * d    if x > 0
///                = 0              otherwise
/// ```
///
/// # Examples
/// ```
/// use autodiff_core::math::derivatives::log_back;
///
/// assert_eq!(log_back(2.0_f64, 3.0), 1.5);
/// assert_eq!(log_back(0.0_f64, 3.0), 0.0);
/// ```
#[inline]
pub fn log_back<T: Float>(x: T, d: T) -> T {
    if x > T::zero() {
        x.recip() * d
    } else {
        trace!(op = "log_back", "zeroed gradient at non-positive input");
        T::zero()
    }
}

/// Derivative of `inv` times the upstream signal.
///
/// # Mathematical Definition
/// ```text
/// inv_back(x, d) = (-1 / x²) * d    if x != 0
///                = 0                otherwise
/// ```
///
/// Evaluated as `-(d / x) / x` so `x²` is never formed; it underflows for
/// `|x|` below about `1e-154` even when `d / x²` is representable.
///
/// # Examples
/// ```
/// use autodiff_core::math::derivatives::inv_back;
///
/// assert_eq!(inv_back(2.0_f64, 1.0), -0.25);
/// assert_eq!(inv_back(1e-170_f64, 0.0), 0.0);
/// ```
#[inline]
pub fn inv_back<T: Float>(x: T, d: T) -> T {
    if x != T::zero() {
        -(d / x) / x
    } else {
        trace!(op = "inv_back", "zeroed gradient at zero input");
        T::zero()
    }
}

/// Derivative of `relu` times the upstream signal.
///
/// The derivative is undefined at `x == 0`; it is taken to be `0` there.
///
/// # Mathematical Definition
/// ```text
/// relu_back(x, d) = d    if x > 0
///                 = 0    otherwise
/// ```
#[inline]
pub fn relu_back<T: Float>(x: T, d: T) -> T {
    if x > T::zero() {
        d
    } else {
        T::zero()
    }
}

/// Derivative of `neg` times the upstream signal: `-d`.
#[inline]
pub fn neg_back<T: Float>(_x: T, d: T) -> T {
    -d
}

/// Derivative of `exp` times the upstream signal: `exp(x) * d`.
#[inline]
pub fn exp_back<T: Float>(x: T, d: T) -> T {
    x.exp() * d
}

/// Derivative of `sigmoid` times the upstream signal.
///
/// # Mathematical Definition
/// ```text
/// sigmoid_back(x, d) = σ(x) * (1 - σ(x)) * d
/// ```
///
/// Reuses the stable [`sigmoid`] so large-magnitude inputs give a gradient
/// that underflows to zero rather than `NaN`.
#[inline]
pub fn sigmoid_back<T: Float>(x: T, d: T) -> T {
    let s = sigmoid(x);
    s * (T::one() - s) * d
}

/// Gradients of `add` with respect to both inputs: `(d, d)`.
#[inline]
pub fn add_back<T: Float>(_a: T, _b: T, d: T) -> (T, T) {
    (d, d)
}

/// Gradients of `mul` with respect to both inputs: `(b * d, a * d)`.
///
/// # Examples
/// ```
/// use autodiff_core::math::derivatives::mul_back;
///
/// assert_eq!(mul_back(3.0_f64, 4.0, 2.0), (8.0, 6.0));
/// ```
#[inline]
pub fn mul_back<T: Float>(a: T, b: T, d: T) -> (T, T) {
    (b * d, a * d)
}

/// Gradients of `lt`: zero everywhere (piecewise constant).
#[inline]
pub fn lt_back<T: Float>(_a: T, _b: T, _d: T) -> (T, T) {
    (T::zero(), T::zero())
}

/// Gradients of `eq`: zero everywhere (piecewise constant).
#[inline]
pub fn eq_back<T: Float>(_a: T, _b: T, _d: T) -> (T, T) {
    (T::zero(), T::zero())
}

/// Gradients of `max` with respect to both inputs.
///
/// The whole signal flows to the operand `max` selected. Ties select `b`,
/// matching the forward tie-break.
#[inline]
pub fn max_back<T: Float>(a: T, b: T, d: T) -> (T, T) {
    if a > b {
        (d, T::zero())
    } else {
        (T::zero(), d)
    }
}

//! Elementary forward operators.
//!
//! Stateless scalar primitives: arithmetic, comparison, activation, and
//! log/exp functions. Comparisons return `1` or `0` in the scalar type so
//! their results can flow through the same arithmetic as every other value.
//!
//! All numeric operators use generic type parameter `T: num_traits::Float`
//! for f32/f64 support. Only [`log`] and [`inv`] are fallible.

use num_traits::Float;
use tracing::debug;

use crate::types::{OperatorError, OperatorResult};

/// Default tolerance used by [`is_close`].
pub const DEFAULT_TOLERANCE: f64 = 1e-2;

/// Multiplication of two numbers.
#[inline]
pub fn mul<T: Float>(a: T, b: T) -> T {
    a * b
}

/// Identity function. Accepts any value type.
///
/// # Examples
/// ```
/// use autodiff_core::math::operators::id;
///
/// assert_eq!(id(2.5_f64), 2.5);
/// assert_eq!(id("unchanged"), "unchanged");
/// ```
#[inline]
pub fn id<T>(x: T) -> T {
    x
}

/// Addition of two numbers.
#[inline]
pub fn add<T: Float>(a: T, b: T) -> T {
    a + b
}

/// Negation of a number.
#[inline]
pub fn neg<T: Float>(a: T) -> T {
    -a
}

/// Less-than comparison encoded as a scalar.
///
/// # Returns
/// `1` if `a < b`, otherwise `0`
#[inline]
pub fn lt<T: Float>(a: T, b: T) -> T {
    if a < b {
        T::one()
    } else {
        T::zero()
    }
}

/// Exact equality encoded as a scalar.
///
/// # Returns
/// `1` if `a == b`, otherwise `0`
#[inline]
pub fn eq<T: Float>(a: T, b: T) -> T {
    if a == b {
        T::one()
    } else {
        T::zero()
    }
}

/// Maximum of two numbers.
///
/// Returns `a` only when `a > b` strictly; ties (and unordered NaN
/// comparisons) return `b`.
///
/// # Examples
/// ```
/// use autodiff_core::math::operators::max;
///
/// assert_eq!(max(3.0_f64, 5.0), 5.0);
/// assert_eq!(max(5.0_f64, 5.0), 5.0);
/// ```
#[inline]
pub fn max<T: Float>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// Approximate equality with the default tolerance of `1e-2`.
///
/// # Mathematical Definition
/// ```text
/// is_close(a, b) = |a - b| < 1e-2
/// ```
///
/// The comparison is strict, so a difference equal to the tolerance is not close.
///
/// # Examples
/// ```
/// use autodiff_core::math::operators::is_close;
///
/// assert!(is_close(1.0_f64, 1.009));
/// assert!(!is_close(1.0_f64, 1.02));
/// ```
#[inline]
pub fn is_close<T: Float>(a: T, b: T) -> bool {
    is_close_with(a, b, T::from(DEFAULT_TOLERANCE).unwrap())
}

/// Approximate equality with a caller-supplied tolerance.
///
/// # Arguments
/// * `a` - First argument
/// * `b` - Second argument
/// * `tolerance` - Strict upper bound on `|a - b|`
#[inline]
pub fn is_close_with<T: Float>(a: T, b: T, tolerance: T) -> bool {
    (a - b).abs() < tolerance
}

/// Numerically stable logistic sigmoid.
///
/// # Mathematical Definition
/// ```text
/// sigmoid(x) = 1 / (1 + exp(-x))        if x >= 0
///            = exp(x) / (1 + exp(x))    if x < 0
/// ```
///
/// Each branch only evaluates `exp` on a non-positive argument, so neither
/// overflows for large-magnitude inputs.
///
/// # Examples
/// ```
/// use autodiff_core::math::operators::sigmoid;
///
/// assert_eq!(sigmoid(0.0_f64), 0.5);
/// assert!(sigmoid(-1000.0_f64) >= 0.0);
/// assert!(sigmoid(1000.0_f64) <= 1.0);
/// ```
#[inline]
pub fn sigmoid<T: Float>(x: T) -> T {
    let one = T::one();
    if x >= T::zero() {
        one / (one + (-x).exp())
    } else {
        let e = x.exp();
        e / (one + e)
    }
}

/// Rectified linear unit: `max(0, x)`.
#[inline]
pub fn relu<T: Float>(x: T) -> T {
    max(T::zero(), x)
}

/// Base-10 logarithm.
///
/// # Errors
/// Returns [`OperatorError::NonPositiveLogarithm`] if `x <= 0`.
///
/// # Examples
/// ```
/// use autodiff_core::math::operators::log;
///
/// assert_eq!(log(1.0_f64).unwrap(), 0.0);
/// assert!(log(0.0_f64).is_err());
/// ```
#[inline]
pub fn log<T: Float>(x: T) -> OperatorResult<T> {
    if x <= T::zero() {
        let value = x.to_f64().unwrap_or(f64::NAN);
        debug!(op = "log", value, "rejected non-positive input");
        return Err(OperatorError::NonPositiveLogarithm { value });
    }
    Ok(x.log10())
}

/// Natural exponential.
#[inline]
pub fn exp<T: Float>(x: T) -> T {
    x.exp()
}

/// Reciprocal `1 / x`.
///
/// # Errors
/// Returns [`OperatorError::ZeroReciprocal`] if `x == 0` (either sign of zero).
#[inline]
pub fn inv<T: Float>(x: T) -> OperatorResult<T> {
    if x == T::zero() {
        debug!(op = "inv", "rejected zero input");
        return Err(OperatorError::ZeroReciprocal);
    }
    Ok(x.recip())
}

//! Numeric traits shared by the operator and combinator layers.

/// Generic floating-point trait for scalar operators.
///
/// Every operator in [`crate::math`] is generic over this trait so it works
/// for both `f64` and `f32`.
///
/// # Examples
/// ```
/// use autodiff_core::traits::Float;
///
/// fn softplus<T: Float>(x: T) -> T {
///     (T::one() + x.exp()).ln()
/// }
///
/// let value: f64 = softplus(0.0);
/// assert!((value - std::f64::consts::LN_2).abs() < 1e-12);
/// ```
pub use num_traits::Float;

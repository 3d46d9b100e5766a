//! Tolerance configuration for approximate comparison.

use num_traits::Float;

use super::operators::{is_close_with, DEFAULT_TOLERANCE};

/// Configuration for approximate scalar comparison.
///
/// Carries the strict upper bound used by [`ToleranceConfig::is_close`], so
/// callers that compare many values with the same tolerance can fix it once.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use autodiff_core::math::ToleranceConfig;
///
/// // Default matches the free `is_close` function
/// let config: ToleranceConfig<f64> = ToleranceConfig::default();
/// assert!(config.is_close(1.0, 1.009));
/// assert!(!config.is_close(1.0, 1.01));
///
/// // Custom configuration
/// let custom = ToleranceConfig::new(1e-6);
/// assert!(!custom.is_close(1.0, 1.009));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToleranceConfig<T: Float> {
    /// Strict upper bound on `|a - b|` for two values to be close.
    pub tolerance: T,
}

impl<T: Float> Default for ToleranceConfig<T> {
    /// Create a default configuration.
    ///
    /// Default values:
    /// - `tolerance`: 1e-2
    fn default() -> Self {
        Self {
            tolerance: T::from(DEFAULT_TOLERANCE).unwrap(),
        }
    }
}

impl<T: Float> ToleranceConfig<T> {
    /// Create a new configuration with the given tolerance.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0`.
    pub fn new(tolerance: T) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        Self { tolerance }
    }

    /// Tight tolerance (1e-9) for comparing results of exact arithmetic.
    pub fn strict() -> Self {
        Self {
            tolerance: T::from(1e-9).unwrap(),
        }
    }

    /// Relaxed tolerance (1e-1).
    pub fn loose() -> Self {
        Self {
            tolerance: T::from(1e-1).unwrap(),
        }
    }

    /// Whether `|a - b| < tolerance`.
    #[inline]
    pub fn is_close(&self, a: T, b: T) -> bool {
        is_close_with(a, b, self.tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::operators::is_close;

    #[test]
    fn test_default_config() {
        let config: ToleranceConfig<f64> = ToleranceConfig::default();
        assert!((config.tolerance - 1e-2).abs() < 1e-15);
    }

    #[test]
    fn test_default_agrees_with_free_function() {
        let config: ToleranceConfig<f64> = ToleranceConfig::default();
        for (a, b) in [(1.0, 1.009), (1.0, 1.01), (1.0, 1.02), (-3.0, -3.0)] {
            assert_eq!(config.is_close(a, b), is_close(a, b));
        }
    }

    #[test]
    fn test_new_config() {
        let config: ToleranceConfig<f64> = ToleranceConfig::new(0.5);
        assert_eq!(config.tolerance, 0.5);
        assert!(config.is_close(1.0, 1.4));
        assert!(!config.is_close(1.0, 1.5));
    }

    #[test]
    #[should_panic(expected = "tolerance must be positive")]
    fn test_new_config_zero_tolerance_panics() {
        let _: ToleranceConfig<f64> = ToleranceConfig::new(0.0);
    }

    #[test]
    #[should_panic(expected = "tolerance must be positive")]
    fn test_new_config_negative_tolerance_panics() {
        let _: ToleranceConfig<f64> = ToleranceConfig::new(-1e-3);
    }

    #[test]
    fn test_presets_are_ordered() {
        let strict: ToleranceConfig<f64> = ToleranceConfig::strict();
        let default: ToleranceConfig<f64> = ToleranceConfig::default();
        let loose: ToleranceConfig<f64> = ToleranceConfig::loose();

        assert!(strict.tolerance < default.tolerance);
        assert!(default.tolerance < loose.tolerance);
    }

    #[test]
    fn test_config_copy() {
        let config1: ToleranceConfig<f64> = ToleranceConfig::loose();
        let config2 = config1;
        assert_eq!(config1, config2);
    }

    #[test]
    fn test_config_with_f32() {
        let config: ToleranceConfig<f32> = ToleranceConfig::default();
        assert!(config.tolerance > 0.0);
        assert!(config.is_close(1.0, 1.005));
    }
}

//! Sequence operations derived from the combinators and elementary operators.

use std::iter::Map;

use num_traits::Float;

use super::combinators::{map, reduce, zip_with, ZipWith};
use crate::math::operators::{add, mul, neg};

/// Lazily negate every element: `map(seq, neg)`.
///
/// # Examples
/// ```
/// use autodiff_core::functional::neg_list;
///
/// let negated: Vec<f64> = neg_list(vec![1.0, -2.0]).collect();
/// assert_eq!(negated, vec![-1.0, 2.0]);
/// ```
#[inline]
pub fn neg_list<I, T>(iterable: I) -> Map<I::IntoIter, fn(T) -> T>
where
    I: IntoIterator<Item = T>,
    T: Float,
{
    map(iterable, neg as fn(T) -> T)
}

/// Lazily add two sequences elementwise: `zip_with(a, b, add)`.
///
/// Truncates to the shorter sequence.
#[inline]
pub fn add_lists<A, B, T>(first: A, second: B) -> ZipWith<A::IntoIter, B::IntoIter, fn(T, T) -> T>
where
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
    T: Float,
{
    zip_with(first, second, add as fn(T, T) -> T)
}

/// Sum of a sequence: `reduce(seq, add)`. Empty sequences sum to `0`.
#[inline]
pub fn sum<I, T>(iterable: I) -> T
where
    I: IntoIterator<Item = T>,
    T: Float,
{
    reduce(iterable, add)
}

/// Product of a sequence: `reduce(seq, mul)`.
///
/// Empty sequences return the reduce sentinel `0`, not the multiplicative
/// identity.
#[inline]
pub fn prod<I, T>(iterable: I) -> T
where
    I: IntoIterator<Item = T>,
    T: Float,
{
    reduce(iterable, mul)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_neg_list() {
        let result: Vec<f64> = neg_list(vec![1.0, -2.0]).collect();
        assert_eq!(result, vec![-1.0, 2.0]);
    }

    #[test]
    fn test_neg_list_empty() {
        assert_eq!(neg_list(Vec::<f64>::new()).count(), 0);
    }

    #[test]
    fn test_add_lists() {
        let result: Vec<f64> = add_lists(vec![1.0, 2.0, 3.0], vec![10.0, 20.0, 30.0]).collect();
        assert_eq!(result, vec![11.0, 22.0, 33.0]);
    }

    #[test]
    fn test_add_lists_truncates() {
        let result: Vec<f64> = add_lists(vec![1.0, 2.0, 3.0], vec![10.0, 20.0]).collect();
        assert_eq!(result, vec![11.0, 22.0]);
    }

    #[test]
    fn test_add_lists_accepts_borrowed_slices() {
        let a = [1.0_f64, 2.0];
        let b = [0.5_f64, 0.25];
        let result: Vec<f64> = add_lists(a.iter().copied(), b.iter().copied()).collect();
        assert_eq!(result, vec![1.5, 2.25]);
        // Inputs are untouched
        assert_eq!(a, [1.0, 2.0]);
    }

    #[test]
    fn test_sum() {
        assert_eq!(sum(vec![1.0_f64, 2.0, 3.0]), 6.0);
        assert_eq!(sum(vec![-4.5_f64]), -4.5);
        assert_eq!(sum(Vec::<f64>::new()), 0.0);
    }

    #[test]
    fn test_prod() {
        assert_eq!(prod(vec![1.0_f64, 2.0, 3.0]), 6.0);
        assert_eq!(prod(vec![-2.0_f64, 0.5]), -1.0);
        assert_eq!(prod(Vec::<f64>::new()), 0.0);
    }

    #[test]
    fn test_sum_of_lazy_sequences() {
        let total = sum(add_lists(neg_list(vec![1.0_f64, 2.0]), vec![5.0, 5.0, 5.0]));
        assert_eq!(total, 7.0);
    }

    #[test]
    fn test_f32_support() {
        assert_eq!(sum(vec![0.5_f32, 0.25]), 0.75_f32);
        assert_eq!(prod(vec![2.0_f32, 4.0]), 8.0_f32);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn values_strategy() -> impl Strategy<Value = Vec<f64>> {
            prop::collection::vec(-1e3f64..1e3, 0..32)
        }

        proptest! {
            #[test]
            fn test_neg_list_twice_is_identity(xs in values_strategy()) {
                let twice: Vec<f64> = neg_list(neg_list(xs.clone())).collect();
                assert_eq!(twice, xs);
            }

            #[test]
            fn test_sum_of_list_and_negation_is_zero(xs in values_strategy()) {
                let total = sum(add_lists(xs.clone(), neg_list(xs)));
                assert_eq!(total, 0.0);
            }

            #[test]
            fn test_sum_distributes_over_add_lists(
                xs in prop::collection::vec(-1e3f64..1e3, 1..32),
                ys in prop::collection::vec(-1e3f64..1e3, 1..32)
            ) {
                let n = xs.len().min(ys.len());
                let lhs = sum(add_lists(xs.clone(), ys.clone()));
                let rhs = sum(xs[..n].iter().copied()) + sum(ys[..n].iter().copied());
                assert_relative_eq!(lhs, rhs, epsilon = 1e-8);
            }
        }
    }
}

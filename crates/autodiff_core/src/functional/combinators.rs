//! Generic higher-order combinators over sequences.
//!
//! [`map`] and [`zip_with`] are lazy: they return iterators that apply the
//! function only as elements are pulled. The returned iterators are finite
//! when the sources are finite, and `Clone` (restartable) when the sources and
//! the function are `Clone`. [`reduce`] consumes its input eagerly.

use std::iter::{FusedIterator, Map};

use num_traits::Zero;

/// Lazily apply `f` to every element, preserving order.
///
/// # Examples
/// ```
/// use autodiff_core::functional::map;
///
/// let doubled: Vec<f64> = map(vec![1.0, 2.0, 3.0], |x| 2.0 * x).collect();
/// assert_eq!(doubled, vec![2.0, 4.0, 6.0]);
/// ```
#[inline]
pub fn map<I, F, U>(iterable: I, f: F) -> Map<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    iterable.into_iter().map(f)
}

/// Lazily combine two sequences position by position with `f`.
///
/// Iteration stops as soon as either sequence is exhausted, so the result has
/// the length of the shorter input.
///
/// # Examples
/// ```
/// use autodiff_core::functional::zip_with;
///
/// let sums: Vec<f64> = zip_with(vec![1.0, 2.0, 3.0], vec![10.0, 20.0], |a, b| a + b).collect();
/// assert_eq!(sums, vec![11.0, 22.0]);
/// ```
#[inline]
pub fn zip_with<A, B, F, U>(first: A, second: B, f: F) -> ZipWith<A::IntoIter, B::IntoIter, F>
where
    A: IntoIterator,
    B: IntoIterator,
    F: FnMut(A::Item, B::Item) -> U,
{
    ZipWith {
        a: first.into_iter(),
        b: second.into_iter(),
        f,
    }
}

/// Left fold seeded with the first element.
///
/// For `[x0, x1, ..., xn]` this computes `f(...f(f(x0, x1), x2)..., xn)`.
/// A single-element sequence returns that element unchanged and `f` is never
/// called. An empty sequence returns `0`; this sentinel is why the element
/// type must implement [`Zero`], and it is not an identity for every `f`
/// (the empty product is also `0`).
///
/// # Examples
/// ```
/// use autodiff_core::functional::reduce;
///
/// assert_eq!(reduce(vec![1.0, 2.0, 3.0], |a, b| a + b), 6.0);
/// assert_eq!(reduce(vec![4.0], |a: f64, b| a * b), 4.0);
/// assert_eq!(reduce(Vec::<f64>::new(), |a, b| a * b), 0.0);
/// ```
pub fn reduce<I, F>(iterable: I, f: F) -> I::Item
where
    I: IntoIterator,
    I::Item: Zero,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    let mut iter = iterable.into_iter();
    match iter.next() {
        Some(first) => iter.fold(first, f),
        None => <I::Item as Zero>::zero(),
    }
}

/// Iterator returned by [`zip_with`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ZipWith<A, B, F> {
    a: A,
    b: B,
    f: F,
}

impl<A, B, F, U> Iterator for ZipWith<A, B, F>
where
    A: Iterator,
    B: Iterator,
    F: FnMut(A::Item, B::Item) -> U,
{
    type Item = U;

    #[inline]
    fn next(&mut self) -> Option<U> {
        let x = self.a.next()?;
        let y = self.b.next()?;
        Some((self.f)(x, y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (a_lower, a_upper) = self.a.size_hint();
        let (b_lower, b_upper) = self.b.size_hint();

        let lower = a_lower.min(b_lower);
        let upper = match (a_upper, b_upper) {
            (Some(x), Some(y)) => Some(x.min(y)),
            (Some(x), None) | (None, Some(x)) => Some(x),
            (None, None) => None,
        };
        (lower, upper)
    }
}

impl<A, B, F, U> ExactSizeIterator for ZipWith<A, B, F>
where
    A: ExactSizeIterator,
    B: ExactSizeIterator,
    F: FnMut(A::Item, B::Item) -> U,
{
}

impl<A, B, F, U> FusedIterator for ZipWith<A, B, F>
where
    A: FusedIterator,
    B: FusedIterator,
    F: FnMut(A::Item, B::Item) -> U,
{
}

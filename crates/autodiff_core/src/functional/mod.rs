//! Functional combinators that lift scalar operators onto sequences.
//!
//! ## Combinators
//!
//! - [`map`]: Lazily apply a unary function to every element
//! - [`zip_with`]: Lazily combine two sequences position by position, truncating
//!   to the shorter one
//! - [`reduce`]: Left fold seeded with the first element (`0` for empty input)
//!
//! ## Derived Operations
//!
//! - [`neg_list`], [`add_lists`], [`sum`], [`prod`]
//!
//! Combinators never inspect which function they are given, so elementary
//! operators and closures are interchangeable.
//!
//! ## Example
//!
//! ```
//! use autodiff_core::functional::{map, reduce, zip_with};
//! use autodiff_core::math::operators::{add, mul, relu};
//!
//! let xs = vec![-1.0_f64, 2.0, 3.0];
//! let ws = vec![0.5_f64, 0.5, 2.0];
//!
//! // Weighted sum of rectified inputs
//! let activated = map(xs, relu);
//! let weighted = zip_with(activated, ws, mul);
//! assert_eq!(reduce(weighted, add), 7.0);
//! ```

mod combinators;
mod lists;

// Re-export public items at module level
pub use combinators::{map, reduce, zip_with, ZipWith};
pub use lists::{add_lists, neg_list, prod, sum};

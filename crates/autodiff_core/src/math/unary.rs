//! Static-dispatch pairing of unary forward operators with their backward rules.
//!
//! A differentiation graph records which operator produced a value and later
//! replays the matching backward rule. [`UnaryOp`] gives every differentiable
//! unary operator a single `Copy` tag so the pair can never drift apart.
//!
//! Use enum dispatch, not `Box<dyn Fn>`, for these operators.

use std::fmt;

use num_traits::Float;

use super::derivatives::{exp_back, inv_back, log_back, neg_back, relu_back, sigmoid_back};
use super::operators::{exp, id, inv, log, neg, relu, sigmoid};
use crate::types::OperatorResult;

/// Differentiable unary operator.
///
/// # Examples
/// ```
/// use autodiff_core::math::unary::UnaryOp;
///
/// let op = UnaryOp::Inv;
/// assert_eq!(op.forward(4.0_f64).unwrap(), 0.25);
/// assert_eq!(op.backward(2.0_f64, 1.0), -0.25);
///
/// // Forward fails at the singularity, backward degrades to zero
/// assert!(op.forward(0.0_f64).is_err());
/// assert_eq!(op.backward(0.0_f64, 1.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOp {
    /// Identity
    Id,
    /// Negation
    Neg,
    /// Logistic sigmoid
    Sigmoid,
    /// Rectified linear unit
    Relu,
    /// Base-10 logarithm
    Log,
    /// Natural exponential
    Exp,
    /// Reciprocal
    Inv,
}

impl UnaryOp {
    /// Every variant, in declaration order.
    pub const ALL: [UnaryOp; 7] = [
        UnaryOp::Id,
        UnaryOp::Neg,
        UnaryOp::Sigmoid,
        UnaryOp::Relu,
        UnaryOp::Log,
        UnaryOp::Exp,
        UnaryOp::Inv,
    ];

    /// Apply the forward operator.
    ///
    /// # Errors
    /// Propagates the domain error of [`log`] and [`inv`].
    #[inline]
    pub fn forward<T: Float>(self, x: T) -> OperatorResult<T> {
        match self {
            UnaryOp::Id => Ok(id(x)),
            UnaryOp::Neg => Ok(neg(x)),
            UnaryOp::Sigmoid => Ok(sigmoid(x)),
            UnaryOp::Relu => Ok(relu(x)),
            UnaryOp::Log => log(x),
            UnaryOp::Exp => Ok(exp(x)),
            UnaryOp::Inv => inv(x),
        }
    }

    /// Apply the backward rule at forward input `x` with upstream signal `d`.
    #[inline]
    pub fn backward<T: Float>(self, x: T, d: T) -> T {
        match self {
            UnaryOp::Id => d,
            UnaryOp::Neg => neg_back(x, d),
            UnaryOp::Sigmoid => sigmoid_back(x, d),
            UnaryOp::Relu => relu_back(x, d),
            UnaryOp::Log => log_back(x, d),
            UnaryOp::Exp => exp_back(x, d),
            UnaryOp::Inv => inv_back(x, d),
        }
    }

    /// Whether the forward operator can return a domain error.
    pub fn is_fallible(self) -> bool {
        matches!(self, UnaryOp::Log | UnaryOp::Inv)
    }

    /// Operator name.
    pub fn name(self) -> &'static str {
        match self {
            UnaryOp::Id => "id",
            UnaryOp::Neg => "neg",
            UnaryOp::Sigmoid => "sigmoid",
            UnaryOp::Relu => "relu",
            UnaryOp::Log => "log",
            UnaryOp::Exp => "exp",
            UnaryOp::Inv => "inv",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

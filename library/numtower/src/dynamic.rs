//! Entry points for operands whose type is only known at runtime.
//!
//! An interpreter holding host values as `dyn Any` can hand them straight to these functions.
//! Each operand is converted with [`Number::from_scalar`]; anything outside of the tower is
//! rejected with [`ArithmeticError::UnsupportedOperand`] instead of being coerced.
use core::any::Any;
use core::cmp::Ordering;
use core::fmt;

use crate::{ArithmeticError, Number};

/// The binary operations of the tower
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Cmp,
    RQuo,
    QuoRem,
}
impl BinaryOp {
    /// Applies an arithmetic operation that yields a single number.
    ///
    /// `Cmp` yields `-1`, `0` or `1` as an `Int32`, `RQuo` yields a `Float64`, and `QuoRem`
    /// yields only the quotient; use [`quo_rem`] to get both halves.
    pub fn apply(self, lhs: &Number, rhs: &Number) -> Result<Number, ArithmeticError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Sub => Ok(lhs - rhs),
            Self::Mul => Ok(lhs * rhs),
            Self::Cmp => Ok(Number::Int32(lhs.cmp_sign(rhs))),
            Self::RQuo => Ok(Number::Float64(lhs.rquo(rhs))),
            Self::QuoRem => lhs.quo_rem(rhs).map(|(q, _)| q),
        }
    }
}
impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Add => f.write_str("add"),
            Self::Sub => f.write_str("sub"),
            Self::Mul => f.write_str("mul"),
            Self::Cmp => f.write_str("cmp"),
            Self::RQuo => f.write_str("rquo"),
            Self::QuoRem => f.write_str("quo_rem"),
        }
    }
}

/// Which side of a binary operation an operand was on
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operand {
    Left,
    Right,
}
impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Converts both operands of `op`, failing on the first one outside of the tower
pub fn operands(
    op: BinaryOp,
    lhs: &dyn Any,
    rhs: &dyn Any,
) -> Result<(Number, Number), ArithmeticError> {
    let lhs = Number::from_scalar(lhs).ok_or(ArithmeticError::UnsupportedOperand {
        op,
        side: Operand::Left,
    })?;
    let rhs = Number::from_scalar(rhs).ok_or(ArithmeticError::UnsupportedOperand {
        op,
        side: Operand::Right,
    })?;
    Ok((lhs, rhs))
}

/// Converts both operands and applies `op` to them
pub fn apply(op: BinaryOp, lhs: &dyn Any, rhs: &dyn Any) -> Result<Number, ArithmeticError> {
    let (lhs, rhs) = operands(op, lhs, rhs)?;
    op.apply(&lhs, &rhs)
}

pub fn add(lhs: &dyn Any, rhs: &dyn Any) -> Result<Number, ArithmeticError> {
    apply(BinaryOp::Add, lhs, rhs)
}

pub fn sub(lhs: &dyn Any, rhs: &dyn Any) -> Result<Number, ArithmeticError> {
    apply(BinaryOp::Sub, lhs, rhs)
}

pub fn mul(lhs: &dyn Any, rhs: &dyn Any) -> Result<Number, ArithmeticError> {
    apply(BinaryOp::Mul, lhs, rhs)
}

pub fn compare(lhs: &dyn Any, rhs: &dyn Any) -> Result<Ordering, ArithmeticError> {
    let (lhs, rhs) = operands(BinaryOp::Cmp, lhs, rhs)?;
    Ok(lhs.compare(&rhs))
}

pub fn rquo(lhs: &dyn Any, rhs: &dyn Any) -> Result<f64, ArithmeticError> {
    let (lhs, rhs) = operands(BinaryOp::RQuo, lhs, rhs)?;
    Ok(lhs.rquo(&rhs))
}

pub fn quo_rem(lhs: &dyn Any, rhs: &dyn Any) -> Result<(Number, Number), ArithmeticError> {
    let (lhs, rhs) = operands(BinaryOp::QuoRem, lhs, rhs)?;
    lhs.quo_rem(&rhs)
}

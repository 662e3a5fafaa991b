//! A small numeric tower.
//!
//! [`Number`] unifies four representations: 32-bit and 64-bit machine integers, IEEE-754
//! doubles, and arbitrary-precision integers. Integer results are always kept in the narrowest
//! representation that holds them exactly, so an `Int64` never holds a value that fits in 32 bits
//! and a `BigInt` never holds a value that fits in 64 bits. Fixed-width arithmetic that overflows
//! is transparently redone with arbitrary precision.
//!
//! Division comes in two flavors: [`Number::quo_rem`] truncates toward zero like machine integer
//! division, while [`Number::rquo`] always produces the true quotient as a float.
//!
//! Integer division by zero is an error ([`ArithmeticError::DivisionByZero`]); as soon as either
//! operand is a float, division follows IEEE-754 and yields an infinity or NaN instead.
mod bigint_to_float;
pub use bigint_to_float::bigint_to_double;

pub mod dynamic;
pub mod float;
pub mod integer;

mod machine;
pub use machine::{MachineWord, MACHINE_INT_MAX, MACHINE_INT_MIN};

mod number;
pub use number::{Kind, Number};

pub use num_bigint as bigint;
pub use num_bigint::BigInt;
pub use num_traits as traits;

use self::dynamic::{BinaryOp, Operand};

/// The ways an arithmetic operation on [`Number`] can fail
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    /// A value outside of the tower was handed to an operation. This can only happen through the
    /// untyped entry points in [`dynamic`].
    #[error("unsupported {side} operand for {op}")]
    UnsupportedOperand { op: BinaryOp, side: Operand },
    /// An integer quotient/remainder was requested with a zero divisor
    #[error("integer division by zero")]
    DivisionByZero,
}

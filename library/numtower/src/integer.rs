//! Canonicalization and overflow-checked fixed-width integer arithmetic.
//!
//! Every function here returns a [`Number`] in canonical form: a value that fits in an `i32` is
//! always `Int32`, a value that fits in an `i64` is always `Int64`, and only values beyond the
//! 64-bit range are `BigInt`.
use log::trace;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::{ArithmeticError, Number};

/// Reduces `i` to `Int32` if it fits in 32 bits, otherwise keeps it as `Int64`
#[inline]
pub fn reduce_i64(i: i64) -> Number {
    match i32::try_from(i) {
        Ok(i) => Number::Int32(i),
        Err(_) => Number::Int64(i),
    }
}

/// Reduces `big` through [`reduce_i64`] if it fits in 64 bits, otherwise keeps it as `BigInt`
pub fn reduce_bigint(big: BigInt) -> Number {
    match big.to_i64() {
        Some(i) => reduce_i64(i),
        None => Number::BigInt(big),
    }
}

/// Computes `a + b`, promoting to `BigInt` on overflow
pub fn add_i64(a: i64, b: i64) -> Number {
    let c = a.wrapping_add(b);
    let overflowed = (a < 0) == (b < 0) && (c < 0) != (a < 0);
    if overflowed {
        trace!(target: "numtower", "{} + {} overflows i64, promoting to bigint", a, b);
        // A 64-bit overflow is always outside of the 64-bit range, no reduction needed
        return Number::BigInt(BigInt::from(a) + b);
    }
    reduce_i64(c)
}

/// Computes `a - b`, promoting to `BigInt` on overflow
pub fn sub_i64(a: i64, b: i64) -> Number {
    match b.checked_neg() {
        Some(neg) => add_i64(a, neg),
        // `a - i64::MIN` stays in range exactly when `a` is negative
        None if a < 0 => reduce_i64(a - b),
        None => {
            trace!(target: "numtower", "{} - {} overflows i64, promoting to bigint", a, b);
            Number::BigInt(BigInt::from(a) - b)
        }
    }
}

/// Computes `a * b`.
///
/// The product is always computed with arbitrary precision and then reduced.
pub fn mul_i64(a: i64, b: i64) -> Number {
    let product = reduce_bigint(BigInt::from(a) * b);
    if let Number::BigInt(_) = product {
        trace!(target: "numtower", "{} * {} overflows i64, promoting to bigint", a, b);
    }
    product
}

/// Computes `-a`, promoting `i64::MIN` to `BigInt`
pub fn neg_i64(a: i64) -> Number {
    match a.checked_neg() {
        Some(neg) => reduce_i64(neg),
        None => {
            trace!(target: "numtower", "-({}) overflows i64, promoting to bigint", a);
            Number::BigInt(-BigInt::from(a))
        }
    }
}

/// Truncating quotient and remainder of `a / b`; the remainder takes the sign of `a`
pub fn quo_rem_i64(a: i64, b: i64) -> Result<(Number, Number), ArithmeticError> {
    if b == 0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    match (a.checked_div(b), a.checked_rem(b)) {
        (Some(q), Some(r)) => Ok((reduce_i64(q), reduce_i64(r))),
        _ => {
            trace!(target: "numtower", "{} / {} overflows i64, promoting to bigint", a, b);
            quo_rem_bigint(&BigInt::from(a), &BigInt::from(b))
        }
    }
}

/// Truncating quotient and remainder of `a / b` with arbitrary precision
pub fn quo_rem_bigint(a: &BigInt, b: &BigInt) -> Result<(Number, Number), ArithmeticError> {
    if b.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }
    // `div_rem` truncates toward zero, unlike `div_mod_floor`
    let (q, r) = a.div_rem(b);
    Ok((reduce_bigint(q), reduce_bigint(r)))
}

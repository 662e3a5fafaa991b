use core::any::Any;
use core::cmp::Ordering;
use core::fmt;
use core::iter::{Product, Sum};
use core::ops::{Add, Mul, Neg, Sub};

use half::f16;
use num_bigint::{BigInt, Sign};
use num_traits::{ToPrimitive, Zero};

use crate::float::{fmt_f64, quo_rem_f64};
use crate::integer::{
    add_i64, mul_i64, neg_i64, quo_rem_bigint, quo_rem_i64, reduce_bigint, reduce_i64, sub_i64,
};
use crate::{bigint_to_double, ArithmeticError, MachineWord};

/// A number in the tower.
///
/// Values produced by conversions and arithmetic are always canonical: an `Int64` never holds a
/// value that fits in an `i32`, and a `BigInt` never holds a value that fits in an `i64`. Floats
/// are never reduced to integers, even when whole.
///
/// The variants are public so callers can dispatch on the representation; construct values with
/// `From` (or [`Number::canonicalize`]) to keep that dispatch meaningful.
#[derive(Debug, Clone)]
pub enum Number {
    Int32(i32),
    Int64(i64),
    Float64(f64),
    BigInt(BigInt),
}

/// The representation a [`Number`] currently uses
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    Int32,
    Int64,
    Float64,
    BigInt,
}
impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Int32 => f.write_str("int32"),
            Self::Int64 => f.write_str("int64"),
            Self::Float64 => f.write_str("float64"),
            Self::BigInt => f.write_str("bigint"),
        }
    }
}

impl Number {
    /// Converts an untyped scalar into a number.
    ///
    /// Accepts `i32`, `i64`, `isize`, `f32`, `f64`, `f16`, `BigInt` and `Number` itself. Returns
    /// `None` for anything else, leaving the caller to decide how to handle it.
    pub fn from_scalar(value: &dyn Any) -> Option<Self> {
        macro_rules! downcast {
            ($($ty:ty),*) => {
                $(
                    if let Some(v) = value.downcast_ref::<$ty>() {
                        return Some(Self::from(*v));
                    }
                )*
            };
        }

        downcast!(i32, i64, isize, f32, f64, f16);
        if let Some(big) = value.downcast_ref::<BigInt>() {
            return Some(reduce_bigint(big.clone()));
        }
        value.downcast_ref::<Self>().cloned()
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Int32(_) => Kind::Int32,
            Self::Int64(_) => Kind::Int64,
            Self::Float64(_) => Kind::Float64,
            Self::BigInt(_) => Kind::BigInt,
        }
    }

    /// Rewrites this number into the narrowest representation that holds it exactly
    pub fn canonicalize(self) -> Self {
        match self {
            Self::Int64(i) => reduce_i64(i),
            Self::BigInt(i) => reduce_bigint(i),
            n => n,
        }
    }

    /// Returns true if no narrower representation of this value exists
    pub fn is_canonical(&self) -> bool {
        match self {
            Self::Int32(_) | Self::Float64(_) => true,
            Self::Int64(i) => i32::try_from(*i).is_err(),
            Self::BigInt(i) => i.to_i64().is_none(),
        }
    }

    /// Returns true if both the representation and the value are identical
    pub fn same_repr(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int32(a), Self::Int32(b)) => a == b,
            (Self::Int64(a), Self::Int64(b)) => a == b,
            (Self::Float64(a), Self::Float64(b)) => a.to_bits() == b.to_bits(),
            (Self::BigInt(a), Self::BigInt(b)) => a == b,
            _ => false,
        }
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        !matches!(self, Self::Float64(_))
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, Self::Float64(f) if f.is_nan())
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Self::Int32(i) => *i == 0,
            Self::Int64(i) => *i == 0,
            Self::Float64(f) => *f == 0.0,
            Self::BigInt(i) => i.is_zero(),
        }
    }

    /// Converts this number to the nearest f64; big integers out of range become infinities
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Int32(i) => *i as f64,
            Self::Int64(i) => *i as f64,
            Self::Float64(f) => *f,
            Self::BigInt(i) => bigint_to_double(i),
        }
    }

    /// Converts this number to a machine integer of the given width.
    ///
    /// The second element reports whether the conversion was exact. Integers that do not fit are
    /// clamped to the word's minimum or maximum by sign. Floats are truncated and never reported
    /// as exact, even when whole.
    pub fn to_machine_int(&self, word: MachineWord) -> (i64, bool) {
        match self {
            Self::Int32(i) => (*i as i64, true),
            Self::Int64(i) => word.clamp(*i),
            // `as` saturates out of range values and maps NaN to zero
            Self::Float64(f) => (word.clamp(f.trunc() as i64).0, false),
            Self::BigInt(i) => match i.to_i64() {
                Some(i) => word.clamp(i),
                None => (word.saturate(i.sign() == Sign::Minus), false),
            },
        }
    }

    /// Compares two numbers by value.
    ///
    /// Whenever a float is involved, the other operand is converted to its nearest f64 first, so
    /// distinct integers beyond 2^53 may compare equal to each other's float neighbors. A NaN
    /// operand compares as `Equal`; use `partial_cmp` to detect it.
    pub fn compare(&self, rhs: &Self) -> Ordering {
        match (self, rhs) {
            (Self::Int32(a), Self::Int32(b)) => a.cmp(b),
            (Self::Int32(a), Self::Int64(b)) => (*a as i64).cmp(b),
            (Self::Int64(a), Self::Int32(b)) => a.cmp(&(*b as i64)),
            (Self::Int64(a), Self::Int64(b)) => a.cmp(b),

            (Self::Int32(a), Self::Float64(b)) => cmp_f64(*a as f64, *b),
            (Self::Int64(a), Self::Float64(b)) => cmp_f64(*a as f64, *b),
            (Self::Float64(a), Self::Int32(b)) => cmp_f64(*a, *b as f64),
            (Self::Float64(a), Self::Int64(b)) => cmp_f64(*a, *b as f64),
            (Self::Float64(a), Self::Float64(b)) => cmp_f64(*a, *b),
            (Self::Float64(a), Self::BigInt(b)) => cmp_f64(*a, bigint_to_double(b)),
            (Self::BigInt(a), Self::Float64(b)) => cmp_f64(bigint_to_double(a), *b),

            (Self::Int32(a), Self::BigInt(b)) => BigInt::from(*a).cmp(b),
            (Self::Int64(a), Self::BigInt(b)) => BigInt::from(*a).cmp(b),
            (Self::BigInt(a), Self::Int32(b)) => a.cmp(&BigInt::from(*b)),
            (Self::BigInt(a), Self::Int64(b)) => a.cmp(&BigInt::from(*b)),
            (Self::BigInt(a), Self::BigInt(b)) => a.cmp(b),
        }
    }

    /// Like [`compare`](Self::compare), but returns -1, 0 or 1
    #[inline]
    pub fn cmp_sign(&self, rhs: &Self) -> i32 {
        self.compare(rhs) as i32
    }

    /// Returns the true quotient `self / rhs` as a float, whatever the operand representations.
    ///
    /// Follows IEEE-754, so a zero divisor yields an infinity or NaN rather than an error.
    pub fn rquo(&self, rhs: &Self) -> f64 {
        self.to_f64() / rhs.to_f64()
    }

    /// Returns the truncating quotient and the remainder of `self / rhs`.
    ///
    /// `self == quotient * rhs + remainder` holds, and a nonzero remainder has the sign of
    /// `self`. When both operands are integers, a zero divisor is an error. When either operand
    /// is a float, the quotient is `trunc(self / rhs)` (re-expressed as an exact integer if it is
    /// finite, whole and within 2^53) and the remainder is `fmod(self, rhs)` as a float; a zero
    /// divisor then produces an infinity or NaN.
    pub fn quo_rem(&self, rhs: &Self) -> Result<(Self, Self), ArithmeticError> {
        match (self, rhs) {
            (Self::Int32(a), Self::Int32(b)) => match (a.checked_div(*b), a.checked_rem(*b)) {
                (Some(q), Some(r)) => Ok((Self::Int32(q), Self::Int32(r))),
                // Zero divisor, or i32::MIN / -1 whose quotient needs 64 bits
                _ => quo_rem_i64(*a as i64, *b as i64),
            },
            (Self::Int32(a), Self::Int64(b)) => quo_rem_i64(*a as i64, *b),
            (Self::Int64(a), Self::Int32(b)) => quo_rem_i64(*a, *b as i64),
            (Self::Int64(a), Self::Int64(b)) => quo_rem_i64(*a, *b),

            (Self::Int32(a), Self::BigInt(b)) => quo_rem_bigint(&BigInt::from(*a), b),
            (Self::Int64(a), Self::BigInt(b)) => quo_rem_bigint(&BigInt::from(*a), b),
            (Self::BigInt(a), Self::Int32(b)) => quo_rem_bigint(a, &BigInt::from(*b)),
            (Self::BigInt(a), Self::Int64(b)) => quo_rem_bigint(a, &BigInt::from(*b)),
            (Self::BigInt(a), Self::BigInt(b)) => quo_rem_bigint(a, b),

            (Self::Float64(a), Self::Float64(b)) => Ok(quo_rem_f64(*a, *b)),
            (Self::Float64(a), b) => Ok(quo_rem_f64(*a, b.to_f64())),
            (a, Self::Float64(b)) => Ok(quo_rem_f64(a.to_f64(), *b)),
        }
    }

    pub fn abs(&self) -> Self {
        match self {
            Self::Float64(f) => Self::Float64(f.abs()),
            n if n.compare(&Self::Int32(0)) == Ordering::Less => neg_number(n),
            n => n.clone(),
        }
    }
}

/// Dispatches `lhs + rhs` over every pair of representations
fn add_numbers(lhs: &Number, rhs: &Number) -> Number {
    match (lhs, rhs) {
        (Number::Int32(a), Number::Int32(b)) => reduce_i64(*a as i64 + *b as i64),
        (Number::Int32(a), Number::Int64(b)) => add_i64(*a as i64, *b),
        (Number::Int64(a), Number::Int32(b)) => add_i64(*a, *b as i64),
        (Number::Int64(a), Number::Int64(b)) => add_i64(*a, *b),

        (Number::Int32(a), Number::Float64(b)) => Number::Float64(*a as f64 + b),
        (Number::Int64(a), Number::Float64(b)) => Number::Float64(*a as f64 + b),
        (Number::Float64(a), Number::Int32(b)) => Number::Float64(a + *b as f64),
        (Number::Float64(a), Number::Int64(b)) => Number::Float64(a + *b as f64),
        (Number::Float64(a), Number::Float64(b)) => Number::Float64(a + b),
        (Number::Float64(a), Number::BigInt(b)) => Number::Float64(a + bigint_to_double(b)),
        (Number::BigInt(a), Number::Float64(b)) => Number::Float64(bigint_to_double(a) + b),

        (Number::Int32(a), Number::BigInt(b)) => reduce_bigint(BigInt::from(*a) + b),
        (Number::Int64(a), Number::BigInt(b)) => reduce_bigint(BigInt::from(*a) + b),
        (Number::BigInt(a), Number::Int32(b)) => reduce_bigint(a + BigInt::from(*b)),
        (Number::BigInt(a), Number::Int64(b)) => reduce_bigint(a + BigInt::from(*b)),
        (Number::BigInt(a), Number::BigInt(b)) => reduce_bigint(a + b),
    }
}

fn sub_numbers(lhs: &Number, rhs: &Number) -> Number {
    match (lhs, rhs) {
        (Number::Int32(a), Number::Int32(b)) => reduce_i64(*a as i64 - *b as i64),
        (Number::Int32(a), Number::Int64(b)) => sub_i64(*a as i64, *b),
        (Number::Int64(a), Number::Int32(b)) => sub_i64(*a, *b as i64),
        (Number::Int64(a), Number::Int64(b)) => sub_i64(*a, *b),

        (Number::Int32(a), Number::Float64(b)) => Number::Float64(*a as f64 - b),
        (Number::Int64(a), Number::Float64(b)) => Number::Float64(*a as f64 - b),
        (Number::Float64(a), Number::Int32(b)) => Number::Float64(a - *b as f64),
        (Number::Float64(a), Number::Int64(b)) => Number::Float64(a - *b as f64),
        (Number::Float64(a), Number::Float64(b)) => Number::Float64(a - b),
        (Number::Float64(a), Number::BigInt(b)) => Number::Float64(a - bigint_to_double(b)),
        (Number::BigInt(a), Number::Float64(b)) => Number::Float64(bigint_to_double(a) - b),

        (Number::Int32(a), Number::BigInt(b)) => reduce_bigint(BigInt::from(*a) - b),
        (Number::Int64(a), Number::BigInt(b)) => reduce_bigint(BigInt::from(*a) - b),
        (Number::BigInt(a), Number::Int32(b)) => reduce_bigint(a - BigInt::from(*b)),
        (Number::BigInt(a), Number::Int64(b)) => reduce_bigint(a - BigInt::from(*b)),
        (Number::BigInt(a), Number::BigInt(b)) => reduce_bigint(a - b),
    }
}

fn mul_numbers(lhs: &Number, rhs: &Number) -> Number {
    match (lhs, rhs) {
        // The product of two i32 always fits in an i64
        (Number::Int32(a), Number::Int32(b)) => reduce_i64(*a as i64 * *b as i64),
        (Number::Int32(a), Number::Int64(b)) => mul_i64(*a as i64, *b),
        (Number::Int64(a), Number::Int32(b)) => mul_i64(*a, *b as i64),
        (Number::Int64(a), Number::Int64(b)) => mul_i64(*a, *b),

        (Number::Int32(a), Number::Float64(b)) => Number::Float64(*a as f64 * b),
        (Number::Int64(a), Number::Float64(b)) => Number::Float64(*a as f64 * b),
        (Number::Float64(a), Number::Int32(b)) => Number::Float64(a * *b as f64),
        (Number::Float64(a), Number::Int64(b)) => Number::Float64(a * *b as f64),
        (Number::Float64(a), Number::Float64(b)) => Number::Float64(a * b),
        (Number::Float64(a), Number::BigInt(b)) => Number::Float64(a * bigint_to_double(b)),
        (Number::BigInt(a), Number::Float64(b)) => Number::Float64(bigint_to_double(a) * b),

        (Number::Int32(a), Number::BigInt(b)) => reduce_bigint(BigInt::from(*a) * b),
        (Number::Int64(a), Number::BigInt(b)) => reduce_bigint(BigInt::from(*a) * b),
        (Number::BigInt(a), Number::Int32(b)) => reduce_bigint(a * BigInt::from(*b)),
        (Number::BigInt(a), Number::Int64(b)) => reduce_bigint(a * BigInt::from(*b)),
        (Number::BigInt(a), Number::BigInt(b)) => reduce_bigint(a * b),
    }
}

/// Negates `n`, promoting when the negation leaves the current width
fn neg_number(n: &Number) -> Number {
    match n {
        Number::Int32(i) => reduce_i64(-(*i as i64)),
        Number::Int64(i) => neg_i64(*i),
        Number::Float64(f) => Number::Float64(-f),
        // -(2^63) fits in an i64
        Number::BigInt(i) => reduce_bigint(-i),
    }
}

#[inline]
fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Int32(i) => fmt::Display::fmt(i, f),
            Self::Int64(i) => fmt::Display::fmt(i, f),
            Self::Float64(float) => fmt_f64(*float, f),
            Self::BigInt(i) => fmt::Display::fmt(i, f),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, rhs: &Self) -> bool {
        !self.is_nan() && !rhs.is_nan() && self.compare(rhs) == Ordering::Equal
    }
}
impl PartialOrd for Number {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        if self.is_nan() || rhs.is_nan() {
            None
        } else {
            Some(self.compare(rhs))
        }
    }
}

impl From<i32> for Number {
    #[inline(always)]
    fn from(i: i32) -> Self {
        Self::Int32(i)
    }
}
impl From<i64> for Number {
    #[inline(always)]
    fn from(i: i64) -> Self {
        reduce_i64(i)
    }
}
impl From<isize> for Number {
    #[inline(always)]
    fn from(i: isize) -> Self {
        reduce_i64(i as i64)
    }
}
impl From<f64> for Number {
    #[inline(always)]
    fn from(f: f64) -> Self {
        Self::Float64(f)
    }
}
impl From<f32> for Number {
    #[inline(always)]
    fn from(f: f32) -> Self {
        Self::Float64(f as f64)
    }
}
impl From<f16> for Number {
    #[inline(always)]
    fn from(f: f16) -> Self {
        Self::Float64(f.to_f64())
    }
}
impl From<BigInt> for Number {
    #[inline]
    fn from(i: BigInt) -> Self {
        reduce_bigint(i)
    }
}
impl From<&BigInt> for Number {
    #[inline]
    fn from(i: &BigInt) -> Self {
        reduce_bigint(i.clone())
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $fun:ident) => {
        impl $imp<&Number> for &Number {
            type Output = Number;

            #[inline]
            fn $method(self, rhs: &Number) -> Number {
                $fun(self, rhs)
            }
        }
        impl $imp<Number> for &Number {
            type Output = Number;

            #[inline]
            fn $method(self, rhs: Number) -> Number {
                $fun(self, &rhs)
            }
        }
        impl $imp<&Number> for Number {
            type Output = Number;

            #[inline]
            fn $method(self, rhs: &Number) -> Number {
                $fun(&self, rhs)
            }
        }
        impl $imp for Number {
            type Output = Number;

            #[inline]
            fn $method(self, rhs: Number) -> Number {
                $fun(&self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add, add_numbers);
forward_binop!(Sub, sub, sub_numbers);
forward_binop!(Mul, mul, mul_numbers);

impl Neg for Number {
    type Output = Number;

    #[inline]
    fn neg(self) -> Number {
        neg_number(&self)
    }
}
impl Neg for &Number {
    type Output = Number;

    #[inline]
    fn neg(self) -> Number {
        neg_number(self)
    }
}

impl Sum for Number {
    fn sum<I: Iterator<Item = Number>>(iter: I) -> Self {
        iter.fold(Number::Int32(0), |acc, n| acc + n)
    }
}
impl<'a> Sum<&'a Number> for Number {
    fn sum<I: Iterator<Item = &'a Number>>(iter: I) -> Self {
        iter.fold(Number::Int32(0), |acc, n| acc + n)
    }
}
impl Product for Number {
    fn product<I: Iterator<Item = Number>>(iter: I) -> Self {
        iter.fold(Number::Int32(1), |acc, n| acc * n)
    }
}
impl<'a> Product<&'a Number> for Number {
    fn product<I: Iterator<Item = &'a Number>>(iter: I) -> Self {
        iter.fold(Number::Int32(1), |acc, n| acc * n)
    }
}

use core::fmt;

use log::trace;
use num_bigint::BigInt;
use num_traits::FromPrimitive;

use crate::integer::reduce_bigint;
use crate::Number;

/// The largest magnitude below which every whole f64 is an exactly known integer (2^53).
///
/// Whole-valued floats beyond this bound may already have lost precision, so quotients that
/// large are not re-expressed as integers.
pub const MAX_EXACT_FLOAT_INT: f64 = (1u64 << f64::MANTISSA_DIGITS) as f64;

/// Decimal exponents at or above this, or below -4, are written in exponent form
const EXPONENT_FORM_AT: i32 = 6;

/// Writes `f` with the fewest digits that read back as the same value, always including a
/// decimal point or an exponent so that whole floats read back as floats (`5.0`, not `5`).
///
/// Small and moderate magnitudes are written positionally (`0.0001`, `123456.0`); the rest use
/// a signed exponent of at least two digits (`1e-05`, `1.5e+06`, `1e+300`). Non-finite values
/// are written as `NaN`, `inf` and `-inf`.
pub fn fmt_f64(f: f64, formatter: &mut fmt::Formatter) -> fmt::Result {
    if !f.is_finite() {
        return fmt::Debug::fmt(&f, formatter);
    }
    if f == 0.0 {
        return formatter.write_str(if f.is_sign_negative() { "-0.0" } else { "0.0" });
    }

    // `{:e}` yields the shortest round-trip digits as `d.ddde<exp>`
    let scientific = format!("{:e}", f);
    let (mantissa, exp) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    if exp < -4 || exp >= EXPONENT_FORM_AT {
        let sign = if exp < 0 { '-' } else { '+' };
        return write!(formatter, "{}e{}{:02}", mantissa, sign, exp.unsigned_abs());
    }

    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(m) => ("-", m),
        None => ("", mantissa),
    };
    let digits = mantissa.replace('.', "");
    // Number of digits before the decimal point
    let point = exp + 1;
    if point <= 0 {
        write!(formatter, "{}0.{}{}", sign, "0".repeat(point.unsigned_abs() as usize), digits)
    } else if point as usize >= digits.len() {
        let zeros = "0".repeat(point as usize - digits.len());
        write!(formatter, "{}{}{}.0", sign, digits, zeros)
    } else {
        let (whole, fraction) = digits.split_at(point as usize);
        write!(formatter, "{}{}.{}", sign, whole, fraction)
    }
}

/// Formats `f` the same way [`Number`]'s `Display` implementation does
pub fn format_f64(f: f64) -> String {
    struct Wrapper(f64);
    impl fmt::Display for Wrapper {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            fmt_f64(self.0, f)
        }
    }
    Wrapper(f).to_string()
}

/// Converts a whole-valued float to an exact integer.
///
/// Returns `None` for non-finite values, values with a fractional part, and values whose
/// magnitude exceeds [`MAX_EXACT_FLOAT_INT`].
pub fn whole_to_integer(f: f64) -> Option<Number> {
    if !f.is_finite() || f.fract() != 0.0 {
        return None;
    }
    if f.abs() > MAX_EXACT_FLOAT_INT {
        trace!(target: "numtower", "{:?} is beyond the exact integer range of f64, keeping float", f);
        return None;
    }
    BigInt::from_f64(f).map(reduce_bigint)
}

/// Truncating quotient and remainder of two floats.
///
/// The quotient is `trunc(a / b)`, re-expressed as an exact integer whenever
/// [`whole_to_integer`] allows it; the remainder is `fmod(a, b)` and always a float. A zero
/// divisor is not an error, it produces an infinity or NaN.
pub fn quo_rem_f64(a: f64, b: f64) -> (Number, Number) {
    let q = (a / b).trunc();
    let r = a % b;
    let q = whole_to_integer(q).unwrap_or(Number::Float64(q));
    (q, Number::Float64(r))
}

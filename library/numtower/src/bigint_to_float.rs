use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;

/// Converts `big` to the nearest f64.
///
/// Values beyond the range of f64 become an infinity of the same sign; this is not an error.
pub fn bigint_to_double(big: &BigInt) -> f64 {
    match big.to_f64() {
        Some(d) => d,
        None if big.sign() == Sign::Minus => f64::NEG_INFINITY,
        None => f64::INFINITY,
    }
}

#[cfg(test)]
mod tests {
    use super::bigint_to_double;
    use num_bigint::BigInt;
    use num_traits::Num;

    #[test]
    fn test_bigint_to_double() {
        let bi = BigInt::from(100);
        assert!(bigint_to_double(&bi) == 100.0);

        let bi = BigInt::from(10000000000i64);
        assert!(bigint_to_double(&bi) == 10000000000.0);

        let bi = BigInt::from(-1000000000000000000i64);
        assert!(bigint_to_double(&bi) == -1000000000000000000.0);
    }

    #[test]
    fn test_bigint_to_double_rounds_to_nearest() {
        // 2^53 + 1 is halfway between two doubles and rounds to even
        let bi = BigInt::from((1i64 << 53) + 1);
        assert!(bigint_to_double(&bi) == 9007199254740992.0);

        let bi = BigInt::from(u64::MAX) * 4;
        assert!(bigint_to_double(&bi) == 73786976294838206464.0);
    }

    #[test]
    fn test_bigint_to_double_saturates() {
        let huge = BigInt::from_str_radix(&"9".repeat(400), 10).unwrap();
        assert_eq!(bigint_to_double(&huge), f64::INFINITY);
        assert_eq!(bigint_to_double(&-huge), f64::NEG_INFINITY);
    }
}

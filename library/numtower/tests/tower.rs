use numtower::{ArithmeticError, BigInt, Kind, MachineWord, Number};
use pretty_assertions::assert_eq;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn promotion_boundaries() {
    init();

    let n = Number::from(i32::MAX) + Number::Int32(1);
    assert!(n.same_repr(&Number::Int64(i32::MAX as i64 + 1)));

    let n = Number::from(i64::MAX) + Number::from(1i64);
    assert_eq!(n.kind(), Kind::BigInt);
    assert_eq!(n.to_string(), "9223372036854775808");

    let n = Number::from(i64::MIN) - Number::Int32(1);
    assert_eq!(n.kind(), Kind::BigInt);
    assert_eq!(n.to_string(), "-9223372036854775809");
}

#[test]
fn factorial_growth() {
    init();

    let mut n = Number::Int32(1);
    let mut kinds = Vec::new();
    for i in 2..=30 {
        n = n * Number::Int32(i);
        assert!(n.is_canonical());
        kinds.push((i, n.kind()));
    }

    for (i, kind) in kinds {
        let expected = match i {
            2..=12 => Kind::Int32,
            13..=20 => Kind::Int64,
            _ => Kind::BigInt,
        };
        assert_eq!(kind, expected, "{}!", i);
    }
    assert_eq!(n.to_string(), "265252859812191058636308480000000");

    let mut n = Number::from(1i64);
    for i in 2..=40i64 {
        n = n * Number::from(i);
    }
    assert_eq!(n.to_string(), "815915283247897734345611269596115894272000000000");
}

#[test]
fn fibonacci_growth() {
    init();

    let mut a = Number::Int32(0);
    let mut b = Number::Int32(1);
    let mut seen = Vec::new();
    for i in 0..=100 {
        if i % 10 == 0 {
            seen.push((a.kind(), a.to_string()));
        }
        let next = &a + &b;
        a = b;
        b = next;
    }

    let expected = [
        (Kind::Int32, "0"),
        (Kind::Int32, "55"),
        (Kind::Int32, "6765"),
        (Kind::Int32, "832040"),
        (Kind::Int32, "102334155"),
        (Kind::Int64, "12586269025"),
        (Kind::Int64, "1548008755920"),
        (Kind::Int64, "190392490709135"),
        (Kind::Int64, "23416728348467685"),
        (Kind::Int64, "2880067194370816120"),
        (Kind::BigInt, "354224848179261915075"),
    ];
    let expected: Vec<_> = expected.iter().map(|(k, s)| (*k, s.to_string())).collect();
    assert_eq!(seen, expected);
}

#[test]
fn float_formatting() {
    assert_eq!(Number::Float64(5.000).to_string(), "5.0");
    assert_eq!(Number::Float64(1.234).to_string(), "1.234");
    assert_eq!(Number::from(-3.0f32).to_string(), "-3.0");
    assert_eq!(Number::Float64(1e21).to_string(), "1e+21");
    assert_eq!(Number::Float64(1e-5).to_string(), "1e-05");
    assert_eq!(Number::Float64(1.2345678901234568e20).to_string(), "1.2345678901234568e+20");
    // Whole float quotients too large to re-express stay floats and print in exponent form
    let (q, _) = Number::Float64(1e20).quo_rem(&Number::Int32(1)).unwrap();
    assert_eq!(q.to_string(), "1e+20");
}

#[test]
fn signed_truncating_division() {
    let cases = [(13, 4, 3, 1), (-13, 4, -3, -1), (13, -4, -3, 1), (-13, -4, 3, -1)];
    for (a, b, q, r) in cases {
        for (lhs, rhs) in [
            (Number::Int32(a), Number::Int32(b)),
            (Number::Int64(a as i64), Number::Int64(b as i64)),
            (Number::BigInt(BigInt::from(a)), Number::from(b as i64)),
        ] {
            let (quotient, remainder) = lhs.quo_rem(&rhs).unwrap();
            assert!(quotient.same_repr(&Number::Int32(q)), "{} / {}", lhs, rhs);
            assert!(remainder.same_repr(&Number::Int32(r)), "{} % {}", lhs, rhs);
        }
    }
}

#[test]
fn float_quotient_re_expression() {
    init();

    let (q, r) = Number::Float64(13.0).quo_rem(&Number::Float64(4.0)).unwrap();
    assert!(q.same_repr(&Number::Int32(3)));
    assert!(r.same_repr(&Number::Float64(1.0)));
    assert_eq!(q.to_string(), "3");
    assert_eq!(r.to_string(), "1.0");

    let (q, r) = Number::Float64(13.4).quo_rem(&Number::Float64(1.0)).unwrap();
    assert!(q.same_repr(&Number::Int32(13)));
    match r {
        Number::Float64(r) => assert!((r - 0.4).abs() < 1e-9),
        other => panic!("expected float remainder, got {:?}", other),
    }

    let (q, r) = Number::Float64(-13.4).quo_rem(&Number::Int32(1)).unwrap();
    assert!(q.same_repr(&Number::Int32(-13)));
    assert_eq!(r.kind(), Kind::Float64);

    // Quotients past 2^53 are not trusted as exact integers
    let (q, _) = Number::Float64(1e300).quo_rem(&Number::Float64(3.0)).unwrap();
    assert_eq!(q.kind(), Kind::Float64);
}

#[test]
fn float_division_by_zero_is_not_an_error() {
    let (q, r) = Number::Float64(1.0).quo_rem(&Number::Int32(0)).unwrap();
    assert!(q.same_repr(&Number::Float64(f64::INFINITY)));
    assert!(r.is_nan());

    let (q, _) = Number::Float64(-1.0).quo_rem(&Number::Float64(0.0)).unwrap();
    assert!(q.same_repr(&Number::Float64(f64::NEG_INFINITY)));

    assert_eq!(
        Number::Int32(1).quo_rem(&Number::Int32(0)),
        Err(ArithmeticError::DivisionByZero)
    );
    assert_eq!(
        ArithmeticError::DivisionByZero.to_string(),
        "integer division by zero"
    );
}

#[test]
fn machine_int_conversion() {
    let huge: Number = "123456789012345678901234567890".parse::<BigInt>().unwrap().into();
    assert_eq!(huge.to_machine_int(MachineWord::Bits64), (i64::MAX, false));
    assert_eq!(huge.to_machine_int(MachineWord::Bits32), (i32::MAX as i64, false));
    assert_eq!(
        Number::from(5i64).to_machine_int(MachineWord::NATIVE),
        (5, true)
    );
    assert_eq!(
        Number::Float64(7.0).to_machine_int(MachineWord::NATIVE),
        (7, false)
    );
    assert_eq!(numtower::MACHINE_INT_MAX, MachineWord::NATIVE.max());
}

use super::{AnyI64, AnyU32, ValidNanos};
use crate::nanos::NANOS_PER_SEC;
use crate::{resolve, Error, NormalizedDuration, Sign, SignedOffset};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

fn add(seconds: u64, nanos: u32) -> NormalizedDuration {
    NormalizedDuration {
        seconds,
        nanos,
        sign: Sign::Add,
    }
}

fn sub(seconds: u64, nanos: u32) -> NormalizedDuration {
    NormalizedDuration {
        seconds,
        nanos,
        sign: Sign::Subtract,
    }
}

fn signed_nanos(duration: NormalizedDuration) -> i128 {
    let magnitude = i128::from(duration.seconds) * 1_000_000_000 + i128::from(duration.nanos);
    match duration.sign {
        Sign::Add => magnitude,
        Sign::Subtract => -magnitude,
    }
}

#[test]
fn normalize_splits_on_sign() {
    assert_eq!(SignedOffset::new(0, 0).normalize(), add(0, 0));
    assert_eq!(SignedOffset::new(5, 500_000_000).normalize(), add(5, 500_000_000));
    assert_eq!(SignedOffset::new(-1, 750_000_000).normalize(), sub(0, 250_000_000));
    assert_eq!(SignedOffset::new(-3, 0).normalize(), sub(3, 0));
    assert_eq!(SignedOffset::new(-2, 999_999_999).normalize(), sub(1, 1));
}

#[test]
fn normalize_handles_extremes() {
    assert_eq!(
        SignedOffset::new(i64::MAX, 999_999_999).normalize(),
        add(i64::MAX as u64, 999_999_999)
    );
    assert_eq!(SignedOffset::new(i64::MIN, 0).normalize(), sub(1 << 63, 0));
    assert_eq!(
        SignedOffset::new(i64::MIN, 1).normalize(),
        sub(i64::MAX as u64, 999_999_999)
    );
}

#[test]
fn normalize_carries_malformed_nanos() {
    assert_eq!(
        SignedOffset::new(i64::MAX, 1_500_000_000).normalize(),
        add(i64::MAX as u64 + 1, 500_000_000)
    );
    assert_eq!(SignedOffset::new(-1, 1_500_000_000).normalize(), add(0, 500_000_000));
    assert_eq!(SignedOffset::new(-2, 1_000_000_000).normalize(), sub(1, 0));
    assert_eq!(SignedOffset::new(-5, u32::MAX).normalize(), sub(0, 705_032_705));
    assert_eq!(
        SignedOffset::new(i64::MAX, u32::MAX).normalize(),
        add(i64::MAX as u64 + 4, 294_967_295)
    );
}

#[quickcheck]
fn normalize_preserves_value(seconds: AnyI64, nanos: AnyU32) -> bool {
    let offset = SignedOffset::new(seconds.0, nanos.0);
    let expected = i128::from(seconds.0) * 1_000_000_000 + i128::from(nanos.0);
    let normalized = offset.normalize();
    normalized.nanos < NANOS_PER_SEC && signed_nanos(normalized) == expected
}

#[quickcheck]
fn extra_second_of_nanos_equals_next_second(seconds: AnyI64, nanos: ValidNanos) -> TestResult {
    if seconds.0 == i64::MAX {
        return TestResult::discard();
    }
    let malformed = SignedOffset::new(seconds.0, nanos.0 + NANOS_PER_SEC);
    let expected = SignedOffset::new(seconds.0 + 1, nanos.0);
    TestResult::from_bool(malformed.normalize() == expected.normalize())
}

#[test]
fn from_system_time_uses_floored_encoding() {
    let decompose = |time| SignedOffset::from_system_time(time).unwrap();
    assert_eq!(decompose(UNIX_EPOCH), SignedOffset::new(0, 0));
    assert_eq!(decompose(UNIX_EPOCH + Duration::new(1, 0)), SignedOffset::new(1, 0));
    assert_eq!(decompose(UNIX_EPOCH + Duration::new(0, 1)), SignedOffset::new(0, 1));
    assert_eq!(decompose(UNIX_EPOCH - Duration::new(1, 0)), SignedOffset::new(-1, 0));
    assert_eq!(
        decompose(UNIX_EPOCH - Duration::new(0, 1)),
        SignedOffset::new(-1, 999_999_999)
    );
    assert_eq!(
        decompose(UNIX_EPOCH - Duration::new(1, 1)),
        SignedOffset::new(-2, 999_999_999)
    );
}

#[test]
fn from_system_time_reaches_minimum_seconds() {
    // Not every platform can represent this far back.
    if let Some(time) = UNIX_EPOCH.checked_sub(Duration::new(i64::MAX as u64, 1)) {
        assert_eq!(
            SignedOffset::from_system_time(time).unwrap(),
            SignedOffset::new(i64::MIN, 999_999_999)
        );
    }
}

#[quickcheck]
fn from_system_time_inverts_resolve(seconds: AnyI64, nanos: ValidNanos) -> TestResult {
    // Keep within what every platform's SystemTime can hold.
    let seconds = seconds.0 >> 30;
    let time = match resolve::<SystemTime>(seconds, nanos.0) {
        Some(time) => time,
        None => return TestResult::discard(),
    };
    TestResult::from_bool(
        SignedOffset::from_system_time(time).unwrap() == SignedOffset::new(seconds, nanos.0),
    )
}

#[test]
fn display_shows_true_value() {
    assert_eq!(format!("{}", SignedOffset::new(0, 0)), "0");
    assert_eq!(format!("{}", SignedOffset::new(5, 500_000_000)), "5.5");
    assert_eq!(format!("{}", SignedOffset::new(-1, 750_000_000)), "-0.25");
    assert_eq!(format!("{}", SignedOffset::new(-3, 0)), "-3");
    assert_eq!(format!("{}", SignedOffset::new(-1, 999_999_999)), "-0.000000001");
    assert_eq!(format!("{}", SignedOffset::new(-1, 1_000_000_000)), "0");
    assert_eq!(
        format!("{}", SignedOffset::new(i64::MIN, 0)),
        "-9223372036854775808"
    );
}

#[test]
fn conversions_build_offsets() {
    assert_eq!(SignedOffset::from(-4), SignedOffset::new(-4, 0));
    assert_eq!(SignedOffset::from((7, 3)), SignedOffset::new(7, 3));
    assert_eq!(SignedOffset::default(), SignedOffset::from_seconds(0));
}

#[test]
fn display_carries_excess_nanos() {
    assert_eq!(format!("{}", add(1, 1_000_000_000)), "2");
    assert_eq!(format!("{}", add(1, 1_250_000_000)), "2.25");
    assert_eq!(format!("{}", sub(0, 1_500_000_000)), "-1.5");
    assert_eq!(format!("{}", add(u64::MAX, u32::MAX)), "18446744073709551619.294967295");
}

#[test]
fn out_of_range_error_names_side_of_epoch() {
    let after = Error::OffsetOutOfRange {
        seconds: 1 << 63,
        sign: Sign::Add,
    };
    assert!(matches!(after, Error::OffsetOutOfRange { sign: Sign::Add, .. }));
    assert_eq!(
        after.to_string(),
        "time point is 9223372036854775808s after epoch, which does not fit a signed offset"
    );
    let before = Error::OffsetOutOfRange {
        seconds: 1 << 63,
        sign: Sign::Subtract,
    };
    assert_eq!(
        before.to_string(),
        "time point is 9223372036854775808s before epoch, which does not fit a signed offset"
    );
}

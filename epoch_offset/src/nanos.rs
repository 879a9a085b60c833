//! Constants and helpers for the sub-second part of an offset.

/// Number of nanoseconds in one second.
pub const NANOS_PER_SEC: u32 = 1_000_000_000;

/// Largest valid sub-second value.
pub const MAX_NANOS: u32 = NANOS_PER_SEC - 1;

/// Divides `value` by one billion without a division instruction.
///
/// `1_000_000_000 = 2^9 * 1_953_125`, so after shifting out the `2^9` factor
/// the remaining division is replaced by a multiplication with
/// `281_475 / 2^39`, which is close enough to `1 / 1_953_125` to be exact
/// for every `u32` input.
///
/// # Examples
///
/// ```
/// use epoch_offset::nanos::div_1e9;
///
/// assert_eq!(div_1e9(999_999_999), 0);
/// assert_eq!(div_1e9(1_000_000_000), 1);
/// assert_eq!(div_1e9(u32::MAX), 4);
/// ```
#[inline]
pub const fn div_1e9(value: u32) -> u32 {
    (((value as u64) >> 9) * 281_475 >> 39) as u32
}

/// Splits a nanosecond count into whole seconds and the remaining nanoseconds.
///
/// The remainder is always below [`NANOS_PER_SEC`].
///
/// # Examples
///
/// ```
/// use epoch_offset::nanos::split_nanos;
///
/// assert_eq!(split_nanos(250_000_000), (0, 250_000_000));
/// assert_eq!(split_nanos(1_500_000_000), (1, 500_000_000));
/// ```
#[inline]
pub const fn split_nanos(value: u32) -> (u32, u32) {
    let seconds = div_1e9(value);
    (seconds, value - seconds * NANOS_PER_SEC)
}

/// Writes `seconds.nanos` as a decimal, without trailing fractional zeros.
///
/// Excess nanoseconds are carried into the whole seconds.
pub(crate) fn fmt_decimal(
    f: &mut std::fmt::Formatter<'_>,
    negative: bool,
    seconds: u64,
    nanos: u32,
) -> std::fmt::Result {
    let (carry, nanos) = split_nanos(nanos);
    if negative {
        f.write_str("-")?;
    }
    write!(f, "{}", u128::from(seconds) + u128::from(carry))?;
    if nanos == 0 {
        return Ok(());
    }
    let mut fraction = nanos;
    let mut width = 9;
    while fraction % 10 == 0 {
        fraction /= 10;
        width -= 1;
    }
    write!(f, ".{:0width$}", fraction, width = width)
}

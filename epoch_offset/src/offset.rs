use crate::error::{Error, Result};
use crate::nanos::{self, NANOS_PER_SEC};
use log::debug;
use serde_derive::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// A signed offset from an epoch, in floored-division encoding.
///
/// The true offset is `seconds + nanos / 1e9`, where `nanos` is never
/// negative. A negative, fractional offset therefore has `seconds` one below
/// the truncated value: -0.25s is `seconds = -1, nanos = 750_000_000`, and
/// **not** `seconds = 0` with a negative fraction.
///
/// Callers are expected to keep `nanos` below one billion, but larger values
/// are accepted and carried into `seconds` by [`SignedOffset::normalize`].
#[derive(Copy, Clone, Default, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
pub struct SignedOffset {
    /// Whole seconds, rounded towards negative infinity.
    pub seconds: i64,
    /// Non-negative fraction of a second, in nanoseconds.
    pub nanos: u32,
}

/// Direction in which a [`NormalizedDuration`] moves away from the epoch.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    /// The offset is zero or lies after the epoch.
    Add,
    /// The offset lies before the epoch.
    Subtract,
}

/// Sign-magnitude form of a [`SignedOffset`].
///
/// `nanos` is always below one billion.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NormalizedDuration {
    /// Whole seconds of the magnitude.
    pub seconds: u64,
    /// Sub-second part of the magnitude.
    pub nanos: u32,
    /// Direction of the offset.
    pub sign: Sign,
}

impl SignedOffset {
    /// Wraps a floored `(seconds, nanos)` pair without validating it.
    #[inline]
    pub const fn new(seconds: i64, nanos: u32) -> SignedOffset {
        SignedOffset { seconds, nanos }
    }

    /// A whole number of seconds.
    #[inline]
    pub const fn from_seconds(seconds: i64) -> SignedOffset {
        SignedOffset { seconds, nanos: 0 }
    }

    /// Converts the floored encoding into a sign and a magnitude.
    ///
    /// # Examples
    ///
    /// ```
    /// use epoch_offset::{NormalizedDuration, Sign, SignedOffset};
    ///
    /// assert_eq!(
    ///     SignedOffset::new(-1, 750_000_000).normalize(),
    ///     NormalizedDuration { seconds: 0, nanos: 250_000_000, sign: Sign::Subtract },
    /// );
    /// assert_eq!(
    ///     SignedOffset::new(-1, 1_500_000_000).normalize(),
    ///     NormalizedDuration { seconds: 0, nanos: 500_000_000, sign: Sign::Add },
    /// );
    /// ```
    pub fn normalize(self) -> NormalizedDuration {
        let (carry, nanos) = nanos::split_nanos(self.nanos);

        if self.seconds >= 0 {
            // i64::MAX + 4 still fits in u64.
            return NormalizedDuration {
                seconds: self.seconds as u64 + u64::from(carry),
                nanos,
                sign: Sign::Add,
            };
        }

        // Cannot overflow, the carry is at most 4.
        let seconds = self.seconds + i64::from(carry);
        if seconds >= 0 {
            return NormalizedDuration {
                seconds: seconds as u64,
                nanos,
                sign: Sign::Add,
            };
        }

        if nanos == 0 {
            NormalizedDuration {
                seconds: seconds.unsigned_abs(),
                nanos: 0,
                sign: Sign::Subtract,
            }
        } else {
            // `!seconds == -seconds - 1`, and is non-negative here.
            NormalizedDuration {
                seconds: !seconds as u64,
                nanos: NANOS_PER_SEC - nanos,
                sign: Sign::Subtract,
            }
        }
    }

    /// Decomposes a `SystemTime` into its floored offset from the Unix epoch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OffsetOutOfRange`] if the whole seconds do not fit an `i64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use epoch_offset::SignedOffset;
    /// use std::time::{Duration, UNIX_EPOCH};
    ///
    /// let before = UNIX_EPOCH - Duration::new(0, 1);
    /// assert_eq!(
    ///     SignedOffset::from_system_time(before).unwrap(),
    ///     SignedOffset::new(-1, 999_999_999),
    /// );
    /// ```
    pub fn from_system_time(time: SystemTime) -> Result<SignedOffset> {
        match time.duration_since(UNIX_EPOCH) {
            Ok(duration) => {
                let seconds = duration.as_secs();
                if seconds > i64::MAX as u64 {
                    debug!("Rejecting time {}s after epoch", seconds);
                    return Err(Error::OffsetOutOfRange {
                        seconds,
                        sign: Sign::Add,
                    });
                }
                Ok(SignedOffset::new(seconds as i64, duration.subsec_nanos()))
            }
            Err(err) => {
                let duration = err.duration();
                let mut seconds = Some(duration.as_secs());
                let mut nanos = duration.subsec_nanos();
                if nanos > 0 {
                    seconds = seconds.and_then(|v| v.checked_add(1));
                    nanos = NANOS_PER_SEC - nanos;
                }
                match seconds {
                    Some(seconds) if seconds <= i64::MIN.unsigned_abs() => {
                        // Wraps only for 2^63, which is exactly i64::MIN.
                        Ok(SignedOffset::new((seconds as i64).wrapping_neg(), nanos))
                    }
                    _ => {
                        debug!("Rejecting time {:?} before epoch", duration);
                        Err(Error::OffsetOutOfRange {
                            seconds: duration.as_secs(),
                            sign: Sign::Subtract,
                        })
                    }
                }
            }
        }
    }
}

impl NormalizedDuration {
    /// Returns `true` for the epoch itself.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.seconds == 0 && self.nanos == 0
    }
}

impl From<i64> for SignedOffset {
    fn from(seconds: i64) -> Self {
        SignedOffset::from_seconds(seconds)
    }
}

impl From<(i64, u32)> for SignedOffset {
    fn from((seconds, nanos): (i64, u32)) -> Self {
        SignedOffset::new(seconds, nanos)
    }
}

impl fmt::Display for NormalizedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let negative = self.sign == Sign::Subtract && !self.is_zero();
        nanos::fmt_decimal(f, negative, self.seconds, self.nanos)
    }
}

impl fmt::Display for SignedOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.normalize(), f)
    }
}

use crate::error::{Error, Result};
use crate::nanos::{self, NANOS_PER_SEC};
use crate::offset::SignedOffset;
use crate::resolver::{EpochArithmetic, EpochOffsetResolver};
use serde_derive::{Deserialize, Serialize};
use std::cmp;
use std::convert::TryFrom;
use std::fmt;
use std::time::SystemTime;

const BILLION: u64 = NANOS_PER_SEC as u64;

/// Time since the Unix epoch as unsigned 32-bit seconds and nanoseconds.
///
/// Covers 1970-01-01 up to early 2106, so it can neither go before the
/// epoch nor reach `i64::MAX` seconds after it.
#[derive(Copy, Clone, Default, Serialize, Deserialize, Debug, Eq)]
pub struct Time {
    /// Whole seconds since the epoch.
    pub sec: u32,
    /// Nanoseconds past `sec`.
    pub nsec: u32,
}

impl Time {
    /// The epoch itself.
    #[inline]
    pub fn new() -> Time {
        Self::default()
    }

    /// Returns `None` if `t` is past the last representable second.
    #[inline]
    pub fn from_nanos(t: u64) -> Option<Time> {
        Some(Time {
            sec: u32::try_from(t / BILLION).ok()?,
            nsec: (t % BILLION) as u32,
        })
    }

    /// Total nanoseconds since the epoch.
    #[inline]
    pub fn nanos(self) -> u64 {
        u64::from(self.sec) * BILLION + u64::from(self.nsec)
    }

    /// Lossy conversion to fractional seconds.
    #[inline]
    pub fn seconds(self) -> f64 {
        f64::from(self.sec) + f64::from(self.nsec) / BILLION as f64
    }
}

fn duration_nanos(seconds: u64, nanos: u32) -> Option<u64> {
    seconds.checked_mul(BILLION)?.checked_add(u64::from(nanos))
}

impl EpochArithmetic for Time {
    const EPOCH: Self = Time { sec: 0, nsec: 0 };

    fn checked_add_duration(self, seconds: u64, nanos: u32) -> Option<Self> {
        let delta = duration_nanos(seconds, nanos)?;
        Time::from_nanos(self.nanos().checked_add(delta)?)
    }

    fn checked_sub_duration(self, seconds: u64, nanos: u32) -> Option<Self> {
        let delta = duration_nanos(seconds, nanos)?;
        Time::from_nanos(self.nanos().checked_sub(delta)?)
    }
}

impl cmp::PartialEq for Time {
    fn eq(&self, other: &Self) -> bool {
        self.nanos() == other.nanos()
    }
}

impl cmp::PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl cmp::Ord for Time {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.nanos().cmp(&other.nanos())
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.nanos();
        nanos::fmt_decimal(f, false, t / BILLION, (t % BILLION) as u32)
    }
}

impl From<Time> for SignedOffset {
    fn from(time: Time) -> Self {
        let t = time.nanos();
        SignedOffset::new((t / BILLION) as i64, (t % BILLION) as u32)
    }
}

impl TryFrom<SystemTime> for Time {
    type Error = Error;

    fn try_from(time: SystemTime) -> Result<Time> {
        let offset = SignedOffset::from_system_time(time)?;
        EpochOffsetResolver::new().try_resolve(offset.seconds, offset.nanos)
    }
}

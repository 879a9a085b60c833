use crate::error::{Error, Result};
use crate::nanos;
use crate::offset::{Sign, SignedOffset};
use log::debug;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Checked duration arithmetic on an absolute time point.
///
/// Both operations must return `None` instead of wrapping when the result
/// falls outside the range the type can represent.
pub trait EpochArithmetic: Copy {
    /// The reference point that offsets are measured from.
    const EPOCH: Self;

    /// Moves `self` forward by `seconds + nanos / 1e9`.
    fn checked_add_duration(self, seconds: u64, nanos: u32) -> Option<Self>;

    /// Moves `self` backward by `seconds + nanos / 1e9`.
    fn checked_sub_duration(self, seconds: u64, nanos: u32) -> Option<Self>;
}

/// Builds a `Duration`, carrying excess nanoseconds instead of panicking.
fn std_duration(seconds: u64, nanos: u32) -> Option<Duration> {
    let (carry, nanos) = nanos::split_nanos(nanos);
    let seconds = seconds.checked_add(u64::from(carry))?;
    Some(Duration::new(seconds, nanos))
}

impl EpochArithmetic for SystemTime {
    const EPOCH: Self = UNIX_EPOCH;

    #[inline]
    fn checked_add_duration(self, seconds: u64, nanos: u32) -> Option<Self> {
        self.checked_add(std_duration(seconds, nanos)?)
    }

    #[inline]
    fn checked_sub_duration(self, seconds: u64, nanos: u32) -> Option<Self> {
        self.checked_sub(std_duration(seconds, nanos)?)
    }
}

/// Resolves floored `(seconds, nanos)` offsets into time points relative to an epoch.
///
/// See [`SignedOffset`] for the encoding. Resolution never panics: an offset
/// that leaves the range of `T` yields `None`.
#[derive(Copy, Clone, Debug)]
pub struct EpochOffsetResolver<T> {
    epoch: T,
}

impl<T: EpochArithmetic> Default for EpochOffsetResolver<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: EpochArithmetic> EpochOffsetResolver<T> {
    /// Resolves relative to `T::EPOCH`.
    #[inline]
    pub fn new() -> Self {
        Self::with_epoch(T::EPOCH)
    }

    /// Resolves relative to a custom reference point.
    #[inline]
    pub fn with_epoch(epoch: T) -> Self {
        Self { epoch }
    }

    /// The reference point offsets are measured from.
    #[inline]
    pub fn epoch(&self) -> T {
        self.epoch
    }

    /// Returns `epoch + seconds + nanos / 1e9`, or `None` on overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use epoch_offset::EpochOffsetResolver;
    /// use std::time::{Duration, SystemTime, UNIX_EPOCH};
    ///
    /// let resolver = EpochOffsetResolver::<SystemTime>::new();
    /// assert_eq!(resolver.resolve(0, 0), Some(UNIX_EPOCH));
    /// assert_eq!(
    ///     resolver.resolve(-1, 750_000_000),
    ///     UNIX_EPOCH.checked_sub(Duration::from_millis(250)),
    /// );
    /// ```
    #[inline]
    pub fn resolve(&self, seconds: i64, nanos: u32) -> Option<T> {
        self.resolve_offset(SignedOffset::new(seconds, nanos))
    }

    /// Resolves an already assembled [`SignedOffset`].
    pub fn resolve_offset(&self, offset: SignedOffset) -> Option<T> {
        let duration = offset.normalize();
        match duration.sign {
            Sign::Add => self
                .epoch
                .checked_add_duration(duration.seconds, duration.nanos),
            Sign::Subtract => self
                .epoch
                .checked_sub_duration(duration.seconds, duration.nanos),
        }
    }

    /// Same as [`resolve`](Self::resolve), reporting overflow as an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RangeOverflow`] if the time point cannot be represented by `T`.
    pub fn try_resolve(&self, seconds: i64, nanos: u32) -> Result<T> {
        self.resolve(seconds, nanos).ok_or_else(|| {
            debug!("Offset {}s + {}ns leaves the time range", seconds, nanos);
            Error::RangeOverflow { seconds, nanos }
        })
    }
}

/// Resolves an offset relative to `T::EPOCH`.
///
/// # Examples
///
/// ```
/// use epoch_offset::{resolve, Time};
/// use std::time::{Duration, SystemTime, UNIX_EPOCH};
///
/// assert_eq!(
///     resolve::<SystemTime>(5, 500_000_000),
///     UNIX_EPOCH.checked_add(Duration::from_millis(5500)),
/// );
/// assert_eq!(resolve::<Time>(i64::MAX, 0), None);
/// assert_eq!(resolve::<Time>(-1, 0), None);
/// ```
#[inline]
pub fn resolve<T: EpochArithmetic>(seconds: i64, nanos: u32) -> Option<T> {
    EpochOffsetResolver::new().resolve(seconds, nanos)
}

use crate::offset::Sign;

fn epoch_side(sign: &Sign) -> &'static str {
    match sign {
        Sign::Add => "after",
        Sign::Subtract => "before",
    }
}

/// Enumeration of all errors that can be returned.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// The time point `epoch + offset` cannot be represented by the target type.
    ///
    /// Carries the offset exactly as it was passed in, in floored encoding.
    #[error("offset {seconds}s + {nanos}ns from epoch is out of range")]
    RangeOverflow {
        /// Whole seconds of the rejected offset.
        seconds: i64,
        /// Nanoseconds of the rejected offset.
        nanos: u32,
    },
    /// A time point is too far from the epoch to be expressed as an `i64` count of seconds.
    #[error(
        "time point is {seconds}s {} epoch, which does not fit a signed offset",
        epoch_side(.sign)
    )]
    OffsetOutOfRange {
        /// Magnitude of the distance from the epoch, in whole seconds.
        seconds: u64,
        /// `Sign::Add` when the time point lies after the epoch.
        sign: Sign,
    },
}

/// Convenience type for shorter return value syntax of this crate's errors.
pub type Result<T> = std::result::Result<T, Error>;

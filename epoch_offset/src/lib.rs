//! Checked conversion of signed `(seconds, nanoseconds)` offsets into time points.
//!
//! Offsets use the floored-division encoding: the nanoseconds are never
//! negative, and a negative fractional offset borrows one second. A quarter
//! second before the epoch is `(-1, 750_000_000)`.
//!
//! ```
//! use epoch_offset::{resolve, Time};
//!
//! assert_eq!(resolve::<Time>(5, 500_000_000), Some(Time { sec: 5, nsec: 500_000_000 }));
//! assert_eq!(resolve::<Time>(-1, 750_000_000), None);
//! ```
#![warn(missing_docs)]

mod error;
pub mod nanos;
mod offset;
mod resolver;
#[cfg(test)]
mod tests;
mod time;

pub use error::{Error, Result};
pub use offset::{NormalizedDuration, Sign, SignedOffset};
pub use resolver::{resolve, EpochArithmetic, EpochOffsetResolver};
pub use time::Time;

//! The success-or-error container used throughout the core.
//!
//! `GreetResult<T>` is a plain `std::result::Result` with [`ErrorType`] as the
//! error side, so `map`, `and_then`, `map_err`, `unwrap_or` and
//! `unwrap_or_else` come from std and short-circuit on `Err` without calling
//! their closure. [`ResultExt`] adds the two variant accessors whose misuse is
//! a programmer error rather than a runtime condition.

use super::error::ErrorType;

/// Convenient result type alias.
pub type GreetResult<T> = Result<T, ErrorType>;

/// Variant accessors for [`GreetResult`].
pub trait ResultExt<T> {
    /// `true` if this is the failure variant.
    fn is_error(&self) -> bool;

    /// Take the success payload.
    ///
    /// # Panics
    /// Panics if called on an `Err`. Check `is_ok()` first.
    fn value(self) -> T;

    /// Take the error payload.
    ///
    /// # Panics
    /// Panics if called on an `Ok`. Check `is_error()` first.
    fn error_info(self) -> ErrorType;
}

impl<T> ResultExt<T> for GreetResult<T> {
    fn is_error(&self) -> bool {
        self.is_err()
    }

    #[track_caller]
    fn value(self) -> T {
        match self {
            Ok(value) => value,
            Err(e) => panic!("value() called on an error result: {e}"),
        }
    }

    #[track_caller]
    fn error_info(self) -> ErrorType {
        match self {
            Ok(_) => panic!("error_info() called on a success result"),
            Err(e) => e,
        }
    }
}

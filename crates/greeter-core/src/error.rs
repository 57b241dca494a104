//! Error types for outer layers.
//!
//! Adapters and the CLI import error types from here rather than reaching
//! into `crate::domain`. The re-exports add no wrapping; `ErrorType` is the
//! same value the domain produces.

pub use crate::domain::{ErrorKind, ErrorType, GreetResult, ResultExt};

/// Extension trait for converting foreign errors at the boundary.
///
/// Any `std::error::Error` becomes an `Infrastructure` error carrying the
/// context message and the original error text.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> GreetResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> GreetResult<T> {
        self.map_err(|e| ErrorType::infrastructure(format!("{}: {}", msg.into(), e)))
    }
}

//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `greeter-adapters` crate provides implementations.

use crate::domain::GreetResult;

/// Read-only view of a cancellation signal owned by the caller.
///
/// The core never creates or cancels a signal; it only hands it to the
/// writer, which checks it before writing.
///
/// Implemented by:
/// - `greeter_adapters::CancellationToken`
pub trait Cancellation: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

/// A signal that is never cancelled, for callers with nothing to cancel.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancelled;

impl Cancellation for NeverCancelled {
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Port for writing a rendered message somewhere.
///
/// Implemented by:
/// - `greeter_adapters::writer::ConsoleWriter` (production, any `io::Write`)
/// - `greeter_adapters::writer::MemoryWriter` (testing)
///
/// ## Contract
///
/// 1. If `cancel` is already cancelled, return an infrastructure error
///    without attempting the write.
/// 2. Attempt the write.
/// 3. Convert every I/O failure *and every panic* raised by the write into
///    an infrastructure error. Nothing may unwind across this call.
/// 4. Return `Ok(())` on success.
#[cfg_attr(test, mockall::automock)]
pub trait WriterPort: Send + Sync {
    fn write(&self, cancel: &dyn Cancellation, message: &str) -> GreetResult<()>;
}

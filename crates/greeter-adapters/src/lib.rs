//! Infrastructure adapters for Greeter.
//!
//! This crate implements the ports defined in `greeter-core::application::ports`.
//! It contains all I/O, and is the only place where a panic or an
//! `io::Error` can arise and must be turned into an `ErrorType`.

pub mod cancellation;
pub mod writer;

// Re-export commonly used adapters
pub use cancellation::CancellationToken;
pub use writer::{ConsoleWriter, MemoryWriter};

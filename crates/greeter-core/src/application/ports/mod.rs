//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `greeter-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `WriterPort`: Message output
//!   - `Cancellation`: Caller-owned cancellation signal
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - `GreetPort`: implemented by `GreetService`

pub mod input;
pub mod output;

pub use input::GreetPort;
pub use output::{Cancellation, NeverCancelled, WriterPort};

#[cfg(test)]
pub use output::MockWriterPort;

//! Application layer for Greeter.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GreetService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Commands**: Input DTOs (GreetCommand)
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod command;
pub mod ports;
pub mod services;

pub use command::GreetCommand;

// Re-export main services
pub use services::GreetService;

// Re-export port traits (for adapter implementation)
pub use ports::{Cancellation, GreetPort, NeverCancelled, WriterPort};

// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Greeter.
//!
//! This module contains pure business logic with no I/O. Output is reached
//! only through the ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or console calls
//! - **No panics on bad input**: every rule violation is an `Err(ErrorType)`
//! - **Immutable entities**: `Person` has no setters
//!
// Public API - what the world sees
pub mod error;
pub mod person;
pub mod result;

// Re-exports for convenience
pub use error::{ErrorKind, ErrorType};
pub use person::{MAX_NAME_LENGTH, Person};
pub use result::{GreetResult, ResultExt};

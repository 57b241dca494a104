//! Greeter Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Greeter,
//! following hexagonal (ports and adapters) architecture. Every fallible
//! operation returns a [`GreetResult`](domain::GreetResult); nothing in the
//! core panics on bad input.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           greeter-cli (CLI)             │
//! │      (Composition root, façade)         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls GreetPort
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │             (GreetService)              │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: WriterPort, Cancellation)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    greeter-adapters (Infrastructure)    │
//! │ (ConsoleWriter, MemoryWriter, Token)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │    (Person, ErrorType, GreetResult)     │
//! │              No I/O                     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use greeter_core::prelude::*;
//!
//! # fn run<W: WriterPort>(writer: W) -> GreetResult<()> {
//! let service = GreetService::new(writer);
//! service.execute(&NeverCancelled, &GreetCommand::new("Alice"))
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GreetCommand, GreetService,
        ports::{Cancellation, GreetPort, NeverCancelled, WriterPort},
    };
    pub use crate::domain::{MAX_NAME_LENGTH, Person};
    pub use crate::error::{Context, ErrorKind, ErrorType, GreetResult, ResultExt};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

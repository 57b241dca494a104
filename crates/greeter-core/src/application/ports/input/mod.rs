//! Driving (input) ports - implemented by the application, called by the
//! outside world.

use crate::{
    application::{command::GreetCommand, ports::output::Cancellation},
    domain::GreetResult,
};

/// Contract for the greet use case.
///
/// Outer layers (the CLI, embedding applications) depend on this trait
/// rather than on `GreetService` directly.
///
/// - `Ok(())`: the greeting was written
/// - `Err(Validation)`: the name was rejected
/// - `Err(Infrastructure)`: the write failed or was cancelled
pub trait GreetPort {
    fn execute(&self, cancel: &dyn Cancellation, cmd: &GreetCommand) -> GreetResult<()>;
}

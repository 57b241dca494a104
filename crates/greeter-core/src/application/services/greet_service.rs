//! Greet Service - the greet use case.
//!
//! Two-stage railway:
//! 1. Validate the name into a `Person` (can only fail with `Validation`)
//! 2. Write the greeting through the `WriterPort` (can only fail with
//!    `Infrastructure`, given a correct adapter)
//!
//! The service forwards errors unchanged; it never creates its own.

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        command::GreetCommand,
        ports::{Cancellation, GreetPort, WriterPort},
    },
    domain::{GreetResult, Person},
};

/// Greet use case, generic over its writer for static dispatch.
pub struct GreetService<W: WriterPort> {
    writer: W,
}

impl<W: WriterPort> GreetService<W> {
    /// Create a new greet service with the given writer adapter.
    ///
    /// # Example
    ///
    /// ```rust
    /// use greeter_core::application::{GreetCommand, GreetService, ports::*};
    /// use greeter_core::domain::GreetResult;
    ///
    /// struct Discard;
    ///
    /// impl WriterPort for Discard {
    ///     fn write(&self, _cancel: &dyn Cancellation, _message: &str) -> GreetResult<()> {
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let service = GreetService::new(Discard);
    /// assert!(service.execute(&NeverCancelled, &GreetCommand::new("Alice")).is_ok());
    /// ```
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// The injected writer adapter.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Consume the service and hand back its writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Greet the person named in `cmd`.
    #[instrument(skip_all, fields(name_chars = cmd.name().chars().count()))]
    pub fn execute(&self, cancel: &dyn Cancellation, cmd: &GreetCommand) -> GreetResult<()> {
        let person = Person::new(cmd.name()).inspect_err(|e| {
            debug!(error = %e, "Name rejected");
        })?;

        let message = person.greeting_message();

        self.writer
            .write(cancel, &message)
            .inspect(|_| info!("Greeting written"))
            .inspect_err(|e| warn!(error = %e, "Greeting could not be written"))
    }
}

impl<W: WriterPort> GreetPort for GreetService<W> {
    fn execute(&self, cancel: &dyn Cancellation, cmd: &GreetCommand) -> GreetResult<()> {
        GreetService::execute(self, cancel, cmd)
    }
}

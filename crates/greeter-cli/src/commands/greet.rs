//! `greeter greet`: the composition root for the greet use case.
//!
//! Wires the stdout `ConsoleWriter` and a fresh `CancellationToken` into
//! `GreetService` and hands the outcome back as a `CliResult`.

use greeter_adapters::{CancellationToken, ConsoleWriter};
use greeter_core::application::{
    GreetCommand, GreetService,
    ports::{Cancellation, GreetPort},
};
use tracing::{debug, instrument};

use crate::{cli::GreetArgs, error::CliResult};

/// Run the greet use case against standard output.
#[instrument(skip_all)]
pub fn execute(args: GreetArgs) -> CliResult<()> {
    let token = CancellationToken::new();
    let service = GreetService::new(ConsoleWriter::stdout());

    greet(&service, &token, args)
}

/// Drive any implementation of the input port.
fn greet(port: &dyn GreetPort, cancel: &dyn Cancellation, args: GreetArgs) -> CliResult<()> {
    let command = GreetCommand::new(args.name);
    debug!(name = command.name(), "Dispatching greet command");

    port.execute(cancel, &command)?;
    Ok(())
}

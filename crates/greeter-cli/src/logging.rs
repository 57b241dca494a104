//! Diagnostics for the `greeter` binary.
//!
//! stdout belongs to the greeting alone, so every log line and panic report
//! goes to stderr through one `tracing` subscriber. The library crates emit
//! events and spans but never install anything themselves.
//!
//! | Invocation        | Level shown |
//! |-------------------|-------------|
//! | `greeter greet`   | warn        |
//! | `greeter -v ..`   | info        |
//! | `greeter -vv ..`  | debug       |
//! | `greeter -vvv ..` | trace       |
//! | `greeter -q ..`   | error       |
//!
//! A `RUST_LOG` value replaces the computed filter entirely.

use std::io::{self, IsTerminal as _};
use std::panic::{self, PanicHookInfo};

use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events reach the subscriber.
const GREETER_TARGETS: [&str; 3] = ["greeter", "greeter_core", "greeter_adapters"];

/// Install the stderr subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::new(filter_directives(level_for(args))),
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!args.no_color && io::stderr().is_terminal())
        .with_target(false)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already installed: {e}"))
}

/// Route panic reports into the subscriber instead of raw stderr.
///
/// A panicking output sink is caught by the console writer and surfaces as
/// an infrastructure error, so the raw `thread 'main' panicked at` report
/// would only duplicate it. The report stays available at `-vv`.
pub fn install_panic_hook() {
    panic::set_hook(Box::new(|info: &PanicHookInfo<'_>| {
        debug!(panic = %info, "Panic reported");
    }));
}

fn filter_directives(level: &str) -> String {
    GREETER_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn level_for(args: &GlobalArgs) -> &'static str {
    match (args.quiet, args.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    }
}

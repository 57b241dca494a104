//! Console writer adapter over any `io::Write` sink.
//!
//! This is the boundary where uncontrolled failures stop. Cancellation, I/O
//! errors and panics raised by the sink all come back as
//! `ErrorType::infrastructure`; nothing unwinds into the caller.
//!
//! A panic in the sink poisons the lock. Later writes ignore the poison and
//! try the sink again; a byte sink has no invariant the flag could protect.
//!
//! The panic is still reported to the process panic hook before it is
//! caught. With the default hook that means a `thread '..' panicked at`
//! line on stderr; the `greeter` binary replaces the hook with one that
//! logs through `tracing` at debug level.

use std::any::Any;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Mutex, PoisonError};

use greeter_core::{
    application::ports::{Cancellation, WriterPort},
    error::{Context, ErrorType, GreetResult},
};
use tracing::{debug, instrument, warn};

/// Writes each message as one line to the wrapped sink.
///
/// The sink sits behind a `Mutex` so one writer can be shared across
/// threads; concurrent messages never interleave within a line.
#[derive(Debug)]
pub struct ConsoleWriter<S: Write + Send> {
    sink: Mutex<S>,
}

impl ConsoleWriter<io::Stdout> {
    /// Production writer targeting the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<S: Write + Send> ConsoleWriter<S> {
    /// Wrap an arbitrary sink (a file, a buffer, a socket).
    pub fn new(sink: S) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    /// Recover the sink, e.g. to inspect a buffer in tests.
    pub fn into_inner(self) -> S {
        self.sink.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_line(&self, message: &str) -> GreetResult<()> {
        let mut sink = self.sink.lock().unwrap_or_else(|poisoned| {
            debug!("Recovering output lock poisoned by an earlier panic");
            poisoned.into_inner()
        });

        writeln!(sink, "{message}").context("failed to write greeting")?;
        sink.flush().context("failed to flush output")
    }
}

impl<S: Write + Send> WriterPort for ConsoleWriter<S> {
    #[instrument(skip_all, fields(bytes = message.len()))]
    fn write(&self, cancel: &dyn Cancellation, message: &str) -> GreetResult<()> {
        if cancel.is_cancelled() {
            debug!("Write skipped, operation cancelled");
            return Err(ErrorType::infrastructure("operation cancelled before write"));
        }

        match panic::catch_unwind(AssertUnwindSafe(|| self.write_line(message))) {
            Ok(result) => result.inspect_err(|e| warn!(error = %e, "Write failed")),
            Err(payload) => {
                let reason = panic_message(payload.as_ref());
                warn!(%reason, "Write panicked");
                Err(ErrorType::infrastructure(format!(
                    "unexpected panic during write: {reason}"
                )))
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

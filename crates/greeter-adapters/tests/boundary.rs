//! End-to-end checks of the greet use case against real adapters.
//!
//! The sinks below stand in for misbehaving output streams: one counts
//! write attempts, one fails with an I/O error, one panics.

use std::io::{self, Write};
use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicUsize, Ordering},
};

use greeter_adapters::{CancellationToken, ConsoleWriter, MemoryWriter};
use greeter_core::prelude::*;
use rstest::{fixture, rstest};

#[derive(Clone, Default)]
struct CountingSink {
    writes: Arc<AtomicUsize>,
}

impl CountingSink {
    fn attempts(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl Write for CountingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct BrokenPipeSink;

impl Write for BrokenPipeSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct PanickingSink;

impl Write for PanickingSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        panic!("sink exploded");
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Panics on the first write only, then behaves.
#[derive(Clone, Default)]
struct FlakySink {
    calls: Arc<AtomicUsize>,
    written: Arc<Mutex<Vec<u8>>>,
}

impl Write for FlakySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            panic!("transient fault");
        }
        self.written
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[fixture]
fn token() -> CancellationToken {
    CancellationToken::new()
}

#[rstest]
fn valid_name_reaches_sink(token: CancellationToken) {
    let sink = CountingSink::default();
    let attempts = sink.clone();
    let service = GreetService::new(ConsoleWriter::new(sink));

    let result = service.execute(&token, &GreetCommand::new("Alice"));

    assert_eq!(result, Ok(()));
    assert!(attempts.attempts() >= 1);
}

#[rstest]
#[case::ascii("Alice", "Hello, Alice!\n")]
#[case::multibyte("世界", "Hello, 世界!\n")]
#[case::padded(" Bob ", "Hello,  Bob !\n")]
fn console_output_matches_greeting(
    token: CancellationToken,
    #[case] name: &str,
    #[case] expected: &str,
) {
    let service = GreetService::new(ConsoleWriter::new(Vec::new()));

    service.execute(&token, &GreetCommand::new(name)).unwrap();

    let written = String::from_utf8(service.into_writer().into_inner()).unwrap();
    assert_eq!(written, expected);
}

#[rstest]
fn pre_cancelled_token_skips_write(token: CancellationToken) {
    let sink = CountingSink::default();
    let attempts = sink.clone();
    let service = GreetService::new(ConsoleWriter::new(sink));
    token.cancel();

    let err = service
        .execute(&token, &GreetCommand::new("Alice"))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Infrastructure);
    assert!(err.message().contains("cancelled"));
    assert_eq!(attempts.attempts(), 0);
}

#[rstest]
fn validation_wins_over_cancellation(token: CancellationToken) {
    let writer = MemoryWriter::new();
    let service = GreetService::new(writer.clone());
    token.cancel();

    let err = service.execute(&token, &GreetCommand::new("")).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(writer.is_empty());
}

#[rstest]
fn io_failure_becomes_infrastructure_error(token: CancellationToken) {
    let service = GreetService::new(ConsoleWriter::new(BrokenPipeSink));

    let err = service
        .execute(&token, &GreetCommand::new("Alice"))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Infrastructure);
    assert!(err.message().contains("reader went away"));
}

#[rstest]
fn panic_in_sink_becomes_infrastructure_error(token: CancellationToken) {
    let service = GreetService::new(ConsoleWriter::new(PanickingSink));

    let err = service
        .execute(&token, &GreetCommand::new("Alice"))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Infrastructure);
    assert!(err.message().contains("sink exploded"));
}

#[rstest]
fn writer_recovers_after_panic(token: CancellationToken) {
    let sink = FlakySink::default();
    let observed = sink.clone();
    let service = GreetService::new(ConsoleWriter::new(sink));

    let first = service
        .execute(&token, &GreetCommand::new("first"))
        .unwrap_err();
    assert_eq!(first.kind(), ErrorKind::Infrastructure);
    assert!(first.message().contains("transient fault"));

    // the sink is tried again despite the poisoned lock
    assert_eq!(service.execute(&token, &GreetCommand::new("second")), Ok(()));
    assert_eq!(service.execute(&token, &GreetCommand::new("third")), Ok(()));

    assert!(observed.calls.load(Ordering::SeqCst) > 1);
    let written = observed.written.lock().unwrap().clone();
    assert_eq!(String::from_utf8(written).unwrap(), "Hello, second!\nHello, third!\n");
}

#[rstest]
fn panicking_sink_fails_every_time_without_escaping(token: CancellationToken) {
    let service = GreetService::new(ConsoleWriter::new(PanickingSink));

    for name in ["first", "second"] {
        let err = service.execute(&token, &GreetCommand::new(name)).unwrap_err();
        assert!(err.message().contains("sink exploded"));
    }
}

#[rstest]
fn memory_writer_collects_greetings(token: CancellationToken) {
    let writer = MemoryWriter::new();
    let service = GreetService::new(writer.clone());

    for name in ["Ada", "Grace"] {
        service.execute(&token, &GreetCommand::new(name)).unwrap();
    }

    assert_eq!(writer.messages(), vec!["Hello, Ada!", "Hello, Grace!"]);
}

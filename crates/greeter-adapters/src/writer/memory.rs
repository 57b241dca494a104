//! In-memory writer adapter for testing and embedding.

use std::sync::{Arc, RwLock};

use greeter_core::{
    application::ports::{Cancellation, WriterPort},
    error::{ErrorType, GreetResult},
};

/// Collects messages in memory instead of printing them.
///
/// Clones share the same buffer, so a test can hand one clone to the
/// service and read the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    inner: Arc<RwLock<Vec<String>>>,
}

impl MemoryWriter {
    /// Create a new empty memory writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages written so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.messages().is_empty()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        if let Ok(mut messages) = self.inner.write() {
            messages.clear();
        }
    }
}

impl WriterPort for MemoryWriter {
    fn write(&self, cancel: &dyn Cancellation, message: &str) -> GreetResult<()> {
        if cancel.is_cancelled() {
            return Err(ErrorType::infrastructure("operation cancelled before write"));
        }

        let mut messages = self
            .inner
            .write()
            .map_err(|_| ErrorType::infrastructure("message buffer lock poisoned"))?;

        messages.push(message.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CancellationToken;
    use greeter_core::application::ports::NeverCancelled;

    #[test]
    fn records_messages_in_order() {
        let writer = MemoryWriter::new();
        writer.write(&NeverCancelled, "first").unwrap();
        writer.write(&NeverCancelled, "second").unwrap();

        assert_eq!(writer.messages(), vec!["first", "second"]);
    }

    #[test]
    fn clones_share_buffer() {
        let writer = MemoryWriter::new();
        let reader = writer.clone();

        writer.write(&NeverCancelled, "shared").unwrap();

        assert_eq!(reader.messages(), vec!["shared"]);
        reader.clear();
        assert!(writer.is_empty());
    }

    #[test]
    fn cancelled_write_records_nothing() {
        let token = CancellationToken::new();
        token.cancel();

        let writer = MemoryWriter::new();
        let err = writer.write(&token, "dropped").unwrap_err();

        assert!(err.is_infrastructure());
        assert!(writer.is_empty());
    }
}

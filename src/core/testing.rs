use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::Mutex;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::Notifier;

// RecordingNotifier keeps every message it was asked to deliver.
#[derive(Debug, Default)]
pub(crate) struct RecordingNotifier {
    pub(crate) messages: Mutex<Vec<String>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, message: &str) -> LibraryResult<()> {
        self.messages.lock().await.push(message.to_string());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub(crate) struct FailingNotifier {}

#[async_trait]
impl Notifier for FailingNotifier {
    async fn notify(&self, _message: &str) -> LibraryResult<()> {
        Err(LibraryError::unavailable("bot api unreachable", None, true))
    }
}

// fresh in-memory state with the given notifier
pub(crate) fn memory_state(notifier: Arc<dyn Notifier>) -> AppState {
    AppState::new(Configuration::new("test"), Arc::new(MemoryBookRepository::new()), notifier)
}

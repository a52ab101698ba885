use async_trait::async_trait;
use crate::core::library::LibraryResult;

// Notifier delivers a plain-text message to an outside channel.
#[async_trait]
pub(crate) trait Notifier: Sync + Send {
    async fn notify(&self, message: &str) -> LibraryResult<()>;
}

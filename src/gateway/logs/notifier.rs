use async_trait::async_trait;
use tracing::info;
use crate::core::library::LibraryResult;
use crate::gateway::events::Notifier;

// LogNotifier stands in for Telegram when no bot is configured.
#[derive(Debug, Default)]
pub struct LogNotifier {}

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, message: &str) -> LibraryResult<()> {
        info!("notification: {}", message);
        Ok(())
    }
}

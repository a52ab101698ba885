use std::sync::Arc;
use std::time::Duration;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::gateway::events::Notifier;
use crate::gateway::logs::notifier::LogNotifier;
use crate::gateway::NotifierVia;
use crate::gateway::telegram::notifier::TelegramNotifier;

impl From<&Configuration> for NotifierVia {
    fn from(config: &Configuration) -> Self {
        if config.telegram_enabled() {
            NotifierVia::Telegram
        } else {
            NotifierVia::Logs
        }
    }
}

pub(crate) fn create_notifier(config: &Configuration) -> LibraryResult<Arc<dyn Notifier>> {
    match (NotifierVia::from(config), config.telegram_bot_token.as_deref(), config.telegram_chat_id.as_deref()) {
        (NotifierVia::Telegram, Some(token), Some(chat_id)) => {
            Ok(Arc::new(TelegramNotifier::new(config.telegram_api_url.as_str(), token, chat_id,
                                              Duration::from_secs(config.notify_timeout_secs))?))
        }
        _ => {
            tracing::info!("telegram is not configured, notifications go to the log");
            Ok(Arc::new(LogNotifier::default()))
        }
    }
}

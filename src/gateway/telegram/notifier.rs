use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::info;
use crate::core::library::LibraryResult;
use crate::gateway::events::Notifier;

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

// TelegramNotifier posts to the Bot API `sendMessage` method.
// See https://core.telegram.org/bots/api#sendmessage
#[derive(Debug)]
pub struct TelegramNotifier {
    client: Client,
    api_url: String,
    bot_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub(crate) fn new(api_url: &str, bot_token: &str, chat_id: &str, timeout: Duration) -> LibraryResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            bot_token: bot_token.to_string(),
            chat_id: chat_id.to_string(),
        })
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_url, self.bot_token)
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, message: &str) -> LibraryResult<()> {
        let req = SendMessageRequest { chat_id: self.chat_id.as_str(), text: message };
        self.client
            .post(self.send_message_url())
            .json(&req)
            .send()
            .await?
            .error_for_status()?;
        info!("telegram message sent to chat {}", self.chat_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;
    use std::sync::Arc;
    use std::time::Duration;
    use axum::{extract::{Path, State}, http::StatusCode, routing::post, Json, Router};
    use serde_json::Value;
    use tokio::sync::Mutex;
    use crate::core::library::LibraryError;
    use crate::gateway::events::Notifier;
    use crate::gateway::telegram::notifier::TelegramNotifier;

    type Received = Arc<Mutex<Vec<(String, Value)>>>;

    async fn record(State(received): State<Received>,
                    Path(token): Path<String>,
                    Json(body): Json<Value>) -> StatusCode {
        received.lock().await.push((token, body));
        StatusCode::OK
    }

    // serves a fake Bot API on an ephemeral port
    async fn fake_bot_api(status_ok: bool) -> (String, Received) {
        let received: Received = Arc::new(Mutex::new(vec![]));
        let app = if status_ok {
            Router::new().route("/:token/sendMessage", post(record)).with_state(received.clone())
        } else {
            Router::new().route("/:token/sendMessage", post(|| async { StatusCode::UNAUTHORIZED }))
        };
        let server = axum::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0)))
            .serve(app.into_make_service());
        let addr = server.local_addr();
        tokio::spawn(server);
        (format!("http://{}", addr), received)
    }

    #[tokio::test]
    async fn test_should_post_send_message() {
        let (api_url, received) = fake_bot_api(true).await;
        let notifier = TelegramNotifier::new(api_url.as_str(), "123:abc", "42", Duration::from_secs(5))
            .expect("should build notifier");
        notifier.notify("New book added!").await.expect("should notify");

        let received = received.lock().await;
        assert_eq!(1, received.len());
        assert_eq!("bot123:abc", received[0].0.as_str());
        assert_eq!("42", received[0].1["chat_id"]);
        assert_eq!("New book added!", received[0].1["text"]);
    }

    #[tokio::test]
    async fn test_should_fail_on_error_status() {
        let (api_url, _) = fake_bot_api(false).await;
        let notifier = TelegramNotifier::new(api_url.as_str(), "bad", "42", Duration::from_secs(5))
            .expect("should build notifier");
        let res = notifier.notify("hello").await;
        assert!(matches!(res, Err(LibraryError::Runtime { .. })));
    }
}

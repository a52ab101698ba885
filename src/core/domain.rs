use std::env;
use serde::{Deserialize, Serialize};
use crate::core::repository::RepositoryStore;

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> i64;
}

// Configuration abstracts config options for the bookshelf service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub stage: String,
    pub store: RepositoryStore,
    pub books_table: String,
    pub counters_table: String,
    pub dynamodb_endpoint: String,
    pub telegram_api_url: String,
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub notify_timeout_secs: u64,
    pub port: u16,
    pub log_level: String,
}

impl Configuration {
    pub fn new(stage: &str) -> Self {
        Configuration {
            stage: stage.to_string(),
            store: RepositoryStore::InMemory,
            books_table: "books".to_string(),
            counters_table: "counters".to_string(),
            dynamodb_endpoint: "http://localhost:8000".to_string(),
            telegram_api_url: "https://api.telegram.org".to_string(),
            telegram_bot_token: None,
            telegram_chat_id: None,
            notify_timeout_secs: 10,
            port: 8080,
            log_level: "info".to_string(),
        }
    }

    // Loads an optional .env file first, then overlays the process environment on the defaults.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let mut config = Configuration::new(env_or("BOOKSHELF_STAGE", "dev").as_str());
        if let Some(store) = env_opt("BOOKSHELF_STORE") {
            config.store = RepositoryStore::from(store);
        }
        config.books_table = env_or("BOOKSHELF_BOOKS_TABLE", config.books_table.as_str());
        config.counters_table = env_or("BOOKSHELF_COUNTERS_TABLE", config.counters_table.as_str());
        config.dynamodb_endpoint = env_or("BOOKSHELF_DYNAMODB_ENDPOINT", config.dynamodb_endpoint.as_str());
        config.telegram_api_url = env_or("TELEGRAM_API_URL", config.telegram_api_url.as_str());
        config.telegram_bot_token = env_opt("TELEGRAM_BOT_TOKEN");
        config.telegram_chat_id = env_opt("TELEGRAM_CHAT_ID");
        config.notify_timeout_secs = env_opt("BOOKSHELF_NOTIFY_TIMEOUT_SECS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(config.notify_timeout_secs);
        config.port = env_opt("BOOKSHELF_PORT").or_else(|| env_opt("PORT"))
            .and_then(|s| s.parse().ok())
            .unwrap_or(config.port);
        config.log_level = env_or("BOOKSHELF_LOG_LEVEL", config.log_level.as_str());
        config
    }

    pub fn telegram_enabled(&self) -> bool {
        self.telegram_bot_token.is_some() && self.telegram_chat_id.is_some()
    }
}

fn env_opt(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn env_or(name: &str, default: &str) -> String {
    env_opt(name).unwrap_or_else(|| default.to_string())
}

use std::sync::Arc;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;
use tracing::error;
use crate::books::factory::create_book_repository;
use crate::books::repository::BookRepository;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::gateway::events::Notifier;
use crate::gateway::factory::create_notifier;

pub(crate) const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";
pub(crate) const INVALID_QUERY: &str = "Invalid query parameters";

// AppState carries the handles every request shares; the store and notifier are built once.
#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub(crate) book_repository: Arc<dyn BookRepository>,
    pub(crate) notifier: Arc<dyn Notifier>,
}

impl AppState {
    pub async fn build(config: Configuration) -> LibraryResult<AppState> {
        let book_repository = create_book_repository(&config).await?;
        let notifier = create_notifier(&config)?;
        Ok(AppState::new(config, book_repository, notifier))
    }

    pub(crate) fn new(config: Configuration,
                      book_repository: Arc<dyn BookRepository>,
                      notifier: Arc<dyn Notifier>) -> AppState {
        AppState {
            config,
            book_repository,
            notifier,
        }
    }
}

// Failure envelope; 4xx responses carry `message`, 5xx responses carry `error`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn message(message: &str) -> Self {
        Self { success: false, message: Some(message.to_string()), error: None }
    }

    pub fn error(error: &str) -> Self {
        Self { success: false, message: None, error: Some(error.to_string()) }
    }
}

pub(crate) type ServerError = (StatusCode, Json<ErrorResponse>);

pub(crate) fn bad_request(message: &str) -> ServerError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::message(message)))
}

pub(crate) fn json_to_server_error(message: &'static str) -> impl Fn(serde_json::Error) -> ServerError {
    move |_err| bad_request(message)
}

pub(crate) fn parse_id(raw: &str) -> Result<i64, ServerError> {
    raw.trim().parse::<i64>().map_err(|_| bad_request("Invalid book ID"))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, Json(ErrorResponse::message(err.message())))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::message(err.message())))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::message(err.message())))
            }
            CommandError::Database { .. } | CommandError::Runtime { .. } => {
                error!("request failed: {:?}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::error(INTERNAL_SERVER_ERROR)))
            }
        }
    }
}

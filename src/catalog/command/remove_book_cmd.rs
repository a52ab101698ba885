use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct RemoveBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoveBookCommandRequest {
    pub(crate) id: i64,
}

impl RemoveBookCommandRequest {
    pub fn new(id: i64) -> Self {
        Self {
            id,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RemoveBookCommandResponse {
    pub success: bool,
    pub message: String,
}

impl RemoveBookCommandResponse {
    pub fn new(id: i64) -> Self {
        Self {
            success: true,
            message: format!("Book with ID {} deleted successfully.", id),
        }
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.catalog_service.remove_book(req.id).await.map_err(CommandError::from).map(|_| RemoveBookCommandResponse::new(req.id))
    }
}

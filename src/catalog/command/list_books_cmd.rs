use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::books::query::{BookQuery, BookQueryParams};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct ListBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ListBooksCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListBooksCommandRequest {
    #[serde(flatten)]
    pub(crate) params: BookQueryParams,
}

impl ListBooksCommandRequest {
    pub fn new(params: BookQueryParams) -> Self {
        Self {
            params,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ListBooksCommandResponse {
    pub success: bool,
    pub data: Vec<BookDto>,
}

impl ListBooksCommandResponse {
    pub fn new(data: Vec<BookDto>) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        let query = BookQuery::parse(&req.params)?;
        self.catalog_service.list_books(&query).await.map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}

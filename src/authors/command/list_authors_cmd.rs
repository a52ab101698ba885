use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::authors::domain::AuthorService;
use crate::authors::domain::model::AuthorGroup;
use crate::core::command::{Command, CommandError};

pub(crate) struct ListAuthorsCommand {
    author_service: Box<dyn AuthorService>,
}

impl ListAuthorsCommand {
    pub(crate) fn new(author_service: Box<dyn AuthorService>) -> Self {
        Self {
            author_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListAuthorsCommandRequest {
    pub(crate) name: Option<String>,
}

impl ListAuthorsCommandRequest {
    pub fn new(name: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ListAuthorsCommandResponse {
    pub success: bool,
    pub data: Vec<AuthorGroup>,
}

impl ListAuthorsCommandResponse {
    pub fn new(data: Vec<AuthorGroup>) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[async_trait]
impl Command<ListAuthorsCommandRequest, ListAuthorsCommandResponse> for ListAuthorsCommand {
    async fn execute(&self, req: ListAuthorsCommandRequest) -> Result<ListAuthorsCommandResponse, CommandError> {
        self.author_service.list_authors(req.name.as_deref()).await
            .map_err(CommandError::from).map(ListAuthorsCommandResponse::new)
    }
}

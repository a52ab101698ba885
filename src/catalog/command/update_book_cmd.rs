use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) const INVALID_BOOK_UPDATE: &str = "Invalid book data for update";

pub(crate) struct UpdateBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// the path carries the id, the body every other field
#[derive(Debug, Deserialize)]
pub(crate) struct UpdateBookCommandRequest {
    #[serde(skip)]
    pub(crate) id: i64,
    pub(crate) name: String,
    pub(crate) author: String,
    pub(crate) publish_year: i64,
    pub(crate) pages_count: i64,
    pub(crate) price: f64,
}

impl UpdateBookCommandRequest {
    pub fn new(id: i64, book: &BookDto) -> Self {
        Self {
            id,
            name: book.name.to_string(),
            author: book.author.to_string(),
            publish_year: book.publish_year,
            pages_count: book.pages_count,
            price: book.price,
        }
    }

    pub fn build_book(&self) -> BookDto {
        let mut book = BookDto::new(self.name.as_str(), self.author.as_str(), self.publish_year, self.pages_count, self.price);
        book.id = self.id;
        book
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateBookCommandResponse {
    pub success: bool,
    pub message: String,
}

impl UpdateBookCommandResponse {
    pub fn new(id: i64) -> Self {
        Self {
            success: true,
            message: format!("Book with ID {} updated successfully.", id),
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let book = req.build_book();
        if !book.is_valid() {
            return Err(CommandError::validation(INVALID_BOOK_UPDATE));
        }
        self.catalog_service.update_book(req.id, &book).await.map_err(CommandError::from).map(|b| UpdateBookCommandResponse::new(b.id))
    }
}

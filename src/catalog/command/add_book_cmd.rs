use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) const INVALID_BOOK_DATA: &str = "Invalid book data";

pub(crate) struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) name: String,
    pub(crate) author: String,
    pub(crate) publish_year: i64,
    pub(crate) pages_count: i64,
    pub(crate) price: f64,
}

impl AddBookCommandRequest {
    pub fn new(name: &str, author: &str, publish_year: i64, pages_count: i64, price: f64) -> Self {
        Self {
            name: name.to_string(),
            author: author.to_string(),
            publish_year,
            pages_count,
            price,
        }
    }
    pub fn build_book(&self) -> BookDto {
        BookDto::new(self.name.as_str(), self.author.as_str(), self.publish_year, self.pages_count, self.price)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub success: bool,
    pub message: String,
}

impl AddBookCommandResponse {
    pub fn new(id: i64) -> Self {
        Self {
            success: true,
            message: format!("Book with ID {} added successfully.", id),
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        if !book.is_valid() {
            return Err(CommandError::validation(INVALID_BOOK_DATA));
        }
        self.catalog_service.add_book(&book).await.map_err(CommandError::from).map(|b| AddBookCommandResponse::new(b.id))
    }
}

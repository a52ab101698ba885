pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::books::query::BookQuery;
use crate::books::query::paginate::{Page, PageRequest};
use crate::core::library::LibraryResult;

pub(crate) const BOOK_NOT_FOUND: &str = "Book not found for the given ID";

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    // books matching the query, filtered and ordered
    async fn list_books(&self, query: &BookQuery) -> LibraryResult<Vec<BookDto>>;
    async fn paginate_books(&self, query: &BookQuery, page: &PageRequest) -> LibraryResult<Page<BookDto>>;
    async fn find_book_by_id(&self, id: i64) -> LibraryResult<BookDto>;
    // stores the book and announces it; returns the book with its assigned id
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn update_book(&self, id: i64, book: &BookDto) -> LibraryResult<BookDto>;
    async fn remove_book(&self, id: i64) -> LibraryResult<()>;
}

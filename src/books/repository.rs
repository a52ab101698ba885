pub mod ddb_book_repository;
pub mod memory_book_repository;

use async_trait::async_trait;
use crate::authors::domain::model::AuthorBookRow;
use crate::books::domain::model::BookEntity;
use crate::books::query::filter::PriceRange;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;


#[async_trait]
pub trait BookRepository: Repository<BookEntity> {
    // books priced within the inclusive range, in ascending id order
    async fn find_by_price_range(&self, range: &PriceRange) -> LibraryResult<Vec<BookEntity>>;

    // one row per book joined with its author name, in ascending book id order
    async fn find_author_rows(&self) -> LibraryResult<Vec<AuthorBookRow>>;
}

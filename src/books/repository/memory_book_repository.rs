use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::authors::domain::model::AuthorBookRow;
use crate::books::domain::model::BookEntity;
use crate::books::query::filter::{filter_by_price_range, PriceRange};
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryBookRepository keeps books in process memory keyed by id; ids start at 1.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: RwLock<BTreeMap<i64, BookEntity>>,
    last_id: AtomicI64,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<i64> {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.books.write().await.insert(id, entity.with_id(id));
        Ok(id)
    }

    async fn update(&self, id: i64, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        match books.get_mut(&id) {
            Some(existing) => {
                *existing = entity.with_id(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn get(&self, id: i64) -> LibraryResult<BookEntity> {
        self.books.read().await.get(&id).cloned()
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    async fn delete(&self, id: i64) -> LibraryResult<usize> {
        Ok(self.books.write().await.remove(&id).map(|_| 1).unwrap_or(0))
    }

    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.read().await.values().cloned().collect())
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_by_price_range(&self, range: &PriceRange) -> LibraryResult<Vec<BookEntity>> {
        let books = self.find_all().await?;
        Ok(filter_by_price_range(books, range))
    }

    async fn find_author_rows(&self) -> LibraryResult<Vec<AuthorBookRow>> {
        Ok(self.books.read().await.values().map(AuthorBookRow::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::query::filter::PriceRange;
    use crate::books::repository::BookRepository;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::core::library::LibraryError;
    use crate::core::repository::Repository;

    #[tokio::test]
    async fn test_should_create_get_books() {
        let books_repo = MemoryBookRepository::new();
        let book = BookEntity::new("Dune", "Frank Herbert", 1965, 412, 9.99);
        let id = books_repo.create(&book).await.expect("should create book");
        assert_eq!(1, id);
        let id2 = books_repo.create(&book).await.expect("should create book");
        assert_eq!(2, id2);

        let loaded = books_repo.get(id).await.expect("should return book");
        assert_eq!(id, loaded.id);
        assert_eq!(book.name, loaded.name);
    }

    #[tokio::test]
    async fn test_should_create_update_books() {
        let books_repo = MemoryBookRepository::new();
        let mut book = BookEntity::new("Dune", "Frank Herbert", 1965, 412, 9.99);
        let id = books_repo.create(&book).await.expect("should create book");

        book.name = "Dune Messiah".to_string();
        book.price = 7.5;
        let size = books_repo.update(id, &book).await.expect("should update book");
        assert_eq!(1, size);

        let loaded = books_repo.get(id).await.expect("should return book");
        assert_eq!("Dune Messiah", loaded.name.as_str());
        assert_eq!(7.5, loaded.price);

        let size = books_repo.update(999, &book).await.expect("should not fail");
        assert_eq!(0, size);
    }

    #[tokio::test]
    async fn test_should_create_delete_books() {
        let books_repo = MemoryBookRepository::new();
        let book = BookEntity::new("Dune", "Frank Herbert", 1965, 412, 9.99);
        let id = books_repo.create(&book).await.expect("should create book");

        assert_eq!(1, books_repo.delete(id).await.expect("should delete book"));
        assert_eq!(0, books_repo.delete(id).await.expect("should not fail"));
        assert!(matches!(books_repo.get(id).await, Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_query_books() {
        let books_repo = MemoryBookRepository::new();
        for (i, price) in [5.0, 15.0, 25.0, 10.0, 20.0].iter().enumerate() {
            let book = BookEntity::new(format!("title_{}", i).as_str(), format!("author_{}", i % 2).as_str(), 2000, 100, *price);
            books_repo.create(&book).await.expect("should create book");
        }
        let all = books_repo.find_all().await.expect("should return books");
        assert_eq!(vec![1, 2, 3, 4, 5], all.iter().map(|b| b.id).collect::<Vec<_>>());

        let ranged = books_repo.find_by_price_range(&PriceRange::new(10.0, 20.0)).await.expect("should return books");
        assert_eq!(vec![2, 4, 5], ranged.iter().map(|b| b.id).collect::<Vec<_>>());

        let rows = books_repo.find_author_rows().await.expect("should return rows");
        assert_eq!(5, rows.len());
        assert_eq!("author_0", rows[0].author_name.as_str());
        assert_eq!(Some(2), rows[1].book_id);
    }
}

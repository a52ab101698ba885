use std::sync::Arc;
use async_trait::async_trait;
use tracing::{info, warn};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::query::BookQuery;
use crate::books::query::paginate::{paginate, Page, PageRequest};
use crate::books::repository::BookRepository;
use crate::catalog::domain::{BOOK_NOT_FOUND, CatalogService};
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::Notifier;

pub(crate) struct CatalogServiceImpl {
    book_repository: Arc<dyn BookRepository>,
    notifier: Arc<dyn Notifier>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Arc<dyn BookRepository>,
                      notifier: Arc<dyn Notifier>) -> Self {
        Self {
            book_repository,
            notifier,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self, query: &BookQuery) -> LibraryResult<Vec<BookDto>> {
        let books = match query.price_range.as_ref() {
            Some(range) => self.book_repository.find_by_price_range(range).await?,
            None => self.book_repository.find_all().await?,
        };
        Ok(query.refine(books.iter().map(BookDto::from).collect()))
    }

    async fn paginate_books(&self, query: &BookQuery, page: &PageRequest) -> LibraryResult<Page<BookDto>> {
        let books = self.list_books(query).await?;
        Ok(paginate(books, page))
    }

    async fn find_book_by_id(&self, id: i64) -> LibraryResult<BookDto> {
        self.book_repository.get(id).await.map(|b| BookDto::from(&b)).map_err(|err| match err {
            LibraryError::NotFound { .. } => LibraryError::not_found(BOOK_NOT_FOUND),
            other => other,
        })
    }

    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let id = self.book_repository.create(&BookEntity::from(book)).await?;
        info!("book {} added", id);
        let mut added = book.clone();
        added.id = id;
        // the book is stored at this point, a lost notification only gets logged
        if let Err(err) = self.notifier.notify(added.notification_message().as_str()).await {
            warn!("failed to send notification for book {}: {}", id, err);
        }
        Ok(added)
    }

    async fn update_book(&self, id: i64, book: &BookDto) -> LibraryResult<BookDto> {
        if self.book_repository.update(id, &BookEntity::from(book)).await? == 0 {
            return Err(LibraryError::not_found(BOOK_NOT_FOUND));
        }
        info!("book {} updated", id);
        let mut updated = book.clone();
        updated.id = id;
        Ok(updated)
    }

    async fn remove_book(&self, id: i64) -> LibraryResult<()> {
        if self.book_repository.delete(id).await? == 0 {
            return Err(LibraryError::not_found(BOOK_NOT_FOUND));
        }
        info!("book {} deleted", id);
        Ok(())
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.id,
            name: other.name.to_string(),
            author: other.author.to_string(),
            publish_year: other.publish_year,
            pages_count: other.pages_count,
            price: other.price,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            id: other.id,
            name: other.name.to_string(),
            author: other.author.to_string(),
            publish_year: other.publish_year,
            pages_count: other.pages_count,
            price: other.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::books::dto::BookDto;
    use crate::books::query::BookQuery;
    use crate::books::query::filter::PriceRange;
    use crate::books::query::paginate::PageRequest;
    use crate::books::query::sort::{SortField, SortOrder, SortSpec};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::library::LibraryError;
    use crate::core::testing::{FailingNotifier, memory_state, RecordingNotifier};

    lazy_static! {
        static ref SUT_SVC: AsyncOnce<Box<dyn CatalogService>> = AsyncOnce::new(async {
                factory::create_catalog_service(&memory_state(Arc::new(RecordingNotifier::default())))
            });
    }

    #[tokio::test]
    async fn test_should_add_book() {
        let catalog_svc = SUT_SVC.get().await;

        let book = BookDto::new("Dune", "Frank Herbert", 1965, 412, 9.99);
        let added = catalog_svc.add_book(&book).await.expect("should add book");
        assert!(added.id > 0);

        let loaded = catalog_svc.find_book_by_id(added.id).await.expect("should return book");
        assert_eq!(added, loaded);
    }

    #[tokio::test]
    async fn test_should_update_book() {
        let catalog_svc = SUT_SVC.get().await;

        let mut book = BookDto::new("Dune", "Frank Herbert", 1965, 412, 9.99);
        let added = catalog_svc.add_book(&book).await.expect("should add book");

        book.name = "Children of Dune".to_string();
        book.publish_year = 1976;
        let _ = catalog_svc.update_book(added.id, &book).await.expect("should update book");

        let loaded = catalog_svc.find_book_by_id(added.id).await.expect("should return book");
        assert_eq!("Children of Dune", loaded.name.as_str());
        assert_eq!(1976, loaded.publish_year);
    }

    #[tokio::test]
    async fn test_should_remove_book() {
        let catalog_svc = SUT_SVC.get().await;

        let book = BookDto::new("Dune", "Frank Herbert", 1965, 412, 9.99);
        let added = catalog_svc.add_book(&book).await.expect("should add book");

        catalog_svc.remove_book(added.id).await.expect("should remove book");

        let loaded = catalog_svc.find_book_by_id(added.id).await;
        assert!(matches!(loaded, Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_report_missing_books() {
        let catalog_svc = SUT_SVC.get().await;
        let book = BookDto::new("Dune", "Frank Herbert", 1965, 412, 9.99);

        match catalog_svc.find_book_by_id(-1).await {
            Err(LibraryError::NotFound { message }) => assert_eq!("Book not found for the given ID", message),
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(catalog_svc.update_book(-1, &book).await, Err(LibraryError::NotFound { .. })));
        assert!(matches!(catalog_svc.remove_book(-1).await, Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_notify_on_add() {
        let notifier = Arc::new(RecordingNotifier::default());
        let catalog_svc = factory::create_catalog_service(&memory_state(notifier.clone()));

        let book = BookDto::new("Dune", "Frank Herbert", 1965, 412, 9.5);
        let _ = catalog_svc.add_book(&book).await.expect("should add book");

        let messages = notifier.messages.lock().await;
        assert_eq!(vec!["New book added!\nTitle: Dune\nAuthor: Frank Herbert\nPrice: 9.5".to_string()], *messages);
    }

    #[tokio::test]
    async fn test_should_add_book_when_notification_fails() {
        let catalog_svc = factory::create_catalog_service(&memory_state(Arc::new(FailingNotifier::default())));

        let book = BookDto::new("Dune", "Frank Herbert", 1965, 412, 9.99);
        let added = catalog_svc.add_book(&book).await.expect("should add book");
        assert!(catalog_svc.find_book_by_id(added.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_should_list_and_paginate_books() {
        let catalog_svc = factory::create_catalog_service(&memory_state(Arc::new(RecordingNotifier::default())));
        for (name, author, price) in [("Dune", "Frank Herbert", 15.0), ("Excession", "Iain M. Banks", 8.0),
                                      ("Dune Messiah", "Frank Herbert", 12.0), ("Hyperion", "Dan Simmons", 25.0)] {
            let _ = catalog_svc.add_book(&BookDto::new(name, author, 1990, 300, price)).await.expect("should add book");
        }

        let all = catalog_svc.list_books(&BookQuery::default()).await.expect("should list books");
        assert_eq!(vec![1, 2, 3, 4], all.iter().map(|b| b.id).collect::<Vec<_>>());

        let query = BookQuery {
            price_range: Some(PriceRange::new(10.0, 20.0)),
            search: Some("dune".to_string()),
            sort: Some(SortSpec::new(SortField::Price, SortOrder::Asc)),
        };
        let res = catalog_svc.list_books(&query).await.expect("should list books");
        assert_eq!(vec![3, 1], res.iter().map(|b| b.id).collect::<Vec<_>>());

        let page = catalog_svc.paginate_books(&BookQuery::default(), &PageRequest::new(2, 3))
            .await.expect("should paginate books");
        assert_eq!(vec![4], page.records.iter().map(|b| b.id).collect::<Vec<_>>());
        assert_eq!(4, page.page_info.total_items);
    }
}

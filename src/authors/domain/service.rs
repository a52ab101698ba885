use std::sync::Arc;
use async_trait::async_trait;
use crate::authors::aggregate::{filter_by_author_name, group_by_author};
use crate::authors::domain::AuthorService;
use crate::authors::domain::model::AuthorGroup;
use crate::books::repository::BookRepository;
use crate::core::library::LibraryResult;

pub(crate) struct AuthorServiceImpl {
    book_repository: Arc<dyn BookRepository>,
}

impl AuthorServiceImpl {
    pub(crate) fn new(book_repository: Arc<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl AuthorService for AuthorServiceImpl {
    async fn list_authors(&self, name: Option<&str>) -> LibraryResult<Vec<AuthorGroup>> {
        let groups = group_by_author(self.book_repository.find_author_rows().await?);
        match name.filter(|n| !n.is_empty()) {
            Some(name) => Ok(filter_by_author_name(groups, name)),
            None => Ok(groups),
        }
    }
}

pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::authors::domain::model::AuthorGroup;
use crate::core::library::LibraryResult;

#[async_trait]
pub(crate) trait AuthorService: Sync + Send {
    // authors with their books; `name` narrows the groups by a case-insensitive substring
    async fn list_authors(&self, name: Option<&str>) -> LibraryResult<Vec<AuthorGroup>>;
}

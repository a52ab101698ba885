use async_trait::async_trait;
use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity and return the id assigned by the store
    async fn create(&self, entity: &Entity) -> LibraryResult<i64>;

    // replaces all fields of an existing entity, returns number of updated records
    async fn update(&self, id: i64, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    async fn get(&self, id: i64) -> LibraryResult<Entity>;

    // delete an entity, returns number of deleted records
    async fn delete(&self, id: i64) -> LibraryResult<usize>;

    // all entities in ascending id order
    async fn find_all(&self) -> LibraryResult<Vec<Entity>>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    DynamoDB,
    LocalDynamoDB,
    InMemory,
}

impl From<String> for RepositoryStore {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "dynamodb" => RepositoryStore::DynamoDB,
            "local" | "localdynamodb" => RepositoryStore::LocalDynamoDB,
            _ => RepositoryStore::InMemory,
        }
    }
}

impl Display for RepositoryStore {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RepositoryStore::DynamoDB => write!(f, "dynamodb"),
            RepositoryStore::LocalDynamoDB => write!(f, "local"),
            RepositoryStore::InMemory => write!(f, "memory"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_format_store() {
        let stores = vec![
            RepositoryStore::DynamoDB,
            RepositoryStore::LocalDynamoDB,
            RepositoryStore::InMemory,
        ];
        for store in stores {
            assert_eq!(store, RepositoryStore::from(store.to_string()));
        }
        assert_eq!(RepositoryStore::InMemory, RepositoryStore::from("bogus".to_string()));
    }
}

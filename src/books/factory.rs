use std::sync::Arc;
use aws_sdk_dynamodb::types::ScalarAttributeType;
use crate::books::repository::BookRepository;
use crate::books::repository::ddb_book_repository::DDBBookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::RepositoryStore;
use crate::utils::ddb::{build_db_client, create_table};

pub(crate) async fn create_book_repository(config: &Configuration) -> LibraryResult<Arc<dyn BookRepository>> {
    match config.store {
        RepositoryStore::DynamoDB => {
            let client = build_db_client(config).await;
            Ok(Arc::new(DDBBookRepository::new(client, config.books_table.as_str(), config.counters_table.as_str())))
        }
        RepositoryStore::LocalDynamoDB => {
            let client = build_db_client(config).await;
            // tables may already exist from an earlier run
            if let Err(err) = create_table(&client, config.books_table.as_str(), "id", ScalarAttributeType::N).await {
                tracing::debug!("skipping {} table: {}", config.books_table, err);
            }
            if let Err(err) = create_table(&client, config.counters_table.as_str(), "counter_id", ScalarAttributeType::S).await {
                tracing::debug!("skipping {} table: {}", config.counters_table, err);
            }
            Ok(Arc::new(DDBBookRepository::new(client, config.books_table.as_str(), config.counters_table.as_str())))
        }
        RepositoryStore::InMemory => {
            Ok(Arc::new(MemoryBookRepository::new()))
        }
    }
}

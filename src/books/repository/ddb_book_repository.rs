use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};

use crate::authors::domain::model::AuthorBookRow;
use crate::books::domain::model::BookEntity;
use crate::books::query::filter::PriceRange;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::utils::ddb::{number_attribute, parse_float_attribute, parse_item, parse_number_attribute, parse_string_attribute};

const BOOK_COUNTER: &str = "books";

#[derive(Debug)]
pub struct DDBBookRepository {
    client: Client,
    table_name: String,
    counters_table: String,
}

impl DDBBookRepository {
    pub(crate) fn new(client: Client, table_name: &str, counters_table: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
            counters_table: counters_table.to_string(),
        }
    }

    // reads every page of the table, optionally narrowed by a filter expression
    async fn scan(&self, filter: Option<&PriceRange>) -> LibraryResult<Vec<BookEntity>> {
        let table_name: &str = self.table_name.as_ref();
        let mut books = vec![];
        let mut exclusive_start_key = None;
        loop {
            let mut request = self.client
                .scan()
                .table_name(table_name)
                .consistent_read(true)
                .set_exclusive_start_key(exclusive_start_key);
            if let Some(range) = filter {
                request = request
                    .filter_expression("price BETWEEN :min_price AND :max_price")
                    .expression_attribute_values(":min_price", number_attribute(range.min))
                    .expression_attribute_values(":max_price", number_attribute(range.max));
            }
            let out = request.send().await.map_err(LibraryError::from)?;
            if let Some(items) = out.items() {
                books.extend(items.iter().map(map_to_book));
            }
            match out.last_evaluated_key() {
                Some(key) if !key.is_empty() => exclusive_start_key = Some(key.clone()),
                _ => break,
            }
        }
        books.sort_by_key(|b| b.id);
        Ok(books)
    }

    // atomically increments the book counter and returns the new value
    async fn next_id(&self) -> LibraryResult<i64> {
        let counters_table: &str = self.counters_table.as_ref();
        let out = self.client
            .update_item()
            .table_name(counters_table)
            .key("counter_id", AttributeValue::S(BOOK_COUNTER.to_string()))
            .update_expression("ADD next_id :one")
            .expression_attribute_values(":one", number_attribute(1))
            .return_values(ReturnValue::UpdatedNew)
            .send()
            .await.map_err(LibraryError::from)?;
        match out.attributes() {
            Some(attrs) if parse_number_attribute("next_id", attrs) > 0 => Ok(parse_number_attribute("next_id", attrs)),
            _ => Err(LibraryError::database(format!("failed to allocate id from {}", counters_table).as_str(), None, false)),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for DDBBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<i64> {
        let table_name: &str = self.table_name.as_ref();
        let id = self.next_id().await?;
        let val = serde_json::to_value(entity.with_id(id))?;
        self.client
            .put_item()
            .table_name(table_name)
            .condition_expression("attribute_not_exists(id)")
            .set_item(Some(parse_item(val)?))
            .send()
            .await.map(|_| id).map_err(LibraryError::from)
    }

    // Note `name` is a reserved word so it goes through an attribute name placeholder
    async fn update(&self, id: i64, entity: &BookEntity) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        let res = self.client
            .update_item()
            .table_name(table_name)
            .key("id", number_attribute(id))
            .update_expression("SET #name = :name, author = :author, publish_year = :publish_year, pages_count = :pages_count, price = :price")
            .expression_attribute_names("#name", "name")
            .expression_attribute_values(":name", AttributeValue::S(entity.name.to_string()))
            .expression_attribute_values(":author", AttributeValue::S(entity.author.to_string()))
            .expression_attribute_values(":publish_year", number_attribute(entity.publish_year))
            .expression_attribute_values(":pages_count", number_attribute(entity.pages_count))
            .expression_attribute_values(":price", number_attribute(entity.price))
            .condition_expression("attribute_exists(id)")
            .send()
            .await;
        match res {
            Ok(_) => Ok(1),
            Err(SdkError::ServiceError(ctx)) if ctx.err().is_conditional_check_failed_exception() => Ok(0),
            Err(err) => Err(LibraryError::from(err)),
        }
    }

    async fn get(&self, id: i64) -> LibraryResult<BookEntity> {
        let table_name: &str = self.table_name.as_ref();
        self.client
            .get_item()
            .table_name(table_name)
            .key("id", number_attribute(id))
            .consistent_read(true)
            .send()
            .await.map_err(LibraryError::from).and_then(|req| {
            if let Some(map) = req.item() {
                return Ok(map_to_book(map));
            }
            Err(LibraryError::not_found(format!("book not found for {}", id).as_str()))
        })
    }

    async fn delete(&self, id: i64) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        let res = self.client.delete_item()
            .table_name(table_name)
            .key("id", number_attribute(id))
            .condition_expression("attribute_exists(id)")
            .send()
            .await;
        match res {
            Ok(_) => Ok(1),
            Err(SdkError::ServiceError(ctx)) if ctx.err().is_conditional_check_failed_exception() => Ok(0),
            Err(err) => Err(LibraryError::from(err)),
        }
    }

    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        self.scan(None).await
    }
}

#[async_trait]
impl BookRepository for DDBBookRepository {
    async fn find_by_price_range(&self, range: &PriceRange) -> LibraryResult<Vec<BookEntity>> {
        // BETWEEN rejects a lower bound above the upper one
        if range.is_empty() {
            return Ok(vec![]);
        }
        self.scan(Some(range)).await
    }

    async fn find_author_rows(&self) -> LibraryResult<Vec<AuthorBookRow>> {
        let books = self.scan(None).await?;
        Ok(books.iter().map(AuthorBookRow::from).collect())
    }
}

fn map_to_book(map: &HashMap<String, AttributeValue>) -> BookEntity {
    BookEntity {
        id: parse_number_attribute("id", map),
        name: parse_string_attribute("name", map).unwrap_or(String::from("")),
        author: parse_string_attribute("author", map).unwrap_or(String::from("")),
        publish_year: parse_number_attribute("publish_year", map),
        pages_count: parse_number_attribute("pages_count", map),
        price: parse_float_attribute("price", map),
    }
}

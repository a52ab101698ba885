use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;

// AuthorBookRow is one row of the author/book join produced by the store. The book columns
// are empty when an author has no matching book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorBookRow {
    pub author_name: String,
    pub book_id: Option<i64>,
    pub book_name: Option<String>,
    pub publish_year: Option<i64>,
    pub pages_count: Option<i64>,
    pub price: Option<f64>,
}

impl AuthorBookRow {
    pub fn author_only(author_name: &str) -> Self {
        Self {
            author_name: author_name.to_string(),
            book_id: None,
            book_name: None,
            publish_year: None,
            pages_count: None,
            price: None,
        }
    }

    pub fn summary(&self) -> Option<BookSummary> {
        self.book_id.map(|book_id| BookSummary {
            book_id,
            book_name: self.book_name.clone().unwrap_or_default(),
            publish_year: self.publish_year.unwrap_or_default(),
            pages_count: self.pages_count.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
        })
    }
}

impl From<&BookEntity> for AuthorBookRow {
    fn from(book: &BookEntity) -> Self {
        Self {
            author_name: book.author.to_string(),
            book_id: Some(book.id),
            book_name: Some(book.name.to_string()),
            publish_year: Some(book.publish_year),
            pages_count: Some(book.pages_count),
            price: Some(book.price),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSummary {
    pub book_id: i64,
    pub book_name: String,
    pub publish_year: i64,
    pub pages_count: i64,
    pub price: f64,
}

// AuthorGroup is derived from the book rows and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorGroup {
    pub author_name: String,
    pub books: Vec<BookSummary>,
}

impl AuthorGroup {
    pub fn new(author_name: &str) -> Self {
        Self {
            author_name: author_name.to_string(),
            books: vec![],
        }
    }
}

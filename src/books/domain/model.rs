use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookEntity is the persisted form of a book; `id` is assigned by the store on insert and
// `author` is free text, not a reference to another record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub id: i64,
    pub name: String,
    pub author: String,
    pub publish_year: i64,
    pub pages_count: i64,
    pub price: f64,
}

impl BookEntity {
    pub fn new(name: &str, author: &str, publish_year: i64, pages_count: i64, price: f64) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            author: author.to_string(),
            publish_year,
            pages_count,
            price,
        }
    }

    pub(crate) fn with_id(&self, id: i64) -> Self {
        Self { id, ..self.clone() }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Book for BookEntity {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn publish_year(&self) -> i64 {
        self.publish_year
    }

    fn pages_count(&self) -> i64 {
        self.pages_count
    }

    fn price(&self) -> f64 {
        self.price
    }
}

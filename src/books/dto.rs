use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub id: i64,
    pub name: String,
    pub author: String,
    pub publish_year: i64,
    pub pages_count: i64,
    pub price: f64,
}

impl BookDto {
    pub fn new(name: &str, author: &str, publish_year: i64, pages_count: i64, price: f64) -> BookDto {
        BookDto {
            id: 0,
            name: name.to_string(),
            author: author.to_string(),
            publish_year,
            pages_count,
            price,
        }
    }

    // Field level checks applied before a book is written to the store.
    pub fn is_valid(&self) -> bool {
        let current_year = Utc::now().year() as i64;
        !self.name.trim().is_empty()
            && !self.author.trim().is_empty()
            && (0..=current_year).contains(&self.publish_year)
            && self.pages_count > 0
            && self.price.is_finite()
            && self.price >= 0.0
    }

    pub fn notification_message(&self) -> String {
        format!("New book added!\nTitle: {}\nAuthor: {}\nPrice: {}", self.name, self.author, self.price)
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Book for BookDto {
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

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookDto::new("Dune", "Frank Herbert", 1965, 412, 9.99);
        assert_eq!("Dune", book.name.as_str());
        assert_eq!("Frank Herbert", book.author.as_str());
        assert!(book.is_valid());
    }

    #[tokio::test]
    async fn test_should_reject_invalid_books() {
        assert!(!BookDto::new(" ", "Frank Herbert", 1965, 412, 9.99).is_valid());
        assert!(!BookDto::new("Dune", "", 1965, 412, 9.99).is_valid());
        assert!(!BookDto::new("Dune", "Frank Herbert", -1, 412, 9.99).is_valid());
        assert!(!BookDto::new("Dune", "Frank Herbert", 99999, 412, 9.99).is_valid());
        assert!(!BookDto::new("Dune", "Frank Herbert", 1965, 0, 9.99).is_valid());
        assert!(!BookDto::new("Dune", "Frank Herbert", 1965, 412, -1.0).is_valid());
        assert!(!BookDto::new("Dune", "Frank Herbert", 1965, 412, f64::NAN).is_valid());
    }

    #[tokio::test]
    async fn test_should_format_notification() {
        let book = BookDto::new("Dune", "Frank Herbert", 1965, 412, 9.5);
        assert_eq!("New book added!\nTitle: Dune\nAuthor: Frank Herbert\nPrice: 9.5", book.notification_message());
    }
}

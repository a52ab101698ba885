use std::cmp::Ordering;
use crate::books::domain::Book;
use crate::core::library::{LibraryError, LibraryResult};

pub const INVALID_SORT_ORDER: &str = "Invalid sortOrder value";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(raw: &str) -> LibraryResult<Self> {
        match raw.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(LibraryError::validation(INVALID_SORT_ORDER, Some("sort_order".to_string()))),
        }
    }
}

// SortField is the closed set of sortable book fields. Names outside the set resolve to
// Unknown, which compares every pair as equal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortField {
    Id,
    Name,
    Author,
    PublishYear,
    PagesCount,
    Price,
    Unknown,
}

impl SortField {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "id" => SortField::Id,
            "name" => SortField::Name,
            "author" => SortField::Author,
            "publish_year" => SortField::PublishYear,
            "pages_count" => SortField::PagesCount,
            "price" => SortField::Price,
            _ => SortField::Unknown,
        }
    }

    pub fn compare<B: Book>(&self, a: &B, b: &B) -> Ordering {
        match self {
            SortField::Id => a.id().cmp(&b.id()),
            SortField::Name => a.name().cmp(b.name()),
            SortField::Author => a.author().cmp(b.author()),
            SortField::PublishYear => a.publish_year().cmp(&b.publish_year()),
            SortField::PagesCount => a.pages_count().cmp(&b.pages_count()),
            SortField::Price => a.price().total_cmp(&b.price()),
            SortField::Unknown => Ordering::Equal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }
}

// Stable: records with equal keys keep their input order in both directions.
pub fn sort_books<B: Book>(mut books: Vec<B>, spec: &SortSpec) -> Vec<B> {
    match spec.order {
        SortOrder::Asc => books.sort_by(|a, b| spec.field.compare(a, b)),
        SortOrder::Desc => books.sort_by(|a, b| spec.field.compare(b, a)),
    }
    books
}

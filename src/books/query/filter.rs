use crate::books::domain::Book;
use crate::core::library::{LibraryError, LibraryResult};

pub const INVALID_PRICE_RANGE: &str = "Invalid minPrice or maxPrice values";

// PriceRange is an inclusive price window; `min > max` is legal and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn parse(min: &str, max: &str) -> LibraryResult<Self> {
        match (parse_price(min), parse_price(max)) {
            (Some(min), Some(max)) => Ok(Self::new(min, max)),
            _ => Err(LibraryError::validation(INVALID_PRICE_RANGE, Some("price_range".to_string()))),
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

// "NaN" and "inf" parse as f64 but are not usable bounds.
fn parse_price(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|p| p.is_finite())
}

pub fn filter_by_price_range<B: Book>(books: Vec<B>, range: &PriceRange) -> Vec<B> {
    books.into_iter().filter(|b| range.contains(b.price())).collect()
}

pub fn filter_by_search<B: Book>(books: Vec<B>, term: &str) -> Vec<B> {
    let term = term.to_lowercase();
    if term.is_empty() {
        return books;
    }
    books.into_iter()
        .filter(|b| b.name().to_lowercase().contains(&term) || b.author().to_lowercase().contains(&term))
        .collect()
}

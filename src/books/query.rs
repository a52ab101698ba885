pub mod filter;
pub mod paginate;
pub mod sort;

use serde::Deserialize;
use crate::books::domain::Book;
use crate::books::query::filter::{filter_by_search, PriceRange};
use crate::books::query::paginate::PageRequest;
use crate::books::query::sort::{sort_books, SortField, SortOrder, SortSpec};
use crate::core::library::LibraryResult;

// BookQueryParams holds the raw query string of the listing endpoints.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookQueryParams {
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl BookQueryParams {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::parse(self.page.as_deref(), self.page_size.as_deref())
    }
}

// BookQuery is the validated form of the listing criteria.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BookQuery {
    pub price_range: Option<PriceRange>,
    pub search: Option<String>,
    pub sort: Option<SortSpec>,
}

impl BookQuery {
    // The price filter needs both bounds; a lone bound is ignored. Sorting needs both sortBy
    // and sortOrder, but sortOrder is checked whenever it is given.
    pub fn parse(params: &BookQueryParams) -> LibraryResult<Self> {
        let price_range = match (params.min_price.as_deref(), params.max_price.as_deref()) {
            (Some(min), Some(max)) => Some(PriceRange::parse(min, max)?),
            _ => None,
        };
        let order = params.sort_order.as_deref().map(SortOrder::parse).transpose()?;
        let sort = match (params.sort_by.as_deref(), order) {
            (Some(field), Some(order)) => Some(SortSpec::new(SortField::parse(field), order)),
            _ => None,
        };
        let search = params.search.clone().filter(|s| !s.is_empty());
        Ok(Self {
            price_range,
            search,
            sort,
        })
    }

    // Search then sort; the price window has already been applied by the store.
    pub fn refine<B: Book>(&self, books: Vec<B>) -> Vec<B> {
        let books = match self.search.as_deref() {
            Some(term) => filter_by_search(books, term),
            None => books,
        };
        match self.sort.as_ref() {
            Some(spec) => sort_books(books, spec),
            None => books,
        }
    }
}

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;

// PageRequest is a 1-based page window. Parsing never fails: a value is read up to its first
// non-digit ("2.5" is page 2); missing, non-numeric and zero values fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    pub fn parse(page: Option<&str>, page_size: Option<&str>) -> Self {
        Self::new(parse_or(page, DEFAULT_PAGE), parse_or(page_size, DEFAULT_PAGE_SIZE))
    }

    fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE)
    }
}

fn parse_or(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(leading_integer)
        .filter(|n| *n > 0)
        .unwrap_or(default)
}

fn leading_integer(raw: &str) -> Option<usize> {
    let raw = raw.trim_start();
    let raw = raw.strip_prefix('+').unwrap_or(raw);
    let end = raw.find(|c: char| !c.is_ascii_digit()).unwrap_or(raw.len());
    raw[..end].parse::<usize>().ok()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
}

// It defines abstraction for paginated result
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub records: Vec<T>,
    pub page_info: PageInfo,
}

pub fn paginate<T>(records: Vec<T>, request: &PageRequest) -> Page<T> {
    let total_items = records.len();
    let records = records.into_iter()
        .skip(request.offset())
        .take(request.page_size)
        .collect();
    Page {
        records,
        page_info: PageInfo {
            page: request.page,
            page_size: request.page_size,
            total_items,
        },
    }
}

#[cfg(test)]
mod tests {
    use crate::books::query::paginate::{paginate, PageInfo, PageRequest};

    #[tokio::test]
    async fn test_should_return_requested_page() {
        let items: Vec<usize> = (1..=25).collect();
        let page = paginate(items, &PageRequest::new(2, 10));
        assert_eq!((11..=20).collect::<Vec<_>>(), page.records);
        assert_eq!(PageInfo { page: 2, page_size: 10, total_items: 25 }, page.page_info);
    }

    #[tokio::test]
    async fn test_should_clip_last_page() {
        let items: Vec<usize> = (1..=25).collect();
        let page = paginate(items, &PageRequest::new(3, 10));
        assert_eq!(vec![21, 22, 23, 24, 25], page.records);
    }

    #[tokio::test]
    async fn test_should_return_empty_page_out_of_range() {
        let items: Vec<usize> = (1..=25).collect();
        let page = paginate(items.clone(), &PageRequest::new(4, 10));
        assert!(page.records.is_empty());
        assert_eq!(25, page.page_info.total_items);

        let page = paginate(items, &PageRequest::new(usize::MAX, usize::MAX));
        assert!(page.records.is_empty());
        assert_eq!(25, page.page_info.total_items);
    }

    #[tokio::test]
    async fn test_should_reassemble_collection_from_pages() {
        for n in [0usize, 1, 9, 10, 11, 37] {
            for size in [1usize, 3, 10] {
                let items: Vec<usize> = (0..n).collect();
                let pages = (n + size - 1) / size;
                let mut all = vec![];
                for p in 1..=pages {
                    let page = paginate(items.clone(), &PageRequest::new(p, size));
                    assert!(!page.records.is_empty());
                    all.extend(page.records);
                }
                assert_eq!(items, all);
                assert!(paginate(items.clone(), &PageRequest::new(pages + 1, size)).records.is_empty());
            }
        }
    }

    #[tokio::test]
    async fn test_should_default_invalid_params() {
        assert_eq!(PageRequest::new(1, 10), PageRequest::parse(None, None));
        assert_eq!(PageRequest::new(1, 10), PageRequest::parse(Some("abc"), Some("-5")));
        assert_eq!(PageRequest::new(1, 10), PageRequest::parse(Some("0"), Some("0")));
        assert_eq!(PageRequest::new(3, 5), PageRequest::parse(Some("3"), Some("5")));
        assert_eq!(PageRequest::default(), PageRequest::parse(Some(""), None));
    }

    #[tokio::test]
    async fn test_should_read_leading_integer() {
        assert_eq!(PageRequest::new(2, 1), PageRequest::parse(Some("2.5"), Some("1")));
        assert_eq!(PageRequest::new(3, 20), PageRequest::parse(Some(" 3abc"), Some("+20")));
        assert_eq!(PageRequest::new(1, 10), PageRequest::parse(Some(".5"), Some("x7")));
    }

    #[tokio::test]
    async fn test_should_serialize_page_info_camel_case() {
        let info = PageInfo { page: 2, page_size: 10, total_items: 25 };
        let json = serde_json::to_value(&info).expect("should serialize");
        assert_eq!(serde_json::json!({"page": 2, "pageSize": 10, "totalItems": 25}), json);
    }
}

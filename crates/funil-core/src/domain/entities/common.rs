//! Shared wire shapes used by every paginated listing endpoint.

use serde::{Deserialize, Serialize};

/// Pagination metadata as returned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub total_pages: u32,
}

/// A page of records plus its pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

impl<T> Paginated<T> {
    /// An empty first page. Useful as a fallback when listing fails softly.
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            meta: PaginationMeta {
                page: 1,
                page_size: 0,
                total_items: 0,
                total_pages: 0,
            },
        }
    }
}

/// Common listing parameters: page, page size and free-text search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageRequest {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_page_has_no_items() {
        let page: Paginated<u8> = Paginated::empty();
        assert!(page.data.is_empty());
        assert_eq!(page.meta.total_items, 0);
    }

    #[test]
    fn meta_round_trips_camel_case() {
        let json = r#"{"page":2,"pageSize":10,"totalItems":31,"totalPages":4}"#;
        let meta: PaginationMeta = serde_json::from_str(json).unwrap();
        assert_eq!(meta.page, 2);
        assert_eq!(meta.page_size, 10);
        assert_eq!(meta.total_pages, 4);
    }
}

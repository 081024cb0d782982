//! Paginated list envelopes returned by the API.

use serde::{Deserialize, Serialize};

/// A page of items as returned by list endpoints (`{page, size, total, items}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Current page number (1-based).
    pub page: u64,
    /// Requested page size.
    pub size: u64,
    /// Total number of items across all pages.
    pub total: u64,
    /// The items on this page.
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Total number of pages, never less than one.
    pub fn total_pages(&self) -> u64 {
        if self.total == 0 || self.size == 0 {
            1
        } else {
            self.total.div_ceil(self.size)
        }
    }

    /// Whether there is a page after this one.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }
}

/// Wrapper for endpoints that return `{items: [...]}` without paging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemList<T> {
    /// The items.
    pub items: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        let page: Page<u8> = Page {
            page: 1,
            size: 10,
            total: 25,
            items: vec![],
        };
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_next());

        let empty: Page<u8> = Page {
            page: 1,
            size: 10,
            total: 0,
            items: vec![],
        };
        assert_eq!(empty.total_pages(), 1);
        assert!(!empty.has_next());
    }
}

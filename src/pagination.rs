//! Page selection for list queries.

use serde::Serialize;

/// Default number of items rendered per page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// One-based page selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self { page, per_page }
    }

    /// Rows to skip. Page zero is treated as the first page; offsets past
    /// `usize::MAX` saturate and select an empty page.
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1).saturating_mul(self.per_page)
    }
}

/// A page of items together with the total number of pages.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub pages: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, page: usize, pages: usize) -> Self {
        Self { items, page, pages }
    }
}

//! Offset-based pagination over question listings.

/// Fixed number of questions per page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Offset pagination parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number.
    pub page: usize,
    /// Number of items per page.
    pub per_page: usize,
}

impl Pagination {
    /// Number of rows to skip before this page starts.
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1) * self.per_page
    }
}

/// 1-based number of the last page holding `total` items; 1 when empty.
pub fn last_page(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page).max(1)
}

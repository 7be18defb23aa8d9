use serde::{Deserialize, Serialize};

/// Default page size used by list screens.
pub const DEFAULT_LIMIT: u64 = 100;

/// One page of a list endpoint: `{ data, count }`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub count: u64,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct Pagination {
    pub skip: u64,
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    #[must_use]
    pub const fn new(skip: u64, limit: u64) -> Self {
        Self { skip, limit }
    }

    /// The window following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self {
            skip: self.skip.saturating_add(self.limit),
            limit: self.limit,
        }
    }

    /// True when `page` (fetched with this window) is not the last one.
    #[must_use]
    pub fn has_more<T>(&self, page: &Page<T>) -> bool {
        self.skip.saturating_add(page.data.len() as u64) < page.count
    }
}

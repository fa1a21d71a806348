//! Offset pagination over the asset ranking.

use serde::Deserialize;
use serde::Serialize;

/// Number of assets requested per page.
pub const PAGE_SIZE: u32 = 50;

/// A single page request against the assets endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    /// Creates a request for the given 1-based page with the default page size.
    ///
    /// Page `0` is treated as page `1`.
    pub fn new(page: u32) -> Self {
        Self::with_page_size(page, PAGE_SIZE)
    }

    pub fn with_page_size(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// The `limit` query parameter.
    pub fn limit(&self) -> u32 {
        self.page_size
    }

    /// The `offset` query parameter: `(page - 1) * page_size`.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1)
    }
}

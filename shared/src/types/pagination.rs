//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

/// Page used when the caller omits `page` or sends a non-positive value
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the caller omits `page_size` or sends a non-positive value
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Pagination parameters for list endpoints
///
/// Raw values are kept signed so that `?page=-3` deserializes and falls back
/// to the default instead of failing the request.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PageRequest {
    /// Requested page number (1-indexed)
    #[serde(default)]
    pub page: Option<i64>,

    /// Requested number of items per page
    #[serde(default)]
    pub page_size: Option<i64>,
}

impl PageRequest {
    /// Create a new page request with explicit values
    pub fn new(page: i64, page_size: i64) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
        }
    }

    /// Effective page number
    pub fn page(&self) -> u32 {
        positive_or(self.page, DEFAULT_PAGE)
    }

    /// Effective page size
    pub fn per_page(&self) -> u32 {
        positive_or(self.page_size, DEFAULT_PAGE_SIZE)
    }

    /// Calculate the offset for database queries
    pub fn offset(&self) -> u64 {
        u64::from(self.page().saturating_sub(1)) * u64::from(self.per_page())
    }

    /// Get the limit for database queries
    pub fn limit(&self) -> u64 {
        u64::from(self.per_page())
    }
}

fn positive_or(value: Option<i64>, default: u32) -> u32 {
    match value {
        Some(v) if v > 0 => u32::try_from(v).unwrap_or(u32::MAX),
        _ => default,
    }
}

/// Paginated response wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of items across all pages
    pub total: u64,

    /// Current page number
    pub current_page: u32,

    /// Requested page size
    pub per_page: u32,

    /// Number of items returned on this page
    pub in_page: usize,

    /// The actual data items
    pub data: Vec<T>,
}

impl<T> Page<T> {
    /// Build a page from the items fetched for `request`
    pub fn new(data: Vec<T>, total: u64, request: &PageRequest) -> Self {
        Self {
            total,
            current_page: request.page(),
            per_page: request.per_page(),
            in_page: data.len(),
            data,
        }
    }

    /// Map items to another type, keeping the pagination metadata
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            total: self.total,
            current_page: self.current_page,
            per_page: self.per_page,
            in_page: self.in_page,
            data: self.data.into_iter().map(f).collect(),
        }
    }
}

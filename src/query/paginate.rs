//! Pagination
//!
//! `page` and `limit` are 1-based. A page past the end yields empty `data`,
//! never an error.

use serde::Serialize;

/// Default page when absent or unusable
pub const DEFAULT_PAGE: usize = 1;

/// Default page size when absent or unusable
pub const DEFAULT_LIMIT: usize = 10;

/// A validated page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub limit: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    /// Build from raw query values. Absent, non-numeric, zero and negative
    /// values fall back to the defaults.
    pub fn parse(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: parse_positive(page).unwrap_or(DEFAULT_PAGE),
            limit: parse_positive(limit).unwrap_or(DEFAULT_LIMIT),
        }
    }

    /// Index of the first record on this page
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }
}

fn parse_positive(value: Option<&str>) -> Option<usize> {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
}

/// The standard list envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T: Serialize> {
    pub current_page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub data: Vec<T>,
}

impl<T: Serialize> Page<T> {
    /// A single page holding `data` as-is, reported with `per_page` slots.
    ///
    /// Used by the random endpoints, which are never paged.
    pub fn single(data: Vec<T>, per_page: usize) -> Self {
        let total_items = data.len();
        Self {
            current_page: 1,
            per_page,
            total_items,
            total_pages: usize::from(total_items > 0),
            data,
        }
    }
}

/// Slice `items` according to `request` and wrap the slice in an envelope.
///
/// `total_items` counts everything passed in.
pub fn paginate<T: Serialize>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let total_items = items.len();
    let total_pages = total_items.div_ceil(request.limit);

    let data = items
        .into_iter()
        .skip(request.offset())
        .take(request.limit)
        .collect();

    Page {
        current_page: request.page,
        per_page: request.limit,
        total_items,
        total_pages,
        data,
    }
}

//! Listing flow: filter, sort, count, slice, wrap.
//!
//! Totals are computed after filtering and before slicing.

use crate::store::Joke;

use super::filter::{filter_by_text, filter_by_type};
use super::paginate::{paginate, Page, PageRequest};
use super::sorter::{sort_by_field, SortSpec};

/// Everything a listing endpoint can ask for
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Exact `type` match
    pub kind: Option<String>,
    /// Case-insensitive substring of setup or punchline
    pub search_text: Option<String>,
    pub sort: Option<SortSpec>,
    pub page: PageRequest,
}

impl ListQuery {
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_page(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }
}

/// Run a listing over `jokes` without touching its order
pub fn list(jokes: &[Joke], query: &ListQuery) -> Page<Joke> {
    let mut matched = match &query.kind {
        Some(kind) => filter_by_type(jokes, kind),
        None => jokes.to_vec(),
    };
    matched = filter_by_text(&matched, query.search_text.as_deref());

    if let Some(spec) = query.sort {
        sort_by_field(&mut matched, spec);
    }

    paginate(matched, query.page)
}

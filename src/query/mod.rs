//! # Query Engine
//!
//! Filtering, sorting, random sampling and pagination over joke slices.
//! Nothing here touches the store; callers pass in the records to work on.

pub mod filter;
pub mod listing;
pub mod paginate;
pub mod random;
pub mod sorter;

pub use filter::{filter_by_text, filter_by_type};
pub use listing::{list, ListQuery};
pub use paginate::{paginate, Page, PageRequest, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use random::{random_n, random_one};
pub use sorter::{sort_by_field, SortField, SortOrder, SortSpec};

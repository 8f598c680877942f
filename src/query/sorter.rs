//! Listing sort
//!
//! Sorts by `id` or by `likes`, ascending or descending. The sort is stable.

use std::cmp::Ordering;

use crate::store::Joke;

/// Field to sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Likes,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// A field and a direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Parse a `sort` query value.
    ///
    /// Accepts `id_asc`, `id_desc`, `likes_asc`, `likes_desc`, and the
    /// shorthand `asc`/`desc` for id order. Anything else is "no sort".
    pub fn parse(value: &str) -> Option<Self> {
        let (field, order) = match value {
            "id_asc" | "asc" => (SortField::Id, SortOrder::Asc),
            "id_desc" | "desc" => (SortField::Id, SortOrder::Desc),
            "likes_asc" => (SortField::Likes, SortOrder::Asc),
            "likes_desc" => (SortField::Likes, SortOrder::Desc),
            _ => return None,
        };
        Some(Self::new(field, order))
    }
}

/// Sort `jokes` in place
pub fn sort_by_field(jokes: &mut [Joke], spec: SortSpec) {
    jokes.sort_by(|a, b| {
        let ordering = compare(a, b, spec.field);
        match spec.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

/// Unset likes order below every set value, including negative ones.
fn compare(a: &Joke, b: &Joke, field: SortField) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Likes => a.likes.cmp(&b.likes),
    }
}

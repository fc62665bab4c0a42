//! Filter, sort and paginate stages
//!
//! Each stage is a pure function over borrowed rows. Composing them as
//! `paginate(&sort(filter(rows, query), &directive), &pagination)` yields the
//! rows visible on screen.

use serde::Serialize;

use super::{FieldKey, Pagination, SortDirective, Tabular};

/// Keep rows where any field contains `query`, ignoring case
///
/// An empty query keeps every row in its original order.
pub fn filter<'a, R, I>(rows: I, query: &str) -> Vec<&'a R>
where
    R: Tabular + 'a,
    I: IntoIterator<Item = &'a R>,
{
    if query.is_empty() {
        return rows.into_iter().collect();
    }

    let needle = query.to_lowercase();
    rows.into_iter()
        .filter(|row| matches_query(*row, &needle))
        .collect()
}

/// Whether any field of `row` contains the already lowercased `needle`
pub fn matches_query<R: Tabular>(row: &R, needle: &str) -> bool {
    R::Field::ALL
        .iter()
        .any(|field| row.value(*field).search_text().contains(needle))
}

/// Order rows by the directive's column
///
/// The sort is stable: rows with equal keys keep their relative order in
/// both directions. Without a key the input order is returned untouched.
pub fn sort<'a, R: Tabular>(
    mut rows: Vec<&'a R>,
    directive: &SortDirective<R::Field>,
) -> Vec<&'a R> {
    if let Some(key) = directive.key {
        rows.sort_by(|a, b| {
            directive
                .direction
                .apply(a.value(key).compare(&b.value(key)))
        });
    }
    rows
}

/// 1-based, inclusive bounds of the rows shown on a page
///
/// Both bounds are zero when the page is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisibleRange {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

impl VisibleRange {
    /// "Showing 11 to 12 of 12 results"
    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {} results",
            self.first, self.last, self.total
        )
    }
}

/// One page cut out of a row collection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSlice<'s, T> {
    pub items: &'s [T],
    pub total_pages: usize,
    pub range: VisibleRange,
}

/// Cut the current page out of `rows`
///
/// A page past the end of the data yields an empty slice rather than an
/// error; callers clamp the page separately.
pub fn paginate<'s, T>(rows: &'s [T], pagination: &Pagination) -> PageSlice<'s, T> {
    let total_pages = pagination.total_pages(rows.len());
    let start = pagination.offset().min(rows.len());
    let end = start.saturating_add(pagination.page_size).min(rows.len());
    let items = &rows[start..end];

    let range = if items.is_empty() {
        VisibleRange {
            first: 0,
            last: 0,
            total: rows.len(),
        }
    } else {
        VisibleRange {
            first: start + 1,
            last: end,
            total: rows.len(),
        }
    };

    PageSlice {
        items,
        total_pages,
        range,
    }
}

//! Tabular views over API collections
//!
//! Every list in the interface (vehicles, images, videos, spins) is rendered
//! through the same pipeline:
//!
//! 1. **filter** - keep rows where any field contains the search text
//! 2. **sort** - stable ordering on a single column, ascending or descending
//! 3. **paginate** - slice out the current page
//!
//! The pipeline only borrows the fetched rows; nothing here reorders or
//! mutates the collection it was given.
//!
//! Rows are strongly typed. Each record type names its fields with an enum
//! implementing [`FieldKey`], and column definitions are keyed by that enum,
//! so a column can only ever refer to a field the record actually has.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

pub mod pipeline;
pub mod state;

pub use pipeline::{filter, matches_query, paginate, sort, PageSlice, VisibleRange};
pub use state::{TableIntent, TableParams, TableState, TableView};

/// Field names of a tabular record type
pub trait FieldKey: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Every field of the record, in declaration order
    const ALL: &'static [Self];

    /// Wire name of the field, as used in query strings and API payloads
    fn name(self) -> &'static str;

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.name() == name)
    }
}

/// A record that can be displayed as a table row
pub trait Tabular {
    type Field: FieldKey;

    /// Look up a single field of the row
    fn value(&self, field: Self::Field) -> CellValue;
}

/// A scalar cell value
///
/// Deserializes from any JSON scalar so loosely typed API fields can be
/// carried without a schema; `null` becomes [`CellValue::Empty`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// Native ordering between two cells
    ///
    /// Numbers compare numerically (integers and floats may be mixed),
    /// strings lexicographically and booleans `false < true`. Any other
    /// pairing, including empty cells, is a tie.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        use CellValue::*;

        match (self, other) {
            (Int(a), Int(b)) => a.cmp(b),
            (Int(a), Float(b)) => (*a as f64).partial_cmp(b).unwrap_or(Ordering::Equal),
            (Float(a), Int(b)) => a.partial_cmp(&(*b as f64)).unwrap_or(Ordering::Equal),
            (Float(a), Float(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Text(a), Text(b)) => a.cmp(b),
            (Bool(a), Bool(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }

    /// Lowercase textual form used for free-text search
    pub fn search_text(&self) -> String {
        self.to_string().to_lowercase()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(value) => write!(f, "{}", value),
            CellValue::Int(value) => write!(f, "{}", value),
            CellValue::Float(value) => write!(f, "{}", value),
            CellValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Int(i64::from(value))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Empty)
    }
}

/// Maps a cell value to its display text
pub type Renderer = fn(&CellValue) -> String;

/// How a field participates in a table
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec<F> {
    pub key: F,
    pub header: &'static str,
    pub sortable: bool,
    pub render: Option<Renderer>,
}

impl<F> ColumnSpec<F> {
    pub const fn sortable(key: F, header: &'static str) -> Self {
        Self {
            key,
            header,
            sortable: true,
            render: None,
        }
    }

    pub const fn plain(key: F, header: &'static str) -> Self {
        Self {
            key,
            header,
            sortable: false,
            render: None,
        }
    }

    pub const fn with_render(mut self, render: Renderer) -> Self {
        self.render = Some(render);
        self
    }

    /// Display text for a cell in this column
    pub fn display(&self, value: &CellValue) -> String {
        match self.render {
            Some(render) => render(value),
            None => value.to_string(),
        }
    }
}

/// Whether `key` names a sortable column in `columns`
pub fn is_sortable<F: FieldKey>(columns: &[ColumnSpec<F>], key: F) -> bool {
    columns
        .iter()
        .any(|column| column.key == key && column.sortable)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Some(SortDirection::Ascending),
            "desc" | "descending" => Some(SortDirection::Descending),
            _ => None,
        }
    }

    /// Orient an ascending comparison result
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Which column the table is ordered by, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortDirective<F> {
    pub key: Option<F>,
    pub direction: SortDirection,
}

impl<F> SortDirective<F> {
    pub fn none() -> Self {
        Self {
            key: None,
            direction: SortDirection::Ascending,
        }
    }

    pub fn by(key: F, direction: SortDirection) -> Self {
        Self {
            key: Some(key),
            direction,
        }
    }
}

impl<F> Default for SortDirective<F> {
    fn default() -> Self {
        Self::none()
    }
}

/// Page position within a filtered and sorted collection
///
/// Both values are 1-based and never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub current_page: usize,
    pub page_size: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn at_page(mut self, page: usize) -> Self {
        self.current_page = page.max(1);
        self
    }

    /// Number of pages for `row_count` rows; at least one even when empty
    pub fn total_pages(&self, row_count: usize) -> usize {
        row_count.div_ceil(self.page_size.max(1)).max(1)
    }

    /// Index of the first row of the current page
    pub fn offset(&self) -> usize {
        self.current_page
            .saturating_sub(1)
            .saturating_mul(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_compare_numerically() {
        assert_eq!(CellValue::Int(9).compare(&CellValue::Int(10)), Ordering::Less);
        assert_eq!(CellValue::Int(3).compare(&CellValue::Float(2.5)), Ordering::Greater);
        assert_eq!(CellValue::Float(1.5).compare(&CellValue::Float(1.5)), Ordering::Equal);
    }

    #[test]
    fn test_strings_compare_lexicographically() {
        assert_eq!(
            CellValue::from("Civic").compare(&CellValue::from("Accord")),
            Ordering::Greater
        );
        // "10" sorts before "9" as text
        assert_eq!(CellValue::from("10").compare(&CellValue::from("9")), Ordering::Less);
    }

    #[test]
    fn test_mixed_and_empty_cells_tie() {
        assert_eq!(CellValue::Empty.compare(&CellValue::Int(1)), Ordering::Equal);
        assert_eq!(CellValue::from("a").compare(&CellValue::Int(1)), Ordering::Equal);
    }

    #[test]
    fn test_display_and_search_text() {
        assert_eq!(CellValue::Empty.to_string(), "");
        assert_eq!(CellValue::Float(12.0).to_string(), "12");
        assert_eq!(CellValue::Float(12.5).to_string(), "12.5");
        assert_eq!(CellValue::Bool(true).to_string(), "true");
        assert_eq!(CellValue::from("Toyota").search_text(), "toyota");
    }

    #[test]
    fn test_deserialize_json_scalars() {
        let values: Vec<CellValue> =
            serde_json::from_str(r#"[null, true, 42, 4.5, "text"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                CellValue::Empty,
                CellValue::Bool(true),
                CellValue::Int(42),
                CellValue::Float(4.5),
                CellValue::from("text"),
            ]
        );
    }

    #[test]
    fn test_total_pages_never_zero() {
        let pagination = Pagination::new(10);
        assert_eq!(pagination.total_pages(0), 1);
        assert_eq!(pagination.total_pages(10), 1);
        assert_eq!(pagination.total_pages(11), 2);
    }

    #[test]
    fn test_zero_page_size_is_coerced() {
        let pagination = Pagination::new(0);
        assert_eq!(pagination.page_size, 1);
        assert_eq!(pagination.at_page(0).current_page, 1);
    }

    #[test]
    fn test_sort_direction_names() {
        assert_eq!(SortDirection::from_name("DESC"), Some(SortDirection::Descending));
        assert_eq!(SortDirection::from_name("ascending"), Some(SortDirection::Ascending));
        assert_eq!(SortDirection::from_name("up"), None);
        assert_eq!(SortDirection::Ascending.toggled().as_str(), "desc");
    }
}

//! Per-table interaction state
//!
//! A [`TableState`] holds the search text, sort directive and page position
//! of one table. Every transition that changes the order or size of the
//! visible collection resets the page to 1 in the same step.

use serde::Deserialize;

use super::{
    filter, is_sortable, paginate, sort, ColumnSpec, FieldKey, Pagination, SortDirection,
    SortDirective, Tabular, VisibleRange,
};

/// A user action against a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableIntent<F> {
    SetQuery(String),
    RequestSort(F),
    SetPage(usize),
    NextPage,
    PreviousPage,
}

/// Table state as carried in a query string (`?q=&sort=&dir=&page=`)
///
/// All values are optional and malformed ones are ignored rather than
/// rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub dir: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableState<F> {
    query: String,
    sort: SortDirective<F>,
    pagination: Pagination,
}

impl<F: FieldKey> TableState<F> {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            sort: SortDirective::none(),
            pagination: Pagination::new(page_size),
        }
    }

    /// Rebuild state from query-string parameters
    ///
    /// Unknown or non-sortable sort columns are dropped. The page is taken
    /// as given; call [`TableState::clamp_to`] once the row count is known.
    pub fn from_params(columns: &[ColumnSpec<F>], params: &TableParams, page_size: usize) -> Self {
        let mut state = Self::new(page_size);

        if let Some(query) = &params.q {
            state.query = query.clone();
        }

        let key = params
            .sort
            .as_deref()
            .and_then(F::from_name)
            .filter(|key| is_sortable(columns, *key));
        if let Some(key) = key {
            let direction = params
                .dir
                .as_deref()
                .and_then(SortDirection::from_name)
                .unwrap_or_default();
            state.sort = SortDirective::by(key, direction);
        }

        if let Some(page) = params.page.as_deref().and_then(|p| p.trim().parse::<usize>().ok()) {
            state.pagination = state.pagination.at_page(page);
        }

        state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> &SortDirective<F> {
        &self.sort
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page
    }

    /// Replace the search text and return to the first page
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.reset_page();
    }

    /// Sort by `key`, flipping direction when it is already the sort column
    ///
    /// Returns `false` and leaves the state untouched when `key` is not a
    /// sortable column.
    pub fn request_sort(&mut self, columns: &[ColumnSpec<F>], key: F) -> bool {
        if !is_sortable(columns, key) {
            return false;
        }

        self.sort = if self.sort.key == Some(key) {
            SortDirective::by(key, self.sort.direction.toggled())
        } else {
            SortDirective::by(key, SortDirection::Ascending)
        };
        self.reset_page();
        true
    }

    /// Jump to `page`, clamped to `[1, total_pages]`
    pub fn set_page(&mut self, page: usize, total_pages: usize) {
        self.pagination.current_page = page.clamp(1, total_pages.max(1));
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.set_page(self.pagination.current_page.saturating_add(1), total_pages);
    }

    pub fn previous_page(&mut self) {
        self.pagination.current_page = self.pagination.current_page.saturating_sub(1).max(1);
    }

    pub fn reset_page(&mut self) {
        self.pagination.current_page = 1;
    }

    /// Pull the current page back inside `[1, total_pages]`
    pub fn clamp_to(&mut self, total_pages: usize) {
        self.set_page(self.pagination.current_page, total_pages);
    }

    /// Apply a user intent
    ///
    /// `rows` is the collection the table is showing; it is only consulted
    /// to bound page moves.
    pub fn apply<'a, R, I>(&mut self, columns: &[ColumnSpec<F>], rows: I, intent: TableIntent<F>)
    where
        R: Tabular<Field = F> + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        match intent {
            TableIntent::SetQuery(query) => self.set_query(query),
            TableIntent::RequestSort(key) => {
                self.request_sort(columns, key);
            }
            TableIntent::SetPage(page) => {
                let total_pages = self.total_pages(rows);
                self.set_page(page, total_pages);
            }
            TableIntent::NextPage => {
                let total_pages = self.total_pages(rows);
                self.next_page(total_pages);
            }
            TableIntent::PreviousPage => self.previous_page(),
        }
    }

    /// Page count of `rows` after the current search is applied
    pub fn total_pages<'a, R, I>(&self, rows: I) -> usize
    where
        R: Tabular<Field = F> + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        self.pagination
            .total_pages(filter(rows, &self.query).len())
    }

    /// Run the pipeline over `rows` without touching the state
    pub fn view<'a, R, I>(&self, rows: I) -> TableView<'a, R>
    where
        R: Tabular<Field = F> + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        let ordered = sort(filter(rows, &self.query), &self.sort);
        let page = paginate(&ordered, &self.pagination);

        TableView {
            rows: page.items.to_vec(),
            total_pages: page.total_pages,
            total_rows: ordered.len(),
            current_page: self.pagination.current_page,
            page_size: self.pagination.page_size,
            range: page.range,
        }
    }

    /// Clamp the page against `rows`, then run the pipeline
    pub fn refresh<'a, R>(&mut self, rows: &[&'a R]) -> TableView<'a, R>
    where
        R: Tabular<Field = F> + 'a,
    {
        let total_pages = self.total_pages(rows.iter().copied());
        self.clamp_to(total_pages);
        self.view(rows.iter().copied())
    }

    /// Sort glyph shown next to a column header
    pub fn sort_indicator(&self, key: F) -> &'static str {
        match self.sort.key {
            Some(current) if current == key => match self.sort.direction {
                SortDirection::Ascending => "↑",
                SortDirection::Descending => "↓",
            },
            _ => "↕️",
        }
    }

    /// Query-string pairs that reproduce this state
    ///
    /// Defaults (empty search, no sort, first page) are left out.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.query.is_empty() {
            pairs.push(("q", self.query.clone()));
        }
        if let Some(key) = self.sort.key {
            pairs.push(("sort", key.name().to_string()));
            pairs.push(("dir", self.sort.direction.as_str().to_string()));
        }
        if self.pagination.current_page > 1 {
            pairs.push(("page", self.pagination.current_page.to_string()));
        }
        pairs
    }
}

/// The rows and paging summary of one rendered table
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<'a, R> {
    pub rows: Vec<&'a R>,
    pub total_pages: usize,
    /// Row count after filtering, across all pages
    pub total_rows: usize,
    pub current_page: usize,
    pub page_size: usize,
    pub range: VisibleRange,
}

impl<'a, R> TableView<'a, R> {
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Paging controls are only shown when there is more than one page
    pub fn is_paged(&self) -> bool {
        self.total_pages > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ListingType, Vehicle, VehicleField};
    use crate::pages::VEHICLE_COLUMNS;

    fn fleet(count: i64) -> Vec<Vehicle> {
        (1..=count)
            .map(|id| Vehicle {
                id,
                make: if id % 2 == 0 { "Kia" } else { "Ford" }.to_string(),
                model: "Model".to_string(),
                trim: "Base".to_string(),
                year: 2000 + id as i32,
                veh_listing_type: ListingType::New,
                body_type: "Van".to_string(),
                ext_color: "Red".to_string(),
                rooftop_id: 1,
            })
            .collect()
    }

    #[test]
    fn test_from_params_drops_unsortable_columns() {
        let params = TableParams {
            sort: Some("ext_color".to_string()),
            dir: Some("desc".to_string()),
            page: Some("abc".to_string()),
            ..Default::default()
        };
        let state = TableState::<VehicleField>::from_params(VEHICLE_COLUMNS, &params, 10);

        assert_eq!(state.sort().key, None);
        assert_eq!(state.current_page(), 1);
        assert!(state.query_pairs().is_empty());
    }

    #[test]
    fn test_refresh_clamps_after_search_shrinks_rows() {
        let rows = fleet(30);
        let params = TableParams {
            q: Some("kia".to_string()),
            sort: Some("year".to_string()),
            page: Some("3".to_string()),
            ..Default::default()
        };
        let mut state = TableState::<VehicleField>::from_params(VEHICLE_COLUMNS, &params, 10);
        let borrowed: Vec<&Vehicle> = rows.iter().collect();
        let view = state.refresh(&borrowed);

        assert_eq!(state.current_page(), 2);
        assert_eq!(view.rows.len(), 5);
        assert_eq!(
            state.query_pairs(),
            vec![
                ("q", "kia".to_string()),
                ("sort", "year".to_string()),
                ("dir", "asc".to_string()),
                ("page", "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_previous_page_stops_at_one() {
        let rows = fleet(3);
        let mut state = TableState::new(2);
        state.apply(VEHICLE_COLUMNS, &rows, TableIntent::PreviousPage);
        assert_eq!(state.current_page(), 1);

        state.apply(VEHICLE_COLUMNS, &rows, TableIntent::SetPage(7));
        assert_eq!(state.current_page(), 2);
        assert_eq!(state.sort_indicator(VehicleField::Year), "↕️");
    }
}

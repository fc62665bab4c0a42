//! Table markup models
//!
//! A rendered table is a snapshot of one [`TableState`] plus the links for
//! every intent the user can issue next. Each link is computed by applying
//! the intent to a copy of the state, so the page reducers stay the single
//! source of truth for sort toggling and page clamping.

use crate::table::{ColumnSpec, FieldKey, TableState, TableView, Tabular};

use super::utils::href;

#[derive(Debug, Clone, Default)]
pub struct HeaderCell {
    pub label: String,
    pub sortable: bool,
    pub indicator: String,
    pub href: String,
}

#[derive(Debug, Clone, Default)]
pub struct ActionLink {
    pub label: String,
    pub href: String,
    pub class: String,
}

impl ActionLink {
    fn new(label: &str, href: String, class: &str) -> Self {
        Self {
            label: label.to_string(),
            href,
            class: class.to_string(),
        }
    }

    /// View / Edit / Delete for a vehicle row
    pub fn vehicle_actions(id: i64) -> Vec<ActionLink> {
        vec![
            Self::new("View", format!("/vehicles/{}", id), "btn-view"),
            Self::new("Edit", format!("/vehicles/{}/edit", id), "btn-edit"),
            Self::new("Delete", format!("/vehicles/{}/delete", id), "btn-delete"),
        ]
    }
}

#[derive(Debug, Clone, Default)]
pub struct RowHtml {
    pub cells: Vec<String>,
    pub actions: Vec<ActionLink>,
}

#[derive(Debug, Clone, Default)]
pub struct PageLink {
    pub label: String,
    pub href: String,
    pub current: bool,
}

#[derive(Debug, Clone, Default)]
pub struct HiddenInput {
    pub name: String,
    pub value: String,
}

/// Everything `partials/table.html` needs
#[derive(Debug, Clone, Default)]
pub struct TableHtml {
    pub search_action: String,
    pub search_placeholder: String,
    pub query: String,
    /// Carried through the search form so a new search keeps sort and scope
    pub hidden: Vec<HiddenInput>,
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<RowHtml>,
    pub has_actions: bool,
    pub is_empty: bool,
    pub empty_message: String,
    pub summary: String,
    pub page_label: String,
    pub is_paged: bool,
    pub has_previous: bool,
    pub previous_href: String,
    pub has_next: bool,
    pub next_href: String,
    pub pages: Vec<PageLink>,
}

/// Where table links point and which extra pairs they carry
#[derive(Debug, Clone)]
pub struct TableLinks<'a> {
    pub base: &'a str,
    /// Pairs outside the table state, such as `rooftop` or `tab`
    pub scope: Vec<(&'static str, String)>,
    pub search_placeholder: &'a str,
    pub empty_message: &'a str,
}

impl TableLinks<'_> {
    fn to<F: FieldKey>(&self, state: &TableState<F>) -> String {
        let mut pairs = self.scope.clone();
        pairs.extend(state.query_pairs());
        href(self.base, &pairs)
    }
}

pub fn build_table<R, A>(
    columns: &[ColumnSpec<R::Field>],
    state: &TableState<R::Field>,
    view: &TableView<'_, R>,
    links: &TableLinks<'_>,
    actions: A,
) -> TableHtml
where
    R: Tabular,
    A: Fn(&R) -> Vec<ActionLink>,
{
    let headers = columns
        .iter()
        .map(|column| {
            let mut next = state.clone();
            let sortable = next.request_sort(columns, column.key);
            HeaderCell {
                label: column.header.to_string(),
                sortable,
                indicator: if sortable {
                    state.sort_indicator(column.key).to_string()
                } else {
                    String::new()
                },
                href: if sortable { links.to(&next) } else { String::new() },
            }
        })
        .collect();

    let rows: Vec<RowHtml> = view
        .rows
        .iter()
        .map(|row| RowHtml {
            cells: columns
                .iter()
                .map(|column| column.display(&row.value(column.key)))
                .collect(),
            actions: actions(*row),
        })
        .collect();

    let mut hidden: Vec<HiddenInput> = links
        .scope
        .iter()
        .map(|(name, value)| HiddenInput {
            name: name.to_string(),
            value: value.clone(),
        })
        .collect();
    hidden.extend(
        state
            .query_pairs()
            .into_iter()
            .filter(|(name, _)| *name == "sort" || *name == "dir")
            .map(|(name, value)| HiddenInput {
                name: name.to_string(),
                value,
            }),
    );

    let mut previous = state.clone();
    previous.previous_page();
    let mut next = state.clone();
    next.next_page(view.total_pages);

    let pages = (1..=view.total_pages)
        .map(|number| {
            let mut target = state.clone();
            target.set_page(number, view.total_pages);
            PageLink {
                label: number.to_string(),
                href: links.to(&target),
                current: number == view.current_page,
            }
        })
        .collect();

    TableHtml {
        search_action: links.base.to_string(),
        search_placeholder: links.search_placeholder.to_string(),
        query: state.query().to_string(),
        hidden,
        headers,
        has_actions: rows.iter().any(|row| !row.actions.is_empty()),
        is_empty: rows.is_empty(),
        rows,
        empty_message: links.empty_message.to_string(),
        summary: view.range.summary(),
        page_label: view.page_label(),
        is_paged: view.is_paged(),
        has_previous: view.has_previous(),
        previous_href: links.to(&previous),
        has_next: view.has_next(),
        next_href: links.to(&next),
        pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ListingType, Vehicle, VehicleField};
    use crate::pages::VEHICLE_COLUMNS;
    use crate::table::TableParams;

    fn vehicles(count: i64) -> Vec<Vehicle> {
        (1..=count)
            .map(|id| Vehicle {
                id,
                make: "Mazda".to_string(),
                model: "CX-5".to_string(),
                trim: "Touring".to_string(),
                year: 2015 + (id % 8) as i32,
                veh_listing_type: ListingType::Used,
                body_type: "SUV".to_string(),
                ext_color: "Grey".to_string(),
                rooftop_id: 1,
            })
            .collect()
    }

    fn links() -> TableLinks<'static> {
        TableLinks {
            base: "/",
            scope: vec![("rooftop", "1".to_string())],
            search_placeholder: "Search vehicles...",
            empty_message: "No vehicles found.",
        }
    }

    #[test]
    fn test_sort_links_toggle_direction() {
        let rows = vehicles(3);
        let params = TableParams {
            sort: Some("year".to_string()),
            dir: Some("asc".to_string()),
            ..Default::default()
        };
        let state = TableState::<VehicleField>::from_params(VEHICLE_COLUMNS, &params, 10);
        let view = state.view(&rows);

        let table = build_table(VEHICLE_COLUMNS, &state, &view, &links(), |v: &Vehicle| {
            ActionLink::vehicle_actions(v.id)
        });

        let year = &table.headers[4];
        assert_eq!(year.indicator, "↑");
        assert_eq!(year.href, "/?rooftop=1&sort=year&dir=desc");
        let make = &table.headers[1];
        assert_eq!(make.indicator, "↕️");
        assert_eq!(make.href, "/?rooftop=1&sort=make&dir=asc");
        assert_eq!(table.rows[0].actions[1].href, "/vehicles/1/edit");
    }

    #[test]
    fn test_page_links_and_search_form() {
        let rows = vehicles(12);
        let params = TableParams {
            q: Some("mazda".to_string()),
            page: Some("2".to_string()),
            ..Default::default()
        };
        let state = TableState::<VehicleField>::from_params(VEHICLE_COLUMNS, &params, 10);
        let view = state.view(&rows);

        let table = build_table(VEHICLE_COLUMNS, &state, &view, &links(), |_: &Vehicle| {
            Vec::new()
        });

        assert!(table.is_paged);
        assert!(!table.has_actions);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.summary, "Showing 11 to 12 of 12 results");
        assert_eq!(table.previous_href, "/?rooftop=1&q=mazda");
        assert_eq!(table.pages.len(), 2);
        assert!(table.pages[1].current);
        assert_eq!(table.hidden.len(), 1);
        assert_eq!(table.hidden[0].name, "rooftop");
    }
}

//! Vehicle listing page
//!
//! The full inventory with a rooftop sidebar. Picking a rooftop narrows the
//! table before search, sort and paging are applied.

use serde::Deserialize;

use super::columns::VEHICLE_COLUMNS;
use crate::models::{Rooftop, Vehicle, VehicleField};
use crate::table::{TableIntent, TableParams, TableState, TableView};

/// Query string of the listing page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub dir: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub rooftop: Option<String>,
}

impl ListingParams {
    pub fn table(&self) -> TableParams {
        TableParams {
            q: self.q.clone(),
            sort: self.sort.clone(),
            dir: self.dir.clone(),
            page: self.page.clone(),
        }
    }

    /// Selected rooftop; anything that is not an id means "All"
    pub fn rooftop_id(&self) -> Option<i64> {
        self.rooftop
            .as_deref()
            .and_then(|id| id.trim().parse::<i64>().ok())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingIntent {
    Table(TableIntent<VehicleField>),
    SelectRooftop(Option<i64>),
}

/// One sidebar entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RooftopFilter {
    pub id: Option<i64>,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct ListingPage {
    vehicles: Vec<Vehicle>,
    rooftops: Vec<Rooftop>,
    selected_rooftop: Option<i64>,
    table: TableState<VehicleField>,
}

fn in_scope(selected: Option<i64>, vehicle: &Vehicle) -> bool {
    selected.map_or(true, |id| vehicle.rooftop_id == id)
}

impl ListingPage {
    pub fn new(vehicles: Vec<Vehicle>, rooftops: Vec<Rooftop>, page_size: usize) -> Self {
        Self {
            vehicles,
            rooftops,
            selected_rooftop: None,
            table: TableState::new(page_size),
        }
    }

    /// Restore the page from its query string, clamping the page number
    pub fn from_params(
        vehicles: Vec<Vehicle>,
        rooftops: Vec<Rooftop>,
        params: &ListingParams,
        page_size: usize,
    ) -> Self {
        let mut page = Self::new(vehicles, rooftops, page_size);
        page.selected_rooftop = params.rooftop_id();
        page.table = TableState::from_params(VEHICLE_COLUMNS, &params.table(), page_size);
        page.clamp();
        page
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn rooftops(&self) -> &[Rooftop] {
        &self.rooftops
    }

    pub fn selected_rooftop(&self) -> Option<i64> {
        self.selected_rooftop
    }

    pub fn table(&self) -> &TableState<VehicleField> {
        &self.table
    }

    /// Vehicles of the selected rooftop, before search
    pub fn scoped(&self) -> Vec<&Vehicle> {
        self.vehicles
            .iter()
            .filter(|vehicle| in_scope(self.selected_rooftop, vehicle))
            .collect()
    }

    pub fn apply(&mut self, intent: ListingIntent) {
        match intent {
            ListingIntent::SelectRooftop(id) => {
                self.selected_rooftop = id;
                self.table.reset_page();
            }
            ListingIntent::Table(intent) => {
                let selected = self.selected_rooftop;
                let rows = self
                    .vehicles
                    .iter()
                    .filter(move |vehicle| in_scope(selected, vehicle));
                self.table.apply(VEHICLE_COLUMNS, rows, intent);
            }
        }
    }

    fn clamp(&mut self) {
        let selected = self.selected_rooftop;
        let rows = self
            .vehicles
            .iter()
            .filter(move |vehicle| in_scope(selected, vehicle));
        let total_pages = self.table.total_pages(rows);
        self.table.clamp_to(total_pages);
    }

    pub fn view(&self) -> TableView<'_, Vehicle> {
        self.table.view(self.scoped())
    }

    /// "All (N)" followed by one "{name} ({count})" entry per rooftop
    pub fn rooftop_filters(&self) -> Vec<RooftopFilter> {
        let mut filters = vec![RooftopFilter {
            id: None,
            label: format!("All ({})", self.vehicles.len()),
            selected: self.selected_rooftop.is_none(),
        }];

        filters.extend(self.rooftops.iter().map(|rooftop| {
            let count = self
                .vehicles
                .iter()
                .filter(|vehicle| vehicle.rooftop_id == rooftop.id)
                .count();
            RooftopFilter {
                id: Some(rooftop.id),
                label: format!("{} ({})", rooftop.name, count),
                selected: self.selected_rooftop == Some(rooftop.id),
            }
        }));

        filters
    }

    /// Query-string pairs that are not part of the table state
    pub fn scope_pairs(&self) -> Vec<(&'static str, String)> {
        self.selected_rooftop
            .map(|id| vec![("rooftop", id.to_string())])
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ListingType;

    fn vehicle(id: i64, make: &str, rooftop_id: i64) -> Vehicle {
        Vehicle {
            id,
            make: make.to_string(),
            model: "Model".to_string(),
            trim: "Base".to_string(),
            year: 2020,
            veh_listing_type: ListingType::New,
            body_type: "Sedan".to_string(),
            ext_color: "Black".to_string(),
            rooftop_id,
        }
    }

    fn rooftop(id: i64, name: &str) -> Rooftop {
        Rooftop {
            id,
            name: name.to_string(),
            street: String::new(),
            city: String::new(),
            state: String::new(),
            phone: String::new(),
            email: String::new(),
        }
    }

    fn page() -> ListingPage {
        let vehicles = (1..=15)
            .map(|id| vehicle(id, if id % 2 == 0 { "Honda" } else { "Ford" }, 1 + id % 3))
            .collect();
        ListingPage::new(vehicles, vec![rooftop(1, "Downtown"), rooftop(2, "Airport")], 10)
    }

    #[test]
    fn test_sidebar_counts() {
        let page = page();
        let labels: Vec<String> = page
            .rooftop_filters()
            .into_iter()
            .map(|filter| filter.label)
            .collect();
        assert_eq!(labels, vec!["All (15)", "Downtown (5)", "Airport (5)"]);
    }

    #[test]
    fn test_selecting_rooftop_resets_page_and_narrows_rows() {
        let mut page = page();
        page.apply(ListingIntent::Table(TableIntent::NextPage));
        assert_eq!(page.table().current_page(), 2);

        page.apply(ListingIntent::SelectRooftop(Some(2)));
        assert_eq!(page.table().current_page(), 1);

        let view = page.view();
        assert_eq!(view.total_rows, 5);
        assert!(view.rows.iter().all(|vehicle| vehicle.rooftop_id == 2));
        assert_eq!(page.scope_pairs(), vec![("rooftop", "2".to_string())]);
    }

    #[test]
    fn test_params_restore_and_clamp() {
        let params = ListingParams {
            q: Some("honda".to_string()),
            sort: Some("id".to_string()),
            dir: Some("desc".to_string()),
            page: Some("9".to_string()),
            rooftop: Some("all".to_string()),
        };
        let page = ListingPage::from_params(page().vehicles.clone(), Vec::new(), &params, 5);

        assert_eq!(page.selected_rooftop(), None);
        // 7 Hondas over pages of 5
        assert_eq!(page.table().current_page(), 2);
        let view = page.view();
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].id, 4);
    }
}

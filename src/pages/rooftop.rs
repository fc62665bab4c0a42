//! Rooftop detail page: location card plus the vehicles stocked there

use super::columns::VEHICLE_COLUMNS;
use crate::models::{Rooftop, Vehicle, VehicleField};
use crate::table::{TableIntent, TableParams, TableState, TableView};

#[derive(Debug, Clone)]
pub struct RooftopPage {
    rooftop: Rooftop,
    vehicles: Vec<Vehicle>,
    table: TableState<VehicleField>,
}

impl RooftopPage {
    /// Keep only the vehicles stocked at `rooftop`
    pub fn new(rooftop: Rooftop, vehicles: Vec<Vehicle>, page_size: usize) -> Self {
        let vehicles = vehicles
            .into_iter()
            .filter(|vehicle| vehicle.rooftop_id == rooftop.id)
            .collect();
        Self {
            rooftop,
            vehicles,
            table: TableState::new(page_size),
        }
    }

    pub fn from_params(
        rooftop: Rooftop,
        vehicles: Vec<Vehicle>,
        params: &TableParams,
        page_size: usize,
    ) -> Self {
        let mut page = Self::new(rooftop, vehicles, page_size);
        page.table = TableState::from_params(VEHICLE_COLUMNS, params, page_size);
        let total_pages = page.table.total_pages(&page.vehicles);
        page.table.clamp_to(total_pages);
        page
    }

    pub fn rooftop(&self) -> &Rooftop {
        &self.rooftop
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    pub fn table(&self) -> &TableState<VehicleField> {
        &self.table
    }

    pub fn apply(&mut self, intent: TableIntent<VehicleField>) {
        self.table.apply(VEHICLE_COLUMNS, &self.vehicles, intent);
    }

    pub fn view(&self) -> TableView<'_, Vehicle> {
        self.table.view(&self.vehicles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ListingType;

    fn vehicle(id: i64, year: i32, rooftop_id: i64) -> Vehicle {
        Vehicle {
            id,
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            trim: "LE".to_string(),
            year,
            veh_listing_type: ListingType::Used,
            body_type: "Sedan".to_string(),
            ext_color: "Silver".to_string(),
            rooftop_id,
        }
    }

    fn rooftop() -> Rooftop {
        Rooftop {
            id: 3,
            name: "Northside".to_string(),
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            phone: "555-0100".to_string(),
            email: "north@example.com".to_string(),
        }
    }

    #[test]
    fn test_only_rooftop_vehicles_are_kept() {
        let page = RooftopPage::new(
            rooftop(),
            vec![vehicle(1, 2020, 3), vehicle(2, 2021, 4), vehicle(3, 2022, 3)],
            10,
        );
        assert_eq!(page.vehicle_count(), 2);
        assert!(page.vehicles().iter().all(|vehicle| vehicle.rooftop_id == 3));
    }

    #[test]
    fn test_sort_toggles_through_intents() {
        let mut page = RooftopPage::new(
            rooftop(),
            vec![vehicle(1, 2019, 3), vehicle(2, 2023, 3), vehicle(3, 2021, 3)],
            10,
        );

        page.apply(TableIntent::RequestSort(VehicleField::Year));
        page.apply(TableIntent::RequestSort(VehicleField::Year));

        let years: Vec<i32> = page.view().rows.iter().map(|vehicle| vehicle.year).collect();
        assert_eq!(years, vec![2023, 2021, 2019]);
    }
}

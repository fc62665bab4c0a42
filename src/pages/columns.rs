use crate::models::{ImageField, SpinField, VehicleField, VideoField};
use crate::table::{CellValue, ColumnSpec};

/// Shown for link cells the API left empty
fn or_dash(value: &CellValue) -> String {
    if value.to_string().trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

pub const VEHICLE_COLUMNS: &[ColumnSpec<VehicleField>] = &[
    ColumnSpec::sortable(VehicleField::Id, "ID"),
    ColumnSpec::sortable(VehicleField::Make, "Make"),
    ColumnSpec::sortable(VehicleField::Model, "Model"),
    ColumnSpec::sortable(VehicleField::Trim, "Trim"),
    ColumnSpec::sortable(VehicleField::Year, "Year"),
    ColumnSpec::sortable(VehicleField::ListingType, "Type"),
];

pub const IMAGE_COLUMNS: &[ColumnSpec<ImageField>] = &[
    ColumnSpec::sortable(ImageField::Id, "ID"),
    ColumnSpec::sortable(ImageField::GroupId, "Group"),
    ColumnSpec::sortable(ImageField::Width, "Width"),
    ColumnSpec::sortable(ImageField::Height, "Height"),
    ColumnSpec::plain(ImageField::Url, "Image URL").with_render(or_dash),
];

pub const VIDEO_COLUMNS: &[ColumnSpec<VideoField>] = &[
    ColumnSpec::sortable(VideoField::Id, "ID"),
    ColumnSpec::sortable(VideoField::Title, "Title"),
    ColumnSpec::sortable(VideoField::ClipDuration, "Duration(Sec)"),
    ColumnSpec::plain(VideoField::ClipUrl, "Video URL").with_render(or_dash),
    ColumnSpec::sortable(VideoField::ShortDesc, "Description"),
];

pub const SPIN_COLUMNS: &[ColumnSpec<SpinField>] = &[
    ColumnSpec::sortable(SpinField::Id, "ID"),
    ColumnSpec::sortable(SpinField::Type, "Type"),
    ColumnSpec::sortable(SpinField::ExteriorView, "Exterior View"),
    ColumnSpec::sortable(SpinField::InteriorView, "Interior View"),
    ColumnSpec::plain(SpinField::PlayerUrl, "Player URL").with_render(or_dash),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::is_sortable;

    #[test]
    fn test_every_vehicle_column_is_sortable() {
        assert!(VEHICLE_COLUMNS.iter().all(|column| column.sortable));
        assert_eq!(VEHICLE_COLUMNS.len(), 6);
    }

    #[test]
    fn test_link_columns_are_not_sortable() {
        assert!(!is_sortable(IMAGE_COLUMNS, ImageField::Url));
        assert!(!is_sortable(VIDEO_COLUMNS, VideoField::ClipUrl));
        assert!(!is_sortable(SPIN_COLUMNS, SpinField::PlayerUrl));
        assert!(is_sortable(VIDEO_COLUMNS, VideoField::ShortDesc));
    }

    #[test]
    fn test_empty_link_renders_dash() {
        let column = &IMAGE_COLUMNS[4];
        assert_eq!(column.display(&CellValue::Empty), "-");
        assert_eq!(
            column.display(&CellValue::from("https://cdn.example.com/1.jpg")),
            "https://cdn.example.com/1.jpg"
        );
    }
}

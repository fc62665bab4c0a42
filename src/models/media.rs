//! Vehicle media records
//!
//! The media endpoints are loosely typed: numeric fields sometimes arrive as
//! strings and optional fields are often `null`. Those fields are kept as
//! [`CellValue`]s so a row never fails to decode over a cosmetic column.

use serde::{Deserialize, Serialize};

use crate::table::{CellValue, FieldKey, Tabular};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleImage {
    pub id: i64,
    #[serde(default)]
    pub image_group_id: CellValue,
    #[serde(default)]
    pub image_width: CellValue,
    #[serde(default)]
    pub image_height: CellValue,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageField {
    Id,
    GroupId,
    Width,
    Height,
    Url,
}

impl FieldKey for ImageField {
    const ALL: &'static [Self] = &[
        ImageField::Id,
        ImageField::GroupId,
        ImageField::Width,
        ImageField::Height,
        ImageField::Url,
    ];

    fn name(self) -> &'static str {
        match self {
            ImageField::Id => "id",
            ImageField::GroupId => "imageGroupId",
            ImageField::Width => "imageWidth",
            ImageField::Height => "imageHeight",
            ImageField::Url => "imageUrl",
        }
    }
}

impl Tabular for VehicleImage {
    type Field = ImageField;

    fn value(&self, field: ImageField) -> CellValue {
        match field {
            ImageField::Id => self.id.into(),
            ImageField::GroupId => self.image_group_id.clone(),
            ImageField::Width => self.image_width.clone(),
            ImageField::Height => self.image_height.clone(),
            ImageField::Url => self.image_url.clone().into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleVideo {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    /// Seconds
    #[serde(default)]
    pub clip_duration: CellValue,
    #[serde(default)]
    pub clip_url: Option<String>,
    #[serde(default)]
    pub short_desc: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoField {
    Id,
    Title,
    ClipDuration,
    ClipUrl,
    ShortDesc,
}

impl FieldKey for VideoField {
    const ALL: &'static [Self] = &[
        VideoField::Id,
        VideoField::Title,
        VideoField::ClipDuration,
        VideoField::ClipUrl,
        VideoField::ShortDesc,
    ];

    fn name(self) -> &'static str {
        match self {
            VideoField::Id => "id",
            VideoField::Title => "title",
            VideoField::ClipDuration => "clipDuration",
            VideoField::ClipUrl => "clipUrl",
            VideoField::ShortDesc => "shortDesc",
        }
    }
}

impl Tabular for VehicleVideo {
    type Field = VideoField;

    fn value(&self, field: VideoField) -> CellValue {
        match field {
            VideoField::Id => self.id.into(),
            VideoField::Title => self.title.clone().into(),
            VideoField::ClipDuration => self.clip_duration.clone(),
            VideoField::ClipUrl => self.clip_url.clone().into(),
            VideoField::ShortDesc => self.short_desc.clone().into(),
        }
    }
}

/// A 360° spin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSpin {
    pub id: i64,
    #[serde(default, rename = "type")]
    pub spin_type: Option<String>,
    #[serde(default)]
    pub exterior_view: CellValue,
    #[serde(default)]
    pub interior_view: CellValue,
    #[serde(default)]
    pub player_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinField {
    Id,
    Type,
    ExteriorView,
    InteriorView,
    PlayerUrl,
}

impl FieldKey for SpinField {
    const ALL: &'static [Self] = &[
        SpinField::Id,
        SpinField::Type,
        SpinField::ExteriorView,
        SpinField::InteriorView,
        SpinField::PlayerUrl,
    ];

    fn name(self) -> &'static str {
        match self {
            SpinField::Id => "id",
            SpinField::Type => "type",
            SpinField::ExteriorView => "exteriorView",
            SpinField::InteriorView => "interiorView",
            SpinField::PlayerUrl => "playerUrl",
        }
    }
}

impl Tabular for VehicleSpin {
    type Field = SpinField;

    fn value(&self, field: SpinField) -> CellValue {
        match field {
            SpinField::Id => self.id.into(),
            SpinField::Type => self.spin_type.clone().into(),
            SpinField::ExteriorView => self.exterior_view.clone(),
            SpinField::InteriorView => self.interior_view.clone(),
            SpinField::PlayerUrl => self.player_url.clone().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_tolerates_loose_fields() {
        let image: VehicleImage = serde_json::from_str(
            r#"{"id":1,"imageGroupId":"exterior","imageWidth":1024,"imageHeight":null}"#,
        )
        .unwrap();

        assert_eq!(image.image_group_id, CellValue::from("exterior"));
        assert_eq!(image.image_width, CellValue::Int(1024));
        assert!(image.image_height.is_empty());
        assert_eq!(image.image_url, None);
    }

    #[test]
    fn test_spin_type_field_is_renamed() {
        let spin: VehicleSpin = serde_json::from_str(
            r#"{"id":3,"type":"walkaround","exteriorView":true,"playerUrl":"https://spins/3"}"#,
        )
        .unwrap();

        assert_eq!(spin.value(SpinField::Type), CellValue::from("walkaround"));
        assert_eq!(spin.value(SpinField::ExteriorView), CellValue::Bool(true));
        assert_eq!(spin.value(SpinField::InteriorView), CellValue::Empty);
    }

    #[test]
    fn test_video_duration_accepts_fractional_seconds() {
        let video: VehicleVideo =
            serde_json::from_str(r#"{"id":9,"title":"Walkaround","clipDuration":42.5}"#).unwrap();
        assert_eq!(video.value(VideoField::ClipDuration).to_string(), "42.5");
    }
}

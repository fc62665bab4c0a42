//! Media tabs of the vehicle detail page

use tracing::warn;

use crate::errors::ClientResult;
use crate::table::{ColumnSpec, TableParams, TableState, TableView, Tabular};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaTab {
    #[default]
    Images,
    Videos,
    Spins,
}

impl MediaTab {
    pub const ALL: [MediaTab; 3] = [MediaTab::Images, MediaTab::Videos, MediaTab::Spins];

    pub fn name(self) -> &'static str {
        match self {
            MediaTab::Images => "images",
            MediaTab::Videos => "videos",
            MediaTab::Spins => "spins",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MediaTab::Images => "Images",
            MediaTab::Videos => "Videos",
            MediaTab::Spins => "360 Spins",
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            MediaTab::Images => "No images available for this vehicle.",
            MediaTab::Videos => "No videos available for this vehicle.",
            MediaTab::Spins => "No 360° spins available for this vehicle.",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.name() == name)
    }
}

/// Tab strip entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabLink {
    pub name: &'static str,
    pub label: &'static str,
    pub active: bool,
}

impl TabLink {
    pub fn strip(active: MediaTab) -> Vec<TabLink> {
        MediaTab::ALL
            .into_iter()
            .map(|tab| TabLink {
                name: tab.name(),
                label: tab.label(),
                active: tab == active,
            })
            .collect()
    }
}

/// Shown in place of a tab whose collection could not be fetched
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load data";

/// Outcome of loading one media collection
///
/// A failed load only affects its own tab; the rest of the page renders.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaState<R> {
    Loaded(Vec<R>),
    Failed,
}

impl<R> MediaState<R> {
    pub fn from_result(result: ClientResult<Vec<R>>) -> Self {
        match result {
            Ok(rows) => MediaState::Loaded(rows),
            Err(e) => {
                warn!("Failed to load vehicle media: {}", e);
                MediaState::Failed
            }
        }
    }

    pub fn rows(&self) -> &[R] {
        match self {
            MediaState::Loaded(rows) => rows,
            MediaState::Failed => &[],
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, MediaState::Failed)
    }
}

/// Restore a media table from its query string and run it over `rows`
pub fn media_table<'a, R: Tabular>(
    columns: &[ColumnSpec<R::Field>],
    rows: &'a [R],
    params: &TableParams,
    page_size: usize,
) -> (TableState<R::Field>, TableView<'a, R>) {
    let mut state = TableState::from_params(columns, params, page_size);
    let borrowed: Vec<&R> = rows.iter().collect();
    let view = state.refresh(&borrowed);
    (state, view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{Action, ClientError};

    #[test]
    fn test_tab_names_round_trip() {
        for tab in MediaTab::ALL {
            assert_eq!(MediaTab::from_name(tab.name()), Some(tab));
        }
        assert_eq!(MediaTab::from_name("brochures"), None);
        assert_eq!(MediaTab::Spins.label(), "360 Spins");
    }

    #[test]
    fn test_strip_marks_active_tab() {
        let strip = TabLink::strip(MediaTab::Videos);
        let active: Vec<&str> = strip
            .iter()
            .filter(|link| link.active)
            .map(|link| link.name)
            .collect();
        assert_eq!(active, vec!["videos"]);
    }

    #[test]
    fn test_media_table_clamps_page() {
        use crate::models::{VehicleVideo, VideoField};
        use crate::pages::VIDEO_COLUMNS;
        use crate::table::CellValue;

        let videos: Vec<VehicleVideo> = (1..=7)
            .map(|id| VehicleVideo {
                id,
                title: Some(format!("Walkaround {}", id)),
                clip_duration: CellValue::Int(30 + id),
                clip_url: None,
                short_desc: None,
            })
            .collect();
        let params = TableParams {
            sort: Some("clipDuration".to_string()),
            dir: Some("desc".to_string()),
            page: Some("4".to_string()),
            ..Default::default()
        };

        let (state, view) = media_table(VIDEO_COLUMNS, &videos, &params, 5);
        assert_eq!(state.current_page(), 2);
        assert_eq!(state.sort().key, Some(VideoField::ClipDuration));
        let ids: Vec<i64> = view.rows.iter().map(|video| video.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_failed_load_has_no_rows() {
        let state: MediaState<i64> = MediaState::from_result(Err(ClientError::transport(
            Action::Fetch,
            "vehicle images",
            "timeout",
        )));
        assert!(state.is_failed());
        assert!(state.rows().is_empty());
    }
}

//! Plain-data description of the map widget contents.

use serde::{Deserialize, Serialize};

use crate::geo::UserCoordinate;

pub const AREA_ZOOM: u8 = 12;
pub const USER_ZOOM: u8 = 14;
/// CartoDB dark_matter raster tiles, in Leaflet's URL template syntax.
pub const DARK_MATTER_TILE_URL: &str = "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png";
pub const DARK_MATTER_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors &copy; CARTO";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: UserCoordinate,
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerKind {
    Restaurant,
    CurrentLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub kind: MarkerKind,
    pub position: UserCoordinate,
    pub tooltip: String,
    /// Popup lines, first one rendered bold.
    pub popup_lines: Vec<String>,
}

impl MapView {
    pub fn restaurant_markers(&self) -> impl Iterator<Item = &MapMarker> {
        self.markers.iter().filter(|m| m.kind == MarkerKind::Restaurant)
    }

    pub fn user_marker(&self) -> Option<&MapMarker> {
        self.markers.iter().find(|m| m.kind == MarkerKind::CurrentLocation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_template_is_dark_matter() {
        assert!(DARK_MATTER_TILE_URL.contains("/dark_all/"));
        for placeholder in ["{s}", "{z}", "{x}", "{y}"] {
            assert!(DARK_MATTER_TILE_URL.contains(placeholder), "{placeholder}");
        }
    }

    #[test]
    fn markers_split_by_kind() {
        let position = UserCoordinate { lat: 35.0, lng: 139.0 };
        let marker = |kind, tooltip: &str| MapMarker { kind, position, tooltip: tooltip.to_string(), popup_lines: vec![] };
        let view = MapView {
            center: position,
            zoom: AREA_ZOOM,
            markers: vec![marker(MarkerKind::Restaurant, "a"), marker(MarkerKind::CurrentLocation, "現在地"), marker(MarkerKind::Restaurant, "b")],
        };
        assert_eq!(view.restaurant_markers().count(), 2);
        assert_eq!(view.user_marker().map(|m| m.tooltip.as_str()), Some("現在地"));
    }
}

use common::{
    filter_result::RestaurantListing,
    geo::UserCoordinate,
    map_view::{AREA_ZOOM, MapMarker, MapView, MarkerKind, USER_ZOOM},
    proximity::ProximityMode,
    restaurant::Area,
};

pub fn build_map_view(
    area: Area,
    listings: &[RestaurantListing],
    user_coordinate: Option<UserCoordinate>,
    proximity_mode: ProximityMode,
) -> MapView {
    let user_coordinate = user_coordinate.filter(|_| proximity_mode.uses_coordinate());
    let (center, zoom) = match user_coordinate {
        Some(user) => (user, USER_ZOOM),
        None => (area.center(), AREA_ZOOM),
    };

    let mut markers = Vec::with_capacity(listings.len() + 1);
    if let Some(user) = user_coordinate {
        markers.push(MapMarker {
            kind: MarkerKind::CurrentLocation,
            position: user,
            tooltip: "現在地".to_string(),
            popup_lines: vec!["📍 現在地".to_string()],
        });
    }
    for listing in listings {
        let r = &listing.record;
        let mut popup_lines = vec![
            r.name.clone(),
            format!("{} / {}", r.country, r.region),
            format!("🚃 {} 徒歩{}分", r.nearest_station, r.walk_minutes),
        ];
        if let Some(label) = listing.distance_label() {
            popup_lines.push(format!("📍 {label}"));
        }
        markers.push(MapMarker {
            kind: MarkerKind::Restaurant,
            position: r.coordinate(),
            tooltip: r.name.clone(),
            popup_lines,
        });
    }

    MapView { center, zoom, markers }
}

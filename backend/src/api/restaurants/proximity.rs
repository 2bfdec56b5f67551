use common::{
    filter_result::RestaurantListing,
    geo::{UserCoordinate, distance_meters},
    proximity::ProximityMode,
    restaurant::RestaurantRecord,
};

/// Attaches the distance from the user to each record. In `Rank` mode the listings are
/// stably sorted nearest first; otherwise input order is kept.
pub fn annotate_distances(
    records: Vec<RestaurantRecord>,
    user_coordinate: Option<UserCoordinate>,
    proximity_mode: ProximityMode,
) -> Vec<RestaurantListing> {
    let user_coordinate = user_coordinate.filter(|_| proximity_mode.uses_coordinate());
    let mut listings = records
        .into_iter()
        .map(|record| {
            let distance_meters = user_coordinate.map(|user| distance_meters(&user, &record.coordinate()));
            RestaurantListing { record, distance_meters }
        })
        .collect::<Vec<_>>();

    if proximity_mode == ProximityMode::Rank && user_coordinate.is_some() {
        listings.sort_by(|a, b| {
            let a = a.distance_meters.unwrap_or(f64::MAX);
            let b = b.distance_meters.unwrap_or(f64::MAX);
            a.total_cmp(&b)
        });
    }
    listings
}

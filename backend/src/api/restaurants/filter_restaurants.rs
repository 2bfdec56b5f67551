//! Filter endpoint: area partition, facets, proximity and map data in one response.

use common::{
    filter_query::FilterSelection,
    filter_result::FilteredRestaurants,
    geo::UserCoordinate,
    proximity::ProximityMode,
    restaurant::{Area, RestaurantRecord},
};
use tracing::debug;

use crate::{
    api::restaurants::{annotate_distances, apply_filters, build_map_view, restaurants_in_area},
    data_utils::restaurant_dataset::get_directory,
};

pub async fn filter_restaurants(
    area: Area,
    selection: FilterSelection,
    user_coordinate: Option<UserCoordinate>,
) -> anyhow::Result<FilteredRestaurants> {
    let directory = get_directory()?;
    let result = filter_restaurants_in(
        &directory.records,
        directory.config.proximity_mode,
        area,
        selection,
        user_coordinate,
    );
    debug!(
        "Filtered {} of {} restaurants in {}",
        result.results.len(),
        result.area_total,
        area
    );
    Ok(result)
}

pub fn filter_restaurants_in(
    records: &[RestaurantRecord],
    proximity_mode: ProximityMode,
    area: Area,
    selection: FilterSelection,
    user_coordinate: Option<UserCoordinate>,
) -> FilteredRestaurants {
    let area_records = restaurants_in_area(records, area);
    let area_total = area_records.len() as u64;
    let filtered = apply_filters(&area_records, &selection);
    let results = annotate_distances(filtered, user_coordinate, proximity_mode);
    let map_view = build_map_view(area, &results, user_coordinate, proximity_mode);

    FilteredRestaurants {
        area,
        selection,
        proximity_mode,
        area_total,
        results,
        map_view,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::restaurants::test_fixtures::sample_records;
    use common::filter_query::FacetField;

    #[test]
    fn no_facets_returns_area_in_order() {
        let result = filter_restaurants_in(&sample_records(), ProximityMode::Annotate, Area::Kansai, FilterSelection::default(), None);
        assert_eq!(result.area_total, 2);
        assert_eq!(result.results.len(), 2);
        assert_eq!(result.results[0].record.name, "Trattoria Sole");
        assert_eq!(result.count_message(), "🍽 2 件のレストランが見つかりました");
        assert_eq!(result.map_view.restaurant_markers().count(), 2);
        assert_eq!(result.empty_state_message(), None);
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let mut selection = FilterSelection::default();
        selection.toggle(FacetField::Country, "韓国");
        let result = filter_restaurants_in(&sample_records(), ProximityMode::Annotate, Area::Kanto, selection, None);
        assert_eq!(result.area_total, 5);
        assert!(result.results.is_empty());
        assert!(result.map_view.markers.is_empty());
        assert_eq!(result.count_message(), "🍽 0 件のレストランが見つかりました");
        assert_eq!(
            result.empty_state_message(),
            Some(("😔 条件に合うレストランが見つかりませんでした。", "フィルターを変えてお試しください。"))
        );
    }

    #[test]
    fn user_coordinate_annotates_every_result() {
        let user = UserCoordinate::new(35.66, 139.70);
        let result = filter_restaurants_in(&sample_records(), ProximityMode::Annotate, Area::Kanto, FilterSelection::default(), user);
        assert!(result.results.iter().all(|l| l.distance_meters.is_some()));
        assert_eq!(result.map_view.markers.len(), 6);
    }
}

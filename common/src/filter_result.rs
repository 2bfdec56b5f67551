use serde::{Deserialize, Serialize};

use crate::{
    filter_query::{FacetField, FilterSelection},
    geo::distance_label,
    map_view::MapView,
    proximity::ProximityMode,
    restaurant::{Area, RestaurantRecord},
};

pub const EMPTY_RESULT_MESSAGE: &str = "😔 条件に合うレストランが見つかりませんでした。";
pub const EMPTY_RESULT_HINT: &str = "フィルターを変えてお試しください。";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteredRestaurants {
    pub area: Area,
    pub selection: FilterSelection,
    pub proximity_mode: ProximityMode,
    /// Number of records in the area before facets were applied.
    pub area_total: u64,
    pub results: Vec<RestaurantListing>,
    pub map_view: MapView,
}

impl FilteredRestaurants {
    pub fn count_message(&self) -> String {
        format!("🍽 {} 件のレストランが見つかりました", self.results.len())
    }

    /// Message and hint shown instead of the card columns. `None` while there is anything to show.
    pub fn empty_state_message(&self) -> Option<(&'static str, &'static str)> {
        self.results.is_empty().then_some((EMPTY_RESULT_MESSAGE, EMPTY_RESULT_HINT))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantListing {
    pub record: RestaurantRecord,
    pub distance_meters: Option<f64>,
}

impl RestaurantListing {
    pub fn distance_label(&self) -> Option<String> {
        self.distance_meters.map(distance_label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetOptions {
    pub area: Area,
    pub facet_field: FacetField,
    pub options: Vec<FacetOptionItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetOptionItem {
    pub value: String,
    /// Records in the option pool carrying this value. Zero for a selected value missing from the pool.
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetOverview {
    pub total_restaurants: u64,
    pub cuisine_count: u64,
}

/// Splits items into two columns by index parity: even indices left, odd right.
pub fn split_columns<T: Clone>(items: &[T]) -> (Vec<T>, Vec<T>) {
    let left = items.iter().step_by(2).cloned().collect();
    let right = items.iter().skip(1).step_by(2).cloned().collect();
    (left, right)
}

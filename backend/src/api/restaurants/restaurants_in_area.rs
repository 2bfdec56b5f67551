use common::restaurant::{Area, RestaurantRecord};

pub fn restaurants_in_area(records: &[RestaurantRecord], area: Area) -> Vec<RestaurantRecord> {
    records.iter().filter(|r| r.area == area).cloned().collect()
}

use std::collections::BTreeSet;

use common::{filter_result::DatasetOverview, restaurant::RestaurantRecord};

use crate::data_utils::restaurant_dataset::get_directory;

pub async fn dataset_overview() -> anyhow::Result<DatasetOverview> {
    let directory = get_directory()?;
    Ok(overview_of(&directory.records))
}

/// Totals across both areas; cuisines are distinct countries.
pub fn overview_of(records: &[RestaurantRecord]) -> DatasetOverview {
    let countries = records.iter().map(|r| r.country.as_str()).collect::<BTreeSet<_>>();
    DatasetOverview {
        total_restaurants: records.len() as u64,
        cuisine_count: countries.len() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::restaurants::test_fixtures::{record, sample_records};
    use common::restaurant::Area;

    #[test]
    fn counts_distinct_countries_across_areas() {
        let mut records = sample_records();
        records.push(record("Second Pho", Area::Kansai, "東南アジア", "ベトナム", &[]));
        let overview = overview_of(&records);
        assert_eq!(overview.total_restaurants, 8);
        assert_eq!(overview.cuisine_count, 7);
    }
}

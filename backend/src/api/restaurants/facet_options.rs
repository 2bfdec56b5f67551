//! Facet option lists shown in the sidebar.

use std::collections::BTreeMap;

use common::{
    filter_query::{FacetField, FilterSelection},
    filter_result::{FacetOptionItem, FacetOptions},
    restaurant::{Area, RestaurantRecord},
};

use crate::{api::restaurants::restaurants_in_area, data_utils::restaurant_dataset::get_directory};

pub async fn restaurant_facet_options(area: Area, selection: FilterSelection, facet_field: FacetField) -> anyhow::Result<FacetOptions> {
    let directory = get_directory()?;
    let area_records = restaurants_in_area(&directory.records, area);
    Ok(FacetOptions {
        area,
        facet_field,
        options: facet_options(&area_records, &selection, facet_field),
    })
}

/// Distinct values for `facet_field` over the area's records, sorted, with record counts.
///
/// Country options only come from records in the selected regions. Values the user already
/// selected but which are missing from the pool are appended with a zero count so they stay
/// visible and can be cleared.
pub fn facet_options(area_records: &[RestaurantRecord], selection: &FilterSelection, facet_field: FacetField) -> Vec<FacetOptionItem> {
    let mut counts = BTreeMap::<&str, u64>::new();
    let pool = area_records.iter().filter(|r| {
        facet_field != FacetField::Country || selection.regions.is_empty() || selection.regions.contains(&r.region)
    });
    for record in pool {
        match facet_field {
            FacetField::Region => *counts.entry(record.region.as_str()).or_default() += 1,
            FacetField::Country => *counts.entry(record.country.as_str()).or_default() += 1,
            FacetField::Tag => {
                let mut seen = Vec::new();
                for tag in &record.tags {
                    if !seen.contains(&tag) {
                        seen.push(tag);
                        *counts.entry(tag.as_str()).or_default() += 1;
                    }
                }
            }
        }
    }

    let mut options = counts
        .iter()
        .map(|(value, count)| FacetOptionItem { value: value.to_string(), count: *count })
        .collect::<Vec<_>>();
    for selected in selection.values(facet_field) {
        if !counts.contains_key(selected.as_str()) {
            options.push(FacetOptionItem { value: selected.clone(), count: 0 });
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::restaurants::test_fixtures::sample_records;

    fn kanto() -> Vec<RestaurantRecord> {
        restaurants_in_area(&sample_records(), Area::Kanto)
    }

    fn values(options: &[FacetOptionItem]) -> Vec<(&str, u64)> {
        options.iter().map(|o| (o.value.as_str(), o.count)).collect()
    }

    #[test]
    fn region_options_are_sorted_and_counted() {
        let options = facet_options(&kanto(), &FilterSelection::default(), FacetField::Region);
        assert_eq!(values(&options), vec![("ヨーロッパ", 2), ("中東", 1), ("東南アジア", 2)]);
    }

    #[test]
    fn country_options_narrow_to_selected_regions() {
        let mut selection = FilterSelection::default();
        selection.toggle(FacetField::Region, "東南アジア");
        let options = facet_options(&kanto(), &selection, FacetField::Country);
        assert_eq!(values(&options), vec![("タイ", 1), ("ベトナム", 1)]);
    }

    #[test]
    fn selected_country_outside_pool_is_kept_with_zero_count() {
        let mut selection = FilterSelection::default();
        selection.toggle(FacetField::Region, "東南アジア");
        selection.toggle(FacetField::Country, "フランス");
        let options = facet_options(&kanto(), &selection, FacetField::Country);
        assert_eq!(values(&options), vec![("タイ", 1), ("ベトナム", 1), ("フランス", 0)]);
    }

    #[test]
    fn tag_options_ignore_region_selection() {
        let mut selection = FilterSelection::default();
        selection.toggle(FacetField::Region, "中東");
        let options = facet_options(&kanto(), &selection, FacetField::Tag);
        assert_eq!(values(&options), vec![
            ("テイクアウト可", 2),
            ("ハラール対応", 1),
            ("ワインセレクションあり", 1),
            ("予約必須", 1),
            ("家族経営", 1),
        ]);
    }
}

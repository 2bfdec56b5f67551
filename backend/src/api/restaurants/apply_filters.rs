//! Facet filter engine.

use common::{filter_query::FilterSelection, restaurant::RestaurantRecord};

/// Keeps records passing every active facet, in input order.
///
/// Within a facet the selected values are OR-ed; an empty facet is a no-op.
/// Region, country and tag facets are AND-ed together.
pub fn apply_filters(records: &[RestaurantRecord], selection: &FilterSelection) -> Vec<RestaurantRecord> {
    records
        .iter()
        .filter(|r| selection.regions.is_empty() || selection.regions.contains(&r.region))
        .filter(|r| selection.countries.is_empty() || selection.countries.contains(&r.country))
        .filter(|r| selection.tags.is_empty() || r.has_any_tag(&selection.tags))
        .cloned()
        .collect()
}

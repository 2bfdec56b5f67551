//! Result count plus the two card columns.

use common::filter_result::{FilteredRestaurants, split_columns};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearchOff};

use crate::components::directory_components::restaurant_card::RestaurantCard;

#[component]
pub fn RestaurantColumns(result: ReadSignal<FilteredRestaurants>) -> Element {
    let result = result.read().clone();
    let count_message = result.count_message();

    if let Some((message, hint)) = result.empty_state_message() {
        return rsx! {
            p { class: "results-count", "{count_message}" }
            div {
                class: "no-results",
                Icon { icon: MdSearchOff, style: "width: 48px; height: 48px;" }
                p { "{message}" }
                p { "{hint}" }
            }
        };
    }

    let (left, right) = split_columns(&result.results);

    rsx! {
        p { class: "results-count", "{count_message}" }
        div {
            class: "card-columns",
            div {
                class: "card-column",
                for (i, listing) in left.into_iter().enumerate() {
                    RestaurantCard { key: "{i}-{listing.record.name}", listing }
                }
            }
            div {
                class: "card-column",
                for (i, listing) in right.into_iter().enumerate() {
                    RestaurantCard { key: "{i}-{listing.record.name}", listing }
                }
            }
        }
    }
}

use common::{filter_result::RestaurantListing, restaurant::tag_css_class};
use dioxus::prelude::*;

use crate::components::directory_components::card_action_buttons::CardActionButtons;

#[component]
pub fn RestaurantCard(listing: ReadSignal<RestaurantListing>) -> Element {
    let listing = listing.read().clone();
    let distance_label = listing.distance_label();
    let record = listing.record;
    let maps_url = record.maps_search_url();

    rsx! {
        div {
            class: "restaurant-card",
            img {
                class: "card-image",
                src: "{record.image_url}",
                alt: "{record.name}",
                loading: "lazy",
            }
            div {
                class: "card-body",
                p { class: "card-title", "{record.name}" }
                div {
                    class: "card-badges",
                    span { class: "country-badge", "🏳 {record.country}" }
                    span { class: "region-badge", "{record.region}" }
                }
                div {
                    class: "station-info",
                    span { "🚃" }
                    span {
                        "{record.nearest_station}駅 徒歩 "
                        strong { "{record.walk_minutes}分" }
                    }
                }
                if let Some(label) = distance_label {
                    div { class: "distance-info", "📍 {label}" }
                }
                p { class: "description", "{record.description}" }
                div {
                    class: "tags-container",
                    for (i, tag) in record.tags.iter().enumerate() {
                        span {
                            key: "{i}-{tag}",
                            class: "tag {tag_css_class(tag)}",
                            "{tag}"
                        }
                    }
                }
                CardActionButtons { maps_url }
            }
        }
    }
}

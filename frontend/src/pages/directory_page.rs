use dioxus::prelude::*;

use common::{filter_query::FilterSelection, geo::GeoQueryParam, restaurant::Area};
use crate::{
    api::directory_api::filter_restaurants,
    components::{directory_components::{area_toggle::AreaToggle, facet_sidebar::FacetSidebar, geolocation_button::GeolocationButton, restaurant_columns::RestaurantColumns, restaurant_map::RestaurantMap}, error_boundary::ComponentErrorDisplay, suspend_boundary::SuspendWrapper},
    data_definitions::{directory_state::DirectoryState, url_param::UrlParam},
    routes::{Route, directory_state_from_params},
};


/// Directory page. All state lives in the address, so every change is a navigation.
#[component]
pub fn DirectoryPage(
    area: Area,
    selection: UrlParam<FilterSelection>,
    user_lat: GeoQueryParam,
    user_lng: GeoQueryParam,
) -> Element {
    let state = directory_state_from_params(area, &selection, &user_lat, &user_lng);

    rsx! {
        Title { "世界のレストラン探索: {area.label()}" }
        DirectoryPageRootComponent { state }
    }
}

#[derive(Debug, Clone, PartialEq, Copy)]
pub struct DirectoryControl {
    pub state: ReadSignal<DirectoryState>,
    pub navigate: Callback<DirectoryState>,
}

#[component]
fn DirectoryPageRootComponent(state: ReadSignal<DirectoryState>) -> Element {

    use_context_provider(move || DirectoryControl {
        state,
        navigate: Callback::new(move |next: DirectoryState| {
            if *state.peek() == next {
                return;
            }
            navigator().push(Route::directory(next));
        }),
    });

    rsx! {
        div {
            id: "x-directory-page-root-component",
            class: "directory-layout",
            aside {
                id: "x-directory-sidebar",
                class: "sidebar",
                FacetSidebar {}
            }
            div {
                id: "x-directory-main",
                class: "directory-main",
                div {
                    id: "x-directory-top-controls",
                    class: "top-controls",
                    AreaToggle {}
                    GeolocationButton {}
                }
                SuspendWrapper { loading_text: "レストランを探しています...".to_string(), DirectoryResults {} }
            }
        }
    }
}

#[component]
fn DirectoryResults() -> Element {
    let control = use_context::<DirectoryControl>();
    let result = use_resource(move || {
        let state = control.state.read().clone();
        filter_restaurants(state.area, state.selection, state.user_coordinate)
    }).suspend()?.cloned();
    let result = match result {
        Err(e) => return rsx! {ComponentErrorDisplay { error_txt: format!("{:#?}", e) }},
        Ok(r) => r
    };

    rsx! {
        div {
            class: "results-layout",
            div {
                class: "map-column",
                h4 { class: "section-title", "🗺️ マップ" }
                RestaurantMap { map_view: result.map_view.clone() }
            }
            div {
                class: "cards-column",
                h4 { class: "section-title", "🍴 レストラン一覧" }
                RestaurantColumns { result }
            }
        }
    }
}

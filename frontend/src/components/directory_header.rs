//! Page header layout shared by all routes.

use dioxus::prelude::*;

use crate::api::directory_api::dataset_overview;
use crate::components::error_boundary::GlobalErrorBoundary;
use crate::components::suspend_boundary::SuspendWrapper;
use crate::routes::Route;


/// Hero title above the routed page.
#[component]
pub fn DirectoryHeader() -> Element {
    rsx! {
        Title { "世界のレストラン探索" }
        div {
            id: "x-page-container",
            class: "page-container",
            div {
                class: "hero",
                h1 { class: "hero-title", "世界のレストランを、探索しよう。" }
                p {
                    class: "hero-sub",
                    span { "Discover Authentic World Cuisine in Japan" }
                    span { class: "dot", "◆" }
                    span { "関東 & 関西" }
                    span { class: "dot", "◆" }
                    SuspendWrapper { loading_text: "…".to_string(), CuisineCount {} }
                }
                div { class: "hero-ornament" }
            }
            GlobalErrorBoundary {
                boundary_name: "DirectoryHeader".to_string(),
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn CuisineCount() -> Element {
    let overview = use_resource(move || dataset_overview()).suspend()?.cloned();
    match overview {
        Ok(overview) => rsx! { span { "{overview.cuisine_count} Cuisines" } },
        Err(e) => {
            dioxus::logger::tracing::warn!("Could not load dataset overview: {e}");
            rsx! { span { "- Cuisines" } }
        }
    }
}

//! Sidebar with the region, country and tag multi-selects.

use dioxus::prelude::*;
use common::filter_query::FacetField;
use dioxus_free_icons::{Icon, icons::{md_navigation_icons::MdRefresh, md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}}};

use crate::{api::directory_api::restaurant_facet_options, components::{error_boundary::ComponentErrorDisplay, suspend_boundary::SuspendWrapper}, pages::directory_page::DirectoryControl};


#[component]
pub fn FacetSidebar() -> Element {
    let control = use_context::<DirectoryControl>();

    rsx! {
        div {
            id: "x-facet-sidebar",
            class: "sidebar-inner",
            h3 { "🔍 絞り込み検索" }
            hr { class: "section-divider" }

            FacetSection { facet_field: FacetField::Region }
            FacetSection { facet_field: FacetField::Country }

            hr { class: "section-divider" }

            FacetSection { facet_field: FacetField::Tag }

            hr { class: "section-divider" }

            button {
                class: "reset-btn",
                onclick: move |_| {
                    let next = control.state.read().reset_filters();
                    control.navigate.call(next);
                },
                Icon { icon: MdRefresh, style: "width: 18px; height: 18px;" }
                "フィルターをリセット"
            }
        }
    }
}

#[component]
fn FacetSection(facet_field: FacetField) -> Element {
    rsx! {
        div {
            class: "facet-section",
            div { class: "facet-title", "{facet_field.display_name()}" }
            SuspendWrapper {
                FacetSelectorList { facet_field }
            }
        }
    }
}

#[component]
fn FacetSelectorList(facet_field: ReadSignal<FacetField>) -> Element {
    let control = use_context::<DirectoryControl>();
    let facet_options = use_resource(move || {
        let state = control.state.read().clone();
        restaurant_facet_options(state.area, state.selection, *facet_field.read())
    }).suspend()?.cloned();
    let facet_options = match facet_options {
        Err(e) => return rsx! {ComponentErrorDisplay { error_txt: format!("{:#?}", e) }},
        Ok(s) => s
    };
    let nothing_selected = control.state.read().selection.values(facet_field()).is_empty();

    rsx! {
        if nothing_selected {
            div { class: "facet-placeholder", "{facet_field().placeholder()}" }
        }
        ul {
            class: "facet-list",
            for option in facet_options.options {
                li {
                    key: "{option.value}-{option.count}",
                    FacetCheckbox {
                        facet_field,
                        facet_value: option.value.clone(),
                        result_count: option.count,
                    }
                }
            }
        }
    }
}


#[component]
fn FacetCheckbox(facet_field: ReadSignal<FacetField>, facet_value: ReadSignal<String>, result_count: ReadSignal<u64>) -> Element {
    let control = use_context::<DirectoryControl>();
    let is_checked = use_memo(move || control.state.read().selection.values(*facet_field.read()).contains(&*facet_value.read()));
    rsx! {
        div {
            class: "x-facet-list-item",
            onclick: move |_e| {
                let state = control.state.read().clone();
                let mut selection = state.selection.clone();
                selection.toggle(*facet_field.read(), &facet_value.read());
                control.navigate.call(state.with_selection(selection));
            },

            if is_checked() {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; flex-shrink: 0;" }
            }
            div { class: "facet-value", "{facet_value}" }

            div { style: "flex: 1 1 auto;", }

            div { class: "facet-count", "{result_count}" }
        }
    }
}

//! Two-option area switch.

use common::restaurant::Area;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_toggle_icons::{MdRadioButtonChecked, MdRadioButtonUnchecked}};

use crate::pages::directory_page::DirectoryControl;

#[component]
pub fn AreaToggle() -> Element {
    let control = use_context::<DirectoryControl>();
    let current = control.state.read().area;

    rsx! {
        div {
            id: "x-area-toggle",
            class: "area-toggle",
            span { class: "area-toggle-label", "📍 エリアを選択" }
            for area in Area::ALL {
                button {
                    key: "{area}",
                    class: if area == current { "area-option selected" } else { "area-option" },
                    onclick: move |_| {
                        let next = control.state.read().with_area(area);
                        control.navigate.call(next);
                    },
                    if area == current {
                        Icon { icon: MdRadioButtonChecked, style: "width: 18px; height: 18px;" }
                    } else {
                        Icon { icon: MdRadioButtonUnchecked, style: "width: 18px; height: 18px;" }
                    }
                    "{area.label()}"
                }
            }
        }
    }
}

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdOpenInNew, md_content_icons::MdContentCopy}};

const COPIED_LABEL_MS: u32 = 2_000;

#[component]
pub fn CardActionButtons(maps_url: ReadSignal<String>) -> Element {
    rsx! {
        div {
            class: "card-actions",
            MapsLinkButton { maps_url }
            CopyMapLinkButton { maps_url }
        }
    }
}

#[component]
fn MapsLinkButton(maps_url: ReadSignal<String>) -> Element {
    rsx! {
        a {
            class: "maps-btn",
            href: "{maps_url}",
            target: "_blank",
            rel: "noopener noreferrer",
            "🗺️ Googleマップで見る"
            Icon { icon: MdOpenInNew, style: "width: 14px; height: 14px;" }
        }
    }
}

#[component]
fn CopyMapLinkButton(maps_url: ReadSignal<String>) -> Element {
    let mut copied = use_signal(|| false);

    let do_copy_link = move |_: Event<MouseData>| {
        let url = maps_url.read().clone();
        let Some(window) = web_sys::window() else {
            return;
        };
        let promise = window.navigator().clipboard().write_text(&url);
        spawn(async move {
            match wasm_bindgen_futures::JsFuture::from(promise).await {
                Ok(_) => {
                    dioxus::logger::tracing::info!("Map link copied to clipboard: {url}");
                    copied.set(true);
                    gloo_timers::callback::Timeout::new(COPIED_LABEL_MS, move || copied.set(false)).forget();
                }
                Err(e) => dioxus::logger::tracing::warn!("Clipboard write failed: {e:?}"),
            }
        });
    };

    rsx! {
        button {
            class: "copy-btn",
            title: "Googleマップのリンクをコピー",
            onclick: do_copy_link,
            Icon { icon: MdContentCopy, style: "width: 14px; height: 14px;" }
            if copied() { "コピーしました" } else { "リンクをコピー" }
        }
    }
}

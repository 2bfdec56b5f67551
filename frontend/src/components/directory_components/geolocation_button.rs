//! Current-location button. The browser position comes back through a page script and is pushed into the address.

use common::geolocation::{GEOLOCATION_TIMEOUT_MS, GeolocationReply, GeolocationSession, GeolocationState};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_communication_icons::MdLocationOn};

use crate::pages::directory_page::DirectoryControl;

const GEOLOCATE_JS: &str = r#"
if (!navigator.geolocation) {
    dioxus.send({ status: "unsupported" });
} else {
    navigator.geolocation.getCurrentPosition(
        (pos) => dioxus.send({ status: "resolved", lat: pos.coords.latitude, lng: pos.coords.longitude }),
        (err) => dioxus.send({ status: "failed", reason: err.message || "unknown error" }),
        { enableHighAccuracy: true, timeout: __TIMEOUT_MS__ }
    );
}
"#;

#[component]
pub fn GeolocationButton() -> Element {
    let control = use_context::<DirectoryControl>();
    let mut geolocation = use_signal(GeolocationSession::default);

    let request_location = move |_: Event<MouseData>| {
        let request_id = geolocation.write().request();
        spawn(async move {
            let script = GEOLOCATE_JS.replace("__TIMEOUT_MS__", &GEOLOCATION_TIMEOUT_MS.to_string());
            let mut eval = document::eval(&script);
            let reply = match eval.recv::<GeolocationReply>().await {
                Ok(reply) => reply,
                Err(e) => {
                    dioxus::logger::tracing::warn!("Geolocation bridge failed: {e:?}");
                    GeolocationReply::Failed { reason: format!("{e:?}") }
                }
            };
            if !geolocation.write().complete(request_id, reply) {
                dioxus::logger::tracing::debug!("Dropping reply for superseded location request {request_id}");
                return;
            }

            let resolved = geolocation.peek().resolved_coordinate();
            if let Some(coordinate) = resolved {
                dioxus::logger::tracing::info!("Current location: {}, {}", coordinate.lat, coordinate.lng);
                let next = control.state.peek().with_user_coordinate(coordinate);
                control.navigate.call(next);
            }
        });
    };

    let state = geolocation.read().state.clone();
    let status = state.status_text();
    let status_class = if !state.is_terminal() {
        "geo-status"
    } else if matches!(state, GeolocationState::Resolved(_)) {
        "geo-status ok"
    } else {
        "geo-status error"
    };

    rsx! {
        div {
            id: "x-geolocation",
            class: "geolocation",
            button {
                class: "geo-btn",
                onclick: request_location,
                Icon { icon: MdLocationOn, style: "width: 18px; height: 18px;" }
                "現在地を取得"
            }
            span { class: status_class, "{status}" }
        }
    }
}

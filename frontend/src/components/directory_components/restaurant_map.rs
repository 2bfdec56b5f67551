//! Leaflet map fed with the server-built [`MapView`].

use common::map_view::{DARK_MATTER_ATTRIBUTION, DARK_MATTER_TILE_URL, MapView};
use dioxus::prelude::*;

const MAP_ELEMENT_ID: &str = "x-restaurant-map";

// Receives one MapView and redraws. Leaflet is loaded from the page head and may still be arriving,
// so every run takes a sequence number before its first await and only the newest run draws.
const RENDER_MAP_JS: &str = r##"
const seq = (window.__restaurantMapSeq = (window.__restaurantMapSeq || 0) + 1);
const view = await dioxus.recv();
for (let i = 0; i < 50 && typeof L === "undefined" && seq === window.__restaurantMapSeq; i++) {
    await new Promise((r) => setTimeout(r, 100));
}
const el = document.getElementById("__MAP_ELEMENT_ID__");
if (seq === window.__restaurantMapSeq && el && typeof L !== "undefined") {
    let map = window.__restaurantMap;
    if (!map || map.getContainer() !== el) {
        if (map) { map.remove(); }
        map = L.map(el);
        L.tileLayer("__TILE_URL__", {
            attribution: "__TILE_ATTRIBUTION__",
            subdomains: "abcd",
            maxZoom: 20,
        }).addTo(map);
        window.__restaurantMap = map;
        window.__restaurantMarkers = L.layerGroup().addTo(map);
    }
    map.setView([view.center.lat, view.center.lng], view.zoom);
    const layer = window.__restaurantMarkers;
    layer.clearLayers();
    for (const m of view.markers) {
        const popup = document.createElement("div");
        popup.className = "map-popup";
        m.popup_lines.forEach((line, i) => {
            const row = document.createElement(i === 0 ? "b" : "div");
            row.textContent = line;
            popup.appendChild(row);
        });
        const pos = [m.position.lat, m.position.lng];
        const marker = m.kind === "CurrentLocation"
            ? L.circleMarker(pos, { radius: 9, color: "#ffffff", weight: 2, fill: true, fillColor: "#ef4444", fillOpacity: 1 })
            : L.circleMarker(pos, { radius: 10, color: "#a78bfa", weight: 2, fill: true, fillColor: "#7c3aed", fillOpacity: 0.85 });
        marker.bindPopup(popup, { maxWidth: 240 }).bindTooltip(m.tooltip).addTo(layer);
    }
    setTimeout(() => map.invalidateSize(), 0);
}
"##;

fn render_map_script() -> String {
    RENDER_MAP_JS
        .replace("__MAP_ELEMENT_ID__", MAP_ELEMENT_ID)
        .replace("__TILE_URL__", DARK_MATTER_TILE_URL)
        .replace("__TILE_ATTRIBUTION__", DARK_MATTER_ATTRIBUTION)
}

#[component]
pub fn RestaurantMap(map_view: ReadSignal<MapView>) -> Element {
    use_effect(move || {
        let view = map_view.read().clone();
        let eval = document::eval(&render_map_script());
        if let Err(e) = eval.send(view) {
            dioxus::logger::tracing::warn!("Could not send map data: {e:?}");
        }
    });

    rsx! {
        div {
            class: "map-frame",
            div { id: MAP_ELEMENT_ID, class: "restaurant-map" }
        }
    }
}

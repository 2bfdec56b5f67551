//! Plain axum routes mounted next to the Dioxus router.

pub mod area_export;

//! Server-side restaurant directory: dataset, filters, facets and map data.

pub mod api;
pub mod config;
pub mod data_utils;
pub mod server_extra;

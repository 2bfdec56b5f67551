//! Server functions for the restaurant directory.

use common::{
    filter_query::{FacetField, FilterSelection},
    filter_result::{DatasetOverview, FacetOptions, FilteredRestaurants},
    geo::UserCoordinate,
    restaurant::Area,
};
use dioxus::prelude::*;


#[cfg(feature = "server")]
fn to_server_error(e: anyhow::Error) -> ServerFnError {
    dioxus::logger::tracing::error!("Server function failed: {e:#}");
    ServerFnError::ServerError { message: e.to_string(), code: 500, details: None }
}

#[server]
pub async fn filter_restaurants(area: Area, selection: FilterSelection, user_coordinate: Option<UserCoordinate>) -> Result<FilteredRestaurants, ServerFnError> {
    let x = backend::api::restaurants::filter_restaurants(area, selection, user_coordinate).await;
    x.map_err(to_server_error)
}

#[server]
pub async fn restaurant_facet_options(area: Area, selection: FilterSelection, facet_field: FacetField) -> Result<FacetOptions, ServerFnError> {
    let x = backend::api::restaurants::restaurant_facet_options(area, selection, facet_field).await;
    x.map_err(to_server_error)
}

#[server]
pub async fn dataset_overview() -> Result<DatasetOverview, ServerFnError> {
    let x = backend::api::dataset_overview::dataset_overview().await;
    x.map_err(to_server_error)
}

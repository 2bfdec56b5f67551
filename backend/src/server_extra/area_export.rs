use axum::{Json, extract::Path, http::StatusCode, response::{IntoResponse, Response}};
use common::restaurant::Area;
use tracing::{info, warn};

use crate::{api::restaurants::restaurants_in_area, data_utils::restaurant_dataset::get_directory};

/// `GET /_data/{area}`: the area's records as loaded from the bundled file.
pub async fn export_area(Path(area): Path<String>) -> Response {
    let Ok(area) = area.parse::<Area>() else {
        warn!("Export requested for unknown area: {}", area);
        return (StatusCode::NOT_FOUND, format!("Unknown area: {area}")).into_response();
    };
    let directory = match get_directory() {
        Ok(directory) => directory,
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    };
    let records = restaurants_in_area(&directory.records, area);
    info!("Exporting {} restaurants for {}", records.len(), area);
    Json(records).into_response()
}

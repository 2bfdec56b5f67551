//! Frontend application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::{extract::Request, middleware::Next};
        use dioxus::logger::tracing;
        use dioxus::server::axum;

        // the dataset is required for any page, so a load failure stops the server here
        let config = backend::config::DirectoryConfig::from_env()?;
        backend::data_utils::restaurant_dataset::init_directory(config)?;

        Ok(dioxus::server::router(App)
            .route("/_data/{area}", axum::routing::get(backend::server_extra::area_export::export_area))
            .layer(axum::middleware::from_fn(
                |request: Request, next: Next| async move {
                    let method = request.method().clone();
                    let path = request.uri().path().to_string();
                    let res = next.run(request).await;
                    tracing::debug!("{} {} -> {}", method, path, res.status());
                    res
                },
            )))
    });
}

// API layer - HTTP endpoints
pub mod health;
pub mod items;

use std::sync::Arc;

pub use health::HealthApi;
pub use items::ItemsApi;

use poem::middleware::{Cors, Tracing};
use poem::{Endpoint, EndpointExt, Route};
use poem_openapi::OpenApiService;

use crate::app_data::AppData;

/// Compose the HTTP application
///
/// API under `/api`, Swagger UI under `/swagger`, OpenAPI JSON at `/openapi.json`.
/// `server_url` is the externally visible base URL advertised in the OpenAPI document.
pub fn create_app(app_data: Arc<AppData>, server_url: String) -> impl Endpoint {
    let api_service = OpenApiService::new(
        (HealthApi::new(app_data.clone()), ItemsApi::new(app_data)),
        "Item Search API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("{}/api", server_url.trim_end_matches('/')));

    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .nest("/api", api_service)
        .nest("/swagger", ui)
        .at("/openapi.json", spec)
        .with(Cors::new())
        .with(Tracing)
}

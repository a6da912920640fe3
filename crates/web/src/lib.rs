pub mod config;
pub mod error;
pub mod features;
pub mod middleware;
pub mod openapi;
pub mod policy;
pub mod routes;

use axum::Router;
use storage::Database;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use openapi::ApiDoc;

/// Build the full application: resource routes, Swagger UI and the shared
/// HTTP layers.
pub fn app(db: Database) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(routes::router(db))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

//! OpenAPI document route
//!
//! Serves the embedded `openapi.yaml`. The document is maintained by hand
//! alongside the routes.

use axum::{Router, http::header, response::IntoResponse, routing::get};

use crate::core::ServerState;

const OPENAPI_YAML: &str = include_str!("../../openapi.yaml");

pub fn router() -> Router<ServerState> {
    Router::new().route("/openapi.yaml", get(serve))
}

async fn serve() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/yaml")], OPENAPI_YAML)
}

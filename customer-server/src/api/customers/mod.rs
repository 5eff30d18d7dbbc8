//! Customer API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;
use crate::utils::AppError;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/customers", routes())
}

/// Unsupported methods on known paths are unmatched routes, not 405s.
async fn method_not_found() -> AppError {
    AppError::not_found("Not Found")
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route(
            "/",
            get(handler::list)
                .post(handler::create)
                .fallback(method_not_found),
        )
        .route(
            "/{id}",
            get(handler::get_by_id)
                .patch(handler::update)
                .delete(handler::delete)
                .fallback(method_not_found),
        )
}

//! Customer API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{Customer, CustomerCreate, CustomerUpdate, Paginated};
use crate::services::customer as service;
use crate::utils::{AppError, AppResult};

/// Query params for listing customers
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub search: Option<String>,
}

/// Delete mode selector
#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub action: Option<String>,
}

/// GET /api/customers - paginated list with optional substring search
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Paginated<Customer>>> {
    // Oversized limits are clamped to the configured maximum before
    // validation — never rejected. limit <= 0 still fails validation below.
    let limit = query
        .limit
        .unwrap_or(state.config.default_limit)
        .min(state.config.max_limit);
    let offset = query.offset.unwrap_or(0);

    let page =
        service::list_customers(&state.db.pool, limit, offset, query.search.as_deref()).await?;
    Ok(Json(page))
}

/// POST /api/customers - create customer
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CustomerCreate>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    let customer = service::create_customer(&state.db.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// GET /api/customers/{id} - fetch a single customer
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Customer>> {
    let customer = service::get_customer_details(&state.db.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Customer {id} not found or already deleted")))?;
    Ok(Json(customer))
}

/// PATCH /api/customers/{id} - partial update
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<CustomerUpdate>,
) -> AppResult<Json<Customer>> {
    let customer = service::update_customer(&state.db.pool, id, payload)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("Customer {id} not found or could not be updated"))
        })?;
    Ok(Json(customer))
}

/// DELETE /api/customers/{id} - soft delete by default, `?action=hard`
/// removes the row permanently
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(query): Query<DeleteQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let kind = match query.action.as_deref() {
        Some("hard") => "hard",
        _ => "soft",
    };

    let success = if kind == "hard" {
        service::hard_delete_customer(&state.db.pool, id).await?
    } else {
        service::soft_delete_customer(&state.db.pool, id).await?
    };

    if !success {
        return Err(AppError::not_found(format!(
            "Customer {id} not found or could not be {kind}-deleted"
        )));
    }

    Ok(Json(serde_json::json!({
        "message": format!("Customer with ID {id} {kind}-deleted successfully.")
    })))
}

//! Customer Service
//!
//! Validates inputs before any query runs, then delegates to the customer
//! repository. Every precondition failure is a [`AppError::Validation`]
//! raised without touching the store.

use sqlx::SqlitePool;

use crate::db::models::{Customer, CustomerCreate, CustomerUpdate, Paginated};
use crate::db::repository::customer as repo;
use crate::utils::{AppError, AppResult};

fn validate_id(id: i64) -> AppResult<()> {
    if id <= 0 {
        return Err(AppError::validation("Invalid customer ID provided"));
    }
    Ok(())
}

/// Create a customer. `project_id` and `name` are required and non-empty.
pub async fn create_customer(pool: &SqlitePool, input: CustomerCreate) -> AppResult<Customer> {
    if input.project_id.is_empty() || input.name.is_empty() {
        return Err(AppError::validation("Project ID and name are required"));
    }
    Ok(repo::insert(pool, input).await?)
}

/// Fetch a customer by id. A missing (or soft-deleted) row is `Ok(None)`,
/// not an error.
pub async fn get_customer_details(pool: &SqlitePool, id: i64) -> AppResult<Option<Customer>> {
    validate_id(id)?;
    Ok(repo::find_by_id(pool, id).await?)
}

/// List one page of customers with the total matching count.
pub async fn list_customers(
    pool: &SqlitePool,
    limit: i64,
    offset: i64,
    search: Option<&str>,
) -> AppResult<Paginated<Customer>> {
    if limit < 1 || offset < 0 {
        return Err(AppError::validation("Invalid limit or offset parameters"));
    }

    let (data, count) = repo::find_page(pool, limit, offset, search).await?;
    Ok(Paginated { data, count })
}

/// Apply a partial update and return the fresh row.
///
/// An empty update set short-circuits to the current details unchanged — not
/// an error, and no write is issued. `Ok(None)` means the update matched no
/// visible row.
pub async fn update_customer(
    pool: &SqlitePool,
    id: i64,
    updates: CustomerUpdate,
) -> AppResult<Option<Customer>> {
    validate_id(id)?;

    if updates.is_empty() {
        return Ok(repo::find_by_id(pool, id).await?);
    }

    if repo::update(pool, id, &updates).await? {
        Ok(repo::find_by_id(pool, id).await?)
    } else {
        Ok(None)
    }
}

/// Mark a customer deleted. Reversible only by direct store access.
pub async fn soft_delete_customer(pool: &SqlitePool, id: i64) -> AppResult<bool> {
    validate_id(id)?;
    Ok(repo::soft_delete(pool, id).await?)
}

/// Remove a customer permanently.
pub async fn hard_delete_customer(pool: &SqlitePool, id: i64) -> AppResult<bool> {
    validate_id(id)?;
    Ok(repo::hard_delete(pool, id).await?)
}

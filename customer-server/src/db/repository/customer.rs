//! Customer Repository

use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::db::models::{Customer, CustomerCreate, CustomerUpdate};
use crate::utils::time::now_millis;

const CUSTOMER_SELECT: &str = "SELECT id, project_id, name, address, phone, aadhar, email, is_deleted, created_at, updated_at FROM customers";

/// Insert a new customer and re-read the stored row.
///
/// `created_at` and `updated_at` start equal; `is_deleted` starts at 0.
pub async fn insert(pool: &SqlitePool, data: CustomerCreate) -> RepoResult<Customer> {
    let now = now_millis();
    let result = sqlx::query(
        "INSERT INTO customers (project_id, name, address, phone, aadhar, email, is_deleted, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, 0, ?7, ?7)",
    )
    .bind(data.project_id)
    .bind(data.name)
    .bind(data.address)
    .bind(data.phone)
    .bind(data.aadhar)
    .bind(data.email)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, result.last_insert_rowid())
        .await?
        .ok_or_else(|| RepoError::Database("Failed to re-read inserted customer".into()))
}

/// Fetch a single non-deleted customer by id.
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Customer>> {
    let sql = format!("{CUSTOMER_SELECT} WHERE id = ? AND is_deleted = 0");
    let row = sqlx::query_as::<_, Customer>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Fetch one page of non-deleted customers plus the total matching count.
///
/// The count query and the data query share the same filter; the count query
/// never sees limit/offset. Both run concurrently and both must complete.
/// The search term matches name, email or project_id as a substring
/// (case-sensitive, see the `case_sensitive_like` pragma in [`crate::db`]).
pub async fn find_page(
    pool: &SqlitePool,
    limit: i64,
    offset: i64,
    search: Option<&str>,
) -> RepoResult<(Vec<Customer>, i64)> {
    let pattern = search
        .filter(|term| !term.is_empty())
        .map(|term| format!("%{term}%"));

    let filter = if pattern.is_some() {
        "WHERE is_deleted = 0 AND (name LIKE ?1 OR email LIKE ?1 OR project_id LIKE ?1)"
    } else {
        "WHERE is_deleted = 0"
    };

    let data_sql = format!("{CUSTOMER_SELECT} {filter} ORDER BY updated_at DESC LIMIT ? OFFSET ?");
    let count_sql = format!("SELECT COUNT(*) FROM customers {filter}");

    let mut data_query = sqlx::query_as::<_, Customer>(&data_sql);
    let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
    if let Some(pattern) = &pattern {
        data_query = data_query.bind(pattern.as_str());
        count_query = count_query.bind(pattern.as_str());
    }
    data_query = data_query.bind(limit).bind(offset);

    let (rows, total) = tokio::try_join!(data_query.fetch_all(pool), count_query.fetch_one(pool))?;
    Ok((rows, total))
}

/// Apply a partial update to a non-deleted customer.
///
/// The SET clause is built only from fields present in `data` — the struct
/// itself is the allow-list. `updated_at` is always refreshed. Returns false
/// without issuing a write when no field is present.
pub async fn update(pool: &SqlitePool, id: i64, data: &CustomerUpdate) -> RepoResult<bool> {
    let mut sets: Vec<&str> = Vec::new();
    let mut values: Vec<&str> = Vec::new();

    if let Some(v) = &data.project_id {
        sets.push("project_id = ?");
        values.push(v);
    }
    if let Some(v) = &data.name {
        sets.push("name = ?");
        values.push(v);
    }
    if let Some(v) = &data.address {
        sets.push("address = ?");
        values.push(v);
    }
    if let Some(v) = &data.phone {
        sets.push("phone = ?");
        values.push(v);
    }
    if let Some(v) = &data.aadhar {
        sets.push("aadhar = ?");
        values.push(v);
    }
    if let Some(v) = &data.email {
        sets.push("email = ?");
        values.push(v);
    }

    if sets.is_empty() {
        return Ok(false);
    }

    sets.push("updated_at = ?");
    let sql = format!(
        "UPDATE customers SET {} WHERE id = ? AND is_deleted = 0",
        sets.join(", ")
    );

    let mut query = sqlx::query(&sql);
    for value in values {
        query = query.bind(value);
    }
    let result = query.bind(now_millis()).bind(id).execute(pool).await?;
    Ok(result.rows_affected() > 0)
}

/// Flip the soft-delete flag, regardless of current deleted state.
pub async fn soft_delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let result = sqlx::query("UPDATE customers SET is_deleted = 1, updated_at = ? WHERE id = ?")
        .bind(now_millis())
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Remove the row permanently, bypassing the soft-delete filter.
pub async fn hard_delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM customers WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

//! Customer Model

use serde::{Deserialize, Serialize};

/// Customer entity
///
/// `is_deleted` is serialized as 0/1 to keep the wire shape stable for
/// existing consumers. Timestamps are unix milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Customer {
    pub id: i64,
    pub project_id: String,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub aadhar: Option<String>,
    pub email: Option<String>,
    pub is_deleted: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create customer payload
///
/// `project_id` and `name` default to empty strings when absent so presence
/// validation happens in the service layer (and maps to 400, not a
/// deserialization error).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub aadhar: Option<String>,
    pub email: Option<String>,
}

/// Partial update payload
///
/// Only fields that are `Some` are written. This struct is the update
/// allow-list: `id`, `created_at` and `is_deleted` have no counterpart here
/// and can never be set by a client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerUpdate {
    pub project_id: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub aadhar: Option<String>,
    pub email: Option<String>,
}

impl CustomerUpdate {
    /// True when no writable field is present.
    pub fn is_empty(&self) -> bool {
        self.project_id.is_none()
            && self.name.is_none()
            && self.address.is_none()
            && self.phone.is_none()
            && self.aadhar.is_none()
            && self.email.is_none()
    }
}

/// Paginated list result
///
/// `count` is the total number of rows matching the filter, ignoring
/// limit/offset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub count: i64,
}

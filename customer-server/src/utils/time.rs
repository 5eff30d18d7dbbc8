//! Time helpers

/// Current UTC timestamp in milliseconds.
///
/// All `created_at` / `updated_at` columns store this format.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

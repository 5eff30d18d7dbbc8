//! Service layer
//!
//! Business-level validation and orchestration between the HTTP handlers and
//! the repository. Handlers never call the repository directly.

pub mod customer;

//! API routes
//!
//! # Structure
//!
//! | Module | Routes |
//! |---|---|
//! | [`customers`] | `/api/customers` CRUD |
//! | [`health`] | `/health` liveness check |
//! | [`openapi`] | `/openapi.yaml` API document |

pub mod customers;
pub mod health;
pub mod openapi;

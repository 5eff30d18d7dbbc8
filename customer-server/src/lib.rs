//! Customer records HTTP API
//!
//! CRUD over a single `customers` table backed by SQLite, with pagination,
//! substring search, soft/hard delete and allow-list CORS.
//!
//! # Module structure
//!
//! ```text
//! customer-server/src/
//! ├── core/       # configuration, state, server startup
//! ├── api/        # HTTP routes and handlers
//! ├── routes/     # router assembly, middleware, CORS
//! ├── services/   # business validation and orchestration
//! ├── db/         # pool, models, repository
//! └── utils/      # errors, logging, time
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod routes;
pub mod services;
pub mod utils;

// Re-export common types
pub use crate::core::{Config, Server, ServerState};
pub use crate::utils::logger::init_logger;
pub use crate::utils::{AppError, AppResult};

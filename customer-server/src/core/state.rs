//! Server state

use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// Server state - shared configuration and database handles
///
/// Cloned per request; both members are cheap to clone (the pool is an Arc
/// internally).
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration (immutable after startup)
    pub config: Config,
    /// Database service
    pub db: DbService,
}

impl ServerState {
    /// Assemble state from already-built parts (used by tests)
    pub fn new(config: Config, db: DbService) -> Self {
        Self { config, db }
    }

    /// Open the database and build the state
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;
        Ok(Self {
            config: config.clone(),
            db,
        })
    }
}

use sqlx::SqlitePool;

use crate::database;
use crate::models::ActivityDirectory;
use crate::services::activities_service::CapacityPolicy;

/// Everything a request handler needs, handed to axum through `with_state`.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub capacity: CapacityPolicy,
}

impl AppState {
    pub fn new(pool: SqlitePool, capacity: CapacityPolicy) -> Self {
        Self { pool, capacity }
    }

    /// Opens a fresh in-memory directory and fills it with `catalog`.
    pub async fn bootstrap(
        catalog: &ActivityDirectory,
        capacity: CapacityPolicy,
    ) -> sqlx::Result<Self> {
        let pool = database::connect_in_memory().await?;
        database::seed_directory(&pool, catalog).await?;
        Ok(Self::new(pool, capacity))
    }
}

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::debug;

use crate::config::DbConfig;
use crate::errors::CracklabError;

/// Handle on the lab's MySQL instance. Each analysis invocation opens its
/// own pool and drops it when done; nothing is shared across algorithms.
pub struct Database {
    pub(crate) pool: MySqlPool,
}

impl Database {
    pub async fn connect(config: &DbConfig) -> Result<Self, CracklabError> {
        debug!(url = %config.redacted_url(), "Connecting to database");
        let pool = MySqlPoolOptions::new()
            .max_connections(2)
            .connect(&config.url())
            .await
            .map_err(|e| CracklabError::Database(format!("Failed to connect: {e}")))?;
        Ok(Self { pool })
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

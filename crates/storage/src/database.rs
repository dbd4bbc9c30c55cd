use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::error::Result;

const MAX_CONNECTIONS: u32 = 5;

/// Handle on the PostgreSQL pool backing [`crate::kv::PgKeyValueStore`].
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

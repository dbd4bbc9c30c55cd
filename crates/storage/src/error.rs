use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// Connection-level failures that a later attempt may not hit again.
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Io(_))
                | StorageError::Database(sqlx::Error::PoolTimedOut)
                | StorageError::Database(sqlx::Error::PoolClosed)
        )
    }
}

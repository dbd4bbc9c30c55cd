mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgKeyValueStore;

use crate::error::Result;

/// Whole-value key-value storage. No partial updates and no transactions:
/// callers read a value, change it and write it back.
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

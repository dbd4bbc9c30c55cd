use std::sync::Arc;
use tokio::sync::{Mutex, watch};

use crate::error::Result;
use crate::kv::KeyValueStore;
use crate::models::LiftRecord;

/// Storage key holding the whole lift list, most recent first.
pub const LIFTS_KEY: &str = "fitnessLifts";

/// Sole reader and writer of the stored lift list.
///
/// Cloning is cheap and every clone shares the same store, write lock and
/// change channel.
#[derive(Clone)]
pub struct LiftRepository {
    store: Arc<dyn KeyValueStore>,
    write_lock: Arc<Mutex<()>>,
    changes: Arc<watch::Sender<u64>>,
}

impl LiftRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
            changes: Arc::new(changes),
        }
    }

    /// Load every valid stored lift, most recent first.
    ///
    /// A missing key, an unreadable store or a value that is not a JSON array
    /// all yield an empty list. Elements that fail the record schema are
    /// skipped.
    pub async fn load_all(&self) -> Vec<LiftRecord> {
        match self.store.get(LIFTS_KEY).await {
            Ok(Some(raw)) => decode_lifts(&raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored lifts, treating as empty");
                Vec::new()
            }
        }
    }

    /// The `limit` most recent lifts.
    pub async fn recent(&self, limit: usize) -> Vec<LiftRecord> {
        let mut lifts = self.load_all().await;
        lifts.truncate(limit);
        lifts
    }

    /// Prepend a lift and write the whole list back.
    ///
    /// Appends through clones of this repository are serialized. Other
    /// processes writing the same store are not: the last write wins.
    pub async fn append(&self, record: LiftRecord) -> Result<LiftRecord> {
        let _guard = self.write_lock.lock().await;

        // A failed read must not be mistaken for "no lifts" here, or the
        // write below would wipe the stored list.
        let mut lifts = match self.store.get(LIFTS_KEY).await? {
            Some(raw) => decode_lifts(&raw),
            None => Vec::new(),
        };
        lifts.insert(0, record.clone());

        let encoded = serde_json::to_string(&lifts)?;
        self.store.set(LIFTS_KEY, &encoded).await?;
        self.changes.send_modify(|revision| *revision = revision.wrapping_add(1));

        tracing::debug!(lift_id = %record.id, stored = lifts.len(), "Lift appended");

        Ok(record)
    }

    /// Receiver that observes a new revision after every successful append.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    /// Number of live receivers obtained through [`subscribe`](Self::subscribe).
    pub fn subscriber_count(&self) -> usize {
        self.changes.receiver_count()
    }
}

fn decode_lifts(raw: &str) -> Vec<LiftRecord> {
    let values: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(values) => values,
        Err(e) => {
            tracing::warn!(error = %e, "Stored lifts are not a JSON array, treating as empty");
            return Vec::new();
        }
    };

    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let record = match serde_json::from_value::<LiftRecord>(value) {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!(index, error = %e, "Skipping malformed stored lift");
                    return None;
                }
            };

            match record.check() {
                Ok(()) => Some(record),
                Err(reason) => {
                    tracing::warn!(index, lift_id = %record.id, %reason, "Skipping invalid stored lift");
                    None
                }
            }
        })
        .collect()
}

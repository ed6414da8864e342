use chrono::NaiveDateTime;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::catalog::scenarios::ScenarioCatalog;
use crate::errors::CoreError;
use crate::storage::traits::KeyValueStore;

/// Inputs available to a collection when it derives computed fields.
pub struct DeriveContext<'a> {
    pub catalog: &'a ScenarioCatalog,
    /// Random source for the challenge fallback pick
    pub rng: &'a mut StdRng,
    /// Wall-clock time of the mutation (UTC)
    pub now: NaiveDateTime,
}

/// Strategy describing one kind of collection: its slot, its record shape,
/// and how raw input becomes a stored record.
pub trait Collection {
    /// Slot key in the key-value store.
    const KEY: &'static str;

    type Record: Clone + Serialize + DeserializeOwned + Send + Sync;

    /// Raw user input.
    type Draft;

    /// Validated, normalized input.
    type Fields;

    fn record_id(record: &Self::Record) -> &str;

    /// Parse and range-check raw input.
    fn validate(draft: &Self::Draft) -> Result<Self::Fields, CoreError>;

    /// Assemble the stored record, computing derived fields.
    fn derive(
        id: String,
        fields: Self::Fields,
        ctx: &mut DeriveContext<'_>,
    ) -> Result<Self::Record, CoreError>;
}

/// Whether a mutation reached durable storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Durability {
    /// The full collection was written.
    Persisted,
    /// The write failed; memory holds the mutation but storage does not.
    Failed(String),
}

/// Result of a create/update/delete that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReceipt {
    /// Id of the record the mutation targeted
    pub id: String,
    /// `false` when update/delete found no record with that id
    pub applied: bool,
    pub durability: Durability,
}

impl WriteReceipt {
    #[must_use]
    pub fn is_durable(&self) -> bool {
        self.durability == Durability::Persisted
    }
}

/// Read a persisted record list. Any failure degrades to an empty list and
/// is reported through `tracing`, never to the caller.
pub async fn load_records<T>(store: &dyn KeyValueStore, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
{
    let text = match store.get(key).await {
        Ok(Some(text)) => text,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(collection = key, store = store.name(), error = %e, "Failed to read collection");
            return Vec::new();
        }
    };
    match serde_json::from_str::<Option<Vec<T>>>(&text) {
        Ok(records) => records.unwrap_or_default(),
        Err(e) => {
            warn!(collection = key, error = %e, "Stored collection is unreadable, starting empty");
            Vec::new()
        }
    }
}

/// Write the complete record list under `key`.
pub async fn persist_records<T>(
    store: &dyn KeyValueStore,
    key: &str,
    records: &[T],
) -> Result<(), CoreError>
where
    T: Serialize + Sync,
{
    let text = serde_json::to_string(records)
        .map_err(|e| CoreError::Serialization(format!("Failed to encode '{key}': {e}")))?;
    store.set(key, text).await
}

/// In-memory cache of one collection plus its persistence policy.
///
/// The list is loaded once and then mutated in place; every mutation is
/// followed by a full-list write. Newest records sit at the head.
pub struct RecordStore<C: Collection> {
    store: Arc<dyn KeyValueStore>,
    catalog: Arc<ScenarioCatalog>,
    rng: StdRng,
    records: Vec<C::Record>,
    /// Set when the last write failed, cleared by the next successful one.
    diverged: bool,
}

impl<C: Collection> std::fmt::Debug for RecordStore<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("collection", &C::KEY)
            .field("store", &self.store.name())
            .field("records", &self.records.len())
            .field("diverged", &self.diverged)
            .finish()
    }
}

impl<C: Collection> RecordStore<C> {
    /// Load the collection from `store`. Never fails; see [`load_records`].
    pub async fn load(store: Arc<dyn KeyValueStore>, catalog: Arc<ScenarioCatalog>) -> Self {
        let records = load_records::<C::Record>(store.as_ref(), C::KEY).await;
        debug!(collection = C::KEY, count = records.len(), "Loaded collection");
        Self {
            store,
            catalog,
            rng: StdRng::from_entropy(),
            records,
            diverged: false,
        }
    }

    /// Replace the random source (seeded for reproducible fallbacks).
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Drop the cache and read the slot again.
    pub async fn reload(&mut self) {
        self.records = load_records::<C::Record>(self.store.as_ref(), C::KEY).await;
        self.diverged = false;
    }

    /// Forget cached records after the slot was wiped externally.
    pub fn invalidate(&mut self) {
        self.records.clear();
        self.diverged = false;
    }

    #[must_use]
    pub fn key(&self) -> &'static str {
        C::KEY
    }

    /// Current records, newest first.
    #[must_use]
    pub fn records(&self) -> &[C::Record] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&C::Record> {
        self.records.iter().find(|r| C::record_id(r) == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `true` if memory holds mutations that the last write did not save.
    #[must_use]
    pub fn has_unpersisted_changes(&self) -> bool {
        self.diverged
    }

    pub fn catalog(&self) -> &ScenarioCatalog {
        &self.catalog
    }

    /// Validate, derive, and insert a new record at the head.
    pub async fn create(&mut self, draft: &C::Draft) -> Result<WriteReceipt, CoreError> {
        let fields = C::validate(draft)?;
        let id = Uuid::new_v4().to_string();
        let record = self.derive(id.clone(), fields)?;
        self.records.insert(0, record);
        Ok(self.persist(id, true).await)
    }

    /// Replace the record with `id` in place. Unknown ids leave the list
    /// untouched and report `applied: false`.
    pub async fn update(&mut self, id: &str, draft: &C::Draft) -> Result<WriteReceipt, CoreError> {
        let fields = C::validate(draft)?;
        let Some(idx) = self.position(id) else {
            return Ok(self.persist(id.to_string(), false).await);
        };
        let record = self.derive(id.to_string(), fields)?;
        self.records[idx] = record;
        Ok(self.persist(id.to_string(), true).await)
    }

    /// Remove the first record with `id`. Unknown ids are a no-op.
    pub async fn delete(&mut self, id: &str) -> WriteReceipt {
        let applied = match self.position(id) {
            Some(idx) => {
                self.records.remove(idx);
                true
            }
            None => false,
        };
        self.persist(id.to_string(), applied).await
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| C::record_id(r) == id)
    }

    fn derive(&mut self, id: String, fields: C::Fields) -> Result<C::Record, CoreError> {
        let mut ctx = DeriveContext {
            catalog: &self.catalog,
            rng: &mut self.rng,
            now: chrono::Utc::now().naive_utc(),
        };
        C::derive(id, fields, &mut ctx)
    }

    async fn persist(&mut self, id: String, applied: bool) -> WriteReceipt {
        let durability =
            match persist_records(self.store.as_ref(), C::KEY, &self.records).await {
                Ok(()) => {
                    debug!(collection = C::KEY, count = self.records.len(), "Persisted collection");
                    self.diverged = false;
                    Durability::Persisted
                }
                Err(e) => {
                    warn!(
                        collection = C::KEY,
                        store = self.store.name(),
                        error = %e,
                        "Failed to persist collection, in-memory state kept"
                    );
                    self.diverged = true;
                    Durability::Failed(e.to_string())
                }
            };
        WriteReceipt {
            id,
            applied,
            durability,
        }
    }
}

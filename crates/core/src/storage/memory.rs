use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use crate::errors::CoreError;

use super::traits::KeyValueStore;

/// In-process key-value store.
///
/// Used for tests, previews and WASM builds where the frontend owns
/// durability. `fail_writes` makes every mutating call fail, which is how
/// the persistence-failure path is exercised.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate slots with raw text (e.g., legacy or corrupted data).
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Mutex::new(map),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Toggle simulated write failures.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Raw value under `key`, bypassing the async API.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.lock().ok().and_then(|map| map.get(key).cloned())
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<String, String>>, CoreError> {
        self.entries
            .lock()
            .map_err(|_| CoreError::Storage("memory store lock poisoned".into()))
    }

    fn check_writable(&self, op: &str, key: &str) -> Result<(), CoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(CoreError::Storage(format!(
                "simulated write failure ({op} '{key}')"
            )));
        }
        Ok(())
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl KeyValueStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CoreError> {
        self.check_writable("set", key)?;
        self.lock()?.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), CoreError> {
        self.check_writable("remove", key)?;
        self.lock()?.remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<(), CoreError> {
        self.check_writable("clear", "*")?;
        self.lock()?.clear();
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>, CoreError> {
        Ok(self.lock()?.keys().cloned().collect())
    }
}

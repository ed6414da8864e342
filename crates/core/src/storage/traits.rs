use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::CoreError;

/// Device-local, string-keyed storage of JSON text.
///
/// Each call is self-contained and durable on its own; there are no
/// cross-key transactions. The app's persistence engine implements this
/// trait, and the rest of the crate only ever talks to it through here.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait KeyValueStore: Send + Sync {
    /// Human-readable name of this engine (for logs).
    fn name(&self) -> &str;

    /// Read the raw value under `key`. A missing key is `Ok(None)`.
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// Replace the value under `key`.
    async fn set(&self, key: &str, value: String) -> Result<(), CoreError>;

    /// Delete `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), CoreError>;

    /// Wipe every key in a single call.
    async fn clear(&self) -> Result<(), CoreError>;

    /// All keys currently holding a value, sorted.
    async fn keys(&self) -> Result<Vec<String>, CoreError>;
}

/// Read and decode a JSON value. A missing key is `Ok(None)`.
pub async fn get_json<T>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>, CoreError>
where
    T: DeserializeOwned,
{
    match store.get(key).await? {
        Some(text) => {
            let value = serde_json::from_str(&text).map_err(|e| {
                CoreError::Deserialization(format!("Failed to decode slot '{key}': {e}"))
            })?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

/// Encode a value as JSON and write it under `key`.
pub async fn set_json<T>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), CoreError>
where
    T: Serialize + ?Sized + Sync,
{
    let text = serde_json::to_string(value)
        .map_err(|e| CoreError::Serialization(format!("Failed to encode slot '{key}': {e}")))?;
    store.set(key, text).await
}

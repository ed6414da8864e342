use async_trait::async_trait;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::errors::CoreError;

use super::traits::KeyValueStore;

const EXTENSION: &str = "json";

/// Key-value store backed by one `<key>.json` file per slot.
///
/// Writes go to a temp file that is synced and renamed over the target,
/// so a slot is either the old or the new value after a crash.
///
/// File I/O is blocking `std::fs` inside the async methods. Slots are small
/// and there is a single writer, so nothing is offloaded to a thread pool.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf, CoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(CoreError::Storage(format!("Invalid slot key '{key}'")));
        }
        Ok(self.root.join(format!("{key}.{EXTENSION}")))
    }

    fn slot_files(&self) -> Result<Vec<PathBuf>, CoreError> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == EXTENSION) {
                files.push(path);
            }
        }
        Ok(files)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl KeyValueStore for FileStore {
    fn name(&self) -> &str {
        "file"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let path = self.slot_path(key)?;
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CoreError> {
        let path = self.slot_path(key)?;
        let tmp_path = path.with_extension("json.tmp");
        {
            let mut file = std::fs::File::create(&tmp_path)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()?;
        }
        std::fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), CoreError> {
        let path = self.slot_path(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn clear(&self) -> Result<(), CoreError> {
        for path in self.slot_files()? {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>, CoreError> {
        let mut keys: Vec<String> = self
            .slot_files()?
            .iter()
            .filter_map(|p| p.file_stem().and_then(|s| s.to_str()).map(str::to_string))
            .collect();
        keys.sort();
        Ok(keys)
    }
}

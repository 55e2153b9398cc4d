use crate::domain::model::{Payload, RawResult};
use crate::domain::ports::Backend;
use crate::utils::error::{Result, RetrievalError};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

pub const DEFAULT_KEY: &str = "key";
pub const DEFAULT_LOCAL_PAYLOAD: &str = "data from local storage";

#[derive(Debug, Clone)]
enum LocalStore {
    Memory(HashMap<String, String>),
    /// Each entry is a file named after its key.
    Directory(PathBuf),
}

/// Synchronous backend reading one keyed entry from local storage.
#[derive(Debug, Clone)]
pub struct LocalBackend {
    store: LocalStore,
    key: String,
}

impl LocalBackend {
    /// Empty in-memory store; reads of `key` fail until an entry is set.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            store: LocalStore::Memory(HashMap::new()),
            key: key.into(),
        }
    }

    /// In-memory store already holding `value` under `key`.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let mut entries = HashMap::new();
        entries.insert(key.clone(), value.into());
        Self {
            store: LocalStore::Memory(entries),
            key,
        }
    }

    /// Directory-backed store; `key` names a file directly inside `base_path`.
    pub fn in_directory(base_path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            store: LocalStore::Directory(base_path.into()),
            key: key.into(),
        }
    }

    /// The key `fetch_raw` reads.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Stores an entry. Directory stores write the file named after `key`.
    pub fn set_item(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        match &mut self.store {
            LocalStore::Memory(entries) => {
                entries.insert(key.to_string(), value.into());
                Ok(())
            }
            LocalStore::Directory(base_path) => {
                let full_path = entry_path(base_path, key)?;
                std::fs::write(full_path, value.into())?;
                Ok(())
            }
        }
    }

    /// Reads an entry; a missing entry is `MissingEntry`.
    pub fn get_item(&self, key: &str) -> Result<Payload> {
        match &self.store {
            LocalStore::Memory(entries) => entries
                .get(key)
                .map(|value| Payload::from(value.as_str()))
                .ok_or_else(|| RetrievalError::MissingEntry {
                    key: key.to_string(),
                }),
            LocalStore::Directory(base_path) => read_entry(base_path, key),
        }
    }
}

impl Default for LocalBackend {
    fn default() -> Self {
        Self::with_entry(DEFAULT_KEY, DEFAULT_LOCAL_PAYLOAD)
    }
}

/// Keys must be a single plain file name so entries stay inside `base_path`.
fn entry_path(base_path: &Path, key: &str) -> Result<PathBuf> {
    let mut components = Path::new(key).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(base_path.join(key)),
        _ => Err(RetrievalError::InvalidConfigValue {
            field: "source.key".to_string(),
            value: key.to_string(),
            reason: "Key must be a plain name without path separators".to_string(),
        }),
    }
}

fn read_entry(base_path: &Path, key: &str) -> Result<Payload> {
    let full_path = entry_path(base_path, key)?;
    match std::fs::read_to_string(&full_path) {
        Ok(content) => Ok(Payload::from(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(RetrievalError::MissingEntry {
            key: key.to_string(),
        }),
        Err(e) => Err(RetrievalError::Io(e)),
    }
}

impl Backend for LocalBackend {
    fn fetch_raw(&self) -> RawResult {
        tracing::debug!("Reading local entry '{}'", self.key());
        RawResult::Ready(self.get_item(self.key()))
    }

    fn name(&self) -> &str {
        "local"
    }
}

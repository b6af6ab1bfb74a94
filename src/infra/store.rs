use std::collections::HashMap;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use crate::error::AppError;

/// Whole-collection JSON storage. Each collection lives in one file named
/// `<dir>/<collection>.json` holding a pretty-printed array, or in a
/// process-local map for tests and for hosts without a writable disk.
///
/// The store itself takes no locks across read/write pairs: callers do
/// read-modify-write, and two concurrent writers to the same collection are
/// last-writer-wins.
pub struct FlatStore {
    backend: Backend,
}

enum Backend {
    File { dir: PathBuf },
    Memory { collections: RwLock<HashMap<String, String>> },
}

impl FlatStore {
    /// Opens a file-backed store rooted at `dir`, creating it if needed.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self {
            backend: Backend::File { dir },
        })
    }

    /// A store that keeps every collection in memory and forgets it on drop.
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory {
                collections: RwLock::new(HashMap::new()),
            },
        }
    }

    /// Loads every item of a collection. A collection that was never written
    /// reads as empty; a file that exists but does not parse is a storage
    /// error, not an empty result.
    pub async fn read_all<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>, AppError> {
        let raw = match &self.backend {
            Backend::File { dir } => {
                match tokio::fs::read_to_string(dir.join(format!("{collection}.json"))).await {
                    Ok(raw) => raw,
                    Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
                    Err(err) => return Err(err.into()),
                }
            }
            Backend::Memory { collections } => {
                match collections.read().await.get(collection) {
                    Some(raw) => raw.clone(),
                    None => return Ok(Vec::new()),
                }
            }
        };

        Ok(serde_json::from_str(&raw)?)
    }

    /// Replaces a collection wholesale with `items`.
    pub async fn write_all<T: Serialize>(&self, collection: &str, items: &[T]) -> Result<(), AppError> {
        let raw = serde_json::to_string_pretty(items)?;

        match &self.backend {
            Backend::File { dir } => {
                tokio::fs::create_dir_all(dir).await?;
                tokio::fs::write(dir.join(format!("{collection}.json")), raw).await?;
            }
            Backend::Memory { collections } => {
                collections.write().await.insert(collection.to_string(), raw);
            }
        }

        Ok(())
    }
}

//! Concurrent in-memory source store with optional JSON snapshot.

use dashmap::DashMap;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

use async_trait::async_trait;

use crate::store::{SourceStore, StoreError, TrackedSource};

/// A thread-safe store for tracked sources.
///
/// When a snapshot path is configured, every mutation rewrites the
/// snapshot so a restarted process resumes from the last persisted
/// cycle.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<DashMap<Uuid, TrackedSource>>,
    snapshot_path: Option<PathBuf>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new(snapshot_path: Option<PathBuf>) -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
            snapshot_path,
        }
    }

    /// Load from a snapshot file if it exists.
    pub fn load_from_file(path: &Path) -> Result<Self, StoreError> {
        let store = Self::new(Some(path.to_path_buf()));
        if path.exists() {
            let file = File::open(path)?;
            let reader = BufReader::new(file);
            let map: HashMap<Uuid, TrackedSource> = serde_json::from_reader(reader)?;

            for (id, source) in map {
                store.inner.insert(id, source);
            }
            tracing::info!(sources = store.inner.len(), path = %path.display(), "Loaded source snapshot");
        }
        Ok(store)
    }

    /// Write the current contents to the snapshot file, if configured.
    pub fn save_to_file(&self) -> Result<(), StoreError> {
        if let Some(path) = &self.snapshot_path {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let file = File::create(path)?;
            let writer = BufWriter::new(file);

            // DashMap does not serialize directly; collect to a HashMap first.
            let map: HashMap<_, _> = self
                .inner
                .iter()
                .map(|r| (*r.key(), r.value().clone()))
                .collect();

            serde_json::to_writer(writer, &map)?;
        }
        Ok(())
    }

    /// Add a source. Seeding only; the monitoring cycle never inserts.
    pub fn insert(&self, source: TrackedSource) {
        self.inner.insert(source.id, source);
    }

    /// Fetch a single source by id.
    pub fn get(&self, id: &Uuid) -> Option<TrackedSource> {
        self.inner.get(id).map(|r| r.value().clone())
    }

    /// Number of tracked sources.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// True when no sources are tracked.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[async_trait]
impl SourceStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<TrackedSource>, StoreError> {
        Ok(self.inner.iter().map(|r| r.value().clone()).collect())
    }

    async fn update(&self, source: &TrackedSource) -> Result<(), StoreError> {
        if !self.inner.contains_key(&source.id) {
            return Err(StoreError::NotFound(source.id));
        }
        self.inner.insert(source.id, source.clone());
        self.save_to_file()
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        if self.inner.remove(&id).is_none() {
            return Err(StoreError::NotFound(id));
        }
        self.save_to_file()
    }
}

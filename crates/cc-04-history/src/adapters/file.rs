//! File-backed projection store.
//!
//! Persists the snapshot as a single bincode file, replaced atomically
//! via write-to-temp-then-rename so a crash mid-commit leaves the
//! previous snapshot intact. An advisory `fs2` lock on a sibling
//! `.lock` file keeps two processes from projecting into the same
//! snapshot.

use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;

use fs2::FileExt;
use parking_lot::RwLock;
use tracing::debug;

use crate::domain::{LedgerTransactionView, ProjectionSnapshot, ProjectionStoreError};
use crate::ports::ProjectionStore;

#[derive(Debug)]
pub struct FileProjectionStore {
    snapshot_path: PathBuf,
    /// Held for the lifetime of the store; the advisory lock releases on
    /// drop.
    _lock_file: File,
    cache: RwLock<ProjectionSnapshot>,
}

impl FileProjectionStore {
    /// Open (or create) the snapshot at `path` and take the advisory lock.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ProjectionStoreError> {
        let snapshot_path: PathBuf = path.into();
        if let Some(parent) = snapshot_path.parent() {
            fs::create_dir_all(parent).map_err(store_err)?;
        }

        let lock_path = snapshot_path.with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(store_err)?;
        lock_file.try_lock_exclusive().map_err(|e| {
            ProjectionStoreError::new(format!(
                "projection snapshot is locked by another process: {e}"
            ))
        })?;

        let cache = if snapshot_path.exists() {
            let bytes = fs::read(&snapshot_path).map_err(store_err)?;
            bincode::deserialize(&bytes).map_err(store_err)?
        } else {
            ProjectionSnapshot::default()
        };

        debug!(path = %snapshot_path.display(), "projection snapshot opened");
        Ok(Self {
            snapshot_path,
            _lock_file: lock_file,
            cache: RwLock::new(cache),
        })
    }

    fn persist(&self, snapshot: &ProjectionSnapshot) -> Result<(), ProjectionStoreError> {
        let bytes = bincode::serialize(snapshot).map_err(store_err)?;
        let tmp_path = self.snapshot_path.with_extension("tmp");
        fs::write(&tmp_path, bytes).map_err(store_err)?;
        fs::rename(&tmp_path, &self.snapshot_path).map_err(store_err)?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProjectionStore for FileProjectionStore {
    async fn checkpoint(&self) -> Result<Option<u64>, ProjectionStoreError> {
        Ok(self.cache.read().checkpoint)
    }

    async fn commit(
        &self,
        views: Vec<LedgerTransactionView>,
        checkpoint: u64,
    ) -> Result<(), ProjectionStoreError> {
        let mut cache = self.cache.write();
        let mut next = cache.clone();
        next.views.extend(views);
        next.checkpoint = Some(checkpoint);
        self.persist(&next)?;
        *cache = next;
        Ok(())
    }

    async fn replay(&self) -> Result<Vec<LedgerTransactionView>, ProjectionStoreError> {
        Ok(self.cache.read().views.clone())
    }

    async fn reset(&self) -> Result<(), ProjectionStoreError> {
        let mut cache = self.cache.write();
        let empty = ProjectionSnapshot::default();
        self.persist(&empty)?;
        *cache = empty;
        Ok(())
    }
}

fn store_err(e: impl std::fmt::Display) -> ProjectionStoreError {
    ProjectionStoreError::new(e.to_string())
}

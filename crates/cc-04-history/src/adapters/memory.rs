//! In-memory projection store for development and tests.

use parking_lot::RwLock;

use crate::domain::{LedgerTransactionView, ProjectionSnapshot, ProjectionStoreError};
use crate::ports::ProjectionStore;

#[derive(Default)]
pub struct InMemoryProjectionStore {
    snapshot: RwLock<ProjectionSnapshot>,
}

impl InMemoryProjectionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ProjectionStore for InMemoryProjectionStore {
    async fn checkpoint(&self) -> Result<Option<u64>, ProjectionStoreError> {
        Ok(self.snapshot.read().checkpoint)
    }

    async fn commit(
        &self,
        views: Vec<LedgerTransactionView>,
        checkpoint: u64,
    ) -> Result<(), ProjectionStoreError> {
        let mut snapshot = self.snapshot.write();
        snapshot.views.extend(views);
        snapshot.checkpoint = Some(checkpoint);
        Ok(())
    }

    async fn replay(&self) -> Result<Vec<LedgerTransactionView>, ProjectionStoreError> {
        Ok(self.snapshot.read().views.clone())
    }

    async fn reset(&self) -> Result<(), ProjectionStoreError> {
        *self.snapshot.write() = ProjectionSnapshot::default();
        Ok(())
    }
}

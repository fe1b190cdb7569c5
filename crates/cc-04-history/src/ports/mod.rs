//! # Projection Store Port
//!
//! Durable storage for the decoded transaction feed and its checkpoint.

use crate::domain::{LedgerTransactionView, ProjectionStoreError};

/// Abstract interface for projection persistence.
#[async_trait::async_trait]
pub trait ProjectionStore: Send + Sync {
    /// Last-processed block number, or `None` before the first commit.
    async fn checkpoint(&self) -> Result<Option<u64>, ProjectionStoreError>;

    /// Atomically append newly projected views and advance the
    /// checkpoint. A crash between the two must not be observable.
    async fn commit(
        &self,
        views: Vec<LedgerTransactionView>,
        checkpoint: u64,
    ) -> Result<(), ProjectionStoreError>;

    /// All projected views in ledger order.
    async fn replay(&self) -> Result<Vec<LedgerTransactionView>, ProjectionStoreError>;

    /// Discard all projection state; the next sync starts from genesis.
    async fn reset(&self) -> Result<(), ProjectionStoreError>;
}

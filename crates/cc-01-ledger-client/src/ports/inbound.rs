//! # Inbound Port (Driving Port)
//!
//! The API this subsystem offers to the registry, verifier, and history
//! projector.

use crate::domain::{ContractCall, LedgerError, SignerIdentity, ViewCall, ViewResult};
use shared_types::{Block, Hash, TransactionReceipt};

/// Typed access to the certificate ledger.
///
/// Every method that touches the network is a suspension point; callers
/// must not hold exclusive resources across these awaits. Submissions
/// block until the transaction is included and final per the ledger's
/// confirmation policy; external deadlines are the caller's concern.
#[async_trait::async_trait]
pub trait LedgerApi: Send + Sync {
    /// Submit a state-changing transaction authored by `signer` and wait
    /// for confirmation.
    ///
    /// Program-level rejection (e.g. the duplicate-hash guard) returns
    /// `LedgerError::Rejected` and is never retried here.
    async fn submit_transaction(
        &self,
        signer: &SignerIdentity,
        call: ContractCall,
    ) -> Result<TransactionReceipt, LedgerError>;

    /// Execute a read-only view call against current canonical state.
    async fn call_view(&self, view: ViewCall) -> Result<ViewResult, LedgerError>;

    /// Number of blocks on the chain (head block number + 1).
    async fn block_count(&self) -> Result<u64, LedgerError>;

    /// Fetch a block with its full transaction list, in inclusion order.
    async fn block_with_transactions(&self, number: u64) -> Result<Block, LedgerError>;

    /// Fetch the execution receipt (with raw event logs) for a transaction.
    async fn transaction_receipt(&self, tx_hash: Hash)
        -> Result<TransactionReceipt, LedgerError>;
}

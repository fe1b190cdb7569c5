//! History projection service.

use std::sync::Arc;

use tracing::debug;

use cc_01_ledger_client::{decode_certificate_added, LedgerApi};
use shared_types::{format_display_units, Block, CertificateRecord};

use crate::domain::{LedgerTransactionView, ProjectionError, UNKNOWN_LABEL};
use crate::ports::ProjectionStore;

/// Milliseconds per ledger clock second.
const MILLIS_PER_SECOND: u64 = 1000;

/// Builds and maintains the ordered transaction feed.
pub struct HistoryProjector {
    ledger: Arc<dyn LedgerApi>,
    store: Arc<dyn ProjectionStore>,
}

impl HistoryProjector {
    pub fn new(ledger: Arc<dyn LedgerApi>, store: Arc<dyn ProjectionStore>) -> Self {
        Self { ledger, store }
    }

    /// Scan blocks past the checkpoint and commit their views.
    ///
    /// Returns the number of newly projected views. Idempotent: with no
    /// new ledger activity, nothing is appended and the checkpoint is
    /// untouched.
    pub async fn sync(&self) -> Result<u64, ProjectionError> {
        let count = self.ledger.block_count().await?;
        if count == 0 {
            return Ok(0);
        }
        let head = count - 1;
        let start = match self.store.checkpoint().await? {
            Some(checkpoint) if checkpoint >= head => return Ok(0),
            Some(checkpoint) => checkpoint + 1,
            None => 0,
        };

        let mut views = Vec::new();
        for number in start..=head {
            let block = self.ledger.block_with_transactions(number).await?;
            self.project_block(&block, &mut views).await?;
        }

        let appended = views.len() as u64;
        self.store.commit(views, head).await?;
        debug!(from = start, to = head, appended, "projection advanced");
        Ok(appended)
    }

    /// The complete ordered feed: sync to head, then replay.
    pub async fn history(&self) -> Result<Vec<LedgerTransactionView>, ProjectionError> {
        self.sync().await?;
        Ok(self.store.replay().await?)
    }

    /// Stateless from-genesis recomputation, bypassing the store.
    ///
    /// The oracle that `history()` must equal; also what the original
    /// per-call design computed every time.
    pub async fn full_rescan(&self) -> Result<Vec<LedgerTransactionView>, ProjectionError> {
        let count = self.ledger.block_count().await?;
        let mut views = Vec::new();
        for number in 0..count {
            let block = self.ledger.block_with_transactions(number).await?;
            self.project_block(&block, &mut views).await?;
        }
        Ok(views)
    }

    /// All decoded certificate records in ledger order.
    ///
    /// Consumed by index reconciliation; scans the ledger directly so the
    /// result reflects confirmed state even when the projection store is
    /// behind.
    pub async fn certificate_records(&self) -> Result<Vec<CertificateRecord>, ProjectionError> {
        let count = self.ledger.block_count().await?;
        let mut records = Vec::new();
        for number in 0..count {
            let block = self.ledger.block_with_transactions(number).await?;
            for tx in &block.transactions {
                let receipt = self.ledger.transaction_receipt(tx.hash).await?;
                if let Some(event) = receipt.logs.iter().filter_map(decode_certificate_added).last()
                {
                    records.push(event.into());
                }
            }
        }
        Ok(records)
    }

    /// Project one block's transactions, in inclusion order.
    async fn project_block(
        &self,
        block: &Block,
        out: &mut Vec<LedgerTransactionView>,
    ) -> Result<(), ProjectionError> {
        for tx in &block.transactions {
            let receipt = self.ledger.transaction_receipt(tx.hash).await?;
            // At most one certificate event per transaction is expected;
            // if several decode, the last one over the log list wins.
            let decoded = receipt
                .logs
                .iter()
                .filter_map(decode_certificate_added)
                .last();
            let (student_name, certificate_hash) = match decoded {
                Some(event) => (event.student_name, event.certificate_hash),
                None => (UNKNOWN_LABEL.to_owned(), UNKNOWN_LABEL.to_owned()),
            };
            out.push(LedgerTransactionView {
                tx_hash: tx.hash,
                from: tx.from,
                to: tx.to,
                value_display: format_display_units(tx.value),
                block_timestamp_millis: block.header.timestamp * MILLIS_PER_SECOND,
                block_number: block.header.number,
                student_name,
                certificate_hash,
            });
        }
        Ok(())
    }
}

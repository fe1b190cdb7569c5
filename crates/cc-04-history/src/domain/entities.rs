//! Projected transaction views.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Hash};

/// Placeholder for transactions that carry no decodable certificate event.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// One denormalized row of the transaction feed.
///
/// Derived and recomputable; never a source of truth. Monetary value is
/// pre-converted to the display unit so the feed renders without further
/// arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerTransactionView {
    /// Transaction hash.
    pub tx_hash: Hash,
    /// Sender address.
    pub from: Address,
    /// Recipient address (`None` for contract creation).
    pub to: Option<Address>,
    /// Transferred value in display units, decimal string.
    pub value_display: String,
    /// Block timestamp in milliseconds.
    pub block_timestamp_millis: u64,
    /// Number of the including block.
    pub block_number: u64,
    /// Decoded holder name, or [`UNKNOWN_LABEL`].
    pub student_name: String,
    /// Decoded certificate hash, or [`UNKNOWN_LABEL`].
    pub certificate_hash: String,
}

impl LedgerTransactionView {
    /// Whether this row was decoded from a certificate event.
    pub fn is_certificate(&self) -> bool {
        self.certificate_hash != UNKNOWN_LABEL
    }
}

/// Durable projection state: the decoded views plus the number of the
/// last block they cover. Committed atomically so a partially applied
/// sync can never be observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProjectionSnapshot {
    /// Last-processed block number; `None` before the first sync.
    pub checkpoint: Option<u64>,
    /// All projected views in ledger order.
    pub views: Vec<LedgerTransactionView>,
}

//! # Core Domain Entities
//!
//! Defines the ledger and certificate entities used across all subsystems.
//!
//! ## Clusters
//!
//! - **Ledger**: `Block`, `BlockHeader`, `SignedTransaction`, `TransactionReceipt`, `LogEntry`
//! - **Certificates**: `CertificateRecord`, `CertificateAdded`

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use sha3::{Digest, Keccak256};

// Re-export U256 from primitive-types for use across all subsystems
pub use primitive_types::U256;

// =============================================================================
// CLUSTER A: THE LEDGER
// =============================================================================

/// A 32-byte hash (Keccak-256).
pub type Hash = [u8; 32];

/// A 64-byte ECDSA signature (r || s).
pub type Signature = [u8; 64];

/// A 20-byte Ethereum-style address.
pub type Address = [u8; 20];

/// The header of a block containing metadata and chain linkage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BlockHeader {
    /// Block number in the chain (genesis is 0).
    pub number: u64,
    /// Hash of the parent block (creates the chain linkage).
    pub parent_hash: Hash,
    /// Unix timestamp (seconds) when the block was sealed.
    pub timestamp: u64,
    /// The account that authored this block.
    pub proposer: Address,
}

impl BlockHeader {
    /// Compute the header hash.
    pub fn hash(&self) -> Hash {
        let mut hasher = Keccak256::new();
        hasher.update(self.number.to_le_bytes());
        hasher.update(self.parent_hash);
        hasher.update(self.timestamp.to_le_bytes());
        hasher.update(self.proposer);
        hasher.finalize().into()
    }
}

/// A sealed block with its transactions in inclusion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Block {
    /// The block header.
    pub header: BlockHeader,
    /// All transactions in this block, in inclusion order.
    pub transactions: Vec<SignedTransaction>,
}

/// A signed transaction as included in a block.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTransaction {
    /// Transaction hash (computed over the signed fields).
    pub hash: Hash,
    /// Sender address.
    pub from: Address,
    /// Recipient address (`None` for contract creation).
    pub to: Option<Address>,
    /// Transferred value in the ledger's smallest unit.
    pub value: U256,
    /// Sender's nonce to prevent replay.
    pub nonce: u64,
    /// Gas limit for this transaction.
    pub gas_limit: u64,
    /// Transaction payload (contract call data).
    pub data: Vec<u8>,
    /// ECDSA signature over the transaction fields.
    #[serde_as(as = "Bytes")]
    pub signature: Signature,
}

impl SignedTransaction {
    /// Compute the transaction hash over the signed fields.
    pub fn compute_hash(
        from: &Address,
        to: Option<&Address>,
        value: &U256,
        nonce: u64,
        data: &[u8],
    ) -> Hash {
        let mut hasher = Keccak256::new();
        hasher.update(from);
        if let Some(to) = to {
            hasher.update(to);
        }
        let mut value_bytes = [0u8; 32];
        value.to_big_endian(&mut value_bytes);
        hasher.update(value_bytes);
        hasher.update(nonce.to_le_bytes());
        hasher.update(data);
        hasher.finalize().into()
    }
}

/// Execution receipt for an included transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TransactionReceipt {
    /// Hash of the transaction this receipt belongs to.
    pub tx_hash: Hash,
    /// Number of the block that includes the transaction.
    pub block_number: u64,
    /// Position of the transaction within its block.
    pub tx_index: u32,
    /// Event logs emitted during execution, in emission order.
    pub logs: Vec<LogEntry>,
}

/// A raw event log attached to a transaction receipt.
///
/// `topics[0]` identifies the event type (Keccak-256 of the event
/// signature); `data` is the encoded event payload. Logs from foreign
/// contracts may share a block with certificate logs and carry arbitrary
/// topics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LogEntry {
    /// Address of the contract that emitted the log.
    pub address: Address,
    /// Indexed event topics; `topics[0]` is the event signature hash.
    pub topics: Vec<Hash>,
    /// Encoded event payload.
    pub data: Vec<u8>,
}

// =============================================================================
// CLUSTER B: CERTIFICATES
// =============================================================================

/// A certificate record as stored by the ledger program.
///
/// Exactly one record per `certificate_hash` ever exists on the ledger;
/// the ledger program rejects a second write with the same hash. Records
/// are created once and never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateRecord {
    /// Opaque content identifier, unique key on the ledger.
    pub certificate_hash: String,
    /// Display name of the certificate holder.
    pub student_name: String,
    /// Ledger-assigned issuance timestamp, seconds since epoch.
    pub issued_at: u64,
}

/// The decoded `CertificateAdded(string,string,uint256)` event payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateAdded {
    /// Display name of the certificate holder.
    pub student_name: String,
    /// Opaque content identifier registered on the ledger.
    pub certificate_hash: String,
    /// Ledger-assigned issuance timestamp, seconds since epoch.
    pub issued_at: u64,
}

impl From<CertificateAdded> for CertificateRecord {
    fn from(event: CertificateAdded) -> Self {
        Self {
            certificate_hash: event.certificate_hash,
            student_name: event.student_name,
            issued_at: event.issued_at,
        }
    }
}

//! Error types for ledger access.

use shared_types::{short_hash, Hash};

/// Errors surfaced by the ledger client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The ledger program rejected the submission. Never retried by the
    /// client; retry policy belongs to the caller.
    Rejected { reason: RejectionReason },
    /// Network or node fault; transient, no state change guaranteed.
    Unavailable { message: String },
    /// Requested block number is beyond the current head.
    BlockOutOfRange { number: u64, head: u64 },
    /// No receipt is stored for the given transaction hash.
    ReceiptNotFound { tx_hash: Hash },
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected { reason } => write!(f, "Ledger rejected submission: {}", reason),
            Self::Unavailable { message } => write!(f, "Ledger unavailable: {}", message),
            Self::BlockOutOfRange { number, head } => {
                write!(f, "Block {} out of range (head: {})", number, head)
            }
            Self::ReceiptNotFound { tx_hash } => {
                write!(f, "Receipt not found for {}", short_hash(tx_hash))
            }
        }
    }
}

impl std::error::Error for LedgerError {}

/// Structured reason for a program-level rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// The duplicate-hash guard tripped: a record already exists under
    /// this hash.
    CertificateExists { certificate_hash: String },
    /// Any other revert reason reported by the program.
    Other(String),
}

impl std::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CertificateExists { certificate_hash } => {
                write!(f, "certificate hash already registered: {}", certificate_hash)
            }
            Self::Other(reason) => write!(f, "{}", reason),
        }
    }
}

/// Errors resolving a signing identity.
///
/// These are deployment/configuration faults, not data errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignerError {
    /// No signing identity is configured.
    NoSignerAvailable,
    /// The configured key material is unusable.
    InvalidKey { message: String },
}

impl std::fmt::Display for SignerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSignerAvailable => write!(f, "no signing identity available"),
            Self::InvalidKey { message } => write!(f, "invalid signing key: {}", message),
        }
    }
}

impl std::error::Error for SignerError {}

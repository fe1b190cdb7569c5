//! # Outbound Ports (Driven Ports)
//!
//! SPIs the ledger client requires from its environment.

use crate::domain::{SignerError, SignerIdentity};

/// Supplies the account used to author ledger transactions.
///
/// Absence of a signer is a deployment/configuration fault
/// (`SignerError::NoSignerAvailable`), not a data error.
#[async_trait::async_trait]
pub trait SignerProvider: Send + Sync {
    /// Resolve the signing identity for outgoing transactions.
    async fn resolve(&self) -> Result<SignerIdentity, SignerError>;
}

/// Abstract interface for time operations (for testability).
pub trait TimeSource: Send + Sync {
    /// Current timestamp in seconds since epoch.
    fn now(&self) -> u64;
}

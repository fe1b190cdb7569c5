//! Registration outcomes.

use std::time::Duration;

use shared_types::{CertificateRecord, Hash};

/// Result of a registration attempt that reached a decision.
///
/// `DuplicateCertificate` and `Indeterminate` are decisions, not errors:
/// the former is terminal for this hash, the latter means the
/// confirmation wait exceeded the caller's deadline and the outcome on
/// the ledger is unknown — a blind retry of the same hash may be
/// correctly rejected as duplicate if the original write eventually
/// landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// Ledger confirmed and the index mirror row was written.
    Confirmed {
        record: CertificateRecord,
        tx_hash: Hash,
    },
    /// The ledger rejected the write: a record already exists under this
    /// hash. No index write was attempted.
    DuplicateCertificate { certificate_hash: String },
    /// Ledger confirmed but the mirror write failed. The certificate IS
    /// registered; the index gap awaits reconciliation.
    PartialSuccess {
        record: CertificateRecord,
        tx_hash: Hash,
        mirror_fault: MirrorFault,
    },
    /// The confirmation wait exceeded the deadline; outcome unknown.
    Indeterminate { deadline: Duration },
}

impl RegistrationOutcome {
    /// Whether the authoritative (ledger) write is known to have landed.
    pub fn ledger_confirmed(&self) -> bool {
        matches!(
            self,
            Self::Confirmed { .. } | Self::PartialSuccess { .. }
        )
    }
}

/// Why a mirror write failed after ledger confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MirrorFault {
    /// The index uniqueness constraint tripped — a row already existed,
    /// typically left by an earlier attempt whose ledger write succeeded.
    Duplicate,
    /// The store was unreachable or failed the insert.
    Unavailable { message: String },
}

impl std::fmt::Display for MirrorFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Duplicate => write!(f, "index row already present"),
            Self::Unavailable { message } => write!(f, "index store failure: {}", message),
        }
    }
}

/// Summary of a reconciliation pass over confirmed ledger records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconciliationReport {
    /// Rows inserted by this pass.
    pub repaired: usize,
    /// Records whose mirror row was already present.
    pub already_mirrored: usize,
    /// Records whose insert failed; retried on the next pass.
    pub failed: usize,
}

//! Domain layer: verification result and errors.

/// A certificate resolved from the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedCertificate {
    /// Holder name as recorded on the ledger.
    pub student_name: String,
    /// Issuance time converted from the ledger's seconds-resolution clock
    /// to the caller's millisecond convention.
    pub issued_at_millis: u64,
}

/// Errors surfaced by the verification read path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    /// The queried hash is empty. Rejected before any ledger interaction.
    InvalidInput,
    /// Network/node fault during the view call; transient.
    LedgerUnavailable { message: String },
}

impl std::fmt::Display for VerificationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "Certificate hash must not be empty"),
            Self::LedgerUnavailable { message } => write!(f, "Ledger unavailable: {}", message),
        }
    }
}

impl std::error::Error for VerificationError {}

//! Error types for the registration write path.

/// Errors that prevent a registration attempt from reaching a decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// A required field is missing or empty. Rejected before any ledger
    /// interaction; recoverable by resubmitting corrected input.
    InvalidInput { field: &'static str },
    /// No signing identity is configured. A deployment fault, not
    /// retryable without operator intervention.
    NoSignerAvailable,
    /// The ledger rejected the write for a reason other than the
    /// duplicate guard.
    LedgerRejected { reason: String },
    /// Network/node fault during the ledger call; transient, no state
    /// change guaranteed.
    LedgerUnavailable { message: String },
}

impl std::fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field } => write!(f, "Required field is empty: {}", field),
            Self::NoSignerAvailable => write!(f, "No signing identity available"),
            Self::LedgerRejected { reason } => write!(f, "Ledger rejected the write: {}", reason),
            Self::LedgerUnavailable { message } => write!(f, "Ledger unavailable: {}", message),
        }
    }
}

impl std::error::Error for RegistrationError {}

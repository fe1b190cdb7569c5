//! Error types for history projection.

use cc_01_ledger_client::LedgerError;

/// Errors surfaced by the projector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    /// A ledger call failed mid-scan; no partial state was committed.
    LedgerUnavailable { message: String },
    /// The projection store failed.
    StoreFailure { message: String },
}

impl std::fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LedgerUnavailable { message } => {
                write!(f, "Ledger unavailable during scan: {}", message)
            }
            Self::StoreFailure { message } => {
                write!(f, "Projection store failure: {}", message)
            }
        }
    }
}

impl std::error::Error for ProjectionError {}

impl From<LedgerError> for ProjectionError {
    fn from(err: LedgerError) -> Self {
        Self::LedgerUnavailable {
            message: err.to_string(),
        }
    }
}

impl From<ProjectionStoreError> for ProjectionError {
    fn from(err: ProjectionStoreError) -> Self {
        Self::StoreFailure {
            message: err.message,
        }
    }
}

/// Infrastructure-level projection store fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("projection store failure: {message}")]
pub struct ProjectionStoreError {
    pub message: String,
}

impl ProjectionStoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

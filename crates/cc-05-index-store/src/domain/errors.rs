//! Error types for the index store.

/// Errors surfaced by index store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// Uniqueness violation: a row already exists for this hash. The
    /// later insert is rejected; existing rows are never overwritten.
    DuplicateHash { certificate_hash: String },
    /// The store is unreachable or failed the operation.
    Unavailable { message: String },
}

impl std::fmt::Display for IndexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateHash { certificate_hash } => {
                write!(f, "Index row already exists for hash: {}", certificate_hash)
            }
            Self::Unavailable { message } => write!(f, "Index store unavailable: {}", message),
        }
    }
}

impl std::error::Error for IndexError {}

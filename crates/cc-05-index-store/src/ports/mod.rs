//! # Store Ports
//!
//! Abstract interfaces over the off-chain index collections.

use crate::domain::{CertificateIndexEntry, DocumentMetadata, IndexError};

/// Insert-with-uniqueness and lookup over certificate mirror rows.
#[async_trait::async_trait]
pub trait CertificateIndexStore: Send + Sync {
    /// Insert a mirror row.
    ///
    /// Rejects with `IndexError::DuplicateHash` when a row already exists
    /// for the entry's `certificate_hash`; concurrent conflicting inserts
    /// resolve by rejecting the later one, never by overwriting.
    async fn insert(&self, entry: CertificateIndexEntry) -> Result<(), IndexError>;

    /// Look up the mirror row for a hash.
    async fn find_by_hash(
        &self,
        certificate_hash: &str,
    ) -> Result<Option<CertificateIndexEntry>, IndexError>;

    /// All rows in insertion order.
    async fn list(&self) -> Result<Vec<CertificateIndexEntry>, IndexError>;

    /// Number of rows in the collection.
    async fn count(&self) -> Result<usize, IndexError>;
}

/// Uploaded-document metadata keyed by an opaque identifier with a
/// foreign reference to the certificate hash.
#[async_trait::async_trait]
pub trait DocumentMetadataStore: Send + Sync {
    /// Record metadata for an uploaded document.
    async fn put_document(&self, document: DocumentMetadata) -> Result<(), IndexError>;

    /// All documents referencing `hash_id`, in upload order.
    async fn documents_for(&self, hash_id: &str) -> Result<Vec<DocumentMetadata>, IndexError>;
}

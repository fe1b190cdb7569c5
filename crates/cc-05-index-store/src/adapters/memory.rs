//! In-memory index store.
//!
//! Backs development and tests. Production deployments swap in a
//! database-backed adapter behind the same ports.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::domain::{CertificateIndexEntry, DocumentMetadata, IndexError};
use crate::ports::{CertificateIndexStore, DocumentMetadataStore};

/// Hash-keyed in-memory store with insertion-ordered listing.
#[derive(Default)]
pub struct InMemoryIndexStore {
    state: RwLock<IndexState>,
}

#[derive(Default)]
struct IndexState {
    /// certificate_hash → position in `rows`.
    by_hash: HashMap<String, usize>,
    /// Rows in insertion order.
    rows: Vec<CertificateIndexEntry>,
    /// Document metadata in upload order.
    documents: Vec<DocumentMetadata>,
}

impl InMemoryIndexStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl CertificateIndexStore for InMemoryIndexStore {
    async fn insert(&self, entry: CertificateIndexEntry) -> Result<(), IndexError> {
        let mut state = self.state.write();
        if state.by_hash.contains_key(&entry.certificate_hash) {
            return Err(IndexError::DuplicateHash {
                certificate_hash: entry.certificate_hash,
            });
        }
        debug!(certificate_hash = %entry.certificate_hash, "mirror row inserted");
        let position = state.rows.len();
        state.by_hash.insert(entry.certificate_hash.clone(), position);
        state.rows.push(entry);
        Ok(())
    }

    async fn find_by_hash(
        &self,
        certificate_hash: &str,
    ) -> Result<Option<CertificateIndexEntry>, IndexError> {
        let state = self.state.read();
        Ok(state
            .by_hash
            .get(certificate_hash)
            .map(|&position| state.rows[position].clone()))
    }

    async fn list(&self) -> Result<Vec<CertificateIndexEntry>, IndexError> {
        Ok(self.state.read().rows.clone())
    }

    async fn count(&self) -> Result<usize, IndexError> {
        Ok(self.state.read().rows.len())
    }
}

#[async_trait::async_trait]
impl DocumentMetadataStore for InMemoryIndexStore {
    async fn put_document(&self, document: DocumentMetadata) -> Result<(), IndexError> {
        self.state.write().documents.push(document);
        Ok(())
    }

    async fn documents_for(&self, hash_id: &str) -> Result<Vec<DocumentMetadata>, IndexError> {
        Ok(self
            .state
            .read()
            .documents
            .iter()
            .filter(|d| d.hash_id == hash_id)
            .cloned()
            .collect())
    }
}

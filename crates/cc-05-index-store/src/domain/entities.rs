//! Index row entities.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Off-chain mirror row for a confirmed ledger certificate record.
///
/// Created by the registry immediately after ledger confirmation; never
/// updated. If present, it corresponds to a confirmed record on the
/// ledger — the converse is not guaranteed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateIndexEntry {
    /// Index-local row identifier.
    pub id: Uuid,
    /// Holder name as recorded on the ledger.
    pub student_name: String,
    /// Certificate hash; unique key of the collection.
    pub certificate_hash: String,
    /// Ledger-assigned issuance timestamp, seconds since epoch.
    pub issued_at: u64,
    /// Index clock at insertion, seconds since epoch.
    pub inserted_at: u64,
}

impl CertificateIndexEntry {
    /// Build a fresh row for a confirmed record.
    pub fn new(
        student_name: String,
        certificate_hash: String,
        issued_at: u64,
        inserted_at: u64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            student_name,
            certificate_hash,
            issued_at,
            inserted_at,
        }
    }
}

/// Metadata for an uploaded certificate document.
///
/// `hash_id` is the foreign reference into the certificate collection.
/// The document bytes themselves are stored elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Opaque document identifier.
    pub id: Uuid,
    /// Certificate hash the document belongs to.
    pub hash_id: String,
    /// Original file name as uploaded.
    pub file_name: String,
    /// MIME type reported at upload.
    pub content_type: String,
    /// Upload timestamp, seconds since epoch.
    pub uploaded_at: u64,
}

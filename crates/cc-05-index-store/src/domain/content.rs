//! Document content hashing.

use sha2::{Digest, Sha256};

/// Derive the certificate hash for a document's bytes.
///
/// Lowercase hex SHA-256. The ledger treats the result as an opaque
/// string; this helper only fixes the convention the upload path uses.
pub fn content_hash(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

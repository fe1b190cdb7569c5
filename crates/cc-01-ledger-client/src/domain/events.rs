//! `CertificateAdded` event identification and decoding.
//!
//! Blocks may interleave logs from arbitrary contracts. A log is a
//! certificate event only when `topics[0]` matches the event signature
//! topic AND its payload decodes; everything else yields `None`. Decoding
//! never errors, so unknown logs are ignored explicitly rather than via a
//! catch-and-skip pattern.

use sha3::{Digest, Keccak256};
use shared_types::{CertificateAdded, Hash, LogEntry};

/// Canonical signature of the certificate registration event.
const CERTIFICATE_ADDED_SIGNATURE: &[u8] = b"CertificateAdded(string,string,uint256)";

/// Topic identifying `CertificateAdded` logs (Keccak-256 of the signature).
pub fn certificate_added_topic() -> Hash {
    Keccak256::digest(CERTIFICATE_ADDED_SIGNATURE).into()
}

/// Attempt to decode a raw log as a `CertificateAdded` event.
///
/// Returns `None` for logs whose first topic does not match the event
/// signature or whose payload does not decode.
pub fn decode_certificate_added(log: &LogEntry) -> Option<CertificateAdded> {
    if log.topics.first() != Some(&certificate_added_topic()) {
        return None;
    }
    bincode::deserialize(&log.data).ok()
}

//! # Certificate Verification Subsystem (cc-03)
//!
//! The read path: resolves a certificate hash to its holder name and
//! issuance time strictly from the ledger, never from the off-chain
//! index. Verification therefore reflects the ledger's current canonical
//! state even when the index mirror is stale or missing, and a confirmed
//! registration is observed by all subsequent verifications of the same
//! hash (ledger read-after-write consistency).
//!
//! Absence is signaled by the view's explicit `exists` flag; a missing
//! hash is a valid negative result (`Ok(None)`), not an error.

pub mod domain;
pub mod service;

pub use domain::{VerificationError, VerifiedCertificate};
pub use service::CertificateVerifier;

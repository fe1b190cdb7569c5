//! Typed contract calls and view results.
//!
//! The certificate program exposes one state-changing method and one view
//! function; both are modeled as closed enums so call data is encoded and
//! dispatched without stringly-typed method names.

use serde::{Deserialize, Serialize};
use shared_types::Address;

/// A state-changing call to the certificate program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractCall {
    /// Register a certificate record under `certificate_hash`.
    AddCertificate {
        student_name: String,
        certificate_hash: String,
    },
}

/// A read-only call to the certificate program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewCall {
    /// Look up the record stored under `certificate_hash`.
    VerifyCertificate { certificate_hash: String },
}

/// Decoded result of a view call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewResult {
    /// Result of `ViewCall::VerifyCertificate`.
    Certificate(CertificateView),
}

/// The certificate program's view of a single hash.
///
/// `exists` is the dedicated absence indicator: an unknown key returns
/// `exists == false` with zeroed remaining fields, so callers never have
/// to infer absence from field emptiness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CertificateView {
    /// Whether a record is stored under the queried hash.
    pub exists: bool,
    /// Holder name; empty when `exists` is false.
    pub student_name: String,
    /// Issuance timestamp in ledger seconds; zero when `exists` is false.
    pub issued_at: u64,
}

/// A resolved signing identity used to author ledger transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignerIdentity {
    /// The account address transactions are sent from.
    pub address: Address,
}

//! Verification service.

use std::sync::Arc;

use tracing::debug;

use cc_01_ledger_client::{LedgerApi, ViewCall, ViewResult};

use crate::domain::{VerificationError, VerifiedCertificate};

/// Milliseconds per ledger clock second.
const MILLIS_PER_SECOND: u64 = 1000;

/// The ledger-authoritative read path.
pub struct CertificateVerifier {
    ledger: Arc<dyn LedgerApi>,
}

impl CertificateVerifier {
    pub fn new(ledger: Arc<dyn LedgerApi>) -> Self {
        Self { ledger }
    }

    /// Resolve a certificate hash against the ledger's canonical state.
    ///
    /// Returns `Ok(None)` when no record exists — a valid negative
    /// result, distinguished from errors.
    pub async fn verify(
        &self,
        certificate_hash: &str,
    ) -> Result<Option<VerifiedCertificate>, VerificationError> {
        if certificate_hash.is_empty() {
            return Err(VerificationError::InvalidInput);
        }

        let result = self
            .ledger
            .call_view(ViewCall::VerifyCertificate {
                certificate_hash: certificate_hash.to_owned(),
            })
            .await
            .map_err(|e| VerificationError::LedgerUnavailable {
                message: e.to_string(),
            })?;

        let ViewResult::Certificate(view) = result;
        if !view.exists {
            debug!(certificate_hash, "no record on ledger");
            return Ok(None);
        }

        Ok(Some(VerifiedCertificate {
            student_name: view.student_name,
            issued_at_millis: view.issued_at * MILLIS_PER_SECOND,
        }))
    }
}

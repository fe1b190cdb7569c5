//! Registration service.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use cc_01_ledger_client::{
    decode_certificate_added, ContractCall, LedgerApi, LedgerError, RejectionReason,
    SignerError, SignerProvider, TimeSource, ViewCall, ViewResult,
};
use cc_05_index_store::{CertificateIndexEntry, CertificateIndexStore, IndexError};
use shared_types::{short_hash, CertificateRecord, TransactionReceipt};

use crate::domain::{
    MirrorFault, ReconciliationReport, RegistrationError, RegistrationOutcome,
};

/// The certificate write path.
///
/// Holds shared references to its collaborators; no mutual exclusion is
/// imposed between concurrent registrations — the ledger's own total
/// ordering of writes decides races, with exactly one of two concurrent
/// same-hash attempts confirmed and the other rejected.
pub struct CertificateRegistry {
    ledger: Arc<dyn LedgerApi>,
    signer: Arc<dyn SignerProvider>,
    index: Arc<dyn CertificateIndexStore>,
    time: Arc<dyn TimeSource>,
    confirmation_deadline: Duration,
}

impl CertificateRegistry {
    pub fn new(
        ledger: Arc<dyn LedgerApi>,
        signer: Arc<dyn SignerProvider>,
        index: Arc<dyn CertificateIndexStore>,
        time: Arc<dyn TimeSource>,
        confirmation_deadline: Duration,
    ) -> Self {
        Self {
            ledger,
            signer,
            index,
            time,
            confirmation_deadline,
        }
    }

    /// Register a certificate: ledger write first, index mirror second.
    ///
    /// The hash format is opaque here — any non-empty string is accepted,
    /// matching the ledger program's own laxity.
    pub async fn register(
        &self,
        student_name: &str,
        certificate_hash: &str,
    ) -> Result<RegistrationOutcome, RegistrationError> {
        if student_name.is_empty() {
            return Err(RegistrationError::InvalidInput {
                field: "student_name",
            });
        }
        if certificate_hash.is_empty() {
            return Err(RegistrationError::InvalidInput {
                field: "certificate_hash",
            });
        }

        let identity = self.signer.resolve().await.map_err(|e| match e {
            SignerError::NoSignerAvailable => RegistrationError::NoSignerAvailable,
            SignerError::InvalidKey { message } => {
                warn!(%message, "signing key unusable");
                RegistrationError::NoSignerAvailable
            }
        })?;

        let call = ContractCall::AddCertificate {
            student_name: student_name.to_owned(),
            certificate_hash: certificate_hash.to_owned(),
        };
        let submission = self.ledger.submit_transaction(&identity, call);
        let receipt = match tokio::time::timeout(self.confirmation_deadline, submission).await {
            Err(_) => {
                warn!(
                    certificate_hash,
                    deadline_ms = self.confirmation_deadline.as_millis() as u64,
                    "confirmation wait exceeded deadline; outcome unknown"
                );
                return Ok(RegistrationOutcome::Indeterminate {
                    deadline: self.confirmation_deadline,
                });
            }
            Ok(Err(LedgerError::Rejected {
                reason: RejectionReason::CertificateExists { certificate_hash },
            })) => {
                // Primary guard: terminal for this hash, no index write.
                return Ok(RegistrationOutcome::DuplicateCertificate { certificate_hash });
            }
            Ok(Err(LedgerError::Rejected { reason })) => {
                return Err(RegistrationError::LedgerRejected {
                    reason: reason.to_string(),
                });
            }
            Ok(Err(e)) => {
                return Err(RegistrationError::LedgerUnavailable {
                    message: e.to_string(),
                });
            }
            Ok(Ok(receipt)) => receipt,
        };

        let record = self.confirmed_record(&receipt, certificate_hash).await?;
        info!(
            certificate_hash,
            tx = %short_hash(&receipt.tx_hash),
            block = receipt.block_number,
            "ledger write confirmed"
        );

        self.mirror(record, receipt).await
    }

    /// Mirror a confirmed record into the index.
    ///
    /// Any failure here is a `PartialSuccess`: the authoritative write
    /// already landed and must be reported as such.
    async fn mirror(
        &self,
        record: CertificateRecord,
        receipt: TransactionReceipt,
    ) -> Result<RegistrationOutcome, RegistrationError> {
        let entry = CertificateIndexEntry::new(
            record.student_name.clone(),
            record.certificate_hash.clone(),
            record.issued_at,
            self.time.now(),
        );
        match self.index.insert(entry).await {
            Ok(()) => Ok(RegistrationOutcome::Confirmed {
                record,
                tx_hash: receipt.tx_hash,
            }),
            Err(IndexError::DuplicateHash { .. }) => {
                // Secondary guard: a row left by an earlier attempt whose
                // mirror failed. The certificate is freshly confirmed on
                // the ledger — this is NOT a duplicate registration.
                warn!(
                    certificate_hash = %record.certificate_hash,
                    "index row already present after ledger confirmation"
                );
                Ok(RegistrationOutcome::PartialSuccess {
                    record,
                    tx_hash: receipt.tx_hash,
                    mirror_fault: MirrorFault::Duplicate,
                })
            }
            Err(IndexError::Unavailable { message }) => {
                warn!(
                    certificate_hash = %record.certificate_hash,
                    %message,
                    "index mirror write failed; awaiting reconciliation"
                );
                Ok(RegistrationOutcome::PartialSuccess {
                    record,
                    tx_hash: receipt.tx_hash,
                    mirror_fault: MirrorFault::Unavailable { message },
                })
            }
        }
    }

    /// Recover the confirmed record from the receipt's event logs, falling
    /// back to a view call when no log decodes.
    async fn confirmed_record(
        &self,
        receipt: &TransactionReceipt,
        certificate_hash: &str,
    ) -> Result<CertificateRecord, RegistrationError> {
        if let Some(event) = receipt
            .logs
            .iter()
            .rev()
            .find_map(decode_certificate_added)
        {
            return Ok(event.into());
        }

        let view = self
            .ledger
            .call_view(ViewCall::VerifyCertificate {
                certificate_hash: certificate_hash.to_owned(),
            })
            .await
            .map_err(|e| RegistrationError::LedgerUnavailable {
                message: e.to_string(),
            })?;
        let ViewResult::Certificate(view) = view;
        Ok(CertificateRecord {
            certificate_hash: certificate_hash.to_owned(),
            student_name: view.student_name,
            issued_at: view.issued_at,
        })
    }

    /// Replay confirmed ledger records whose mirror rows are missing.
    ///
    /// The explicit reconciliation path for the two-phase write: no
    /// compensation of the ledger side exists, so index gaps are repaired
    /// forward from ledger history. Idempotent — records already mirrored
    /// are counted and skipped.
    pub async fn replay_unmirrored(
        &self,
        records: &[CertificateRecord],
    ) -> ReconciliationReport {
        let mut report = ReconciliationReport::default();
        for record in records {
            match self.index.find_by_hash(&record.certificate_hash).await {
                Ok(Some(_)) => report.already_mirrored += 1,
                Ok(None) => {
                    let entry = CertificateIndexEntry::new(
                        record.student_name.clone(),
                        record.certificate_hash.clone(),
                        record.issued_at,
                        self.time.now(),
                    );
                    match self.index.insert(entry).await {
                        Ok(()) => {
                            info!(
                                certificate_hash = %record.certificate_hash,
                                "unmirrored record replayed into index"
                            );
                            report.repaired += 1;
                        }
                        // Lost the race to a concurrent mirror write.
                        Err(IndexError::DuplicateHash { .. }) => report.already_mirrored += 1,
                        Err(IndexError::Unavailable { message }) => {
                            warn!(
                                certificate_hash = %record.certificate_hash,
                                %message,
                                "reconciliation insert failed"
                            );
                            report.failed += 1;
                        }
                    }
                }
                Err(e) => {
                    warn!(
                        certificate_hash = %record.certificate_hash,
                        error = %e,
                        "reconciliation lookup failed"
                    );
                    report.failed += 1;
                }
            }
        }
        report
    }
}

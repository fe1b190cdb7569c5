//! # Registration Flow Tests
//!
//! The write path across registry, ledger client, and index store:
//! confirmation, the duplicate guard at both levels, partial success
//! under index outage, and the confirmation deadline.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use cc_01_ledger_client::{DevSigner, LedgerApi, ManualClock};
    use cc_02_registry::{
        CertificateRegistry, MirrorFault, RegistrationError, RegistrationOutcome,
    };
    use cc_05_index_store::{CertificateIndexStore, InMemoryIndexStore};

    use crate::fixtures::{stack, StalledLedger, GENESIS_TIME};

    #[tokio::test]
    async fn register_then_verify_round_trip() {
        let s = stack();
        let outcome = s.registry.register("Ada", "h1").await.unwrap();
        assert!(matches!(outcome, RegistrationOutcome::Confirmed { .. }));

        let found = s.verifier.verify("h1").await.unwrap().unwrap();
        assert_eq!(found.student_name, "Ada");
        // Ledger clock has second resolution; the verifier reports it in
        // milliseconds.
        assert_eq!(found.issued_at_millis, GENESIS_TIME * 1000);
    }

    #[tokio::test]
    async fn duplicate_registration_leaves_exactly_one_entry() {
        let s = stack();
        s.registry.register("Ada", "h1").await.unwrap();

        let second = s.registry.register("Ada", "h1").await.unwrap();
        assert_eq!(
            second,
            RegistrationOutcome::DuplicateCertificate {
                certificate_hash: "h1".into()
            }
        );

        // Exactly one index row and one decoded history entry for h1.
        assert_eq!(s.index.count().await.unwrap(), 1);
        let feed = s.projector.history().await.unwrap();
        let h1_entries: Vec<_> = feed
            .iter()
            .filter(|v| v.certificate_hash == "h1")
            .collect();
        assert_eq!(h1_entries.len(), 1);
    }

    #[tokio::test]
    async fn index_outage_yields_partial_success_and_verify_still_works() {
        let s = stack();
        s.index.set_failing(true);

        let outcome = s.registry.register("Grace", "h2").await.unwrap();
        match outcome {
            RegistrationOutcome::PartialSuccess {
                record,
                mirror_fault,
                ..
            } => {
                assert_eq!(record.student_name, "Grace");
                assert!(matches!(mirror_fault, MirrorFault::Unavailable { .. }));
            }
            other => panic!("expected PartialSuccess, got {:?}", other),
        }

        // The ledger write is the durability boundary: verification reads
        // through the ledger and is oblivious to the index gap.
        let found = s.verifier.verify("h2").await.unwrap().unwrap();
        assert_eq!(found.student_name, "Grace");

        s.index.set_failing(false);
        assert_eq!(s.index.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn stale_index_row_is_classified_as_mirror_duplicate() {
        let s = stack();

        // First attempt: ledger confirms, mirror write fails.
        s.index.set_failing(true);
        let first = s.registry.register("Ada", "h1").await.unwrap();
        assert!(matches!(
            first,
            RegistrationOutcome::PartialSuccess { .. }
        ));
        s.index.set_failing(false);

        // Reconciliation repairs the row out of band.
        let records = s.projector.certificate_records().await.unwrap();
        s.registry.replay_unmirrored(&records).await;

        // A retried registration of the same hash is a LEDGER duplicate,
        // reported as such, not as an index fault.
        let retry = s.registry.register("Ada", "h1").await.unwrap();
        assert_eq!(
            retry,
            RegistrationOutcome::DuplicateCertificate {
                certificate_hash: "h1".into()
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn confirmation_deadline_yields_indeterminate() {
        let deadline = Duration::from_secs(3);
        let clock = Arc::new(ManualClock::new(GENESIS_TIME));
        let registry = CertificateRegistry::new(
            Arc::new(StalledLedger),
            Arc::new(DevSigner::dev()),
            Arc::new(InMemoryIndexStore::new()),
            clock,
            deadline,
        );

        // Paused tokio time auto-advances past the deadline while the
        // submission stalls forever.
        let outcome = registry.register("Ada", "h1").await.unwrap();
        assert_eq!(outcome, RegistrationOutcome::Indeterminate { deadline });
    }

    #[tokio::test]
    async fn validation_happens_before_any_ledger_interaction() {
        let s = stack();
        assert!(matches!(
            s.registry.register("", "h1").await.unwrap_err(),
            RegistrationError::InvalidInput {
                field: "student_name"
            }
        ));
        assert!(matches!(
            s.registry.register("Ada", "").await.unwrap_err(),
            RegistrationError::InvalidInput {
                field: "certificate_hash"
            }
        ));
        // Nothing was mined.
        assert_eq!(s.ledger.block_count().await.unwrap(), 1);
    }
}

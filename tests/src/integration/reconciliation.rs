//! # Reconciliation Flow Tests
//!
//! The explicit repair path for the two-phase write: confirmed ledger
//! records whose mirror insert failed are replayed into the index from
//! ledger history, idempotently.

#[cfg(test)]
mod tests {
    use cc_02_registry::RegistrationOutcome;
    use cc_05_index_store::CertificateIndexStore;

    use crate::fixtures::stack;

    #[tokio::test]
    async fn outage_gap_is_repaired_from_ledger_history() {
        let s = stack();

        // One clean registration, then an outage during the second.
        s.registry.register("Ada", "h1").await.unwrap();
        s.index.set_failing(true);
        let partial = s.registry.register("Grace", "h2").await.unwrap();
        assert!(matches!(
            partial,
            RegistrationOutcome::PartialSuccess { .. }
        ));
        s.index.set_failing(false);
        assert_eq!(s.index.count().await.unwrap(), 1);

        // Replay confirmed records; only the gap is repaired.
        let records = s.projector.certificate_records().await.unwrap();
        assert_eq!(records.len(), 2);
        let report = s.registry.replay_unmirrored(&records).await;
        assert_eq!(report.repaired, 1);
        assert_eq!(report.already_mirrored, 1);
        assert_eq!(report.failed, 0);

        let mirrored = s.index.find_by_hash("h2").await.unwrap().unwrap();
        assert_eq!(mirrored.student_name, "Grace");
        assert_eq!(s.index.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn reconciliation_is_idempotent() {
        let s = stack();
        s.index.set_failing(true);
        s.registry.register("Ada", "h1").await.unwrap();
        s.index.set_failing(false);

        let records = s.projector.certificate_records().await.unwrap();
        let first = s.registry.replay_unmirrored(&records).await;
        assert_eq!(first.repaired, 1);

        let second = s.registry.replay_unmirrored(&records).await;
        assert_eq!(second.repaired, 0);
        assert_eq!(second.already_mirrored, 1);
        assert_eq!(s.index.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn persistent_outage_counts_failures_for_the_next_pass() {
        let s = stack();
        s.index.set_failing(true);
        s.registry.register("Ada", "h1").await.unwrap();

        // Store still down during reconciliation.
        let records = s.projector.certificate_records().await.unwrap();
        let report = s.registry.replay_unmirrored(&records).await;
        assert_eq!(report.failed, 1);
        assert_eq!(report.repaired, 0);

        // Next pass, store healthy again.
        s.index.set_failing(false);
        let report = s.registry.replay_unmirrored(&records).await;
        assert_eq!(report.repaired, 1);
        assert_eq!(report.failed, 0);
    }

    #[tokio::test]
    async fn mirror_rows_match_ledger_records_after_repair() {
        let s = stack();
        s.index.set_failing(true);
        s.registry.register("Ada", "h1").await.unwrap();
        s.clock.advance(60);
        s.registry.register("Grace", "h2").await.unwrap();
        s.index.set_failing(false);

        let records = s.projector.certificate_records().await.unwrap();
        s.registry.replay_unmirrored(&records).await;

        for record in &records {
            let row = s
                .index
                .find_by_hash(&record.certificate_hash)
                .await
                .unwrap()
                .unwrap();
            assert_eq!(row.student_name, record.student_name);
            assert_eq!(row.issued_at, record.issued_at);
        }
    }
}

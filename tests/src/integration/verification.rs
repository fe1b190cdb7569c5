//! # Verification Flow Tests
//!
//! The read path is strictly ledger-authoritative: the index never
//! participates, and absence is a valid negative result.

#[cfg(test)]
mod tests {
    use crate::fixtures::stack;

    #[tokio::test]
    async fn unknown_hash_is_not_found_never_empty_fields() {
        let s = stack();
        let result = s.verifier.verify("never-registered").await.unwrap();
        // A dedicated absence value — not a record with empty strings.
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn verification_ignores_the_index_entirely() {
        let s = stack();
        s.registry.register("Ada", "h1").await.unwrap();

        // Take the index down AFTER a fully mirrored registration; reads
        // must be unaffected.
        s.index.set_failing(true);
        let found = s.verifier.verify("h1").await.unwrap().unwrap();
        assert_eq!(found.student_name, "Ada");
    }

    #[tokio::test]
    async fn confirmed_write_is_observed_by_subsequent_verifies() {
        let s = stack();
        s.clock.advance(120);
        s.registry.register("Grace", "h2").await.unwrap();

        // Read-after-write: every verify after confirmation sees the
        // record, with the ledger-assigned timestamp.
        for _ in 0..3 {
            let found = s.verifier.verify("h2").await.unwrap().unwrap();
            assert_eq!(found.student_name, "Grace");
            assert_eq!(
                found.issued_at_millis,
                (crate::fixtures::GENESIS_TIME + 120) * 1000
            );
        }
    }
}

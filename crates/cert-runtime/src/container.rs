//! # Core Container
//!
//! Single construction site for every component: the ledger client,
//! signer provider, index store, and projection store are built once and
//! passed by shared reference to the registry, verifier, and projector.
//! Nothing is reachable as ambient global state.

use std::sync::Arc;

use tracing::info;

use cc_01_ledger_client::{
    DevSigner, InProcessLedger, LedgerApi, SystemTimeSource, TimeSource,
};
use cc_02_registry::{CertificateRegistry, ReconciliationReport, RegistrationError, RegistrationOutcome};
use cc_03_verification::{CertificateVerifier, VerificationError, VerifiedCertificate};
use cc_04_history::{
    FileProjectionStore, HistoryProjector, InMemoryProjectionStore, LedgerTransactionView,
    ProjectionError, ProjectionStore, ProjectionStoreError,
};
use cc_05_index_store::{CertificateIndexStore, InMemoryIndexStore};

use crate::config::CoreConfig;

/// Errors raised while assembling the container.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("projection store: {0}")]
    Store(#[from] ProjectionStoreError),
}

/// All initialized components, with shared handles for wiring and tests.
pub struct CoreContainer {
    /// The service facade handed to the request layer.
    pub core: Arc<CertificateCore>,
    /// Concrete ledger handle, kept for dev tooling (seeding transfers).
    pub ledger: Arc<InProcessLedger>,
    /// The index store behind the registry's mirror writes.
    pub index: Arc<dyn CertificateIndexStore>,
}

impl CoreContainer {
    /// Build every component in dependency order.
    pub fn build(config: &CoreConfig) -> Result<Self, BootstrapError> {
        let time: Arc<dyn TimeSource> = Arc::new(SystemTimeSource);
        let ledger = Arc::new(InProcessLedger::new(time.clone()));
        let ledger_api: Arc<dyn LedgerApi> = ledger.clone();
        let signer = Arc::new(DevSigner::dev());
        let index: Arc<dyn CertificateIndexStore> = Arc::new(InMemoryIndexStore::new());

        let store: Arc<dyn ProjectionStore> = match &config.data_dir {
            Some(dir) => {
                let path = dir.join("history.projection");
                info!(path = %path.display(), "using durable projection snapshot");
                Arc::new(FileProjectionStore::open(path)?)
            }
            None => Arc::new(InMemoryProjectionStore::new()),
        };

        let registry = CertificateRegistry::new(
            ledger_api.clone(),
            signer,
            index.clone(),
            time,
            config.confirmation_deadline,
        );
        let verifier = CertificateVerifier::new(ledger_api.clone());
        let projector = HistoryProjector::new(ledger_api, store);

        Ok(Self {
            core: Arc::new(CertificateCore {
                registry,
                verifier,
                projector,
            }),
            ledger,
            index,
        })
    }
}

/// The three core operations exposed to the request layer, plus the
/// maintenance entry points driven by the background loop.
pub struct CertificateCore {
    registry: CertificateRegistry,
    verifier: CertificateVerifier,
    projector: HistoryProjector,
}

impl CertificateCore {
    /// Write path: ledger first, index mirror second.
    pub async fn register(
        &self,
        student_name: &str,
        certificate_hash: &str,
    ) -> Result<RegistrationOutcome, RegistrationError> {
        self.registry.register(student_name, certificate_hash).await
    }

    /// Read path, strictly ledger-authoritative.
    pub async fn verify(
        &self,
        certificate_hash: &str,
    ) -> Result<Option<VerifiedCertificate>, VerificationError> {
        self.verifier.verify(certificate_hash).await
    }

    /// The ordered transaction feed.
    pub async fn history(&self) -> Result<Vec<LedgerTransactionView>, ProjectionError> {
        self.projector.history().await
    }

    /// Advance the projection to the current head.
    pub async fn sync_projection(&self) -> Result<u64, ProjectionError> {
        self.projector.sync().await
    }

    /// Replay confirmed ledger records missing from the index.
    pub async fn reconcile(&self) -> Result<ReconciliationReport, ProjectionError> {
        let records = self.projector.certificate_records().await?;
        Ok(self.registry.replay_unmirrored(&records).await)
    }
}

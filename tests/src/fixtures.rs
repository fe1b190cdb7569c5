//! Shared test fixtures: the assembled core stack and test doubles for
//! failure injection.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use cc_01_ledger_client::{
    ContractCall, DevSigner, InProcessLedger, LedgerApi, LedgerError, ManualClock,
    SignerIdentity, ViewCall, ViewResult,
};
use cc_02_registry::CertificateRegistry;
use cc_03_verification::CertificateVerifier;
use cc_04_history::{HistoryProjector, InMemoryProjectionStore};
use cc_05_index_store::{
    CertificateIndexEntry, CertificateIndexStore, InMemoryIndexStore, IndexError,
};
use shared_types::{Block, Hash, TransactionReceipt};

/// Epoch used by every fixture clock.
pub const GENESIS_TIME: u64 = 1700000000;

/// Default confirmation deadline for fixture registries.
pub const DEADLINE: Duration = Duration::from_secs(5);

/// A fully wired core over the in-process ledger, with a togglable index
/// store for outage simulation.
pub struct TestStack {
    pub clock: Arc<ManualClock>,
    pub ledger: Arc<InProcessLedger>,
    pub index: Arc<FlakyIndexStore>,
    pub registry: CertificateRegistry,
    pub verifier: CertificateVerifier,
    pub projector: HistoryProjector,
}

/// Build the standard stack: healthy index, in-memory projection store.
pub fn stack() -> TestStack {
    let clock = Arc::new(ManualClock::new(GENESIS_TIME));
    let ledger = Arc::new(InProcessLedger::new(clock.clone()));
    let index = Arc::new(FlakyIndexStore::new());

    let registry = CertificateRegistry::new(
        ledger.clone(),
        Arc::new(DevSigner::dev()),
        index.clone(),
        clock.clone(),
        DEADLINE,
    );
    let verifier = CertificateVerifier::new(ledger.clone());
    let projector = HistoryProjector::new(
        ledger.clone(),
        Arc::new(InMemoryProjectionStore::new()),
    );

    TestStack {
        clock,
        ledger,
        index,
        registry,
        verifier,
        projector,
    }
}

/// Index store that can be switched into outage mode, failing every
/// operation with `IndexError::Unavailable` while healthy state is kept
/// underneath.
pub struct FlakyIndexStore {
    inner: InMemoryIndexStore,
    failing: AtomicBool,
}

impl FlakyIndexStore {
    pub fn new() -> Self {
        Self {
            inner: InMemoryIndexStore::new(),
            failing: AtomicBool::new(false),
        }
    }

    /// Toggle outage mode.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), IndexError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(IndexError::Unavailable {
                message: "simulated index outage".into(),
            })
        } else {
            Ok(())
        }
    }
}

impl Default for FlakyIndexStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CertificateIndexStore for FlakyIndexStore {
    async fn insert(&self, entry: CertificateIndexEntry) -> Result<(), IndexError> {
        self.check()?;
        self.inner.insert(entry).await
    }

    async fn find_by_hash(
        &self,
        certificate_hash: &str,
    ) -> Result<Option<CertificateIndexEntry>, IndexError> {
        self.check()?;
        self.inner.find_by_hash(certificate_hash).await
    }

    async fn list(&self) -> Result<Vec<CertificateIndexEntry>, IndexError> {
        self.check()?;
        self.inner.list().await
    }

    async fn count(&self) -> Result<usize, IndexError> {
        self.check()?;
        self.inner.count().await
    }
}

/// Ledger whose submissions never confirm, for deadline tests. Read
/// methods behave like an empty chain.
pub struct StalledLedger;

#[async_trait::async_trait]
impl LedgerApi for StalledLedger {
    async fn submit_transaction(
        &self,
        _signer: &SignerIdentity,
        _call: ContractCall,
    ) -> Result<TransactionReceipt, LedgerError> {
        std::future::pending::<()>().await;
        unreachable!("pending future never resolves")
    }

    async fn call_view(&self, view: ViewCall) -> Result<ViewResult, LedgerError> {
        let ViewCall::VerifyCertificate { .. } = view;
        Ok(ViewResult::Certificate(Default::default()))
    }

    async fn block_count(&self) -> Result<u64, LedgerError> {
        Ok(1)
    }

    async fn block_with_transactions(&self, number: u64) -> Result<Block, LedgerError> {
        if number == 0 {
            Ok(Block::default())
        } else {
            Err(LedgerError::BlockOutOfRange { number, head: 0 })
        }
    }

    async fn transaction_receipt(
        &self,
        tx_hash: Hash,
    ) -> Result<TransactionReceipt, LedgerError> {
        Err(LedgerError::ReceiptNotFound { tx_hash })
    }
}

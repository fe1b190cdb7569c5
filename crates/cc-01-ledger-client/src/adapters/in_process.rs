//! In-process ledger adapter.
//!
//! A totally ordered, append-only chain held in memory, executing the
//! certificate program deterministically: one block is sealed per accepted
//! transaction, `issued_at` comes from the injected clock, and a
//! `CertificateAdded` log is attached to the receipt. A duplicate hash is
//! rejected before inclusion, so rejected submissions mine nothing.
//!
//! Identities resolved by the signer provider are trusted as unlocked
//! accounts; signatures are not verified here.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use sha3::{Digest, Keccak256};
use tracing::{debug, info};

use shared_types::{
    short_hash, Address, Block, BlockHeader, CertificateAdded, CertificateRecord, Hash,
    LogEntry, SignedTransaction, TransactionReceipt, U256,
};

use crate::domain::{
    certificate_added_topic, ContractCall, LedgerError, RejectionReason, SignerIdentity,
    ViewCall, ViewResult,
};
use crate::domain::calls::CertificateView;
use crate::ports::inbound::LedgerApi;
use crate::ports::outbound::TimeSource;

/// Gas limit recorded on dev-ledger transactions.
const DEV_GAS_LIMIT: u64 = 3_000_000;

/// In-memory ledger executing the certificate program.
pub struct InProcessLedger {
    time: Arc<dyn TimeSource>,
    contract_address: Address,
    state: RwLock<ChainState>,
}

struct ChainState {
    blocks: Vec<Block>,
    receipts: HashMap<Hash, TransactionReceipt>,
    certificates: HashMap<String, CertificateRecord>,
    nonces: HashMap<Address, u64>,
}

impl InProcessLedger {
    /// Create a ledger with a sealed empty genesis block.
    pub fn new(time: Arc<dyn TimeSource>) -> Self {
        let genesis = Block {
            header: BlockHeader {
                number: 0,
                parent_hash: [0u8; 32],
                timestamp: time.now(),
                proposer: [0u8; 20],
            },
            transactions: Vec::new(),
        };
        Self {
            time,
            contract_address: derive_contract_address(),
            state: RwLock::new(ChainState {
                blocks: vec![genesis],
                receipts: HashMap::new(),
                certificates: HashMap::new(),
                nonces: HashMap::new(),
            }),
        }
    }

    /// Address the certificate program is deployed at.
    pub fn contract_address(&self) -> Address {
        self.contract_address
    }

    /// Submit a plain value transfer unrelated to the certificate program.
    ///
    /// Mined like any other transaction but emits no logs; histories built
    /// over this ledger therefore contain certificate-unrelated traffic.
    pub fn submit_value_transfer(
        &self,
        from: Address,
        to: Address,
        value: U256,
    ) -> TransactionReceipt {
        let mut state = self.state.write();
        let timestamp = self.time.now();
        let nonce = state.next_nonce(from);
        let tx_hash = SignedTransaction::compute_hash(&from, Some(&to), &value, nonce, &[]);
        let tx = SignedTransaction {
            hash: tx_hash,
            from,
            to: Some(to),
            value,
            nonce,
            gas_limit: DEV_GAS_LIMIT,
            data: Vec::new(),
            signature: [0u8; 64],
        };
        let receipt = state.seal_block(tx, Vec::new(), timestamp);
        debug!(tx = %short_hash(&tx_hash), "value transfer sealed");
        receipt
    }
}

#[async_trait::async_trait]
impl LedgerApi for InProcessLedger {
    async fn submit_transaction(
        &self,
        signer: &SignerIdentity,
        call: ContractCall,
    ) -> Result<TransactionReceipt, LedgerError> {
        match call {
            ContractCall::AddCertificate {
                ref student_name,
                ref certificate_hash,
            } => {
                let mut state = self.state.write();

                // Primary duplicate guard: the program rejects a second
                // write for an existing hash before inclusion.
                if state.certificates.contains_key(certificate_hash) {
                    debug!(%certificate_hash, "duplicate hash rejected by program");
                    return Err(LedgerError::Rejected {
                        reason: RejectionReason::CertificateExists {
                            certificate_hash: certificate_hash.clone(),
                        },
                    });
                }

                let issued_at = self.time.now();
                let nonce = state.next_nonce(signer.address);
                let data = encode_call(&call)?;
                let tx_hash = SignedTransaction::compute_hash(
                    &signer.address,
                    Some(&self.contract_address),
                    &U256::zero(),
                    nonce,
                    &data,
                );
                let tx = SignedTransaction {
                    hash: tx_hash,
                    from: signer.address,
                    to: Some(self.contract_address),
                    value: U256::zero(),
                    nonce,
                    gas_limit: DEV_GAS_LIMIT,
                    data,
                    signature: [0u8; 64],
                };

                let event = CertificateAdded {
                    student_name: student_name.clone(),
                    certificate_hash: certificate_hash.clone(),
                    issued_at,
                };
                let log = LogEntry {
                    address: self.contract_address,
                    topics: vec![certificate_added_topic()],
                    data: encode_event(&event)?,
                };

                state.certificates.insert(
                    certificate_hash.clone(),
                    CertificateRecord {
                        certificate_hash: certificate_hash.clone(),
                        student_name: student_name.clone(),
                        issued_at,
                    },
                );
                let receipt = state.seal_block(tx, vec![log], issued_at);

                info!(
                    %certificate_hash,
                    block = receipt.block_number,
                    tx = %short_hash(&receipt.tx_hash),
                    "certificate recorded on ledger"
                );
                Ok(receipt)
            }
        }
    }

    async fn call_view(&self, view: ViewCall) -> Result<ViewResult, LedgerError> {
        match view {
            ViewCall::VerifyCertificate { certificate_hash } => {
                let state = self.state.read();
                let view = match state.certificates.get(&certificate_hash) {
                    Some(record) => CertificateView {
                        exists: true,
                        student_name: record.student_name.clone(),
                        issued_at: record.issued_at,
                    },
                    None => CertificateView::default(),
                };
                Ok(ViewResult::Certificate(view))
            }
        }
    }

    async fn block_count(&self) -> Result<u64, LedgerError> {
        Ok(self.state.read().blocks.len() as u64)
    }

    async fn block_with_transactions(&self, number: u64) -> Result<Block, LedgerError> {
        let state = self.state.read();
        let head = state.blocks.len() as u64 - 1;
        state
            .blocks
            .get(number as usize)
            .cloned()
            .ok_or(LedgerError::BlockOutOfRange { number, head })
    }

    async fn transaction_receipt(
        &self,
        tx_hash: Hash,
    ) -> Result<TransactionReceipt, LedgerError> {
        self.state
            .read()
            .receipts
            .get(&tx_hash)
            .cloned()
            .ok_or(LedgerError::ReceiptNotFound { tx_hash })
    }
}

impl ChainState {
    fn next_nonce(&mut self, account: Address) -> u64 {
        let nonce = self.nonces.entry(account).or_insert(0);
        let current = *nonce;
        *nonce += 1;
        current
    }

    /// Seal one transaction into a new head block and store its receipt.
    fn seal_block(
        &mut self,
        tx: SignedTransaction,
        logs: Vec<LogEntry>,
        timestamp: u64,
    ) -> TransactionReceipt {
        let parent = self.blocks.last().expect("chain always has genesis");
        let header = BlockHeader {
            number: parent.header.number + 1,
            parent_hash: parent.header.hash(),
            timestamp,
            proposer: tx.from,
        };
        let receipt = TransactionReceipt {
            tx_hash: tx.hash,
            block_number: header.number,
            tx_index: 0,
            logs,
        };
        self.blocks.push(Block {
            header,
            transactions: vec![tx],
        });
        self.receipts.insert(receipt.tx_hash, receipt.clone());
        receipt
    }
}

fn encode_call(call: &ContractCall) -> Result<Vec<u8>, LedgerError> {
    bincode::serialize(call).map_err(|e| LedgerError::Unavailable {
        message: format!("call encoding failed: {e}"),
    })
}

fn encode_event(event: &CertificateAdded) -> Result<Vec<u8>, LedgerError> {
    bincode::serialize(event).map_err(|e| LedgerError::Unavailable {
        message: format!("event encoding failed: {e}"),
    })
}

/// Deterministic dev deployment address for the certificate program.
fn derive_contract_address() -> Address {
    let digest = Keccak256::digest(b"certchain.certificate-program.v1");
    let mut address = [0u8; 20];
    address.copy_from_slice(&digest[12..]);
    address
}

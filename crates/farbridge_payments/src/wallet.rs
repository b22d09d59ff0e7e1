//! Wallet seam.
//!
//! The bridge never talks to a chain directly; account state, chain
//! switching, and transaction submission all go through these traits. The
//! production implementation wraps the host page's wallet connector; tests
//! use scripted doubles.

use std::sync::Arc;

use alloy_primitives::{Address, B256, U256};
use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by the wallet layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// The user or wallet rejected the operation.
    #[error("wallet rejected the operation: {0}")]
    Rejected(String),
    /// The signing client is not ready yet.
    #[error("wallet client not ready: {0}")]
    NotReady(String),
    /// Transport-level failure talking to the wallet or node.
    #[error("wallet transport error: {0}")]
    Transport(String),
}

/// A raw contract call ready for submission.
///
/// Token transfers are zero-native-value calls: the value field exists so the
/// seam stays general, but the orchestrator always sets it to zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionRequest {
    /// Contract being called.
    pub to: Address,
    /// Native value attached to the call.
    pub value: U256,
    /// ABI-encoded calldata.
    pub data: Vec<u8>,
}

/// Settlement receipt for a submitted transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TxReceipt {
    /// Hash of the settled transaction.
    pub tx_hash: B256,
    /// Whether the transaction executed successfully (revert = `false`).
    pub success: bool,
}

/// Connection and chain state of the user's wallet.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// The connected account, if any.
    async fn connected_account(&self) -> Option<Address>;

    /// The chain the wallet is currently on.
    async fn chain_id(&self) -> Result<u64, WalletError>;

    /// Asks the wallet to switch to `chain_id`.
    async fn switch_chain(&self, chain_id: u64) -> Result<(), WalletError>;

    /// Acquires a signing/submission client for `chain_id`.
    ///
    /// May legitimately fail with [`WalletError::NotReady`] shortly after a
    /// chain switch; callers retry with a bounded budget.
    async fn wallet_client(&self, chain_id: u64) -> Result<Arc<dyn WalletClient>, WalletError>;
}

/// Capability to sign, submit, and await transactions on one chain.
#[async_trait]
pub trait WalletClient: Send + Sync {
    /// Submits the call and returns its transaction hash.
    async fn submit(&self, tx: &TransactionRequest) -> Result<B256, WalletError>;

    /// Awaits the settlement receipt for a submitted transaction.
    async fn wait_for_receipt(&self, tx_hash: B256) -> Result<TxReceipt, WalletError>;
}

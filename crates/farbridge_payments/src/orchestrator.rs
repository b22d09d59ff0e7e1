//! The payment state machine.
//!
//! One [`PaymentRequest`] in, exactly one [`PaymentOutcome`] out, no matter
//! what the wallet, the chain, or the ledger index do in between.
//!
//! ## States
//!
//! ```text
//! WalletCheck → NetworkSwitch → ClientAcquire → Build → Submit → Confirm
//!                                                                   │
//!                                              Done ◀── [Verify] ◀──┘
//! ```
//!
//! Every transition is logged. Client acquisition retries with a fixed delay
//! and a bounded attempt count; the whole run sits under a hard timeout so
//! the game is never left waiting without a definitive outcome.
//!
//! ## Concurrency
//!
//! The orchestrator holds no per-request state, so concurrent invocations are
//! safe and deliberately allowed: two in-flight payments race to completion
//! and each emits its own outcome.

use std::sync::Arc;
use std::time::Duration;

use alloy_primitives::B256;
use tokio::time::{sleep, timeout};
use tracing::{debug, warn};

use farbridge_shared::constants::DEFAULT_PAYMENT_AMOUNT;
use farbridge_shared::NetworkId;

use crate::error::{PaymentError, PaymentResult};
use crate::networks::{NetworkSpec, NetworkTable};
use crate::transfer::build_transfer;
use crate::verify::LedgerQuery;
use crate::wallet::{WalletClient, WalletProvider};

/// Default budget for one full orchestration.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// A payment the game asked for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaymentRequest {
    /// Target network slot; `None` resolves to primary.
    pub network: Option<NetworkId>,
    /// Decimal token amount; `None` uses the orchestrator default.
    pub amount: Option<String>,
    /// Whether to independently verify the settled transfer.
    pub verify: bool,
}

impl PaymentRequest {
    /// Creates a request as parsed from an inbound message.
    #[must_use]
    pub fn new(network: Option<NetworkId>, amount: Option<String>) -> Self {
        Self {
            network,
            amount,
            verify: false,
        }
    }

    /// Enables independent on-chain verification for this request.
    #[must_use]
    pub fn with_verification(mut self) -> Self {
        self.verify = true;
        self
    }
}

/// Definitive result of one orchestration, relayed to the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaymentOutcome {
    /// Whether the payment settled (and verified, when requested).
    pub success: bool,
    /// Network the flow actually targeted.
    pub network: NetworkId,
    /// Hash of the settled transaction, when one was submitted.
    pub tx_hash: Option<B256>,
    /// The failure, when unsuccessful.
    pub error: Option<PaymentError>,
}

impl PaymentOutcome {
    /// Wire error code for the game, when failed.
    #[must_use]
    pub fn error_code(&self) -> Option<&'static str> {
        self.error.as_ref().map(PaymentError::code)
    }
}

/// States of the payment flow, exposed for logging and inspection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentStep {
    /// Checking for a connected account.
    WalletCheck,
    /// Aligning the wallet with the target chain.
    NetworkSwitch,
    /// Acquiring a signing client (retried).
    ClientAcquire,
    /// Constructing the transfer calldata.
    Build,
    /// Submitting the contract call.
    Submit,
    /// Awaiting the settlement receipt.
    Confirm,
    /// Cross-checking the settled transfer on the ledger.
    Verify,
    /// Terminal state.
    Done,
}

/// Retry budget for wallet-client acquisition.
///
/// Bounded on purpose: indefinite retry would hang the bridge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum acquisition attempts.
    pub attempts: u32,
    /// Fixed delay between attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 5,
            delay: Duration::from_millis(500),
        }
    }
}

/// Drives a payment request through the state machine.
pub struct PaymentOrchestrator {
    networks: NetworkTable,
    wallet: Arc<dyn WalletProvider>,
    ledger: Option<Arc<dyn LedgerQuery>>,
    retry: RetryPolicy,
    budget: Duration,
    default_amount: String,
}

impl PaymentOrchestrator {
    /// Creates an orchestrator over a wallet seam and network table.
    #[must_use]
    pub fn new(networks: NetworkTable, wallet: Arc<dyn WalletProvider>) -> Self {
        Self {
            networks,
            wallet,
            ledger: None,
            retry: RetryPolicy::default(),
            budget: DEFAULT_TIMEOUT,
            default_amount: DEFAULT_PAYMENT_AMOUNT.to_string(),
        }
    }

    /// Attaches a ledger index for requests that ask for verification.
    #[must_use]
    pub fn with_ledger(mut self, ledger: Arc<dyn LedgerQuery>) -> Self {
        self.ledger = Some(ledger);
        self
    }

    /// Overrides the client-acquisition retry budget.
    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Overrides the total time budget for one orchestration.
    #[must_use]
    pub fn with_budget(mut self, budget: Duration) -> Self {
        self.budget = budget;
        self
    }

    /// Overrides the amount used when a request carries none.
    #[must_use]
    pub fn with_default_amount(mut self, amount: impl Into<String>) -> Self {
        self.default_amount = amount.into();
        self
    }

    /// Runs one payment to its definitive outcome.
    ///
    /// Never returns early without an outcome: timeouts, reverts, and wallet
    /// failures all collapse into a failed [`PaymentOutcome`].
    pub async fn execute(&self, request: PaymentRequest) -> PaymentOutcome {
        let spec = *self.networks.resolve(request.network);
        let network = spec.id;

        let result = match timeout(self.budget, self.run(&request, &spec)).await {
            Ok(result) => result,
            Err(_) => Err(PaymentError::Timeout),
        };

        match result {
            Ok(tx_hash) => {
                debug!(step = ?PaymentStep::Done, network = network.as_str(),
                       tx_hash = %tx_hash, "payment settled");
                PaymentOutcome {
                    success: true,
                    network,
                    tx_hash: Some(tx_hash),
                    error: None,
                }
            }
            Err(error) => {
                warn!(step = ?PaymentStep::Done, network = network.as_str(),
                      code = error.code(), %error, "payment failed");
                PaymentOutcome {
                    success: false,
                    network,
                    tx_hash: None,
                    error: Some(error),
                }
            }
        }
    }

    async fn run(&self, request: &PaymentRequest, spec: &NetworkSpec) -> PaymentResult<B256> {
        debug!(step = ?PaymentStep::WalletCheck, "payment started");
        if self.wallet.connected_account().await.is_none() {
            return Err(PaymentError::WalletNotConnected);
        }

        debug!(step = ?PaymentStep::NetworkSwitch, chain_id = spec.chain_id);
        self.ensure_chain(spec).await?;

        debug!(step = ?PaymentStep::ClientAcquire);
        let client = self.acquire_client(spec.chain_id).await?;

        debug!(step = ?PaymentStep::Build);
        let amount = request.amount.as_deref().unwrap_or(&self.default_amount);
        let tx = build_transfer(spec, amount)?;

        debug!(step = ?PaymentStep::Submit, token = %spec.token);
        let tx_hash = client
            .submit(&tx)
            .await
            .map_err(|e| PaymentError::TxFailed {
                reason: e.to_string(),
            })?;

        debug!(step = ?PaymentStep::Confirm, tx_hash = %tx_hash);
        let receipt = client
            .wait_for_receipt(tx_hash)
            .await
            .map_err(|e| PaymentError::TxFailed {
                reason: e.to_string(),
            })?;
        // Status is checked explicitly: a returned receipt is not success.
        if !receipt.success {
            return Err(PaymentError::TxFailed {
                reason: "transaction reverted on chain".to_string(),
            });
        }

        if request.verify {
            debug!(step = ?PaymentStep::Verify, tx_hash = %tx_hash);
            self.verify_settled(spec, amount, tx_hash).await?;
        }

        Ok(tx_hash)
    }

    async fn ensure_chain(&self, spec: &NetworkSpec) -> PaymentResult<()> {
        let switch_failed = |reason: String| PaymentError::NetworkSwitchFailed {
            network: spec.id,
            reason,
        };
        let current = self
            .wallet
            .chain_id()
            .await
            .map_err(|e| switch_failed(e.to_string()))?;
        if current != spec.chain_id {
            self.wallet
                .switch_chain(spec.chain_id)
                .await
                .map_err(|e| switch_failed(e.to_string()))?;
        }
        Ok(())
    }

    async fn acquire_client(&self, chain_id: u64) -> PaymentResult<Arc<dyn WalletClient>> {
        let attempts = self.retry.attempts.max(1);
        for attempt in 1..=attempts {
            match self.wallet.wallet_client(chain_id).await {
                Ok(client) => return Ok(client),
                Err(error) => {
                    debug!(attempt, %error, "wallet client not ready");
                    if attempt < attempts {
                        sleep(self.retry.delay).await;
                    }
                }
            }
        }
        Err(PaymentError::ClientUnavailable { attempts })
    }

    async fn verify_settled(
        &self,
        spec: &NetworkSpec,
        amount: &str,
        tx_hash: B256,
    ) -> PaymentResult<()> {
        let Some(ledger) = &self.ledger else {
            return Err(PaymentError::VerificationFailed {
                reason: "no ledger index configured".to_string(),
            });
        };
        let expected = crate::transfer::parse_units(amount, spec.decimals)?;
        let records = ledger
            .token_transfers(tx_hash)
            .await
            .map_err(|e| PaymentError::VerificationFailed {
                reason: e.to_string(),
            })?;

        let matched = records.iter().any(|record| {
            record.contract == spec.token
                && record.to == spec.recipient
                && record.amount == expected
        });
        if matched {
            Ok(())
        } else {
            Err(PaymentError::VerificationFailed {
                reason: "no transfer matched contract, recipient, and amount".to_string(),
            })
        }
    }
}

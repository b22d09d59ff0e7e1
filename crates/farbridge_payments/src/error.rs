//! Payment error taxonomy.
//!
//! Every failure in the flow collapses to one of the codes the embedded game
//! understands; the carried detail only feeds diagnostics.

use thiserror::Error;

use farbridge_shared::NetworkId;

/// Errors produced by the payment state machine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaymentError {
    /// No wallet account is connected; checked before anything else.
    #[error("no wallet account connected")]
    WalletNotConnected,

    /// The wallet refused or failed to switch to the requested chain.
    #[error("failed to switch to network {network:?}: {reason}")]
    NetworkSwitchFailed {
        /// Network the switch targeted.
        network: NetworkId,
        /// Wallet-reported reason.
        reason: String,
    },

    /// No signing client could be acquired within the retry budget.
    #[error("wallet client unavailable after {attempts} attempts")]
    ClientUnavailable {
        /// Acquisition attempts made.
        attempts: u32,
    },

    /// The amount string could not be scaled to base units.
    #[error("invalid token amount {amount:?}: {reason}")]
    InvalidAmount {
        /// Offending amount string.
        amount: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Submission failed or the transaction reverted on chain.
    #[error("transfer failed: {reason}")]
    TxFailed {
        /// Submission or receipt detail.
        reason: String,
    },

    /// The transfer settled but its on-chain parameters did not match.
    #[error("settled transaction did not verify: {reason}")]
    VerificationFailed {
        /// Mismatch or lookup detail.
        reason: String,
    },

    /// The whole orchestration exceeded its time budget.
    #[error("payment orchestration timed out")]
    Timeout,
}

impl PaymentError {
    /// Wire error code relayed to the embedded game.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::WalletNotConnected => "WALLET_NOT_CONNECTED",
            Self::NetworkSwitchFailed { .. } => "NETWORK_SWITCH_FAILED",
            Self::ClientUnavailable { .. } => "CLIENT_ERROR",
            Self::InvalidAmount { .. } | Self::TxFailed { .. } => "TX_FAILED",
            Self::VerificationFailed { .. } => "VERIFICATION_FAILED",
            Self::Timeout => "TIMEOUT",
        }
    }
}

/// Result type for payment operations.
pub type PaymentResult<T> = Result<T, PaymentError>;

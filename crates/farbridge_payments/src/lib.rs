//! # FARBRIDGE Payments
//!
//! Multi-chain token-transfer orchestration for the game bridge.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   request    ┌──────────────────┐   submit    ┌──────────┐
//! │  Dispatcher  │ ───────────▶ │   Orchestrator   │ ──────────▶ │  Wallet  │
//! │  (bridge)    │              │  (state machine) │             │  (seam)  │
//! └──────────────┘              └────────┬─────────┘             └──────────┘
//!                                        │ optional
//!                                        ▼
//!                               ┌──────────────────┐
//!                               │   LedgerQuery    │
//!                               │  (verification)  │
//!                               └──────────────────┘
//! ```
//!
//! The orchestrator walks `WalletCheck → NetworkSwitch → ClientAcquire →
//! Build → Submit → Confirm → [Verify]` and always produces exactly one
//! [`PaymentOutcome`], even when the wallet hangs: the whole run is bounded
//! by a hard timeout.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod networks;
pub mod orchestrator;
pub mod transfer;
pub mod verify;
pub mod wallet;

pub use error::{PaymentError, PaymentResult};
pub use networks::{NetworkSpec, NetworkTable, NetworkTableError};
pub use orchestrator::{PaymentOrchestrator, PaymentOutcome, PaymentRequest, PaymentStep, RetryPolicy};
pub use transfer::{build_transfer, parse_units};
pub use verify::{EtherscanLedger, LedgerQuery, TokenTransferRecord, VerifyError};
pub use wallet::{TransactionRequest, TxReceipt, WalletClient, WalletError, WalletProvider};

//! # FARBRIDGE
//!
//! The browser-resident bridge between an embedded game and its host
//! mini-app environment.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  InboundEnvelope  ┌──────────────┐   publish    ┌─────────────┐
//! │   Embedded   │ ────────────────▶ │  Dispatcher  │ ───────────▶ │    Relay    │
//! │     Game     │                   │ (typed parse)│              │ (ordered)   │
//! └──────▲───────┘                   └──────┬───────┘              └──────┬──────┘
//!        │                                  │ spawn                       │
//!        │                                  ▼                             │
//!        │                         ┌────────────────┐    OutboundMessage  │
//!        │                         │  Orchestrator  │                     │
//!        │                         │   (payments)   │                     │
//!        │                         └────────────────┘                     │
//!        └────────────────────────── GameChannel ◀────────────────────────┘
//! ```
//!
//! The dispatcher never blocks on a payment: each `request-payment` runs as
//! its own task and reports exactly one outcome back through the relay.
//! Everything that crosses a trust boundary (host, wallet, ledger, channel)
//! is a trait, so the whole pipeline runs against in-memory doubles in tests.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod adapters;
pub mod bridge;
pub mod channel;
pub mod dispatcher;
pub mod gate;
pub mod relay;
pub mod session;

pub use adapters::Adapters;
pub use bridge::{Bridge, BridgeError, BridgeSeams};
pub use channel::GameChannel;
pub use dispatcher::InboundDispatcher;
pub use gate::AllowList;
pub use relay::OutboundRelay;
pub use session::BridgeSession;

// Re-exports for convenience
pub use farbridge_host::{HostActions, Notifier};
pub use farbridge_payments::{PaymentOrchestrator, PaymentOutcome, PaymentRequest};
pub use farbridge_shared::{BridgeConfig, InboundAction, InboundEnvelope, OutboundMessage};

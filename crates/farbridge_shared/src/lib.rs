//! # FARBRIDGE Shared
//!
//! Wire types and configuration shared across the bridge.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on:
//! - `tokio` or any async runtime
//! - `reqwest` or any transport crate
//!
//! If you need a side effect, put it in `farbridge_host` or `farbridge`.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod constants;
pub mod identity;
pub mod protocol;

pub use config::{BridgeConfig, ConfigError, NetworkConfig, NetworkOverrides};
pub use identity::{GateDecision, UserIdentity};
pub use protocol::{
    methods, InboundAction, InboundEnvelope, NetworkId, OutboundMessage, UserInfoPayload,
};

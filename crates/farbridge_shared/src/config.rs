//! Bridge configuration.
//!
//! Loaded once at startup from TOML and read-only afterwards. Every field has
//! a production default so an empty config file is valid.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_APP_URL, DEFAULT_NOTIFY_ENDPOINT, DEFAULT_PAYMENT_AMOUNT};

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The TOML document failed to parse or had the wrong shape.
    #[error("invalid bridge config: {0}")]
    Invalid(#[from] toml::de::Error),
}

/// Per-network payment parameters.
///
/// Addresses stay as strings here; the payment crate parses and validates
/// them when it builds its network table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// EVM chain identifier.
    pub chain_id: u64,
    /// Token contract address (0x-hex).
    pub token: String,
    /// Payment recipient address (0x-hex).
    pub recipient: String,
    /// Token decimals (6 for USD-pegged stablecoins).
    pub decimals: u8,
}

/// Optional overrides for the two network slots.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkOverrides {
    /// Override for the primary slot.
    pub primary: Option<NetworkConfig>,
    /// Override for the secondary slot.
    pub secondary: Option<NetworkConfig>,
}

/// Top-level bridge configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Public URL of the mini app, embedded in share casts.
    pub app_url: String,
    /// Endpoint that delivers push notifications.
    pub notify_endpoint: String,
    /// Origins allowed to send inbound messages; empty accepts any origin.
    pub allowed_origins: Vec<String>,
    /// Account identifiers admitted by the gate.
    pub allowed_fids: Vec<u64>,
    /// Token amount used when `request-payment` carries none.
    pub default_amount: String,
    /// Network table overrides.
    pub networks: NetworkOverrides,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            app_url: DEFAULT_APP_URL.to_string(),
            notify_endpoint: DEFAULT_NOTIFY_ENDPOINT.to_string(),
            allowed_origins: Vec::new(),
            allowed_fids: Vec::new(),
            default_amount: DEFAULT_PAYMENT_AMOUNT.to_string(),
            networks: NetworkOverrides::default(),
        }
    }
}

impl BridgeConfig {
    /// Parses a TOML document, filling every absent field with its default.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

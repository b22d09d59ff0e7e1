//! Per-network payment parameters.
//!
//! A static two-slot table resolved once at startup. Each slot pins the chain
//! identifier, the token contract, the payment recipient and the token's
//! decimal count; the orchestrator never sees raw config strings.

use alloy_primitives::{address, Address};
use thiserror::Error;

use farbridge_shared::{NetworkConfig, NetworkId, NetworkOverrides};

/// Payment recipient for the production deployment.
const DEFAULT_RECIPIENT: Address = address!("E51f63637c549244d0A8E11ac7E6C86a1E9E0670");

/// USDC on Base (chain 8453).
const BASE_USDC: Address = address!("833589fCD6eDb6E08f4c7C32D4f71b54bdA02913");

/// USDC on Celo (chain 42220).
const CELO_USDC: Address = address!("cebA9300f2b948710d2653dD7B07f33A8B32118C");

/// Errors building the network table from config.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkTableError {
    /// An address override failed to parse as 0x-hex.
    #[error("bad {field} address for {network:?}: {value:?}")]
    BadAddress {
        /// Which field was malformed (`token` or `recipient`).
        field: &'static str,
        /// Network slot the override targeted.
        network: NetworkId,
        /// The rejected string.
        value: String,
    },
}

/// Resolved parameters for one network slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NetworkSpec {
    /// Which slot this is.
    pub id: NetworkId,
    /// EVM chain identifier the wallet must be on.
    pub chain_id: u64,
    /// Token contract the transfer call targets.
    pub token: Address,
    /// Address receiving the transfer.
    pub recipient: Address,
    /// Token decimals used to scale amounts to base units.
    pub decimals: u8,
}

/// The static per-network table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NetworkTable {
    primary: NetworkSpec,
    secondary: NetworkSpec,
}

impl Default for NetworkTable {
    fn default() -> Self {
        Self {
            primary: NetworkSpec {
                id: NetworkId::Primary,
                chain_id: 8453,
                token: BASE_USDC,
                recipient: DEFAULT_RECIPIENT,
                decimals: 6,
            },
            secondary: NetworkSpec {
                id: NetworkId::Secondary,
                chain_id: 42_220,
                token: CELO_USDC,
                recipient: DEFAULT_RECIPIENT,
                decimals: 6,
            },
        }
    }
}

impl NetworkTable {
    /// Builds the table from config overrides on top of the defaults.
    pub fn from_overrides(overrides: &NetworkOverrides) -> Result<Self, NetworkTableError> {
        let mut table = Self::default();
        if let Some(config) = &overrides.primary {
            table.primary = Self::spec_from_config(NetworkId::Primary, config)?;
        }
        if let Some(config) = &overrides.secondary {
            table.secondary = Self::spec_from_config(NetworkId::Secondary, config)?;
        }
        Ok(table)
    }

    /// Returns the spec for a slot.
    #[must_use]
    pub const fn get(&self, id: NetworkId) -> &NetworkSpec {
        match id {
            NetworkId::Primary => &self.primary,
            NetworkId::Secondary => &self.secondary,
        }
    }

    /// Resolves a possibly-unspecified slot; `None` means primary.
    #[must_use]
    pub const fn resolve(&self, id: Option<NetworkId>) -> &NetworkSpec {
        match id {
            Some(id) => self.get(id),
            None => &self.primary,
        }
    }

    fn spec_from_config(
        id: NetworkId,
        config: &NetworkConfig,
    ) -> Result<NetworkSpec, NetworkTableError> {
        let token = config
            .token
            .parse::<Address>()
            .map_err(|_| NetworkTableError::BadAddress {
                field: "token",
                network: id,
                value: config.token.clone(),
            })?;
        let recipient =
            config
                .recipient
                .parse::<Address>()
                .map_err(|_| NetworkTableError::BadAddress {
                    field: "recipient",
                    network: id,
                    value: config.recipient.clone(),
                })?;
        Ok(NetworkSpec {
            id,
            chain_id: config.chain_id,
            token,
            recipient,
            decimals: config.decimals,
        })
    }
}

//! Independent on-chain verification.
//!
//! After a transfer settles, the orchestrator can cross-check the named
//! token contract, recipient, and amount against a read-only ledger index.
//! A transaction that settled but moved the wrong parameters is rejected
//! even though submission and confirmation succeeded.

use alloy_primitives::{Address, B256, U256};
use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors raised by ledger lookups.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// Transport-level failure reaching the index.
    #[error("ledger transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The index answered with something we cannot interpret.
    #[error("malformed ledger response: {0}")]
    Malformed(String),
}

/// One token movement extracted from a settled transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenTransferRecord {
    /// Token contract that emitted the transfer.
    pub contract: Address,
    /// Receiving address.
    pub to: Address,
    /// Transferred amount in base units.
    pub amount: U256,
}

/// Read-only ledger index keyed by transaction hash.
#[async_trait]
pub trait LedgerQuery: Send + Sync {
    /// All token transfers the indexed transaction performed.
    ///
    /// An empty vector means the transaction settled without moving the
    /// queried token class; the caller decides what that implies.
    async fn token_transfers(&self, tx_hash: B256)
        -> Result<Vec<TokenTransferRecord>, VerifyError>;
}

/// Etherscan-compatible `account/tokentx` lookup.
pub struct EtherscanLedger {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl EtherscanLedger {
    /// Creates a ledger client for an etherscan-style API endpoint.
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

/// Raw entry shape of the `tokentx` result array.
#[derive(Debug, Deserialize)]
struct TokenTxEntry {
    hash: String,
    #[serde(rename = "contractAddress")]
    contract_address: String,
    to: String,
    value: String,
}

#[derive(Debug, Deserialize)]
struct TokenTxResponse {
    result: serde_json::Value,
}

#[async_trait]
impl LedgerQuery for EtherscanLedger {
    async fn token_transfers(
        &self,
        tx_hash: B256,
    ) -> Result<Vec<TokenTransferRecord>, VerifyError> {
        let hash = format!("{tx_hash:#x}");
        let response: TokenTxResponse = self
            .client
            .get(&self.base_url)
            .query(&[
                ("module", "account"),
                ("action", "tokentx"),
                ("txhash", hash.as_str()),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await?
            .json()
            .await?;

        // On errors the API replaces the result array with a message string.
        let entries = match response.result {
            serde_json::Value::Array(entries) => entries,
            other => return Err(VerifyError::Malformed(other.to_string())),
        };

        let mut records = Vec::new();
        for entry in entries {
            let Ok(entry) = serde_json::from_value::<TokenTxEntry>(entry) else {
                debug!("skipping malformed tokentx entry");
                continue;
            };
            if !entry.hash.eq_ignore_ascii_case(&hash) {
                continue;
            }
            let (Ok(contract), Ok(to)) = (
                entry.contract_address.parse::<Address>(),
                entry.to.parse::<Address>(),
            ) else {
                debug!("skipping tokentx entry with unparsable addresses");
                continue;
            };
            let Ok(amount) = U256::from_str_radix(&entry.value, 10) else {
                debug!("skipping tokentx entry with unparsable value");
                continue;
            };
            records.push(TokenTransferRecord {
                contract,
                to,
                amount,
            });
        }
        Ok(records)
    }
}

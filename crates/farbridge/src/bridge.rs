//! Bridge assembly.
//!
//! The composition root: takes the startup configuration and the live seam
//! implementations, wires every unit, and hands back the dispatcher that owns
//! the session. Configuration is read exactly once here; no other module ever
//! sees [`BridgeConfig`].

use std::sync::Arc;

use thiserror::Error;

use farbridge_host::{HostActions, HttpNotifier, Notifier};
use farbridge_payments::{
    LedgerQuery, NetworkTable, NetworkTableError, PaymentOrchestrator, WalletProvider,
};
use farbridge_shared::BridgeConfig;

use crate::adapters::Adapters;
use crate::channel::GameChannel;
use crate::dispatcher::InboundDispatcher;
use crate::gate::AllowList;
use crate::relay::OutboundRelay;
use crate::session::BridgeSession;

/// Errors raised while assembling the bridge from configuration.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// A configured network override was malformed.
    #[error("invalid network configuration: {0}")]
    Network(#[from] NetworkTableError),
}

/// Live implementations of every trust-boundary seam.
pub struct BridgeSeams {
    /// The surrounding mini-app runtime.
    pub host: Arc<dyn HostActions>,
    /// The user's wallet connector.
    pub wallet: Arc<dyn WalletProvider>,
    /// Write side of the embedded game channel.
    pub channel: Arc<dyn GameChannel>,
    /// Notification delivery; `None` builds the HTTP notifier from config.
    pub notifier: Option<Arc<dyn Notifier>>,
    /// Ledger index for payment verification; `None` leaves it unconfigured.
    pub ledger: Option<Arc<dyn LedgerQuery>>,
}

/// The assembled bridge pipeline.
pub struct Bridge {
    dispatcher: Arc<InboundDispatcher>,
}

impl Bridge {
    /// Wires configuration and seams into a ready dispatcher.
    ///
    /// Resolves the session identity against the host as part of assembly, so
    /// the first `game_loaded` already has a definitive identity to publish.
    pub async fn from_config(
        config: &BridgeConfig,
        seams: BridgeSeams,
    ) -> Result<Self, BridgeError> {
        let session = Arc::new(
            BridgeSession::initialize(
                seams.host.as_ref(),
                AllowList::new(config.allowed_fids.iter().copied()),
            )
            .await,
        );
        let relay = Arc::new(OutboundRelay::new(seams.channel));

        let networks = NetworkTable::from_overrides(&config.networks)?;
        let mut orchestrator = PaymentOrchestrator::new(networks, seams.wallet)
            .with_default_amount(config.default_amount.clone());
        if let Some(ledger) = seams.ledger {
            orchestrator = orchestrator.with_ledger(ledger);
        }

        let notifier = seams
            .notifier
            .unwrap_or_else(|| Arc::new(HttpNotifier::new(config.notify_endpoint.clone())));
        let adapters = Arc::new(Adapters::new(seams.host, notifier, config.app_url.clone()));

        let dispatcher = Arc::new(InboundDispatcher::new(
            session,
            relay,
            Arc::new(orchestrator),
            adapters,
            config.allowed_origins.clone(),
        ));
        Ok(Self { dispatcher })
    }

    /// The dispatcher driving this bridge.
    #[must_use]
    pub fn dispatcher(&self) -> Arc<InboundDispatcher> {
        Arc::clone(&self.dispatcher)
    }
}

//! Inbound dispatcher.
//!
//! Listens on the shared page message channel for the lifetime of the
//! session. The channel carries unrelated traffic, so the filter is strict
//! and silent: anything without a valid envelope, origin, and recognized
//! action gets nothing beyond a diagnostic log.
//!
//! Payments and notifications run as spawned tasks; the dispatcher never
//! serializes unrelated actions behind a pending payment.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use farbridge_payments::{PaymentOrchestrator, PaymentRequest};
use farbridge_shared::{InboundAction, InboundEnvelope};

use crate::adapters::Adapters;
use crate::relay::OutboundRelay;
use crate::session::BridgeSession;

/// Routes validated inbound actions to their handlers.
pub struct InboundDispatcher {
    session: Arc<BridgeSession>,
    relay: Arc<OutboundRelay>,
    orchestrator: Arc<PaymentOrchestrator>,
    adapters: Arc<Adapters>,
    allowed_origins: Vec<String>,
}

impl InboundDispatcher {
    /// Creates a dispatcher over the session and its collaborators.
    ///
    /// An empty `allowed_origins` accepts any origin (the permissive
    /// pre-hardening behavior); a non-empty list is enforced strictly.
    #[must_use]
    pub fn new(
        session: Arc<BridgeSession>,
        relay: Arc<OutboundRelay>,
        orchestrator: Arc<PaymentOrchestrator>,
        adapters: Arc<Adapters>,
        allowed_origins: Vec<String>,
    ) -> Self {
        Self {
            session,
            relay,
            orchestrator,
            adapters,
            allowed_origins,
        }
    }

    /// Replays the identity triplet; call when the game channel reports load.
    pub fn game_loaded(&self) {
        self.relay
            .publish(self.session.identity(), &self.session.gate_decision());
    }

    /// Consumes envelopes until the channel closes (session teardown).
    pub async fn run(self: Arc<Self>, mut inbound: mpsc::Receiver<InboundEnvelope>) {
        while let Some(envelope) = inbound.recv().await {
            self.handle(envelope).await;
        }
        debug!("inbound channel closed; dispatcher stopping");
    }

    /// Filters, parses, and routes one envelope.
    pub async fn handle(&self, envelope: InboundEnvelope) {
        if !self.origin_allowed(&envelope.origin) {
            warn!(origin = %envelope.origin, "dropping message from unlisted origin");
            return;
        }
        let Some(action) = InboundAction::parse(&envelope.data) else {
            debug!(origin = %envelope.origin, "ignoring unrecognized message");
            return;
        };

        match action {
            InboundAction::GetUserContext => {
                debug!("game requested user context");
                self.game_loaded();
            }
            InboundAction::RequestPayment { network, amount } => {
                // One task per request; concurrent payments are allowed and
                // each yields exactly one outcome message.
                let orchestrator = Arc::clone(&self.orchestrator);
                let relay = Arc::clone(&self.relay);
                tokio::spawn(async move {
                    let outcome = orchestrator
                        .execute(PaymentRequest::new(network, amount))
                        .await;
                    relay.payment_outcome(&outcome);
                });
            }
            InboundAction::ShareGame => self.adapters.share_game().await,
            InboundAction::ShareScore { message } => self.adapters.share_score(&message).await,
            InboundAction::SendNotification { message } => {
                let adapters = Arc::clone(&self.adapters);
                let identity = self.session.identity().clone();
                tokio::spawn(async move {
                    adapters.send_notification(&identity, &message).await;
                });
            }
            InboundAction::OpenUrl { url } => self.adapters.open_url(&url).await,
            InboundAction::AddMiniApp => self.adapters.add_mini_app().await,
            InboundAction::HapticImpact { intensity } => {
                self.adapters.haptic_impact(intensity.as_deref()).await;
            }
        }
    }

    fn origin_allowed(&self, origin: &str) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == origin)
    }
}

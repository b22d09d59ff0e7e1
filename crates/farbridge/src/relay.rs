//! Outbound relay.
//!
//! Serializes identity, gate state, and payment outcomes into the game
//! channel. Ordering inside one `publish` is a contract: the game must never
//! observe the gate state before the FID it gates.

use std::sync::Arc;

use tracing::debug;

use farbridge_payments::PaymentOutcome;
use farbridge_shared::{GateDecision, OutboundMessage, UserIdentity};

use crate::channel::GameChannel;

/// Posts typed messages into the single embedded game channel.
pub struct OutboundRelay {
    channel: Arc<dyn GameChannel>,
}

impl OutboundRelay {
    /// Creates a relay over the embedded channel.
    #[must_use]
    pub fn new(channel: Arc<dyn GameChannel>) -> Self {
        Self { channel }
    }

    /// Publishes the identity triplet, in fixed order:
    ///
    /// 1. `FARCASTER_USER_INFO`
    /// 2. `SetFarcasterFID [fid]`
    /// 3. `SetFidGateState ["0"|"1"]`
    ///
    /// Idempotent: safe to replay arbitrarily often for the same identity.
    pub fn publish(&self, identity: &UserIdentity, decision: &GateDecision) {
        debug!(
            username = %identity.username,
            fid = %identity.account_id,
            allowed = decision.allowed,
            "publishing identity to game"
        );
        self.channel
            .post(OutboundMessage::user_info(&identity.username, &identity.avatar_url));
        self.channel
            .post(OutboundMessage::set_fid(&identity.account_id));
        self.channel
            .post(OutboundMessage::set_gate_state(decision.allowed));
    }

    /// Relays a payment outcome as exactly one message.
    ///
    /// Success uses `SetPaymentSuccess ["1", network, txHash]`; failure uses
    /// `SetPaymentError [code, network]`. The legacy `SetPaymentSuccess ["0"]`
    /// form is never emitted.
    pub fn payment_outcome(&self, outcome: &PaymentOutcome) {
        let message = if outcome.success {
            let hash = outcome.tx_hash.map(|h| format!("{h:#x}"));
            OutboundMessage::payment_success(outcome.network, hash.as_deref())
        } else {
            let code = outcome.error_code().unwrap_or("TX_FAILED");
            OutboundMessage::payment_error(code, outcome.network)
        };
        self.channel.post(message);
    }

    /// Relays the allow-list membership flag.
    pub fn set_user_in_list(&self, allowed: bool) {
        self.channel.post(OutboundMessage::set_user_in_list(allowed));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use farbridge_shared::NetworkId;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct RecordingChannel {
        messages: Mutex<Vec<OutboundMessage>>,
    }

    impl GameChannel for RecordingChannel {
        fn post(&self, message: OutboundMessage) {
            self.messages.lock().push(message);
        }
    }

    fn relay() -> (OutboundRelay, Arc<RecordingChannel>) {
        let channel = Arc::new(RecordingChannel::default());
        (OutboundRelay::new(Arc::clone(&channel) as _), channel)
    }

    #[test]
    fn publish_emits_exactly_three_messages_in_order() {
        let (relay, channel) = relay();
        let identity = UserIdentity {
            username: "alice".to_string(),
            avatar_url: "https://p/a.png".to_string(),
            account_id: "42".to_string(),
        };
        let decision = GateDecision {
            account_id: "42".to_string(),
            allowed: true,
        };

        relay.publish(&identity, &decision);

        let messages = channel.messages.lock();
        assert_eq!(messages.len(), 3);
        assert_eq!(
            messages[0],
            OutboundMessage::user_info("alice", "https://p/a.png")
        );
        assert_eq!(messages[1], OutboundMessage::set_fid("42"));
        assert_eq!(messages[2], OutboundMessage::set_gate_state(true));
    }

    #[test]
    fn publish_handles_the_guest_default() {
        let (relay, channel) = relay();
        let identity = UserIdentity::guest();
        let decision = GateDecision {
            account_id: String::new(),
            allowed: false,
        };

        relay.publish(&identity, &decision);
        relay.publish(&identity, &decision); // idempotent replay

        let messages = channel.messages.lock();
        assert_eq!(messages.len(), 6);
        assert_eq!(messages[1], OutboundMessage::set_fid(""));
        assert_eq!(messages[2], OutboundMessage::set_gate_state(false));
        assert_eq!(&messages[3..], &messages[..3]);
    }

    #[test]
    fn failed_outcome_relays_error_code_and_network() {
        let (relay, channel) = relay();
        relay.payment_outcome(&PaymentOutcome {
            success: false,
            network: NetworkId::Secondary,
            tx_hash: None,
            error: Some(farbridge_payments::PaymentError::WalletNotConnected),
        });

        let messages = channel.messages.lock();
        assert_eq!(messages.len(), 1);
        assert_eq!(
            messages[0],
            OutboundMessage::payment_error("WALLET_NOT_CONNECTED", NetworkId::Secondary)
        );
    }

    #[test]
    fn membership_flag_is_a_single_method_call() {
        let (relay, channel) = relay();
        relay.set_user_in_list(true);
        relay.set_user_in_list(false);

        let messages = channel.messages.lock();
        assert_eq!(messages[0], OutboundMessage::set_user_in_list(true));
        assert_eq!(messages[1], OutboundMessage::set_user_in_list(false));
    }

    #[test]
    fn successful_outcome_relays_hash() {
        let (relay, channel) = relay();
        let hash = alloy_primitives::B256::repeat_byte(0x11);
        relay.payment_outcome(&PaymentOutcome {
            success: true,
            network: NetworkId::Primary,
            tx_hash: Some(hash),
            error: None,
        });

        let messages = channel.messages.lock();
        match &messages[0] {
            OutboundMessage::MethodCall { method, args } => {
                assert_eq!(method, "SetPaymentSuccess");
                assert_eq!(args[0], "1");
                assert_eq!(args[1], "primary");
                assert_eq!(args[2], format!("{hash:#x}"));
            }
            OutboundMessage::UserInfo { .. } => panic!("wrong variant"),
        }
    }
}

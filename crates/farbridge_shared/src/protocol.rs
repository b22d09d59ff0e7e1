//! Cross-frame message protocol.
//!
//! JSON-shaped payloads exchanged with the embedded game. Both sides must
//! agree on these definitions; the game only understands primitive string
//! arguments, so every method-call argument is a string.
//!
//! Inbound traffic shares the page-wide message channel with unrelated
//! producers, so parsing is total: anything that does not match the expected
//! envelope yields `None` and is dropped by the dispatcher, never an error.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Method names the embedded game exposes to the bridge.
pub mod methods {
    /// Delivers the session FID as a decimal string (empty for guests).
    pub const SET_FARCASTER_FID: &str = "SetFarcasterFID";
    /// Delivers the allow-list gate state as `"0"` or `"1"`.
    pub const SET_FID_GATE_STATE: &str = "SetFidGateState";
    /// Reports a successful payment: `["1", network, txHash?]`.
    pub const SET_PAYMENT_SUCCESS: &str = "SetPaymentSuccess";
    /// Reports a failed payment: `[errorCode, network?]`.
    pub const SET_PAYMENT_ERROR: &str = "SetPaymentError";
    /// Delivers the allow-list membership as `"0"` or `"1"`.
    pub const SET_USER_IN_LIST: &str = "SetUserInList";
}

/// Envelope tag on inbound frame actions.
const FRAME_ACTION_TYPE: &str = "frame-action";

/// Which configured chain a payment targets.
///
/// The wire names are deliberately abstract; the concrete chain behind each
/// slot lives in the payment network table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    /// The default chain for payments.
    #[default]
    Primary,
    /// The alternate chain.
    Secondary,
}

impl NetworkId {
    /// Wire name of this network slot.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }

    /// Parses a wire name; unknown names yield `None`.
    #[must_use]
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "primary" => Some(Self::Primary),
            "secondary" => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// Identity payload attached to [`OutboundMessage::UserInfo`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfoPayload {
    /// Display name of the session user.
    pub username: String,
    /// Avatar URL, possibly empty.
    #[serde(rename = "pfpUrl")]
    pub pfp_url: String,
}

/// A message posted into the embedded game channel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutboundMessage {
    /// Identity broadcast consumed by the game's UI layer.
    #[serde(rename = "FARCASTER_USER_INFO")]
    UserInfo {
        /// Identity fields the game renders.
        payload: UserInfoPayload,
    },
    /// Generic method-call envelope; `args` are always plain strings.
    #[serde(rename = "UNITY_METHOD_CALL")]
    MethodCall {
        /// Name of the game-side method to invoke.
        method: String,
        /// Ordered string arguments.
        args: Vec<String>,
    },
}

impl OutboundMessage {
    /// Builds the identity broadcast.
    #[must_use]
    pub fn user_info(username: &str, pfp_url: &str) -> Self {
        Self::UserInfo {
            payload: UserInfoPayload {
                username: username.to_string(),
                pfp_url: pfp_url.to_string(),
            },
        }
    }

    /// Builds a raw method call.
    #[must_use]
    pub fn method_call(method: &str, args: Vec<String>) -> Self {
        Self::MethodCall {
            method: method.to_string(),
            args,
        }
    }

    /// `SetFarcasterFID [fid]`; the argument is empty for guests.
    #[must_use]
    pub fn set_fid(account_id: &str) -> Self {
        Self::method_call(methods::SET_FARCASTER_FID, vec![account_id.to_string()])
    }

    /// `SetFidGateState ["0"|"1"]`.
    #[must_use]
    pub fn set_gate_state(allowed: bool) -> Self {
        Self::method_call(methods::SET_FID_GATE_STATE, vec![flag(allowed)])
    }

    /// `SetUserInList ["0"|"1"]`.
    #[must_use]
    pub fn set_user_in_list(allowed: bool) -> Self {
        Self::method_call(methods::SET_USER_IN_LIST, vec![flag(allowed)])
    }

    /// `SetPaymentSuccess ["1", network, txHash?]`.
    #[must_use]
    pub fn payment_success(network: NetworkId, tx_hash: Option<&str>) -> Self {
        let mut args = vec!["1".to_string(), network.as_str().to_string()];
        if let Some(hash) = tx_hash {
            args.push(hash.to_string());
        }
        Self::method_call(methods::SET_PAYMENT_SUCCESS, args)
    }

    /// `SetPaymentError [code, network]`.
    #[must_use]
    pub fn payment_error(code: &str, network: NetworkId) -> Self {
        Self::method_call(
            methods::SET_PAYMENT_ERROR,
            vec![code.to_string(), network.as_str().to_string()],
        )
    }
}

fn flag(value: bool) -> String {
    if value { "1" } else { "0" }.to_string()
}

/// A raw inbound event as delivered by the page message channel.
///
/// The origin travels with the payload so the dispatcher can enforce the
/// configured origin allow-list before looking at the data at all.
#[derive(Clone, Debug)]
pub struct InboundEnvelope {
    /// Origin of the sending frame (scheme://host[:port]).
    pub origin: String,
    /// Untrusted JSON payload.
    pub data: Value,
}

impl InboundEnvelope {
    /// Wraps a payload with its origin.
    #[must_use]
    pub fn new(origin: impl Into<String>, data: Value) -> Self {
        Self {
            origin: origin.into(),
            data,
        }
    }
}

/// A recognized, validated inbound action.
///
/// The envelope is validated exactly once here; downstream handlers never see
/// duck-typed JSON.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InboundAction {
    /// Game asks for an identity + gate replay.
    GetUserContext,
    /// Game asks the host to perform a token payment.
    RequestPayment {
        /// Target network slot; `None` defaults to primary.
        network: Option<NetworkId>,
        /// Decimal token amount; `None` uses the configured default.
        amount: Option<String>,
    },
    /// Game asks for a promotional share cast.
    ShareGame,
    /// Game asks for a score share cast; the score travels verbatim.
    ShareScore {
        /// Score text interpolated into the cast.
        message: String,
    },
    /// Game asks for a push notification to the session user.
    SendNotification {
        /// Notification body.
        message: String,
    },
    /// Game asks the host to prompt an install of the mini app.
    AddMiniApp,
    /// Game asks for haptic feedback.
    HapticImpact {
        /// Requested intensity name; absent means the host default.
        intensity: Option<String>,
    },
    /// Game asks the host to open an external URL.
    OpenUrl {
        /// Target URL; validated by the navigation adapter.
        url: String,
    },
}

impl InboundAction {
    /// Parses an untrusted payload into a typed action.
    ///
    /// Returns `None` for anything that is not addressed to the bridge or is
    /// missing a required field. Unknown network names in `request-payment`
    /// are treated as unspecified (the orchestrator then defaults to the
    /// primary network).
    #[must_use]
    pub fn parse(data: &Value) -> Option<Self> {
        let action = data.get("action")?.as_str()?;
        let tagged = data.get("type").and_then(Value::as_str) == Some(FRAME_ACTION_TYPE);

        // open-url arrives bare, without the frame-action tag.
        if action == "open-url" {
            let url = data.get("url")?.as_str()?;
            return Some(Self::OpenUrl {
                url: url.to_string(),
            });
        }

        if !tagged {
            return None;
        }

        match action {
            "get-user-context" => Some(Self::GetUserContext),
            "request-payment" => Some(Self::RequestPayment {
                network: data
                    .get("network")
                    .and_then(Value::as_str)
                    .and_then(NetworkId::from_wire),
                amount: data
                    .get("amount")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            }),
            "share-game" => Some(Self::ShareGame),
            "share-score" => Some(Self::ShareScore {
                message: data.get("message")?.as_str()?.to_string(),
            }),
            "send-notification" => Some(Self::SendNotification {
                message: data.get("message")?.as_str()?.to_string(),
            }),
            "add-miniapp" => Some(Self::AddMiniApp),
            "haptic-impact" => Some(Self::HapticImpact {
                intensity: data
                    .get("intensity")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn outbound_user_info_wire_shape() {
        let msg = OutboundMessage::user_info("alice", "https://pfp.example/a.png");
        let wire = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            wire,
            json!({
                "type": "FARCASTER_USER_INFO",
                "payload": { "username": "alice", "pfpUrl": "https://pfp.example/a.png" }
            })
        );
    }

    #[test]
    fn outbound_method_call_wire_shape() {
        let msg = OutboundMessage::set_gate_state(true);
        let wire = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            wire,
            json!({
                "type": "UNITY_METHOD_CALL",
                "method": "SetFidGateState",
                "args": ["1"]
            })
        );
    }

    #[test]
    fn guest_fid_is_empty_string_argument() {
        let msg = OutboundMessage::set_fid("");
        match msg {
            OutboundMessage::MethodCall { args, .. } => assert_eq!(args, vec![String::new()]),
            OutboundMessage::UserInfo { .. } => panic!("wrong variant"),
        }
    }

    #[test]
    fn payment_success_omits_missing_hash() {
        let with_hash = OutboundMessage::payment_success(NetworkId::Primary, Some("0xabc"));
        let without = OutboundMessage::payment_success(NetworkId::Secondary, None);
        match (with_hash, without) {
            (
                OutboundMessage::MethodCall { args: a, .. },
                OutboundMessage::MethodCall { args: b, .. },
            ) => {
                assert_eq!(a, vec!["1", "primary", "0xabc"]);
                assert_eq!(b, vec!["1", "secondary"]);
            }
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn parses_every_frame_action() {
        let cases = [
            (json!({"type": "frame-action", "action": "get-user-context"}),
             InboundAction::GetUserContext),
            (json!({"type": "frame-action", "action": "share-game"}),
             InboundAction::ShareGame),
            (json!({"type": "frame-action", "action": "share-score", "message": "42"}),
             InboundAction::ShareScore { message: "42".to_string() }),
            (json!({"type": "frame-action", "action": "send-notification", "message": "hi"}),
             InboundAction::SendNotification { message: "hi".to_string() }),
            (json!({"type": "frame-action", "action": "add-miniapp"}),
             InboundAction::AddMiniApp),
        ];
        for (value, expected) in cases {
            assert_eq!(InboundAction::parse(&value), Some(expected));
        }
    }

    #[test]
    fn haptic_intensity_is_optional() {
        let named = json!({"type": "frame-action", "action": "haptic-impact", "intensity": "heavy"});
        assert_eq!(
            InboundAction::parse(&named),
            Some(InboundAction::HapticImpact {
                intensity: Some("heavy".to_string())
            })
        );

        let bare = json!({"type": "frame-action", "action": "haptic-impact"});
        assert_eq!(
            InboundAction::parse(&bare),
            Some(InboundAction::HapticImpact { intensity: None })
        );
    }

    #[test]
    fn parses_request_payment_fields() {
        let full = json!({
            "type": "frame-action",
            "action": "request-payment",
            "network": "secondary",
            "amount": "2.5"
        });
        assert_eq!(
            InboundAction::parse(&full),
            Some(InboundAction::RequestPayment {
                network: Some(NetworkId::Secondary),
                amount: Some("2.5".to_string()),
            })
        );

        // Unknown network name degrades to unspecified.
        let odd = json!({"type": "frame-action", "action": "request-payment", "network": "l3"});
        assert_eq!(
            InboundAction::parse(&odd),
            Some(InboundAction::RequestPayment {
                network: None,
                amount: None,
            })
        );
    }

    #[test]
    fn open_url_is_accepted_without_frame_tag() {
        let bare = json!({"action": "open-url", "url": "https://example.com/"});
        assert_eq!(
            InboundAction::parse(&bare),
            Some(InboundAction::OpenUrl {
                url: "https://example.com/".to_string()
            })
        );
    }

    #[test]
    fn rejects_unrelated_traffic() {
        let cases = [
            json!({"source": "react-devtools"}),
            json!({"type": "frame-action"}),
            json!({"type": "frame-action", "action": "self-destruct"}),
            json!({"type": "frame-action", "action": "share-score"}),
            json!({"action": "open-url"}),
            json!(42),
            json!(null),
        ];
        for value in cases {
            assert_eq!(InboundAction::parse(&value), None, "accepted {value}");
        }
    }
}

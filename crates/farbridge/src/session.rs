//! Session establishment.
//!
//! One identity resolution per session: signal readiness, fetch the host
//! context, degrade field by field to the guest identity. A failing host
//! never fails the session; the bridge stays usable for everything that does
//! not need an identity.

use tracing::{error, info, warn};

use farbridge_host::{HostActions, HostContext};
use farbridge_shared::{GateDecision, UserIdentity};

use crate::gate::AllowList;

/// Session-scoped bridge state: the resolved identity and the gate.
///
/// Created once at bridge start, immutable for the session, shared by
/// reference into the dispatcher and relay.
#[derive(Debug)]
pub struct BridgeSession {
    identity: UserIdentity,
    allow_list: AllowList,
}

impl BridgeSession {
    /// Signals readiness to the host and resolves the session identity.
    ///
    /// Host failures are absorbed: a failed `ready()` is logged and ignored,
    /// a failed context fetch yields the guest identity.
    pub async fn initialize(host: &dyn HostActions, allow_list: AllowList) -> Self {
        if let Err(error) = host.ready().await {
            warn!(%error, "host ready() failed; continuing anyway");
        }

        let identity = match host.context().await {
            Ok(context) => identity_from_context(context),
            Err(error) => {
                error!(%error, "host context unavailable; falling back to guest");
                UserIdentity::guest()
            }
        };
        info!(
            username = %identity.username,
            fid = %identity.account_id,
            "bridge session established"
        );

        Self {
            identity,
            allow_list,
        }
    }

    /// Builds a session from an already-resolved identity.
    #[must_use]
    pub fn with_identity(identity: UserIdentity, allow_list: AllowList) -> Self {
        Self {
            identity,
            allow_list,
        }
    }

    /// The identity resolved for this session.
    #[must_use]
    pub fn identity(&self) -> &UserIdentity {
        &self.identity
    }

    /// Recomputes the gate decision for the session identity.
    #[must_use]
    pub fn gate_decision(&self) -> GateDecision {
        self.allow_list.decide(&self.identity)
    }
}

/// Maps the host context onto the session identity, field by field.
fn identity_from_context(context: HostContext) -> UserIdentity {
    match context.user {
        Some(user) => UserIdentity::from_parts(user.username, user.pfp_url, user.fid),
        None => UserIdentity::guest(),
    }
}

//! Session identity model.
//!
//! The bridge resolves the host user exactly once at startup and carries the
//! result for the rest of the session. There is no global singleton: the
//! owning session hands references to whoever needs them.

use serde::{Deserialize, Serialize};

use crate::constants::GUEST_USERNAME;

/// The identity the host reported for this session.
///
/// Created once at bridge initialization and immutable afterwards. Every
/// field degrades independently: a host that knows the username but not the
/// avatar still yields a usable identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Display name, `"Guest"` when the host has no user.
    pub username: String,
    /// Avatar URL, possibly empty.
    pub avatar_url: String,
    /// Numeric account identifier as a decimal string, possibly empty.
    pub account_id: String,
}

impl UserIdentity {
    /// Creates an identity from whatever fields the host supplied.
    ///
    /// Missing fields fall back to the guest defaults one by one.
    #[must_use]
    pub fn from_parts(
        username: Option<String>,
        avatar_url: Option<String>,
        account_id: Option<u64>,
    ) -> Self {
        Self {
            username: username.unwrap_or_else(|| GUEST_USERNAME.to_string()),
            avatar_url: avatar_url.unwrap_or_default(),
            account_id: account_id.map(|id| id.to_string()).unwrap_or_default(),
        }
    }

    /// The anonymous identity used when the host call fails entirely.
    #[must_use]
    pub fn guest() -> Self {
        Self::from_parts(None, None, None)
    }

    /// Whether the host reported a real account for this session.
    #[must_use]
    pub fn has_account(&self) -> bool {
        !self.account_id.is_empty()
    }
}

impl Default for UserIdentity {
    fn default() -> Self {
        Self::guest()
    }
}

/// Result of consulting the allow-list for an identity.
///
/// Derived on demand, never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateDecision {
    /// The account the decision applies to (decimal string, possibly empty).
    pub account_id: String,
    /// Whether the account is on the allow-list.
    pub allowed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_identity_defaults() {
        let guest = UserIdentity::guest();
        assert_eq!(guest.username, "Guest");
        assert_eq!(guest.avatar_url, "");
        assert_eq!(guest.account_id, "");
        assert!(!guest.has_account());
    }

    #[test]
    fn fields_degrade_independently() {
        let id = UserIdentity::from_parts(Some("alice".to_string()), None, Some(42));
        assert_eq!(id.username, "alice");
        assert_eq!(id.avatar_url, "");
        assert_eq!(id.account_id, "42");
        assert!(id.has_account());
    }
}

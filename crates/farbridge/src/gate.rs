//! Allow-list gate.
//!
//! A fixed membership set loaded once at startup and read-only afterwards.
//! The membership test is a pure function of the account-id string: anything
//! that does not parse as an integer is simply not a member.

use std::collections::HashSet;

use farbridge_shared::{GateDecision, UserIdentity};

/// Process-wide set of account identifiers admitted by the gate.
#[derive(Clone, Debug, Default)]
pub struct AllowList {
    fids: HashSet<u64>,
}

impl AllowList {
    /// Builds the set from configured identifiers.
    #[must_use]
    pub fn new(fids: impl IntoIterator<Item = u64>) -> Self {
        Self {
            fids: fids.into_iter().collect(),
        }
    }

    /// Membership test; false for empty, non-numeric, or absent ids.
    #[must_use]
    pub fn is_allowed(&self, account_id: &str) -> bool {
        account_id
            .parse::<u64>()
            .is_ok_and(|fid| self.fids.contains(&fid))
    }

    /// Derives the gate decision for an identity.
    #[must_use]
    pub fn decide(&self, identity: &UserIdentity) -> GateDecision {
        GateDecision {
            account_id: identity.account_id.clone(),
            allowed: self.is_allowed(&identity.account_id),
        }
    }
}

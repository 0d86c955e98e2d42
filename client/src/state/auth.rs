//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Signal-friendly mirror of the bridge snapshot. Route guards and user-aware
//! components read it from context; the `AuthBridge` component is the only
//! writer.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use auth_bridge::{AccountInfo, AuthenticationState, BridgeState};

/// Authentication state tracking the current principal and render revision.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub authentication_state: AuthenticationState,
    pub account_info: Option<Arc<AccountInfo>>,
    /// Bumped on every render trigger, including account-info notifications
    /// that leave the other fields structurally unchanged.
    pub revision: u64,
}

impl AuthState {
    #[must_use]
    pub fn from_snapshot(snapshot: &BridgeState, revision: u64) -> Self {
        Self {
            authentication_state: snapshot.authentication_state,
            account_info: snapshot.account_info.clone(),
            revision,
        }
    }

    /// State after the bridge reports `snapshot`.
    #[must_use]
    pub fn next(&self, snapshot: &BridgeState) -> Self {
        Self::from_snapshot(snapshot, self.revision.wrapping_add(1))
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authentication_state == AuthenticationState::Authenticated
    }

    /// False while a sign-in flow is running.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.authentication_state != AuthenticationState::InProgress
    }

    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.account_info.as_deref().map(AccountInfo::display_name)
    }
}

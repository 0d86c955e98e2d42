//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior. Redirects only
//! fire once the provider has settled; an in-progress sign-in never bounces.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use auth_bridge::AuthenticationState;
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// True once the provider has settled on "no session".
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    state.authentication_state == AuthenticationState::Unauthenticated
}

/// True once a session exists, so the login route can step aside.
pub fn should_redirect_signed_in(state: &AuthState) -> bool {
    state.is_authenticated()
}

/// Redirect to `/login` whenever the bridge reports no session.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}

/// Redirect to `/` whenever the bridge reports a session.
pub fn install_signed_in_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_signed_in(&auth.get()) {
            navigate(HOME_PATH, NavigateOptions::default());
        }
    });
}

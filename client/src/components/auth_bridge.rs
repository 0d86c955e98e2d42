//! Leptos host for the authentication-state bridge.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns one `auth_bridge::AuthBridge` per mounted instance. The bridge's render
//! trigger writes the snapshot into an `RwSignal<AuthState>`; the rendered
//! closure tracks that signal and asks the bridge for content, so every
//! provider notification that changes what the caller sees re-runs it.
//!
//! LIFECYCLE
//! =========
//! The bridge subscribes when the component body runs and detaches in
//! `on_cleanup`; dropping the stored value would also detach it.

#[cfg(test)]
#[path = "auth_bridge_test.rs"]
mod auth_bridge_test;

use std::sync::Arc;

use auth_bridge::{
    AuthAction, AuthBridge as Bridge, AuthProvider, BridgeConfig, BridgeOptions, BridgeState,
    ContentDescription, SharedStore,
};
use leptos::children::ViewFn;
use leptos::prelude::*;

use crate::state::auth::AuthState;

/// What the bridge renders: a view, a function of the props, or nothing.
pub type BridgeContent = ContentDescription<ViewFn>;

/// Login/logout handles provided to descendants through context.
#[derive(Clone, Debug)]
pub struct AuthActions {
    pub login: AuthAction,
    pub logout: AuthAction,
}

/// Renders `content` for the provider's current authentication state and
/// re-renders whenever the provider reports a change.
///
/// Provides `RwSignal<AuthState>` and [`AuthActions`] to descendants.
#[component]
pub fn AuthBridge(
    /// Shared identity provider.
    provider: Arc<dyn AuthProvider>,
    /// Content to resolve for each settled state.
    content: BridgeContent,
    /// Plain-data options such as `force_login`.
    #[prop(optional)]
    options: BridgeOptions,
    /// State-store handle forwarded to the provider.
    #[prop(optional)]
    store: Option<SharedStore>,
) -> impl IntoView {
    let auth = RwSignal::new(AuthState::default());

    let mut config = BridgeConfig::new(provider)
        .content(content)
        .options(&options)
        .on_render(move |snapshot: &BridgeState| {
            auth.update(|state| *state = state.next(snapshot));
        });
    if let Some(store) = store {
        config = config.shared_store(store);
    }

    let bridge = Bridge::new(config);
    let snapshot = bridge.snapshot();
    auth.update(|state| *state = state.next(&snapshot));

    provide_context(auth);
    provide_context(AuthActions {
        login: bridge.login_action(),
        logout: bridge.logout_action(),
    });

    let bridge = StoredValue::new(bridge);
    on_cleanup(move || bridge.update_value(Bridge::detach));

    move || {
        auth.track();
        bridge.with_value(Bridge::render).map(|view| view.run())
    }
}

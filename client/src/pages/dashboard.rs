//! Dashboard page for the signed-in principal.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Account info can arrive after the
//! state flips to authenticated, so every field renders a placeholder until it
//! does.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::auth_buttons::SignOutButton;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Dashboard page. Greets the user and offers sign-out.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let title = move || greeting(&auth.get());
    let handle = move || username(&auth.get());
    let revision = move || auth.get().revision;

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>{title}</h1>
                <SignOutButton/>
            </header>
            <dl class="dashboard-account">
                <dt>"Username"</dt>
                <dd>{handle}</dd>
                <dt>"Updates"</dt>
                <dd>{revision}</dd>
            </dl>
        </div>
    }
}

fn greeting(state: &AuthState) -> String {
    match state.display_name() {
        Some(name) => format!("Welcome, {name}"),
        None => "Welcome".to_owned(),
    }
}

fn username(state: &AuthState) -> String {
    state
        .account_info
        .as_ref()
        .and_then(|info| info.account.username.clone())
        .unwrap_or_else(|| "-".to_owned())
}

//! Login page with a single sign-in action.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use auth_bridge::AuthenticationState;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::auth_buttons::SignInButton;
use crate::state::auth::AuthState;
use crate::util::auth::install_signed_in_redirect;

/// Login page. Leaves for `/` as soon as a session exists.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_signed_in_redirect(auth, use_navigate());

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Auth Bridge"</h1>
                <p class="login-card__subtitle">{move || login_status(&auth.get())}</p>
                <SignInButton label="Sign in with your organization account"/>
            </div>
        </div>
    }
}

fn login_status(state: &AuthState) -> &'static str {
    match state.authentication_state {
        AuthenticationState::Unauthenticated => "You are signed out.",
        AuthenticationState::InProgress => "Signing you in...",
        AuthenticationState::Authenticated => "Signed in. Redirecting...",
    }
}

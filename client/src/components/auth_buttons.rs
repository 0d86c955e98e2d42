//! Sign-in and sign-out buttons wired to the nearest `AuthBridge`.

#[cfg(test)]
#[path = "auth_buttons_test.rs"]
mod auth_buttons_test;

use auth_bridge::AuthenticationState;
use leptos::prelude::*;

use crate::components::auth_bridge::AuthActions;
use crate::state::auth::AuthState;

/// Starts a sign-in flow. Disabled while one is already running.
#[component]
pub fn SignInButton(#[prop(default = "Sign in")] label: &'static str) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let login = expect_context::<AuthActions>().login;

    view! {
        <button
            class=move || sign_in_class(&auth.get())
            type="button"
            disabled=move || sign_in_disabled(&auth.get())
            on:click=move |_| login.invoke()
        >
            {label}
        </button>
    }
}

/// Ends the session. Hidden unless signed in.
#[component]
pub fn SignOutButton(#[prop(default = "Sign out")] label: &'static str) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let logout = expect_context::<AuthActions>().logout;

    view! {
        <Show when=move || sign_out_visible(&auth.get())>
            {
                let logout = logout.clone();
                view! {
                    <button
                        class="auth-button auth-button--sign-out"
                        type="button"
                        on:click=move |_| logout.invoke()
                    >
                        {label}
                    </button>
                }
            }
        </Show>
    }
}

fn sign_in_disabled(state: &AuthState) -> bool {
    state.authentication_state != AuthenticationState::Unauthenticated
}

fn sign_in_class(state: &AuthState) -> &'static str {
    if state.is_settled() {
        "auth-button auth-button--sign-in"
    } else {
        "auth-button auth-button--sign-in auth-button--busy"
    }
}

fn sign_out_visible(state: &AuthState) -> bool {
    state.is_authenticated()
}

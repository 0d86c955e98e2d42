use super::*;

use std::sync::Arc;

use auth_bridge::{Account, AccountInfo, AuthenticationState};

fn signed_in(name: Option<&str>, username: Option<&str>) -> AuthState {
    AuthState {
        authentication_state: AuthenticationState::Authenticated,
        account_info: Some(Arc::new(AccountInfo::new(Account {
            id: "home-1".to_owned(),
            name: name.map(str::to_owned),
            username: username.map(str::to_owned),
        }))),
        revision: 3,
    }
}

#[test]
fn greeting_uses_display_name() {
    assert_eq!(greeting(&signed_in(Some("Ada"), None)), "Welcome, Ada");
    assert_eq!(greeting(&signed_in(None, Some("ada@example.com"))), "Welcome, ada@example.com");
}

#[test]
fn greeting_without_account_info_is_generic() {
    let state = AuthState {
        authentication_state: AuthenticationState::Authenticated,
        ..AuthState::default()
    };
    assert_eq!(greeting(&state), "Welcome");
}

#[test]
fn username_falls_back_to_dash() {
    assert_eq!(username(&signed_in(Some("Ada"), Some("ada@example.com"))), "ada@example.com");
    assert_eq!(username(&signed_in(Some("Ada"), None)), "-");
    assert_eq!(username(&AuthState::default()), "-");
}

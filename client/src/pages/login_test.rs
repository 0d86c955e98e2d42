use super::*;

fn state(authentication_state: AuthenticationState) -> AuthState {
    AuthState {
        authentication_state,
        ..AuthState::default()
    }
}

#[test]
fn login_status_follows_authentication_state() {
    assert_eq!(login_status(&state(AuthenticationState::Unauthenticated)), "You are signed out.");
    assert_eq!(login_status(&state(AuthenticationState::InProgress)), "Signing you in...");
    assert_eq!(
        login_status(&state(AuthenticationState::Authenticated)),
        "Signed in. Redirecting..."
    );
}

use super::*;

fn state(authentication_state: AuthenticationState) -> AuthState {
    AuthState {
        authentication_state,
        ..AuthState::default()
    }
}

#[test]
fn sign_in_enabled_only_when_signed_out() {
    assert!(!sign_in_disabled(&state(AuthenticationState::Unauthenticated)));
    assert!(sign_in_disabled(&state(AuthenticationState::InProgress)));
    assert!(sign_in_disabled(&state(AuthenticationState::Authenticated)));
}

#[test]
fn sign_in_marks_busy_while_in_progress() {
    assert!(sign_in_class(&state(AuthenticationState::InProgress)).ends_with("auth-button--busy"));
    assert!(!sign_in_class(&state(AuthenticationState::Unauthenticated)).contains("busy"));
}

#[test]
fn sign_out_visible_only_when_signed_in() {
    assert!(sign_out_visible(&state(AuthenticationState::Authenticated)));
    assert!(!sign_out_visible(&state(AuthenticationState::InProgress)));
    assert!(!sign_out_visible(&state(AuthenticationState::Unauthenticated)));
}

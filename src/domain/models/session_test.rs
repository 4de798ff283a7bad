use anyhow::Result;

use super::Denial;
use super::SessionKind;
use super::SessionState;
use super::DEFAULT_GUEST_REQUEST_LIMIT;
use crate::domain::models::Capability;

fn anonymous() -> SessionState {
    return SessionState::restore(None, 0, DEFAULT_GUEST_REQUEST_LIMIT);
}

#[test]
fn it_restores_authenticated_from_stored_token() {
    let session = SessionState::restore(Some("abc".to_string()), 0, 3);
    assert_eq!(session.kind(), SessionKind::Authenticated);
    assert_eq!(session.token(), Some("abc"));
}

#[test]
fn it_restores_anonymous_without_token() {
    let session = SessionState::restore(Some("".to_string()), 2, 3);
    assert_eq!(session.kind(), SessionKind::Anonymous);
    assert_eq!(session.token(), None);
    assert_eq!(session.guest_request_count(), 2);
}

#[test]
fn it_rejects_empty_tokens() {
    let mut session = anonymous();
    assert!(session.authenticate("").is_err());
    assert!(session.enter_guest("").is_err());
    assert_eq!(session.kind(), SessionKind::Anonymous);
}

#[test]
fn it_moves_through_the_mode_cycle() -> Result<()> {
    let mut session = anonymous();

    session.enter_guest("guest-token")?;
    assert_eq!(session.kind(), SessionKind::Guest);
    assert_eq!(session.token(), Some("guest-token"));

    session.record_guest_request();
    session.authenticate("user-token")?;
    assert_eq!(session.kind(), SessionKind::Authenticated);
    assert_eq!(session.token(), Some("user-token"));
    assert_eq!(session.guest_request_count(), 0);

    session.logout();
    assert_eq!(session.kind(), SessionKind::Anonymous);
    assert_eq!(session.token(), None);

    return Ok(());
}

#[test]
fn it_denies_actions_without_a_session() {
    let session = anonymous();
    assert_eq!(
        session.check(Capability::Quick),
        Err(Denial::NoSession {
            limit_reached: false
        })
    );

    let exhausted = SessionState::restore(None, 3, 3);
    assert_eq!(
        exhausted.check(Capability::Quick),
        Err(Denial::NoSession {
            limit_reached: true
        })
    );
}

#[test]
fn it_limits_guests_to_quick_requests() -> Result<()> {
    let mut session = anonymous();
    session.enter_guest("guest-token")?;

    assert_eq!(session.check(Capability::Quick), Ok(()));
    assert_eq!(
        session.check(Capability::Smart),
        Err(Denial::GuestCapability)
    );
    assert_eq!(
        session.check(Capability::AnalyzePhoto),
        Err(Denial::GuestCapability)
    );

    return Ok(());
}

#[test]
fn it_blocks_guests_at_the_request_limit() -> Result<()> {
    let mut session = anonymous();
    session.enter_guest("guest-token")?;

    for _ in 0..DEFAULT_GUEST_REQUEST_LIMIT {
        assert_eq!(session.check(Capability::Quick), Ok(()));
        session.record_guest_request();
    }

    assert!(session.guest_limit_reached());
    assert_eq!(
        session.check(Capability::Quick),
        Err(Denial::GuestLimitReached)
    );
    assert_eq!(session.check_session(), Err(Denial::GuestLimitReached));

    return Ok(());
}

#[test]
fn it_never_limits_authenticated_users() -> Result<()> {
    let mut session = SessionState::restore(None, 10, 3);
    session.authenticate("user-token")?;
    assert_eq!(session.check(Capability::AnalyzePhoto), Ok(()));
    return Ok(());
}

//! Integration tests for the token authentication flow.

mod helpers;

use std::sync::Arc;

use chrono::Duration;

use warden_auth::{AuthError, AuthErrorKind, Authenticator};
use warden_core::types::RequestContext;
use warden_entity::SCOPES_EXTRA_KEY;
use warden_store::Seed;

use helpers::{TestApp, group, token, user};

fn seed() -> Seed {
    Seed {
        tokens: vec![token("tok-alice", "alice", "u1", 3600)],
        users: vec![user("alice", "u1", &["admins"])],
        groups: vec![group("eng", &["alice"]), group("ops", &["bob"])],
    }
}

#[tokio::test]
async fn test_valid_token_before_expiry() {
    let app = TestApp::new(seed(), Duration::seconds(3599));

    let info = app
        .authenticator
        .authenticate("tok-alice")
        .await
        .unwrap()
        .expect("token should be recognized");

    assert_eq!(info.name, "alice");
    assert_eq!(info.uid, "u1");
    assert_eq!(info.groups, ["eng", "admins"]);
    assert_eq!(info.extra[SCOPES_EXTRA_KEY], ["user:full"]);
}

#[tokio::test]
async fn test_token_after_expiry() {
    let app = TestApp::new(seed(), Duration::seconds(3601));
    let err = app.authenticator.authenticate("tok-alice").await.unwrap_err();
    assert_eq!(err.kind(), AuthErrorKind::Expired);
}

#[tokio::test]
async fn test_token_expires_as_clock_advances() {
    let app = TestApp::new(seed(), Duration::zero());
    assert!(app.authenticator.authenticate("tok-alice").await.is_ok());

    app.clock.advance(Duration::seconds(3601));
    assert!(matches!(
        app.authenticator.authenticate("tok-alice").await,
        Err(AuthError::Expired)
    ));
}

#[tokio::test]
async fn test_tombstone_before_expiry() {
    let app = TestApp::new(seed(), Duration::seconds(10));
    let mut tombstoned = token("tok-alice", "alice", "u1", 3600);
    tombstoned.deleted_at = Some(helpers::issued_at() + Duration::seconds(5));
    app.stores.tokens.insert(tombstoned).await;

    let err = app.authenticator.authenticate("tok-alice").await.unwrap_err();
    assert_eq!(err.kind(), AuthErrorKind::Expired);
}

#[tokio::test]
async fn test_account_recreated_after_issuance() {
    let app = TestApp::new(seed(), Duration::seconds(1));
    app.stores.users.insert(user("alice", "u2", &["admins"])).await;

    let err = app.authenticator.authenticate("tok-alice").await.unwrap_err();
    assert_eq!(err.kind(), AuthErrorKind::IdentityMismatch);
    let message = err.to_string();
    assert!(message.contains("u1"));
    assert!(message.contains("u2"));
}

#[tokio::test]
async fn test_deleted_account() {
    let app = TestApp::new(seed(), Duration::seconds(1));
    app.stores.users.remove("alice").await;

    let err = app.authenticator.authenticate("tok-alice").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_unknown_and_physically_removed_tokens() {
    let app = TestApp::new(seed(), Duration::seconds(1));
    assert!(
        app.authenticator
            .authenticate("tok-mallory")
            .await
            .unwrap_err()
            .is_not_found()
    );

    app.stores.tokens.remove("tok-alice").await;
    assert!(
        app.authenticator
            .authenticate("tok-alice")
            .await
            .unwrap_err()
            .is_not_found()
    );
}

#[tokio::test]
async fn test_usable_as_trait_object() {
    let app = TestApp::new(seed(), Duration::seconds(1));
    let authenticator: Arc<dyn Authenticator> = Arc::new(app.authenticator.clone());

    let ctx = RequestContext::new();
    let info = authenticator
        .authenticate_token(&ctx, "tok-alice")
        .await
        .unwrap()
        .unwrap();
    assert!(info.in_group("eng"));
    assert_eq!(info.scopes(), ["user:full"]);
}

#[tokio::test]
async fn test_group_added_later_is_visible() {
    let app = TestApp::new(seed(), Duration::seconds(1));
    app.stores.groups.push(group("oncall", &["alice"])).await;

    let info = app
        .authenticator
        .authenticate("tok-alice")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(info.groups, ["eng", "oncall", "admins"]);
}

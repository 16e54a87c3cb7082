//! Integration tests for the session lifecycle against the stub backend.

use std::time::Duration;

use betlogic_core::error::ErrorKind;
use betlogic_core::types::UserRole;
use betlogic_session::store::file_store;
use betlogic_session::SessionStatus;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new().await;
    app.add_user("pat@example.com", "password123", "user", "Pat", "Punter");

    let lifecycle = app.lifecycle();
    let identity = lifecycle.login("pat@example.com", "password123").await.unwrap();

    assert_eq!(identity.role, UserRole::User);
    assert_eq!(identity.display_name, "Pat Punter");

    let session = lifecycle.session();
    assert!(session.is_authenticated());
    assert_eq!(session.role(), Some(UserRole::User));
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = TestApp::new().await;
    app.add_user("pat@example.com", "password123", "user", "Pat", "Punter");

    let lifecycle = app.lifecycle();
    let err = lifecycle
        .login("pat@example.com", "wrongpassword")
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::CredentialInvalid);
    assert_eq!(lifecycle.session().status(), SessionStatus::Anonymous);
    // the rejected exchange must leave nothing persisted
    let store = file_store(&app.storage_path);
    assert_eq!(store.load().unwrap().status(), SessionStatus::Anonymous);
}

#[tokio::test]
async fn test_persisted_credential_survives_restart() {
    let app = TestApp::new().await;
    app.add_user("pat@example.com", "password123", "user", "Pat", "Punter");

    app.lifecycle()
        .login("pat@example.com", "password123")
        .await
        .unwrap();

    // simulate a reload: the stored slot alone must reconstruct a
    // Resolving session with the same credential
    let store = file_store(&app.storage_path);
    let loaded = store.load().unwrap();
    assert_eq!(loaded.status(), SessionStatus::Resolving);
    assert_eq!(
        loaded.credential().map(|c| c.expose().to_string()),
        Some(app.token_for("pat@example.com"))
    );
    // the hint carries display data before resolution completes
    assert_eq!(loaded.hint().role, Some(UserRole::User));

    // a fresh process bootstraps back to Authenticated
    let next = app.lifecycle();
    next.bootstrap().await.unwrap();
    assert!(next.session().is_authenticated());
}

#[tokio::test]
async fn test_bootstrap_purges_revoked_credential() {
    let app = TestApp::new().await;
    app.add_user("pat@example.com", "password123", "user", "Pat", "Punter");

    app.lifecycle()
        .login("pat@example.com", "password123")
        .await
        .unwrap();
    app.revoke("pat@example.com");

    let next = app.lifecycle();
    next.bootstrap().await.unwrap();

    assert_eq!(next.session().status(), SessionStatus::Anonymous);
    let store = file_store(&app.storage_path);
    assert_eq!(store.load().unwrap().status(), SessionStatus::Anonymous);
}

#[tokio::test]
async fn test_logout_twice_matches_logout_once() {
    let app = TestApp::new().await;
    app.add_user("pat@example.com", "password123", "user", "Pat", "Punter");

    let lifecycle = app.lifecycle();
    lifecycle.login("pat@example.com", "password123").await.unwrap();

    lifecycle.logout().await.unwrap();
    lifecycle.logout().await.unwrap();

    assert_eq!(lifecycle.session().status(), SessionStatus::Anonymous);
    let store = file_store(&app.storage_path);
    assert_eq!(store.load().unwrap().status(), SessionStatus::Anonymous);
}

#[tokio::test]
async fn test_login_logout_login_race_reflects_newest_login() {
    let app = TestApp::new().await;
    app.add_user("slow@example.com", "password123", "user", "Slow", "Resolver");
    app.add_user("fast@example.com", "password123", "admin", "Fast", "Resolver");
    // make the first login's identity resolution outlive everything
    app.delay_profile("slow@example.com", Duration::from_millis(150));

    let lifecycle = app.lifecycle();

    let first = {
        let lifecycle = lifecycle.clone();
        tokio::spawn(async move { lifecycle.login("slow@example.com", "password123").await })
    };

    // let the slow resolution get in flight, then supersede it twice
    tokio::time::sleep(Duration::from_millis(30)).await;
    lifecycle.logout().await.unwrap();
    let identity = lifecycle
        .login("fast@example.com", "password123")
        .await
        .unwrap();
    assert_eq!(identity.role, UserRole::Admin);

    // the superseded login reports the discard internally
    let first_err = first.await.unwrap().unwrap_err();
    assert_eq!(first_err.kind, ErrorKind::RaceDiscarded);

    // give the slow resolution time to arrive late, then confirm it
    // changed nothing
    tokio::time::sleep(Duration::from_millis(200)).await;
    let session = lifecycle.session();
    assert!(session.is_authenticated());
    assert_eq!(session.role(), Some(UserRole::Admin));
    assert_eq!(
        session.identity().map(|i| i.display_name.clone()),
        Some("Fast Resolver".to_string())
    );
}

#[tokio::test]
async fn test_register_does_not_log_in() {
    let app = TestApp::new().await;

    let lifecycle = app.lifecycle();
    lifecycle
        .register(&betlogic_session::client::RegisterRequest {
            email: "new@example.com".into(),
            password: "password123".into(),
            first_name: "New".into(),
            last_name: "User".into(),
        })
        .await
        .unwrap();

    assert_eq!(lifecycle.session().status(), SessionStatus::Anonymous);

    // the account exists and can log in
    let identity = lifecycle.login("new@example.com", "password123").await.unwrap();
    assert_eq!(identity.role, UserRole::User);
}

#[tokio::test]
async fn test_verify_consumes_outstanding_token() {
    let app = TestApp::new().await;
    app.add_user("new@example.com", "password123", "user", "New", "User");
    let token = app.issue_verification("new@example.com");

    let lifecycle = app.lifecycle();
    lifecycle.verify(&token).await.unwrap();

    // verification does not log the account in
    assert_eq!(lifecycle.session().status(), SessionStatus::Anonymous);

    // one-shot: redeeming the same token again is rejected
    let err = lifecycle.verify(&token).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[tokio::test]
async fn test_verify_unknown_token_is_rejected() {
    let app = TestApp::new().await;

    let err = app.lifecycle().verify("verify-bogus").await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Validation);
    assert!(err.message.contains("verification token"));
}

#[tokio::test]
async fn test_duplicate_register_is_rejected() {
    let app = TestApp::new().await;
    app.add_user("taken@example.com", "password123", "user", "Already", "Here");

    let err = app
        .lifecycle()
        .register(&betlogic_session::client::RegisterRequest {
            email: "taken@example.com".into(),
            password: "password123".into(),
            first_name: "Second".into(),
            last_name: "Comer".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Validation);
    assert!(err.message.contains("already registered"));
}

//! Integration tests for the startup session check against a mock backend.

mod helpers;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use talent_auth::{BootstrapState, GuardDecision, Route, guard};
use talent_entity::user::UserRole;

use helpers::{TestApp, token_json, user_json};

#[tokio::test]
async fn test_no_tokens_makes_no_requests() {
    let app = TestApp::new().await;

    let snapshot = app.session().bootstrap().await.unwrap();

    assert!(!snapshot.loading);
    assert!(snapshot.user.is_none());
    assert!(app.server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_valid_token_needs_one_request() {
    let app = TestApp::with_tokens("good", "r-1").await;
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .and(header("authorization", "Bearer good"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("recruiter")))
        .expect(1)
        .mount(&app.server)
        .await;

    let session = app.session();
    let snapshot = session.bootstrap().await.unwrap();

    let user = snapshot.user.clone().unwrap();
    assert_eq!(user.role, UserRole::Recruiter);
    assert_eq!(app.server.received_requests().await.unwrap().len(), 1);
    assert_eq!(guard(Route::PostJob, &snapshot), GuardDecision::Render);
    assert_eq!(
        guard(Route::Users, &snapshot),
        GuardDecision::Redirect(Route::Dashboard)
    );
}

#[tokio::test]
async fn test_expired_token_refreshes_and_retries() {
    let app = TestApp::with_tokens("stale", "r-1").await;
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .and(header("authorization", "Bearer stale"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Token expired"})))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .and(body_json(json!({"refresh_token": "r-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_json("fresh", "r-2")))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .and(header("authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("admin")))
        .expect(1)
        .mount(&app.server)
        .await;

    let snapshot = app.session().bootstrap().await.unwrap();

    assert!(snapshot.user.unwrap().is_admin());
    assert_eq!(app.server.received_requests().await.unwrap().len(), 3);
    assert_eq!(app.tokens.access_token().unwrap().as_deref(), Some("fresh"));
    assert_eq!(app.tokens.refresh_token().unwrap().as_deref(), Some("r-2"));
}

#[tokio::test]
async fn test_rejected_refresh_clears_session() {
    let app = TestApp::with_tokens("stale", "r-1").await;
    app.mount_me(401, json!({"detail": "Token expired"})).await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid refresh token"})))
        .mount(&app.server)
        .await;

    let session = app.session();
    let snapshot = session.bootstrap().await.unwrap();

    assert!(snapshot.user.is_none());
    assert_eq!(session.state(), BootstrapState::Anonymous);
    assert!(!app.tokens.has_access_token().unwrap());
    assert!(app.tokens.refresh_token().unwrap().is_none());
    assert_eq!(app.hits("/users/me").await, 1);
    assert_eq!(
        guard(Route::Dashboard, &snapshot),
        GuardDecision::Redirect(Route::Login)
    );
}

#[tokio::test]
async fn test_login_then_logout() {
    let app = TestApp::new().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"email": "ada@example.com", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_json("a-1", "r-1")))
        .expect(1)
        .mount(&app.server)
        .await;
    app.mount_me(200, user_json("job_seeker")).await;

    let session = app.session();
    let user = session.login(" ada@example.com ", "pw").await.unwrap();
    assert_eq!(user.username, "ada");
    assert!(session.snapshot().is_authenticated());
    assert_eq!(app.tokens.access_token().unwrap().as_deref(), Some("a-1"));

    session.logout().unwrap();
    assert!(!session.snapshot().is_authenticated());
    assert!(!app.tokens.has_access_token().unwrap());
}

use axum::http::StatusCode;

use crate::common::TestContext;

#[tokio::test]
async fn me_with_valid_token_returns_user_data() {
    let ctx = TestContext::new().await;
    let (email, token) = ctx.register_user().await;

    let response = ctx.server.get("/auth/me").authorization_bearer(&token).await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["email"], email);
    assert!(body.get("id").is_some());
    assert!(body.get("name").is_some());
    assert!(body.get("created_at").is_some());
    assert_eq!(body["is_active"], true);
}

#[tokio::test]
async fn me_does_not_return_sensitive_data() {
    let ctx = TestContext::new().await;
    let (_, token) = ctx.register_user().await;

    let response = ctx.server.get("/auth/me").authorization_bearer(&token).await;

    let body: serde_json::Value = response.json();
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn me_without_auth_header_returns_unauthorized() {
    let ctx = TestContext::new().await;

    let response = ctx.server.get("/auth/me").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_with_invalid_token_returns_unauthorized() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .get("/auth/me")
        .authorization_bearer("invalid-token")
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_with_wrong_auth_scheme_returns_unauthorized() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .get("/auth/me")
        .add_header(axum::http::header::AUTHORIZATION, "Basic dXNlcjpwdw==")
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

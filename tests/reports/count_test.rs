use axum::http::StatusCode;

use crate::common::{report_body, TestContext};

const DEVICE: &str = "AA:BB:CC:DD:EE:FF";

#[tokio::test]
async fn count_for_unknown_device_returns_zero() {
    let ctx = TestContext::new().await;
    let (_, token) = ctx.register_user().await;

    let response = ctx
        .server
        .get("/api/00:00:00:00:00:00/count")
        .authorization_bearer(&token)
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["count"], 0);
    assert_eq!(body["mac_address"], "00:00:00:00:00:00");
    assert!(body["last_report"].is_null());
}

#[tokio::test]
async fn count_reflects_submissions() {
    let ctx = TestContext::new().await;
    let (_, token) = ctx.register_user().await;

    for _ in 0..2 {
        ctx.server
            .post("/api")
            .authorization_bearer(&token)
            .json(&report_body(DEVICE, 1.0, 1.0))
            .await
            .assert_status(StatusCode::OK);
    }

    let response = ctx
        .server
        .get(&format!("/api/{}/count", DEVICE))
        .authorization_bearer(&token)
        .await;

    let body: serde_json::Value = response.json();
    assert_eq!(body["count"], 2);
    assert_eq!(body["mac_address"], DEVICE);
    assert!(body["last_report"].is_string());
}

#[tokio::test]
async fn count_with_short_device_id_returns_bad_request() {
    let ctx = TestContext::new().await;
    let (_, token) = ctx.register_user().await;

    let response = ctx
        .server
        .get("/api/short-id/count")
        .authorization_bearer(&token)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn count_without_token_returns_unauthorized() {
    let ctx = TestContext::new().await;

    let response = ctx.server.get(&format!("/api/{}/count", DEVICE)).await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

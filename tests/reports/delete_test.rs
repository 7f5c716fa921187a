use axum::http::StatusCode;

use crate::common::{report_body, TestContext};

const DEVICE: &str = "AA:BB:CC:DD:EE:FF";

#[tokio::test]
async fn delete_removes_all_reports_and_returns_prior_count() {
    let ctx = TestContext::new().await;
    let (_, token) = ctx.register_user().await;

    for _ in 0..3 {
        ctx.server
            .post("/api")
            .authorization_bearer(&token)
            .json(&report_body(DEVICE, 1.0, 1.0))
            .await
            .assert_status(StatusCode::OK);
    }

    let response = ctx
        .server
        .delete(&format!("/api/{}", DEVICE))
        .authorization_bearer(&token)
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["deleted_count"], 3);

    // The whole sequence is gone.
    let history = ctx
        .server
        .get(&format!("/api/{}", DEVICE))
        .authorization_bearer(&token)
        .await;
    let reports: serde_json::Value = history.json();
    assert_eq!(reports.as_array().unwrap().len(), 0);

    // A second delete no longer finds the device.
    let repeat = ctx
        .server
        .delete(&format!("/api/{}", DEVICE))
        .authorization_bearer(&token)
        .await;
    repeat.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unknown_device_returns_not_found() {
    let ctx = TestContext::new().await;
    let (_, token) = ctx.register_user().await;

    let response = ctx
        .server
        .delete("/api/00:00:00:00:00:00")
        .authorization_bearer(&token)
        .await;

    response.assert_status(StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json();
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn delete_does_not_touch_other_devices() {
    let ctx = TestContext::new().await;
    let (_, token) = ctx.register_user().await;

    ctx.server
        .post("/api")
        .authorization_bearer(&token)
        .json(&report_body(DEVICE, 1.0, 1.0))
        .await;
    ctx.server
        .post("/api")
        .authorization_bearer(&token)
        .json(&report_body("11:22:33:44:55:66", 2.0, 2.0))
        .await;

    ctx.server
        .delete(&format!("/api/{}", DEVICE))
        .authorization_bearer(&token)
        .await
        .assert_status(StatusCode::OK);

    let other = ctx
        .server
        .get("/api/11:22:33:44:55:66")
        .authorization_bearer(&token)
        .await;
    let reports: serde_json::Value = other.json();
    assert_eq!(reports.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn delete_without_token_returns_unauthorized() {
    let ctx = TestContext::new().await;

    let response = ctx.server.delete(&format!("/api/{}", DEVICE)).await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

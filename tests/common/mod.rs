use axum_test::TestServer;
use serde_json::json;

use trashreporter_api::modules::auth::crud::UserStore;
use trashreporter_api::modules::reports::crud::ReportLedger;
use trashreporter_api::services::jwt::JwtService;

// Allow dead_code for utilities used by other test files
#[allow(dead_code)]
pub struct TestContext {
    pub server: TestServer,
}

#[allow(dead_code)]
impl TestContext {
    /// Every context gets its own in-memory stores, so tests are isolated
    /// without any cleanup step.
    pub async fn new() -> Self {
        let jwt_service = JwtService::new("test-secret-key-for-testing-only".to_string());

        let app =
            trashreporter_api::create_app(UserStore::new(), ReportLedger::new(), jwt_service).await;
        let server = TestServer::new(app).expect("Failed to create test server");

        Self { server }
    }

    /// Register a fresh user and return (email, access_token).
    pub async fn register_user(&self) -> (String, String) {
        let email = test_email();

        let response = self
            .server
            .post("/auth/register")
            .json(&json!({
                "email": &email,
                "password": test_password(),
                "name": "Test User"
            }))
            .await;

        let body: serde_json::Value = response.json();
        let token = body["access_token"]
            .as_str()
            .expect("register should return an access token")
            .to_string();

        (email, token)
    }
}

// Helper to generate unique test email
#[allow(dead_code)]
pub fn test_email() -> String {
    format!("test_{}@example.com", uuid::Uuid::new_v4())
}

// Helper to generate test password
#[allow(dead_code)]
pub fn test_password() -> &'static str {
    "TestPassword123!"
}

// Helper to build a valid report submission body
#[allow(dead_code)]
pub fn report_body(device_id: &str, latitude: f64, longitude: f64) -> serde_json::Value {
    json!({
        "image": "base64imagepayload",
        "coords": { "latitude": latitude, "longitude": longitude },
        "id": device_id
    })
}

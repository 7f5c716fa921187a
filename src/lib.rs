pub mod config;
pub mod modules;
pub mod services;

use axum::{extract::State, middleware, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

use modules::auth::auth_routes;
use modules::auth::crud::UserStore;
use modules::reports::crud::ReportLedger;
use modules::reports::report_routes;
use services::jwt::JwtService;
use services::security::security_headers;

pub struct AppState {
    pub users: UserStore,
    pub reports: ReportLedger,
    pub jwt_service: JwtService,
}

pub async fn create_app(users: UserStore, reports: ReportLedger, jwt_service: JwtService) -> Router {
    let state = Arc::new(AppState {
        users,
        reports,
        jwt_service,
    });

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/auth", auth_routes())
        .nest("/api", report_routes())
        .layer(middleware::from_fn(security_headers))
        .layer(RequestBodyLimitLayer::new(1024 * 1024 * 10)) // base64 images; 10MB max body
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> &'static str {
    "TrashReporter API"
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    total_reports: usize,
}

async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        total_reports: state.reports.total_reports().await,
    })
}

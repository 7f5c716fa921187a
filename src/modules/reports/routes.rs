use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use super::controller;
use crate::AppState;

pub fn report_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(controller::submit_report))
        .route("/stats", get(controller::get_stats))
        .route("/{device_id}", get(controller::get_reports))
        .route("/{device_id}", delete(controller::delete_reports))
        .route("/{device_id}/count", get(controller::get_report_count))
}

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use chrono::Utc;
use rand::Rng;
use std::sync::Arc;

use super::model::{Report, STATUS_RECEIVED};
use super::schema::{
    CountResponse, DeleteResponse, ReportErrorResponse, StatsResponse, SubmitReportRequest,
    SubmitReportResponse,
};
use crate::modules::auth::controller::authenticate_request;
use crate::modules::auth::model::User;
use crate::AppState;

/// Shortest base64 payload accepted as a plausible image.
const MIN_IMAGE_LEN: usize = 10;

/// Shortest accepted device identifier. MAC addresses are 12 hex digits
/// before separators; nothing beyond the length is checked.
const MIN_DEVICE_ID_LEN: usize = 12;

type ApiError = (StatusCode, Json<ReportErrorResponse>);

// =============================================================================
// POST /api - Submit a new report
// =============================================================================

pub async fn submit_report(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<SubmitReportRequest>,
) -> Result<Json<SubmitReportResponse>, ApiError> {
    let user = require_auth(&state, &headers).await?;

    validate_submission(&req)?;

    let coords = format_coords(req.coords.latitude, req.coords.longitude);
    let now = Utc::now();

    let report = Report {
        coords: coords.clone(),
        datetime: now,
        status: STATUS_RECEIVED.to_string(),
        image: Some(req.image),
        comment: req.comment,
        user_email: Some(user.email),
    };

    let report_id = state.reports.append(&req.id, report).await;
    tracing::debug!(device_id = %req.id, report_id, "report appended");

    Ok(Json(SubmitReportResponse {
        success: true,
        message: "Report submitted successfully",
        report_id,
        status: STATUS_RECEIVED,
        // UX placeholder only; there is no processing pipeline behind it.
        estimated_processing_time_ms: rand::rng().random_range(500..=2000),
        coords,
        timestamp: now,
    }))
}

fn validate_submission(req: &SubmitReportRequest) -> Result<(), ApiError> {
    // Checked in order; the first failure wins.
    if req.image.is_empty() {
        return Err(bad_request("Image is required"));
    }
    if req.image.len() < MIN_IMAGE_LEN {
        return Err(bad_request("Invalid image"));
    }
    if !(-90.0..=90.0).contains(&req.coords.latitude) {
        return Err(bad_request("Invalid latitude"));
    }
    if !(-180.0..=180.0).contains(&req.coords.longitude) {
        return Err(bad_request("Invalid longitude"));
    }
    Ok(())
}

/// Debug formatting keeps a trailing `.0` on whole-number coordinates, so
/// `(10.0, 20.0)` renders as `"10.0, 20.0"` and not `"10, 20"`.
fn format_coords(latitude: f64, longitude: f64) -> String {
    format!("{:?}, {:?}", latitude, longitude)
}

// =============================================================================
// GET /api/{device_id} - Report history, newest first
// =============================================================================

pub async fn get_reports(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(device_id): Path<String>,
) -> Result<Json<Vec<Report>>, ApiError> {
    require_auth(&state, &headers).await?;
    validate_device_id(&device_id)?;

    Ok(Json(state.reports.list(&device_id).await))
}

// =============================================================================
// GET /api/{device_id}/count
// =============================================================================

pub async fn get_report_count(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(device_id): Path<String>,
) -> Result<Json<CountResponse>, ApiError> {
    require_auth(&state, &headers).await?;
    validate_device_id(&device_id)?;

    let (count, last_report) = state.reports.count(&device_id).await;

    Ok(Json(CountResponse {
        count,
        mac_address: device_id,
        last_report,
    }))
}

// =============================================================================
// DELETE /api/{device_id} - Remove a device's whole sequence
// =============================================================================

pub async fn delete_reports(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(device_id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    require_auth(&state, &headers).await?;
    validate_device_id(&device_id)?;

    let deleted_count = state
        .reports
        .delete_all(&device_id)
        .await
        .map_err(|e| (e.status_code(), Json(ReportErrorResponse::new(e.to_string()))))?;

    tracing::info!(device_id = %device_id, deleted_count, "device reports removed");

    Ok(Json(DeleteResponse {
        success: true,
        message: format!("All {} reports for device {} removed", deleted_count, device_id),
        deleted_count,
    }))
}

// =============================================================================
// GET /api/stats - Global aggregate
// =============================================================================

pub async fn get_stats(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<StatsResponse>, ApiError> {
    require_auth(&state, &headers).await?;

    let stats = state.reports.stats().await;

    Ok(Json(StatsResponse {
        total_devices: stats.device_count,
        total_reports: stats.report_count,
        status_distribution: stats.status_distribution,
        active_devices: stats.device_ids,
    }))
}

// =============================================================================
// Helpers
// =============================================================================

async fn require_auth(state: &AppState, headers: &HeaderMap) -> Result<User, ApiError> {
    authenticate_request(state, headers)
        .await
        .map_err(|e| (e.status_code(), Json(ReportErrorResponse::new(e.to_string()))))
}

fn validate_device_id(device_id: &str) -> Result<(), ApiError> {
    if device_id.len() < MIN_DEVICE_ID_LEN {
        return Err(bad_request("Invalid MAC address"));
    }
    Ok(())
}

fn bad_request(reason: &str) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ReportErrorResponse::new(reason)))
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// SUBMIT REPORT
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Deserialize)]
pub struct SubmitReportRequest {
    /// Base64-encoded image payload.
    pub image: String,
    pub coords: Coordinates,
    /// Device identifier, a MAC-address-shaped string.
    pub id: String,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SubmitReportResponse {
    pub success: bool,
    pub message: &'static str,
    /// 1-based position within the device's sequence at append time. Not a
    /// stable global identifier.
    pub report_id: usize,
    pub status: &'static str,
    /// Cosmetic UX placeholder with no relation to real work. Clients may
    /// display it; nothing may depend on its value.
    pub estimated_processing_time_ms: u32,
    pub coords: String,
    pub timestamp: DateTime<Utc>,
}

// =============================================================================
// COUNT
// =============================================================================

#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: usize,
    pub mac_address: String,
    pub last_report: Option<DateTime<Utc>>,
}

// =============================================================================
// DELETE
// =============================================================================

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
    pub deleted_count: usize,
}

// =============================================================================
// STATS
// =============================================================================

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_devices: usize,
    pub total_reports: usize,
    pub status_distribution: HashMap<String, u64>,
    pub active_devices: Vec<String>,
}

// =============================================================================
// ERROR RESPONSE
// =============================================================================

#[derive(Debug, Serialize)]
pub struct ReportErrorResponse {
    pub error: String,
}

impl ReportErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Status assigned to every new report. Reports never transition out of it
/// in this service; the histogram in `/api/stats` still reports by status.
pub const STATUS_RECEIVED: &str = "Received";

/// One litter-report submission. Created once, never mutated; removed only
/// by the bulk delete of its device's whole sequence.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub coords: String,
    pub datetime: DateTime<Utc>,
    pub status: String,
    pub image: Option<String>,
    pub comment: Option<String>,
    pub user_email: Option<String>,
}

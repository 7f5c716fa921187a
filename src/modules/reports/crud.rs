use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::modules::reports::model::Report;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Device not found")]
    DeviceNotFound,
}

impl ReportError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            Self::DeviceNotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Aggregate view over the whole ledger, for `/api/stats`.
pub struct LedgerStats {
    pub device_count: usize,
    pub report_count: usize,
    pub status_distribution: HashMap<String, u64>,
    pub device_ids: Vec<String>,
}

/// In-memory per-device report sequences. The device identifier is the only
/// partition key; the single access pattern is by device, so there is no
/// further indexing. One coarse lock serializes mutations — throughput is
/// low and per-device locking would buy nothing here.
pub struct ReportLedger {
    entries: RwLock<HashMap<String, Vec<Report>>>,
}

impl ReportLedger {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Append a report, creating the device's sequence on first write.
    /// Returns the 1-based position within that sequence at append time.
    pub async fn append(&self, device_id: &str, report: Report) -> usize {
        let mut entries = self.entries.write().await;
        let sequence = entries.entry(device_id.to_string()).or_default();
        sequence.push(report);
        sequence.len()
    }

    /// All reports for a device, newest first. Equal timestamps keep their
    /// insertion order (the sort is stable). Unknown device → empty vec.
    pub async fn list(&self, device_id: &str) -> Vec<Report> {
        let entries = self.entries.read().await;
        let mut reports = entries.get(device_id).cloned().unwrap_or_default();
        reports.sort_by(|a, b| b.datetime.cmp(&a.datetime));
        reports
    }

    /// Report count and the timestamp of the most recently appended report.
    /// An unknown device yields `(0, None)`, never an error.
    pub async fn count(&self, device_id: &str) -> (usize, Option<DateTime<Utc>>) {
        let entries = self.entries.read().await;
        match entries.get(device_id) {
            Some(sequence) => (sequence.len(), sequence.last().map(|r| r.datetime)),
            None => (0, None),
        }
    }

    /// Remove a device's entire sequence and return the prior count.
    pub async fn delete_all(&self, device_id: &str) -> Result<usize, ReportError> {
        let mut entries = self.entries.write().await;
        entries
            .remove(device_id)
            .map(|sequence| sequence.len())
            .ok_or(ReportError::DeviceNotFound)
    }

    pub async fn stats(&self) -> LedgerStats {
        let entries = self.entries.read().await;

        let mut status_distribution: HashMap<String, u64> = HashMap::new();
        let mut report_count = 0;
        for sequence in entries.values() {
            report_count += sequence.len();
            for report in sequence {
                *status_distribution.entry(report.status.clone()).or_insert(0) += 1;
            }
        }

        LedgerStats {
            device_count: entries.len(),
            report_count,
            status_distribution,
            device_ids: entries.keys().cloned().collect(),
        }
    }

    pub async fn total_reports(&self) -> usize {
        self.entries.read().await.values().map(Vec::len).sum()
    }
}

impl Default for ReportLedger {
    fn default() -> Self {
        Self::new()
    }
}

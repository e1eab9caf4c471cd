//! Burst outcome reporting.
//!
//! Every tick of a burst produces a record, whether the photo made it into
//! the store or not. The finished report is what the CLI prints and what
//! tests assert against.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::sequencing::burst::BurstPlan;

/// What happened on one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TickStatus {
    /// The photo was captured and stored.
    Saved { payload_bytes: usize },
    /// The camera returned an error or an unusable frame.
    CaptureFailed { reason: String },
    /// The camera did not answer within the capture timeout.
    CaptureTimedOut { after_ms: u64 },
    /// The photo was captured but the store rejected it.
    SaveFailed { reason: String },
}

impl TickStatus {
    pub fn is_saved(&self) -> bool {
        matches!(self, TickStatus::Saved { .. })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TickRecord {
    pub tick: u64,
    /// Burst budget left after this tick, in milliseconds.
    pub remaining_ms: u64,
    pub status: TickStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct BurstReport {
    pub burst_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub interval_ms: u64,
    pub total_duration_ms: u64,
    pub planned_ticks: u64,
    pub ticks: Vec<TickRecord>,
    pub saved: usize,
    pub failed: usize,
}

impl BurstReport {
    pub fn new(burst_id: Uuid, plan: &BurstPlan) -> Self {
        Self {
            burst_id,
            started_at: Utc::now(),
            interval_ms: plan.interval().as_millis() as u64,
            total_duration_ms: plan.total_duration().as_millis() as u64,
            planned_ticks: plan.ticks(),
            ticks: Vec::with_capacity(plan.ticks() as usize),
            saved: 0,
            failed: 0,
        }
    }

    pub fn record(&mut self, record: TickRecord) {
        if record.status.is_saved() {
            self.saved += 1;
        } else {
            self.failed += 1;
        }
        self.ticks.push(record);
    }
}

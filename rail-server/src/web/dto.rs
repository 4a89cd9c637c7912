//! Data transfer objects for web requests and responses.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::audit::AuditEvent;
use crate::domain::{Scenario, Schedule, TrainId, time::instant};

/// Service identification returned from the root endpoint.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
}

/// Request to generate a timetable for a scenario.
#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    pub scenario: Scenario,
}

/// A generated timetable plus a human-readable explanation.
#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    pub schedule: Schedule,
    pub explanation: String,
}

/// What-if request: re-optimize with one train delayed.
#[derive(Debug, Deserialize)]
pub struct WhatIfRequest {
    pub scenario: Scenario,

    /// Train whose planned departure is shifted before scheduling
    #[serde(default)]
    pub delay_train_id: Option<TrainId>,

    /// Additive delay in minutes; negative values advance
    #[serde(default)]
    pub delay_minutes: i64,
}

/// Query parameters for the audit endpoint.
#[derive(Debug, Deserialize)]
pub struct AuditQuery {
    /// Maximum events to return (default 50)
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Audit events, newest first.
#[derive(Debug, Serialize)]
pub struct AuditResponse {
    pub items: Vec<AuditEvent>,

    /// Read failure, reported instead of propagated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Aggregated performance indicators.
///
/// Currently a static illustrative report, not derived from real
/// schedules.
#[derive(Debug, Serialize)]
pub struct KpiReport {
    pub time_range: BTreeMap<String, String>,
    pub punctuality: f64,
    pub avg_delay_min: f64,
    pub throughput_trains: u32,
    pub section_utilization: BTreeMap<String, f64>,

    #[serde(with = "instant")]
    pub generated_at: DateTime<Utc>,
}

/// Error payload returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

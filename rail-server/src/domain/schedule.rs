//! Schedule output types.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::time::instant;
use super::{SectionId, TrainId};

/// One train's occupancy interval on one section.
///
/// Legs are derived and immutable once created. For a given train they
/// appear in route order, `enter_time <= exit_time`, and the duration
/// equals the run-time estimate unless headway shifted the entry later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleLeg {
    pub train_id: TrainId,

    pub section_id: SectionId,

    #[serde(with = "instant")]
    pub enter_time: DateTime<Utc>,

    #[serde(with = "instant")]
    pub exit_time: DateTime<Utc>,

    /// Loop/station id for a meet/pass. Never assigned by this version;
    /// meet/pass planning is out of scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meet_pass_at: Option<String>,
}

/// A complete timetable for one scenario: ordered legs plus objective
/// metrics. Ephemeral, recomputed per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario_id: Option<String>,

    pub legs: Vec<ScheduleLeg>,

    /// Named KPI values, e.g. `total_delay_min` and `throughput`.
    #[serde(default)]
    pub objective: BTreeMap<String, serde_json::Value>,

    #[serde(with = "instant")]
    pub created_at: DateTime<Utc>,
}

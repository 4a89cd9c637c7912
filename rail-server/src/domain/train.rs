//! Train type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::time::{instant, instant_opt};
use super::{Priority, SectionId, TrainId};

/// The kind of service a train runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    #[default]
    Passenger,
    Freight,
    Maintenance,
}

/// Operational status of a train.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainStatus {
    #[default]
    Scheduled,
    Running,
    Delayed,
    Completed,
    Cancelled,
}

/// A train to be scheduled, scoped to one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Train {
    pub id: TrainId,

    #[serde(default)]
    pub service_type: ServiceType,

    /// Higher priority commits earlier and never yields headway to
    /// lower-priority trains.
    #[serde(default)]
    pub priority: Priority,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_m: Option<u32>,

    /// Rolling-stock speed limit; the section limit applies if absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_speed_kmh: Option<f64>,

    pub origin: String,

    pub destination: String,

    #[serde(with = "instant")]
    pub planned_departure: DateTime<Utc>,

    #[serde(default, with = "instant_opt", skip_serializing_if = "Option::is_none")]
    pub planned_arrival: Option<DateTime<Utc>>,

    /// Ordered section ids from origin to destination. Callers must not
    /// repeat a section within one route.
    pub route: Vec<SectionId>,

    #[serde(default)]
    pub status: TrainStatus,
}

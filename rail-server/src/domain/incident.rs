//! Incident type.
//!
//! Incidents ride along in a scenario but are not consumed by the
//! sequencer in this version; incident-aware rerouting is an
//! acknowledged extension point.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::SectionId;
use super::time::{instant, instant_opt};

/// The kind of disruption an incident describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentKind {
    Block,
    SpeedRestriction,
    Weather,
    SignalFailure,
    RollingStock,
}

/// A reported disruption, optionally tied to a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: IncidentKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<SectionId>,

    #[serde(with = "instant")]
    pub start_time: DateTime<Utc>,

    #[serde(default, with = "instant_opt", skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,

    /// Free-form detail map, preserved verbatim and never consulted.
    #[serde(default)]
    pub details: BTreeMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_with_open_details() {
        let incident: Incident = serde_json::from_str(
            r#"{
                "id": "INC-1",
                "type": "signal_failure",
                "section_id": "S2",
                "start_time": "2025-06-01T07:30:00",
                "details": {"severity": "high", "crew_dispatched": true}
            }"#,
        )
        .unwrap();

        assert_eq!(incident.kind, IncidentKind::SignalFailure);
        assert_eq!(incident.section_id.as_ref().unwrap().as_str(), "S2");
        assert!(incident.end_time.is_none());
        assert_eq!(incident.details["severity"], "high");

        // Details survive a roundtrip untouched
        let json = serde_json::to_value(&incident).unwrap();
        assert_eq!(json["details"]["crew_dispatched"], true);
    }
}

//! Audit event type.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::time::instant;

/// One recorded operator-visible action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEvent {
    pub action: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,

    #[serde(with = "instant")]
    pub timestamp: DateTime<Utc>,

    #[serde(default)]
    pub payload: BTreeMap<String, serde_json::Value>,
}

impl AuditEvent {
    /// Create an event stamped with the current time.
    pub fn new(action: impl Into<String>, payload: BTreeMap<String, serde_json::Value>) -> Self {
        Self {
            action: action.into(),
            actor: None,
            timestamp: Utc::now(),
            payload,
        }
    }
}

//! Scheduling scenario and operator overrides.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::time::instant_opt;
use super::{Incident, Train, TrainId};

/// One raw `fixed_enters` override entry.
///
/// Fields are optional on the wire so a malformed entry fails
/// individually in the resolver instead of poisoning the whole request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixedEnter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub train_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,

    /// Absolute-instant string; parsed by the override resolver.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enter_time: Option<String>,
}

/// Operator-supplied timing overrides.
///
/// `fixed_enters` is the only key the engine recognizes. Unrecognized
/// keys are preserved on the scenario but never consulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOverrides {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fixed_enters: Vec<FixedEnter>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// A complete scheduling request: trains, incidents, and overrides.
///
/// Immutable once scheduling starts; the what-if surface derives a
/// shifted copy via [`Scenario::with_delay`] rather than mutating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub trains: Vec<Train>,

    #[serde(default)]
    pub incidents: Vec<Incident>,

    #[serde(default)]
    pub overrides: ScenarioOverrides,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(default, with = "instant_opt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Scenario {
    /// Returns a copy with one train's planned departure shifted by
    /// `minutes` (negative values advance it). All other trains keep
    /// their declared inputs. A zero delay or an unknown train id
    /// returns an unchanged copy.
    pub fn with_delay(&self, train_id: &TrainId, minutes: i64) -> Scenario {
        let mut shifted = self.clone();

        if minutes != 0
            && let Some(train) = shifted.trains.iter_mut().find(|t| &t.id == train_id)
        {
            train.planned_departure += Duration::minutes(minutes);
        }

        shifted
    }
}

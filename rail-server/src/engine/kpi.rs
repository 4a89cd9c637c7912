//! Objective metrics derived from emitted legs.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde_json::json;

use crate::domain::{ScheduleLeg, SectionId, Train, TrainId};

/// Derive the objective map for a schedule.
///
/// `total_delay_min` is always 0 in this version: no baseline timetable
/// exists to compare against. `throughput` counts the distinct trains
/// whose legs reach the final section of their route.
pub fn aggregate_kpis(
    trains: &[Train],
    legs: &[ScheduleLeg],
) -> BTreeMap<String, serde_json::Value> {
    let final_sections: HashMap<&TrainId, &SectionId> = trains
        .iter()
        .filter_map(|t| t.route.last().map(|last| (&t.id, last)))
        .collect();

    let finished: HashSet<&TrainId> = legs
        .iter()
        .filter(|leg| final_sections.get(&leg.train_id) == Some(&&leg.section_id))
        .map(|leg| &leg.train_id)
        .collect();

    BTreeMap::from([
        ("total_delay_min".to_string(), json!(0.0)),
        ("throughput".to_string(), json!(finished.len())),
    ])
}

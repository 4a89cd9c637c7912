//! Per-section conflict resolution.
//!
//! The sequencer walks trains in a fixed commitment order (priority
//! descending, then planned departure ascending) and emits one occupancy
//! leg per route section, pushing entries forward where single-track
//! headway demands it. A single pass, no re-ordering, no backtracking.
//!
//! Known limitation: headway is checked only against the most recently
//! committed exit on a section. Older legs on the same section are never
//! re-consulted, so conflicts against non-most-recent legs are not
//! re-detected. Whether a stricter all-prior-legs check is wanted is an
//! open product question; do not change this behavior silently.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::domain::{Scenario, ScheduleLeg, Section, SectionId, Train};

use super::config::SequencerConfig;
use super::overrides::OverrideTable;
use super::run_time::run_time_minutes;

/// Error from sequencing. Any failure aborts the whole request; no
/// partial schedule is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// A train's route references a section absent from the directory.
    #[error("unknown section {0}")]
    UnknownSection(SectionId),
}

/// Read-only section lookup handed to the sequencer, snapshotted from
/// the directory before the call.
pub type SectionMap = HashMap<SectionId, Section>;

/// Produce the ordered occupancy legs for a scenario.
///
/// Pure and synchronous: the same scenario, section map, override table
/// and config always yield the same legs. The per-section "last
/// committed exit" table is local to each call, so concurrent
/// invocations never share state.
pub fn sequence(
    scenario: &Scenario,
    sections: &SectionMap,
    overrides: &OverrideTable,
    config: &SequencerConfig,
) -> Result<Vec<ScheduleLeg>, SequenceError> {
    let trains = commitment_order(&scenario.trains);
    let headway = config.headway();

    let mut legs = Vec::new();
    let mut last_exit: HashMap<&SectionId, DateTime<Utc>> = HashMap::new();

    for train in trains {
        let mut current_time = train.planned_departure;

        for section_id in &train.route {
            let section = sections
                .get(section_id)
                .ok_or_else(|| SequenceError::UnknownSection(section_id.clone()))?;

            let run_min = run_time_minutes(section, train);

            // An override pins the candidate enter time; otherwise the
            // train enters as soon as it arrives.
            let candidate = overrides
                .get(&train.id)
                .and_then(|pinned| pinned.get(section_id))
                .copied()
                .unwrap_or(current_time);

            // Forward-only headway shift on single track: never earlier
            // than the candidate.
            let enter_time = match last_exit.get(section_id) {
                Some(&prev_exit) if section.single_track && candidate < prev_exit + headway => {
                    prev_exit + headway
                }
                _ => candidate,
            };

            let exit_time = enter_time + Duration::minutes(run_min);

            legs.push(ScheduleLeg {
                train_id: train.id.clone(),
                section_id: section_id.clone(),
                enter_time,
                exit_time,
                meet_pass_at: None,
            });

            // Only the most recent exit matters for future headway checks
            last_exit.insert(section_id, exit_time);
            current_time = exit_time;
        }

        tracing::debug!(train = %train.id, legs = train.route.len(), "committed train");
    }

    Ok(legs)
}

/// Sort trains into commitment order: priority descending, ties broken
/// by planned departure ascending. The sort is stable, so full ties
/// keep their scenario order.
fn commitment_order(trains: &[Train]) -> Vec<&Train> {
    let mut ordered: Vec<&Train> = trains.iter().collect();
    ordered.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| a.planned_departure.cmp(&b.planned_departure))
    });
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TrainId;
    use crate::engine::resolve_overrides;
    use crate::test_support::{instant, section, train};

    fn directory(sections: &[Section]) -> SectionMap {
        sections.iter().map(|s| (s.id.clone(), s.clone())).collect()
    }

    fn sequence_plain(
        trains: Vec<Train>,
        sections: &[Section],
    ) -> Result<Vec<ScheduleLeg>, SequenceError> {
        let scenario = Scenario {
            id: None,
            name: "test".into(),
            description: None,
            trains,
            incidents: vec![],
            overrides: Default::default(),
            created_by: None,
            created_at: None,
        };
        sequence(
            &scenario,
            &directory(sections),
            &OverrideTable::new(),
            &SequencerConfig::default(),
        )
    }

    #[test]
    fn single_track_headway_separates_trains() {
        // S1: 10 km at 110 km/h -> 5 min run time
        let s1 = section("S1", 10.0, true, 110.0);
        let t0 = instant("2025-06-01T08:00:00Z");

        let legs = sequence_plain(
            vec![
                train("A", 8, "2025-06-01T08:00:00Z", &["S1"]),
                train("B", 5, "2025-06-01T08:00:00Z", &["S1"]),
            ],
            &[s1],
        )
        .unwrap();

        assert_eq!(legs.len(), 2);

        // A commits first: enters at t0, exits t0+5
        assert_eq!(legs[0].train_id, TrainId::parse("A").unwrap());
        assert_eq!(legs[0].enter_time, t0);
        assert_eq!(legs[0].exit_time, t0 + Duration::minutes(5));

        // B is pushed to prior exit + headway: t0+10, exits t0+15
        assert_eq!(legs[1].train_id, TrainId::parse("B").unwrap());
        assert_eq!(legs[1].enter_time, t0 + Duration::minutes(10));
        assert_eq!(legs[1].exit_time, t0 + Duration::minutes(15));
    }

    #[test]
    fn override_pins_enter_time() {
        let s1 = section("S1", 10.0, true, 110.0);
        let t0 = instant("2025-06-01T08:00:00Z");

        let scenario: Scenario = serde_json::from_value(serde_json::json!({
            "name": "override",
            "trains": [{
                "id": "A",
                "priority": 8,
                "origin": "X",
                "destination": "Y",
                "planned_departure": "2025-06-01T08:00:00Z",
                "route": ["S1"]
            }],
            "overrides": {
                "fixed_enters": [
                    {"train_id": "A", "section_id": "S1", "enter_time": "2025-06-01T08:30:00Z"}
                ]
            }
        }))
        .unwrap();

        let overrides = resolve_overrides(&scenario.overrides);
        let legs = sequence(
            &scenario,
            &directory(&[s1]),
            &overrides,
            &SequencerConfig::default(),
        )
        .unwrap();

        // Enter time follows the override, not the planned departure
        assert_eq!(legs[0].enter_time, t0 + Duration::minutes(30));
        assert_eq!(legs[0].exit_time, t0 + Duration::minutes(35));
    }

    #[test]
    fn override_still_yields_to_headway() {
        let s1 = section("S1", 10.0, true, 110.0);
        let t0 = instant("2025-06-01T08:00:00Z");

        let scenario: Scenario = serde_json::from_value(serde_json::json!({
            "name": "override-headway",
            "trains": [
                {
                    "id": "A", "priority": 8, "origin": "X", "destination": "Y",
                    "planned_departure": "2025-06-01T08:00:00Z", "route": ["S1"]
                },
                {
                    "id": "B", "priority": 5, "origin": "X", "destination": "Y",
                    "planned_departure": "2025-06-01T08:00:00Z", "route": ["S1"]
                }
            ],
            "overrides": {
                "fixed_enters": [
                    {"train_id": "B", "section_id": "S1", "enter_time": "2025-06-01T08:02:00Z"}
                ]
            }
        }))
        .unwrap();

        let overrides = resolve_overrides(&scenario.overrides);
        let legs = sequence(
            &scenario,
            &directory(&[s1]),
            &overrides,
            &SequencerConfig::default(),
        )
        .unwrap();

        // B's pinned 08:02 falls inside A's exit (08:05) + 5 min headway,
        // so it is shifted forward to 08:10 - never earlier.
        assert_eq!(legs[1].enter_time, t0 + Duration::minutes(10));
    }

    #[test]
    fn unknown_section_aborts_whole_request() {
        let s1 = section("S1", 10.0, true, 110.0);

        let result = sequence_plain(
            vec![
                train("A", 8, "2025-06-01T08:00:00Z", &["S1"]),
                train("B", 5, "2025-06-01T08:00:00Z", &["S9"]),
            ],
            &[s1],
        );

        assert_eq!(
            result,
            Err(SequenceError::UnknownSection(
                crate::domain::SectionId::parse("S9").unwrap()
            ))
        );
    }

    #[test]
    fn exit_time_propagates_along_route() {
        // S1: 10 km @ 110 -> 5 min; S2: 18 km @ 120 -> 9 min
        let sections = [
            section("S1", 10.0, true, 110.0),
            section("S2", 18.0, true, 120.0),
        ];
        let t0 = instant("2025-06-01T08:00:00Z");

        let legs = sequence_plain(
            vec![train("A", 8, "2025-06-01T08:00:00Z", &["S1", "S2"])],
            &sections,
        )
        .unwrap();

        assert_eq!(legs.len(), 2);
        assert_eq!(legs[0].exit_time, t0 + Duration::minutes(5));
        // The next section is entered when the previous one is exited
        assert_eq!(legs[1].enter_time, legs[0].exit_time);
        assert_eq!(legs[1].exit_time, t0 + Duration::minutes(14));
    }

    #[test]
    fn double_track_needs_no_headway() {
        let s1 = section("S1", 10.0, false, 110.0);
        let t0 = instant("2025-06-01T08:00:00Z");

        let legs = sequence_plain(
            vec![
                train("A", 8, "2025-06-01T08:00:00Z", &["S1"]),
                train("B", 5, "2025-06-01T08:00:00Z", &["S1"]),
            ],
            &[s1],
        )
        .unwrap();

        // Both trains enter at their planned departure
        assert_eq!(legs[0].enter_time, t0);
        assert_eq!(legs[1].enter_time, t0);
    }

    #[test]
    fn higher_priority_commits_first() {
        let s1 = section("S1", 10.0, true, 110.0);

        let legs = sequence_plain(
            vec![
                train("slow", 2, "2025-06-01T07:00:00Z", &["S1"]),
                train("express", 9, "2025-06-01T08:00:00Z", &["S1"]),
            ],
            &[s1],
        )
        .unwrap();

        // Despite departing later, the express is committed first
        assert_eq!(legs[0].train_id, TrainId::parse("express").unwrap());
        assert_eq!(legs[1].train_id, TrainId::parse("slow").unwrap());
    }

    #[test]
    fn equal_priority_breaks_ties_by_departure() {
        let s1 = section("S1", 10.0, true, 110.0);

        let legs = sequence_plain(
            vec![
                train("late", 5, "2025-06-01T09:00:00Z", &["S1"]),
                train("early", 5, "2025-06-01T08:00:00Z", &["S1"]),
            ],
            &[s1],
        )
        .unwrap();

        assert_eq!(legs[0].train_id, TrainId::parse("early").unwrap());
    }

    #[test]
    fn full_ties_keep_scenario_order() {
        let s1 = section("S1", 10.0, true, 110.0);

        let legs = sequence_plain(
            vec![
                train("first", 5, "2025-06-01T08:00:00Z", &["S1"]),
                train("second", 5, "2025-06-01T08:00:00Z", &["S1"]),
            ],
            &[s1],
        )
        .unwrap();

        assert_eq!(legs[0].train_id, TrainId::parse("first").unwrap());
    }

    #[test]
    fn identical_inputs_yield_identical_legs() {
        let sections = [
            section("S1", 10.0, true, 110.0),
            section("S2", 18.0, true, 120.0),
        ];
        let trains = vec![
            train("A", 8, "2025-06-01T08:00:00Z", &["S1", "S2"]),
            train("B", 5, "2025-06-01T08:05:00Z", &["S2", "S1"]),
            train("C", 5, "2025-06-01T08:01:00Z", &["S1"]),
        ];

        let first = sequence_plain(trains.clone(), &sections).unwrap();
        let second = sequence_plain(trains, &sections).unwrap();
        assert_eq!(first, second);
    }
}

//! The scheduling engine.
//!
//! Turns a scenario (trains, sections, overrides) into a sequence of
//! per-section occupancy legs plus objective metrics, by greedy
//! single-pass commitment: trains are ordered by priority then planned
//! departure, and each train's route is walked front to back, shifting
//! entries forward where single-track headway requires it. There is no
//! solver, no backtracking, and no look-ahead across trains.
//!
//! Everything here is pure and synchronous; directory snapshots and
//! audit logging stay at the boundary.

mod config;
mod kpi;
mod overrides;
mod run_time;
mod sequencer;

pub use config::SequencerConfig;
pub use kpi::aggregate_kpis;
pub use overrides::{OverrideEntryError, OverrideTable, resolve_overrides};
pub use run_time::run_time_minutes;
pub use sequencer::{SectionMap, SequenceError, sequence};

use chrono::{DateTime, Utc};

use crate::domain::{Scenario, Schedule};

/// Run the full pipeline: resolve overrides, sequence the trains, and
/// aggregate KPIs into a schedule.
///
/// `created_at` is supplied by the caller so that identical inputs
/// always produce identical schedules.
pub fn build_schedule(
    scenario: &Scenario,
    sections: &SectionMap,
    config: &SequencerConfig,
    created_at: DateTime<Utc>,
) -> Result<Schedule, SequenceError> {
    let overrides = resolve_overrides(&scenario.overrides);
    let legs = sequence(scenario, sections, &overrides, config)?;
    let objective = aggregate_kpis(&scenario.trains, &legs);

    Ok(Schedule {
        scenario_id: scenario.id.clone(),
        legs,
        objective,
        created_at,
    })
}

//! Domain types for the rail decision support service.
//!
//! This module contains the core domain model: validated identifier and
//! priority newtypes, the scheduling inputs (sections, trains, incidents,
//! scenarios) and the derived outputs (schedule legs, schedules). Types
//! that enforce invariants do so at construction time, so code receiving
//! them can trust their validity.

mod ids;
mod incident;
mod priority;
mod scenario;
mod schedule;
mod section;
pub mod time;
mod train;

pub use ids::{InvalidId, SectionId, TrainId};
pub use incident::{Incident, IncidentKind};
pub use priority::{InvalidPriority, Priority};
pub use scenario::{FixedEnter, Scenario, ScenarioOverrides};
pub use schedule::{Schedule, ScheduleLeg};
pub use section::Section;
pub use time::{InstantParseError, parse_instant};
pub use train::{ServiceType, Train, TrainStatus};

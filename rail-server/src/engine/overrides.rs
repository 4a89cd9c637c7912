//! Override resolution.
//!
//! Turns the operator-supplied `fixed_enters` entries of a scenario into
//! a lookup table of pinned enter times. Entries are validated one at a
//! time: a malformed entry (missing field, invalid id, unparsable
//! timestamp) is logged and skipped without discarding the rest.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::domain::{
    FixedEnter, InstantParseError, InvalidId, ScenarioOverrides, SectionId, TrainId, parse_instant,
};

/// Pinned enter times keyed by train, then section.
pub type OverrideTable = HashMap<TrainId, HashMap<SectionId, DateTime<Utc>>>;

/// Why a single override entry was rejected.
#[derive(Debug, Clone, thiserror::Error)]
pub enum OverrideEntryError {
    #[error("missing {0}")]
    MissingField(&'static str),

    #[error("invalid train_id: {0}")]
    BadTrainId(InvalidId),

    #[error("invalid section_id: {0}")]
    BadSectionId(InvalidId),

    #[error("invalid enter_time: {0}")]
    BadEnterTime(InstantParseError),
}

/// Build the override table from a scenario's overrides.
pub fn resolve_overrides(overrides: &ScenarioOverrides) -> OverrideTable {
    let mut table = OverrideTable::new();

    for (index, entry) in overrides.fixed_enters.iter().enumerate() {
        match parse_entry(entry) {
            Ok((train_id, section_id, enter_time)) => {
                table
                    .entry(train_id)
                    .or_default()
                    .insert(section_id, enter_time);
            }
            Err(error) => {
                tracing::warn!(index, %error, "skipping malformed fixed_enters entry");
            }
        }
    }

    table
}

fn parse_entry(entry: &FixedEnter) -> Result<(TrainId, SectionId, DateTime<Utc>), OverrideEntryError> {
    let train_id = entry
        .train_id
        .as_deref()
        .ok_or(OverrideEntryError::MissingField("train_id"))?;
    let section_id = entry
        .section_id
        .as_deref()
        .ok_or(OverrideEntryError::MissingField("section_id"))?;
    let enter_time = entry
        .enter_time
        .as_deref()
        .ok_or(OverrideEntryError::MissingField("enter_time"))?;

    let train_id = TrainId::parse(train_id).map_err(OverrideEntryError::BadTrainId)?;
    let section_id = SectionId::parse(section_id).map_err(OverrideEntryError::BadSectionId)?;
    let enter_time = parse_instant(enter_time).map_err(OverrideEntryError::BadEnterTime)?;

    Ok((train_id, section_id, enter_time))
}

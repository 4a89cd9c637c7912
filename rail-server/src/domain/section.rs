//! Track section type.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::SectionId;

/// A track segment with a length, a speed limit, and a track-sharing
/// attribute.
///
/// Sections are externally supplied and read-mostly. `length_km` is
/// never negative and `max_speed_kmh` is at least 10; the directory
/// seeds satisfy both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,

    /// Human-friendly name.
    pub name: String,

    pub length_km: f64,

    /// A single-track section admits one train at a time per direction
    /// and requires headway separation between occupancies.
    #[serde(default = "default_single_track")]
    pub single_track: bool,

    #[serde(default = "default_max_speed")]
    pub max_speed_kmh: f64,

    /// Station/loop ids available for crossing.
    #[serde(default)]
    pub crossing_loops: BTreeSet<String>,
}

fn default_single_track() -> bool {
    true
}

fn default_max_speed() -> f64 {
    120.0
}

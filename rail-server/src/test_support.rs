//! Shared builders for unit tests.

use chrono::{DateTime, Utc};

use crate::domain::{
    Priority, Section, SectionId, ServiceType, Train, TrainId, TrainStatus, parse_instant,
};

/// Parse a known-good timestamp literal.
pub fn instant(s: &str) -> DateTime<Utc> {
    parse_instant(s).unwrap()
}

/// Build a section with the attributes the sequencer cares about.
pub fn section(id: &str, length_km: f64, single_track: bool, max_speed_kmh: f64) -> Section {
    Section {
        id: SectionId::parse(id).unwrap(),
        name: format!("{id}-section"),
        length_km,
        single_track,
        max_speed_kmh,
        crossing_loops: Default::default(),
    }
}

/// Build a train with a priority, departure, and route.
pub fn train(id: &str, priority: u8, departure: &str, route: &[&str]) -> Train {
    Train {
        id: TrainId::parse(id).unwrap(),
        service_type: ServiceType::Passenger,
        priority: Priority::new(priority).unwrap(),
        length_m: None,
        max_speed_kmh: None,
        origin: "origin".into(),
        destination: "destination".into(),
        planned_departure: instant(departure),
        planned_arrival: None,
        route: route
            .iter()
            .map(|s| SectionId::parse(*s).unwrap())
            .collect(),
        status: TrainStatus::Scheduled,
    }
}

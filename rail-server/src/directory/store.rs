//! Section directory store.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{Section, SectionId};
use crate::engine::SectionMap;

/// Thread-safe, read-mostly directory of track sections.
///
/// Reads lazily seed a small default set when the directory is empty.
/// Writes are serialized through the lock, so seeding happens-before any
/// scheduling call that snapshots the directory.
#[derive(Clone, Default)]
pub struct SectionDirectory {
    inner: Arc<RwLock<BTreeMap<SectionId, Section>>>,
}

impl SectionDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// List all sections in id order, seeding defaults if empty.
    pub async fn list(&self) -> Vec<Section> {
        self.ensure_seeded().await;
        let guard = self.inner.read().await;
        guard.values().cloned().collect()
    }

    /// Take an owned snapshot for one scheduling call, seeding defaults
    /// if empty. The engine only ever sees this call-local copy.
    pub async fn snapshot(&self) -> SectionMap {
        self.ensure_seeded().await;
        let guard = self.inner.read().await;
        guard
            .iter()
            .map(|(id, section)| (id.clone(), section.clone()))
            .collect()
    }

    /// Insert or replace a section.
    pub async fn insert(&self, section: Section) {
        let mut guard = self.inner.write().await;
        guard.insert(section.id.clone(), section);
    }

    /// Number of sections currently in the directory.
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.len()
    }

    /// Check whether the directory is empty.
    pub async fn is_empty(&self) -> bool {
        let guard = self.inner.read().await;
        guard.is_empty()
    }

    async fn ensure_seeded(&self) {
        {
            let guard = self.inner.read().await;
            if !guard.is_empty() {
                return;
            }
        }

        let mut guard = self.inner.write().await;
        // Re-check: another task may have seeded between the locks
        if guard.is_empty() {
            for section in default_sections() {
                guard.insert(section.id.clone(), section);
            }
            tracing::info!(count = guard.len(), "seeded default sections");
        }
    }
}

/// Illustrative single-track sections of varied length and speed.
fn default_sections() -> Vec<Section> {
    let section = |id: &str, name: &str, length_km: f64, max_speed_kmh: f64, loop_id: &str| Section {
        id: SectionId::parse(id).expect("static section id"),
        name: name.to_string(),
        length_km,
        single_track: true,
        max_speed_kmh,
        crossing_loops: [loop_id.to_string()].into(),
    };

    vec![
        section("S1", "Alpha-Loop", 10.0, 110.0, "A"),
        section("S2", "Beta-Plain", 18.0, 120.0, "B"),
        section("S3", "Gamma-Hill", 12.0, 90.0, "C"),
    ]
}

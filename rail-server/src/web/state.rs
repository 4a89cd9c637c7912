//! Application state for the web layer.

use std::sync::Arc;

use crate::audit::AuditSink;
use crate::directory::SectionDirectory;
use crate::engine::SequencerConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Track section directory
    pub directory: SectionDirectory,

    /// Best-effort audit sink
    pub audit: Arc<dyn AuditSink>,

    /// Sequencer configuration
    pub config: Arc<SequencerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        directory: SectionDirectory,
        audit: impl AuditSink + 'static,
        config: SequencerConfig,
    ) -> Self {
        Self {
            directory,
            audit: Arc::new(audit),
            config: Arc::new(config),
        }
    }
}

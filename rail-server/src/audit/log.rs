//! Audit sink and in-memory log.

use std::collections::VecDeque;
use std::sync::RwLock;

use super::event::AuditEvent;

/// Error from an audit store operation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuditError {
    #[error("audit store unavailable: {0}")]
    Unavailable(String),
}

/// Best-effort sink for audit events.
///
/// Recording is fire-and-forget: callers observe a failure (log it) and
/// drop it. An audit failure must never abort or alter a scheduling
/// result.
pub trait AuditSink: Send + Sync {
    /// Record one event.
    fn record(&self, event: AuditEvent) -> Result<(), AuditError>;

    /// Return up to `limit` events, newest first.
    fn recent(&self, limit: usize) -> Result<Vec<AuditEvent>, AuditError>;
}

/// In-memory, capacity-bounded audit log. The oldest events are evicted
/// once the capacity is reached.
pub struct MemoryAuditLog {
    capacity: usize,
    events: RwLock<VecDeque<AuditEvent>>,
}

impl MemoryAuditLog {
    /// Default capacity of the in-memory log.
    pub const DEFAULT_CAPACITY: usize = 1000;

    /// Create a log holding at most `capacity` events.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            events: RwLock::new(VecDeque::new()),
        }
    }
}

impl Default for MemoryAuditLog {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl AuditSink for MemoryAuditLog {
    fn record(&self, event: AuditEvent) -> Result<(), AuditError> {
        let mut events = self
            .events
            .write()
            .map_err(|_| AuditError::Unavailable("poisoned audit lock".into()))?;

        events.push_back(event);
        while events.len() > self.capacity {
            events.pop_front();
        }

        Ok(())
    }

    fn recent(&self, limit: usize) -> Result<Vec<AuditEvent>, AuditError> {
        let events = self
            .events
            .read()
            .map_err(|_| AuditError::Unavailable("poisoned audit lock".into()))?;

        let mut items: Vec<AuditEvent> = events.iter().cloned().collect();
        items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        items.truncate(limit);

        Ok(items)
    }
}

//! Error-reporting collaborator.
//!
//! Recoverable failures (storage reads/writes) are surfaced as typed events
//! through an injected [`Reporter`] instead of being logged inline, keeping
//! the cart and storage logic decoupled from any specific output sink.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// A recoverable failure worth reporting.
///
/// Events are facts: they carry what failed and the underlying detail, never
/// instructions for the sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportEvent {
    /// Persisted cart data could not be read or parsed.
    StorageLoadFailed { detail: String },
    /// The cart could not be written to the persistent store.
    StorageSaveFailed { detail: String },
}

impl ReportEvent {
    /// Stable event name/type identifier (e.g. "storage.load_failed").
    pub fn event_type(&self) -> &'static str {
        match self {
            ReportEvent::StorageLoadFailed { .. } => "storage.load_failed",
            ReportEvent::StorageSaveFailed { .. } => "storage.save_failed",
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            ReportEvent::StorageLoadFailed { detail } => detail,
            ReportEvent::StorageSaveFailed { detail } => detail,
        }
    }
}

/// Sink for recoverable failures.
///
/// Implementations must not panic; a reporter that fails is itself a
/// best-effort concern.
pub trait Reporter {
    fn report(&self, event: &ReportEvent);
}

/// Recording reporter for tests/dev.
///
/// Collects every reported event in memory so assertions can inspect what
/// the core logic surfaced.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<ReportEvent>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ReportEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.events().is_empty()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, event: &ReportEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_reporter_collects_events_in_order() {
        let reporter = RecordingReporter::new();
        reporter.report(&ReportEvent::StorageLoadFailed {
            detail: "bad json".to_string(),
        });
        reporter.report(&ReportEvent::StorageSaveFailed {
            detail: "quota".to_string(),
        });

        let events = reporter.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type(), "storage.load_failed");
        assert_eq!(events[1].event_type(), "storage.save_failed");
        assert_eq!(events[1].detail(), "quota");
    }
}

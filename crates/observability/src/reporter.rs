//! [`Reporter`] implementation that logs through `tracing`.

use menucart_core::{ReportEvent, Reporter};

/// Default reporter for a real session: every event becomes an error-level
/// log line tagged with the stable event type.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl TracingReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for TracingReporter {
    fn report(&self, event: &ReportEvent) {
        tracing::error!(
            event = event.event_type(),
            detail = event.detail(),
            "recoverable failure"
        );
    }
}

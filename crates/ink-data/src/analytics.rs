//! Fire-and-forget analytics sink.
//!
//! Engines emit events here on state transitions. The sink is infallible by
//! contract: a recording failure must never affect the operation that
//! produced the event, so implementations swallow and log their own errors.

use serde_json::Value;
use std::sync::Mutex;

/// Destination for product analytics events.
pub trait AnalyticsSink {
    /// Record an event with a JSON property bag.
    fn record(&self, event: &str, properties: &Value);
}

/// Sink that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl AnalyticsSink for NullSink {
    fn record(&self, _event: &str, _properties: &Value) {}
}

/// Sink that captures events in memory, for tests and local inspection.
#[derive(Default)]
pub struct MemorySink {
    events: Mutex<Vec<(String, Value)>>,
}

impl MemorySink {
    /// Create an empty capturing sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All events recorded so far.
    pub fn events(&self) -> Vec<(String, Value)> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(_) => Vec::new(),
        }
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.lock().map(|e| e.len()).unwrap_or(0)
    }

    /// Whether no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AnalyticsSink for MemorySink {
    fn record(&self, event: &str, properties: &Value) {
        if let Ok(mut events) = self.events.lock() {
            events.push((event.to_string(), properties.clone()));
        } else {
            tracing::warn!(event, "dropping analytics event: sink lock poisoned");
        }
    }
}

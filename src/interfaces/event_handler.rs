// ============================================================================
// Event Handler Interface
// Defines the contract for observing per-candidate events
// ============================================================================

use crate::numeric::RejectionReason;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the batch adder
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SumEvent {
    /// Candidate handed to the adder
    CandidateReceived {
        candidate: String,
        timestamp: DateTime<Utc>,
    },

    /// Candidate validated and summed with the counterparty
    SumComputed {
        candidate: String,
        counterparty: String,
        sum: String,
        timestamp: DateTime<Utc>,
    },

    /// Candidate failed validation, no arithmetic attempted
    CandidateRejected {
        candidate: String,
        reason: RejectionReason,
        timestamp: DateTime<Utc>,
    },
}

impl SumEvent {
    /// The candidate this event refers to
    pub fn candidate(&self) -> &str {
        match self {
            SumEvent::CandidateReceived { candidate, .. }
            | SumEvent::SumComputed { candidate, .. }
            | SumEvent::CandidateRejected { candidate, .. } => candidate,
        }
    }
}

/// Event handler trait for processing batch adder events
/// Implementations can handle logging, reporting, auditing, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a single event
    fn on_event(&self, event: SumEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<SumEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: SumEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: SumEvent) {
        match &event {
            SumEvent::CandidateRejected { reason, .. } => {
                tracing::warn!(%reason, "candidate rejected");
            },
            _ => tracing::debug!("Batch adder event: {:?}", event),
        }
    }
}

/// Keeps every event in memory, in arrival order
#[derive(Default)]
pub struct CollectingEventHandler {
    events: Mutex<Vec<SumEvent>>,
}

impl CollectingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events seen so far
    pub fn events(&self) -> Vec<SumEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Number of rejections seen so far
    pub fn rejected_count(&self) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|e| matches!(e, SumEvent::CandidateRejected { .. }))
            .count()
    }
}

impl EventHandler for CollectingEventHandler {
    fn on_event(&self, event: SumEvent) {
        self.events.lock().push(event);
    }

    fn on_events(&self, events: Vec<SumEvent>) {
        self.events.lock().extend(events);
    }
}

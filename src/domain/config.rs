// ============================================================================
// Batch Adder Configuration
// Counterparty, execution mode and input handling for batch addition
// ============================================================================

use crate::numeric::is_valid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Execution Mode
// ============================================================================

/// How a batch of candidates is spread over threads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExecutionMode {
    /// Candidates are processed one after another on the calling thread
    #[default]
    Sequential,

    /// Candidates are split into contiguous chunks, one per worker thread.
    /// Outcomes are still returned in input order.
    Parallel {
        /// Number of worker threads (must be > 0)
        workers: usize,
    },
}

// ============================================================================
// Complete Adder Configuration
// ============================================================================

/// Configuration for a batch adder with a single fixed counterparty
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AdderConfig {
    /// Literal added to every candidate (e.g. "-123.456")
    pub counterparty: String,

    /// Sequential or parallel batch execution
    pub execution: ExecutionMode,

    /// Strip surrounding whitespace (including `\r`) from candidates before
    /// validation. Off by default: the literal grammar has no whitespace.
    pub trim_candidates: bool,

    /// Forward per-candidate events to the event handler
    pub emit_events: bool,
}

impl AdderConfig {
    /// Create a sequential configuration for `counterparty`
    pub fn new(counterparty: impl Into<String>) -> Self {
        Self {
            counterparty: counterparty.into(),
            execution: ExecutionMode::Sequential,
            trim_candidates: false,
            emit_events: true,
        }
    }

    /// Builder method: Process batches on `workers` threads
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.execution = if workers == 1 {
            ExecutionMode::Sequential
        } else {
            ExecutionMode::Parallel { workers }
        };
        self
    }

    /// Builder method: Trim candidates before validation
    pub fn with_trimmed_candidates(mut self) -> Self {
        self.trim_candidates = true;
        self
    }

    /// Builder method: Do not emit events
    pub fn without_events(mut self) -> Self {
        self.emit_events = false;
        self
    }

    /// Worker thread count implied by the execution mode
    pub fn workers(&self) -> usize {
        match self.execution {
            ExecutionMode::Sequential => 1,
            ExecutionMode::Parallel { workers } => workers,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !is_valid(&self.counterparty) {
            return Err(format!(
                "Counterparty {:?} is not a valid decimal literal",
                self.counterparty
            ));
        }

        if let ExecutionMode::Parallel { workers } = self.execution {
            if workers == 0 {
                return Err("Worker count must be positive".to_string());
            }
        }

        Ok(())
    }
}

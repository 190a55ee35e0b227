// ============================================================================
// Batch Adder
// Adds one fixed counterparty to a stream of candidate literals
// ============================================================================

use crate::domain::SumOutcome;
use crate::interfaces::{EventHandler, SumEvent};
use crate::numeric::{add_decomposed, DecimalLiteral, DecomposedNumber, RejectionReason};
use chrono::Utc;
use std::sync::Arc;

/// Adds a fixed counterparty to each candidate.
///
/// The counterparty is validated and decomposed once; every candidate is
/// independent, so a bad literal only rejects itself and never the batch.
pub struct BatchAdder {
    /// Counterparty literal as configured
    counterparty: DecimalLiteral,

    /// Counterparty decomposition, reused for every candidate
    counterparty_parts: DecomposedNumber,

    /// Worker threads for `process_all`
    workers: usize,

    /// Trim whitespace around candidates before validation
    trim_candidates: bool,

    /// Forward events to the handler
    emit_events: bool,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl BatchAdder {
    /// Create a sequential adder that emits events to `event_handler`
    pub fn new(counterparty: DecimalLiteral, event_handler: Arc<dyn EventHandler>) -> Self {
        let counterparty_parts = counterparty.decompose();
        Self {
            counterparty,
            counterparty_parts,
            workers: 1,
            trim_candidates: false,
            emit_events: true,
            event_handler,
        }
    }

    pub(crate) fn with_options(mut self, workers: usize, trim: bool, emit_events: bool) -> Self {
        self.workers = workers.max(1);
        self.trim_candidates = trim;
        self.emit_events = emit_events;
        self
    }

    pub fn counterparty(&self) -> &DecimalLiteral {
        &self.counterparty
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Add the counterparty to a single candidate
    pub fn process(&self, candidate: &str) -> SumOutcome {
        let literal = if self.trim_candidates {
            candidate.trim()
        } else {
            candidate
        };

        let mut events = Vec::with_capacity(2);
        if self.emit_events {
            events.push(SumEvent::CandidateReceived {
                candidate: candidate.to_string(),
                timestamp: Utc::now(),
            });
        }

        let result = match DecimalLiteral::parse(literal) {
            Ok(parsed) => {
                let sum = add_decomposed(&parsed.decompose(), &self.counterparty_parts);
                tracing::debug!(
                    candidate = literal,
                    counterparty = %self.counterparty,
                    %sum,
                    "sum computed"
                );
                if self.emit_events {
                    events.push(SumEvent::SumComputed {
                        candidate: candidate.to_string(),
                        counterparty: self.counterparty.to_string(),
                        sum: sum.clone(),
                        timestamp: Utc::now(),
                    });
                }
                Ok(sum)
            },
            Err(reason) => {
                tracing::debug!(candidate = literal, "candidate failed validation");
                if self.emit_events {
                    events.push(SumEvent::CandidateRejected {
                        candidate: candidate.to_string(),
                        reason: reason.clone(),
                        timestamp: Utc::now(),
                    });
                }
                Err(reason)
            },
        };

        if self.emit_events {
            self.event_handler.on_events(events);
        }

        SumOutcome::new(candidate, result)
    }

    /// Process candidates in order on the calling thread
    pub fn process_batch<S: AsRef<str>>(&self, candidates: &[S]) -> Vec<SumOutcome> {
        candidates.iter().map(|c| self.process(c.as_ref())).collect()
    }

    /// Process candidates on up to `workers` scoped threads.
    ///
    /// The batch is cut into contiguous chunks, one per worker, and the
    /// outcomes are concatenated back in input order.
    pub fn process_parallel<S: AsRef<str> + Sync>(
        &self,
        candidates: &[S],
        workers: usize,
    ) -> Vec<SumOutcome> {
        let workers = workers.max(1);
        if workers == 1 || candidates.len() < 2 {
            return self.process_batch(candidates);
        }

        let chunk_size = candidates.len().div_ceil(workers);
        let mut outcomes = Vec::with_capacity(candidates.len());

        let scoped = crossbeam::thread::scope(|scope| {
            let handles: Vec<_> = candidates
                .chunks(chunk_size)
                .map(|chunk| scope.spawn(move |_| self.process_batch(chunk)))
                .collect();

            for handle in handles {
                match handle.join() {
                    Ok(part) => outcomes.extend(part),
                    Err(panic) => std::panic::resume_unwind(panic),
                }
            }
        });
        if let Err(panic) = scoped {
            std::panic::resume_unwind(panic);
        }

        tracing::debug!(
            candidates = candidates.len(),
            workers,
            rejected = outcomes.iter().filter(|o| o.is_rejected()).count(),
            "parallel batch complete"
        );
        outcomes
    }

    /// Process candidates with the configured worker count
    pub fn process_all<S: AsRef<str> + Sync>(&self, candidates: &[S]) -> Vec<SumOutcome> {
        self.process_parallel(candidates, self.workers)
    }

    /// Shorthand returning just the sum for one candidate
    pub fn add_to(&self, candidate: &str) -> Result<String, RejectionReason> {
        self.process(candidate).result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::{CollectingEventHandler, NoOpEventHandler};

    fn adder() -> BatchAdder {
        BatchAdder::new(
            DecimalLiteral::parse("-123.456").unwrap(),
            Arc::new(NoOpEventHandler),
        )
    }

    #[test]
    fn test_counterparty_scenarios() {
        let adder = adder();
        assert_eq!(adder.add_to("5").unwrap(), "-118.456");
        assert_eq!(adder.add_to("200").unwrap(), "76.544");
        assert_eq!(adder.add_to("-123.456").unwrap(), "-246.912");
    }

    #[test]
    fn test_invalid_candidate_does_not_abort_batch() {
        let outcomes = adder().process_batch(&["5", "abc", "200", "3."]);
        let rendered: Vec<String> = outcomes.iter().map(SumOutcome::render).collect();
        assert_eq!(rendered, ["-118.456", "abc is invalid", "76.544", "3. is invalid"]);
    }

    #[test]
    fn test_events_emitted() {
        let handler = Arc::new(CollectingEventHandler::new());
        let adder = BatchAdder::new(DecimalLiteral::parse("1").unwrap(), handler.clone());

        adder.process("2");
        adder.process("nope");

        let events = handler.events();
        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], SumEvent::CandidateReceived { .. }));
        assert!(matches!(
            &events[1],
            SumEvent::SumComputed { sum, .. } if sum == "3"
        ));
        assert!(matches!(events[3], SumEvent::CandidateRejected { .. }));
        assert_eq!(handler.rejected_count(), 1);
    }

    #[test]
    fn test_events_suppressed() {
        let handler = Arc::new(CollectingEventHandler::new());
        let adder = BatchAdder::new(DecimalLiteral::parse("1").unwrap(), handler.clone())
            .with_options(1, false, false);

        adder.process("2");
        assert!(handler.is_empty());
    }

    #[test]
    fn test_trim_candidates() {
        let trimming = adder().with_options(1, true, false);
        let outcome = trimming.process("5\r");
        assert_eq!(outcome.candidate, "5\r");
        assert_eq!(outcome.sum(), Some("-118.456"));

        assert!(adder().process("5\r").is_rejected());
    }

    #[test]
    fn test_parallel_preserves_order() {
        let candidates: Vec<String> = (0..257)
            .map(|i| if i % 7 == 0 { format!("bad{}", i) } else { format!("{}.5", i) })
            .collect();

        let adder = adder();
        let sequential = adder.process_batch(&candidates);
        let parallel = adder.process_parallel(&candidates, 4);
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_parallel_more_workers_than_candidates() {
        let parallel = adder().process_parallel(&["1", "2"], 16);
        assert_eq!(parallel.len(), 2);
        assert_eq!(parallel[0].sum(), Some("-122.456"));
        assert_eq!(parallel[1].sum(), Some("-121.456"));
    }
}

// ============================================================================
// Batch Adder Factory
// Creates batch adders with proper configuration
// ============================================================================

use crate::domain::config::{AdderConfig, ExecutionMode};
use crate::engine::BatchAdder;
use crate::interfaces::EventHandler;
use crate::numeric::DecimalLiteral;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a batch adder from configuration
///
/// # Arguments
/// * `config` - Adder configuration
/// * `event_handler` - Event handler for per-candidate events
///
/// # Example
/// ```
/// use exact_decimal::prelude::*;
/// use std::sync::Arc;
///
/// let config = AdderConfig::new("-123.456");
/// let adder = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(adder.add_to("5").unwrap(), "-118.456");
/// ```
pub fn create_from_config(
    config: AdderConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<BatchAdder, String> {
    config.validate()?;

    let workers = config.workers();
    let counterparty = DecimalLiteral::parse(config.counterparty).map_err(|e| e.to_string())?;

    Ok(BatchAdder::new(counterparty, event_handler).with_options(
        workers,
        config.trim_candidates,
        config.emit_events,
    ))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating batch adders with fluent API
///
/// # Example
/// ```
/// use exact_decimal::prelude::*;
/// use std::sync::Arc;
///
/// let adder = BatchAdderBuilder::new("0.5")
///     .parallel(4)
///     .trim_candidates()
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
/// assert_eq!(adder.workers(), 4);
/// ```
pub struct BatchAdderBuilder {
    config: AdderConfig,
}

impl BatchAdderBuilder {
    /// Create a new builder for the specified counterparty
    pub fn new(counterparty: impl Into<String>) -> Self {
        Self {
            config: AdderConfig::new(counterparty),
        }
    }

    /// Process batches on the calling thread (default)
    pub fn sequential(mut self) -> Self {
        self.config.execution = ExecutionMode::Sequential;
        self
    }

    /// Process batches on `workers` threads; a single worker means sequential
    pub fn parallel(mut self, workers: usize) -> Self {
        self.config = self.config.with_workers(workers);
        self
    }

    /// Strip whitespace around candidates before validation
    pub fn trim_candidates(mut self) -> Self {
        self.config.trim_candidates = true;
        self
    }

    /// Do not emit per-candidate events
    pub fn without_events(mut self) -> Self {
        self.config.emit_events = false;
        self
    }

    /// Build the batch adder
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<BatchAdder, String> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &AdderConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::NoOpEventHandler;

    #[test]
    fn test_create_sequential_adder() {
        let adder = create_from_config(AdderConfig::new("-123.456"), Arc::new(NoOpEventHandler))
            .unwrap();
        assert_eq!(adder.counterparty().as_str(), "-123.456");
        assert_eq!(adder.workers(), 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = create_from_config(AdderConfig::new("abc"), Arc::new(NoOpEventHandler));
        assert!(result.is_err());

        let result = BatchAdderBuilder::new("1")
            .parallel(0)
            .build(Arc::new(NoOpEventHandler));
        assert_eq!(result.err(), Some("Worker count must be positive".to_string()));
    }

    #[test]
    fn test_builder_pattern() {
        let builder = BatchAdderBuilder::new("+2.50").parallel(3).without_events();
        assert_eq!(builder.get_config().workers(), 3);
        assert!(!builder.get_config().emit_events);

        let adder = builder.build(Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(adder.workers(), 3);
        let outcomes = adder.process_all(&["1", "-2.5", "x"]);
        let rendered: Vec<String> = outcomes.iter().map(|o| o.render()).collect();
        assert_eq!(rendered, ["3.50", "0.00", "x is invalid"]);
    }

    #[test]
    fn test_single_worker_is_sequential() {
        let builder = BatchAdderBuilder::new("1").parallel(1);
        assert_eq!(builder.get_config().execution, ExecutionMode::Sequential);
        assert_eq!(builder.get_config(), &AdderConfig::new("1").with_workers(1));
    }

    #[test]
    fn test_builder_sequential_overrides_parallel() {
        let builder = BatchAdderBuilder::new("1").parallel(8).sequential();
        assert_eq!(builder.get_config().execution, ExecutionMode::Sequential);
    }
}

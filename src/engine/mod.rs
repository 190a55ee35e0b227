// ============================================================================
// Engine Module
// Batch processing of candidates against a fixed counterparty
// ============================================================================

mod batch_adder;
mod input;

pub mod factory;

pub use batch_adder::BatchAdder;
pub use factory::{create_from_config, BatchAdderBuilder};
pub use input::read_candidates;

// ============================================================================
// Exact Decimal Library
// Arbitrary-precision decimal addition on decimal-literal strings
// ============================================================================

//! # Exact Decimal
//!
//! Exact addition of decimal numbers given as strings, with no
//! floating-point rounding and no digit-count limit.
//!
//! ## Features
//!
//! - **Strict literal grammar** `[+-]?[0-9]+(\.[0-9]+)?`
//! - **Digit-string arithmetic** with carry/borrow propagation
//! - **Scale-aware formatting** (`0.1 + 0.02 = 0.12`, `1 + -1.000 = 0.000`)
//! - **Batch processing** against a fixed counterparty, sequential or parallel
//! - **Event hooks** for per-candidate auditing and logging
//!
//! ## Example
//!
//! ```rust
//! use exact_decimal::prelude::*;
//! use std::sync::Arc;
//!
//! // Two-operand addition
//! assert_eq!(add("0.1", "0.2").unwrap(), "0.3");
//!
//! // Fixed counterparty over a batch
//! let adder = BatchAdderBuilder::new("-123.456")
//!     .build(Arc::new(NoOpEventHandler))
//!     .unwrap();
//!
//! for outcome in adder.process_batch(&["5", "abc", "200"]) {
//!     println!("{}", outcome.render());
//! }
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{AdderConfig, ExecutionMode, SumOutcome};
    pub use crate::engine::{create_from_config, BatchAdder, BatchAdderBuilder};
    pub use crate::interfaces::{
        CollectingEventHandler, EventHandler, LoggingEventHandler, NoOpEventHandler, SumEvent,
    };
    pub use crate::numeric::{
        add, canonicalize, is_valid, negate, sum, DecimalLiteral, RejectionReason, SumResult,
    };
}

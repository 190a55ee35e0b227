// ============================================================================
// Domain Models Module
// Configuration and per-candidate results of batch addition
// ============================================================================

pub mod config;
pub mod outcome;

pub use config::{AdderConfig, ExecutionMode};
pub use outcome::SumOutcome;

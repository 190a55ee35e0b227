// ============================================================================
// Numeric Errors
// Rejections produced by the decimal addition pipeline
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reasons a literal can be refused by the engine.
///
/// Validation is the only gate in the pipeline: once a literal passes it,
/// decomposition, normalization, combination and formatting cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RejectionReason {
    /// Input does not match `[+-]?[0-9]+(\.[0-9]+)?`
    InvalidLiteral { literal: String },
    /// Valid literal that does not fit a fixed-width `rust_decimal::Decimal`
    OutOfRange { literal: String },
}

impl RejectionReason {
    /// Build an `InvalidLiteral` rejection for `literal`.
    pub fn invalid(literal: impl Into<String>) -> Self {
        RejectionReason::InvalidLiteral {
            literal: literal.into(),
        }
    }

    /// The literal that was refused.
    pub fn literal(&self) -> &str {
        match self {
            RejectionReason::InvalidLiteral { literal } => literal,
            RejectionReason::OutOfRange { literal } => literal,
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::InvalidLiteral { literal } => write!(f, "{} is invalid", literal),
            RejectionReason::OutOfRange { literal } => {
                write!(f, "{} is out of range for a fixed-width decimal", literal)
            },
        }
    }
}

impl std::error::Error for RejectionReason {}

/// Result type alias for decimal operations
pub type SumResult<T> = Result<T, RejectionReason>;

// ============================================================================
// Sum Outcome Domain Model
// ============================================================================

use crate::numeric::{RejectionReason, SumResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of adding the counterparty to one candidate literal
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SumOutcome {
    /// Candidate exactly as supplied
    pub candidate: String,

    /// Formatted sum, or why the candidate was refused
    pub result: SumResult<String>,
}

impl SumOutcome {
    pub fn new(candidate: impl Into<String>, result: SumResult<String>) -> Self {
        Self {
            candidate: candidate.into(),
            result,
        }
    }

    #[inline]
    pub fn is_rejected(&self) -> bool {
        self.result.is_err()
    }

    /// The formatted sum, if the candidate was accepted
    pub fn sum(&self) -> Option<&str> {
        self.result.as_deref().ok()
    }

    pub fn rejection(&self) -> Option<&RejectionReason> {
        self.result.as_ref().err()
    }

    /// One output line: the sum, or `"<literal> is invalid"`
    pub fn render(&self) -> String {
        match &self.result {
            Ok(sum) => sum.clone(),
            Err(reason) => reason.to_string(),
        }
    }
}

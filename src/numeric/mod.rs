// ============================================================================
// Numeric Module
// Arbitrary-precision decimal addition over digit strings
// ============================================================================
//
// This module provides:
// - Literal validation and decomposition (DecimalLiteral, DecomposedNumber)
// - Unsigned digit-string comparison, addition and subtraction
// - Scale normalization, signed combination and result formatting
// - RejectionReason: the single failure mode (invalid input)
//
// Design principles:
// - No floating-point operations
// - No digit-count limit beyond available memory
// - Validation is the only fallible stage; everything after it is total
// - Signs are explicit values, never implicit state

mod combine;
mod errors;
mod format;
mod literal;
mod magnitude;
mod normalize;
mod ops;

pub use combine::add_signed;
pub use errors::{RejectionReason, SumResult};
pub use format::format_sum;
pub use literal::{decompose, is_valid, DecimalLiteral, DecomposedNumber, Sign};
pub use magnitude::{add_unsigned, compare, sub_unsigned, SignedMagnitude, UnsignedMagnitude};
pub use normalize::{normalize_at, normalize_pair, AlignedPair};
pub use ops::{add, add_decomposed, canonicalize, negate, sum};

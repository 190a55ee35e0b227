// ============================================================================
// Scale Normalization
// Aligns decomposed operands to a common implicit scale
// ============================================================================

use super::literal::DecomposedNumber;
use super::magnitude::{strip_leading_zeros, SignedMagnitude, UnsignedMagnitude};

/// Two operands expressed as integers at the same implicit scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedPair {
    pub lhs: SignedMagnitude,
    pub rhs: SignedMagnitude,
    /// Fractional digit count shared by both operands
    pub scale: usize,
}

/// Express `number` as a signed integer magnitude scaled by `10^scale`.
///
/// `scale` must be at least `number.scale()`; the fraction is right-padded
/// with zeros up to it.
pub fn normalize_at(number: &DecomposedNumber, scale: usize) -> SignedMagnitude {
    debug_assert!(scale >= number.scale());

    let integer = strip_leading_zeros(number.integer_digits());
    let mut digits = String::with_capacity(integer.len() + scale);
    digits.push_str(integer);
    digits.push_str(number.fractional_digits());
    digits.extend(std::iter::repeat('0').take(scale - number.scale()));

    SignedMagnitude::new(number.sign(), UnsignedMagnitude::from_digits(&digits))
}

/// Align two decompositions at `max(lhs.scale(), rhs.scale())`.
pub fn normalize_pair(lhs: &DecomposedNumber, rhs: &DecomposedNumber) -> AlignedPair {
    let scale = lhs.scale().max(rhs.scale());
    AlignedPair {
        lhs: normalize_at(lhs, scale),
        rhs: normalize_at(rhs, scale),
        scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::literal::{decompose, Sign};

    #[test]
    fn test_pair_pads_to_common_scale() {
        let pair = normalize_pair(&decompose("5"), &decompose("-123.456"));
        assert_eq!(pair.scale, 3);
        assert_eq!(pair.lhs.to_string(), "5000");
        assert_eq!(pair.rhs.to_string(), "-123456");
    }

    #[test]
    fn test_strips_integer_and_concatenation_zeros() {
        let m = normalize_at(&decompose("000.05"), 2);
        assert_eq!(m.magnitude().as_str(), "5");

        let m = normalize_at(&decompose("000123"), 0);
        assert_eq!(m.magnitude().as_str(), "123");
    }

    #[test]
    fn test_zero_drops_sign() {
        let m = normalize_at(&decompose("-0.000"), 5);
        assert_eq!(m.to_string(), "0");
        assert_eq!(m.sign(), Sign::Positive);
    }

    #[test]
    fn test_trailing_fraction_zeros_kept() {
        let m = normalize_at(&decompose("+1.50"), 4);
        assert_eq!(m.magnitude().as_str(), "15000");
    }
}

// ============================================================================
// Decimal Literals
// Grammar validation and decomposition into sign/integer/fraction
// ============================================================================

use super::errors::{RejectionReason, SumResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Sign
// ============================================================================

/// Sign of a decimal value. Absent sign characters decompose to `Positive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    /// Parse a sign character (`'+'` or `'-'`).
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Sign::Positive),
            '-' => Some(Sign::Negative),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Sign::Positive => '+',
            Sign::Negative => '-',
        }
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }

    /// The opposite sign.
    #[inline]
    pub const fn flip(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Check whether `s` is a well-formed signed decimal literal.
///
/// Accepts `[+-]?[0-9]+(\.[0-9]+)?` and nothing else: no whitespace, no
/// exponent, no bare or trailing decimal point.
///
/// # Examples
/// ```
/// use exact_decimal::numeric::is_valid;
///
/// assert!(is_valid("-0.5"));
/// assert!(is_valid("000123"));
/// assert!(!is_valid("3."));
/// assert!(!is_valid(".5"));
/// ```
pub fn is_valid(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let integer_digits = leading_digits(&bytes[pos..]);
    if integer_digits == 0 {
        return false;
    }
    pos += integer_digits;

    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        let fractional_digits = leading_digits(&bytes[pos..]);
        if fractional_digits == 0 {
            return false;
        }
        pos += fractional_digits;
    }

    pos == bytes.len()
}

#[inline]
fn leading_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

// ============================================================================
// Decomposition
// ============================================================================

/// A literal split into its components. Leading zeros are retained.
///
/// `scale()` is always the number of fractional digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecomposedNumber {
    sign: Sign,
    integer_digits: String,
    fractional_digits: String,
}

impl DecomposedNumber {
    pub fn new(
        sign: Sign,
        integer_digits: impl Into<String>,
        fractional_digits: impl Into<String>,
    ) -> Self {
        Self {
            sign,
            integer_digits: integer_digits.into(),
            fractional_digits: fractional_digits.into(),
        }
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn integer_digits(&self) -> &str {
        &self.integer_digits
    }

    #[inline]
    pub fn fractional_digits(&self) -> &str {
        &self.fractional_digits
    }

    /// Number of fractional digits.
    #[inline]
    pub fn scale(&self) -> usize {
        self.fractional_digits.len()
    }
}

impl fmt::Display for DecomposedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign.is_negative() {
            f.write_str("-")?;
        }
        f.write_str(&self.integer_digits)?;
        if !self.fractional_digits.is_empty() {
            write!(f, ".{}", self.fractional_digits)?;
        }
        Ok(())
    }
}

/// Split a literal into sign, integer digits and fractional digits.
///
/// The caller must have checked `is_valid(s)`; unvalidated input yields a
/// meaningless (but memory-safe) decomposition. Prefer
/// [`DecimalLiteral::decompose`], which can only be reached through
/// validation.
pub fn decompose(s: &str) -> DecomposedNumber {
    let (sign, body) = match s.chars().next().and_then(Sign::from_char) {
        Some(sign) => (sign, &s[1..]),
        None => (Sign::default(), s),
    };

    let (integer, fractional) = body.split_once('.').unwrap_or((body, ""));
    DecomposedNumber::new(sign, integer, fractional)
}

// ============================================================================
// Validated Literal
// ============================================================================

/// A string known to satisfy [`is_valid`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DecimalLiteral(String);

impl DecimalLiteral {
    /// Validate `s` and wrap it.
    ///
    /// # Errors
    /// Returns `InvalidLiteral` if `s` does not match the literal grammar.
    pub fn parse(s: impl Into<String>) -> SumResult<Self> {
        let s = s.into();
        if is_valid(&s) {
            Ok(Self(s))
        } else {
            Err(RejectionReason::InvalidLiteral { literal: s })
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Decompose the literal. Total, since the literal is already validated.
    pub fn decompose(&self) -> DecomposedNumber {
        decompose(&self.0)
    }

    /// True when every digit is `0`, whatever the sign.
    pub fn is_zero(&self) -> bool {
        self.0.bytes().all(|b| matches!(b, b'0' | b'.' | b'+' | b'-'))
    }

    /// The same digits with the opposite sign. Zero-valued literals come back
    /// unsigned.
    pub fn negated(&self) -> Self {
        let body = self.0.trim_start_matches(['+', '-']);
        if self.is_zero() || self.0.starts_with('-') {
            Self(body.to_string())
        } else {
            Self(format!("-{}", body))
        }
    }

    // ========================================================================
    // Conversion to/from rust_decimal (for API boundaries)
    // ========================================================================

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// Returns `OutOfRange` when the literal needs more than the 96-bit
    /// mantissa or 28 fractional digits that `Decimal` can hold.
    pub fn to_decimal(&self) -> SumResult<rust_decimal::Decimal> {
        rust_decimal::Decimal::from_str_exact(&self.0).map_err(|_| RejectionReason::OutOfRange {
            literal: self.0.clone(),
        })
    }

    /// Build a literal from `rust_decimal::Decimal`, keeping its scale.
    pub fn from_decimal(d: rust_decimal::Decimal) -> Self {
        let rendered = d.to_string();
        debug_assert!(is_valid(&rendered));
        Self(rendered)
    }
}

impl fmt::Display for DecimalLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DecimalLiteral {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for DecimalLiteral {
    type Err = RejectionReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for DecimalLiteral {
    type Error = RejectionReason;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DecimalLiteral {
    type Error = RejectionReason;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;
    use rust_decimal::Decimal;

    #[test]
    fn test_validator_rejects() {
        for s in ["", "+", "-", "3.", ".5", "1.2.3", "12a", " 1", "1 ", "1\r", "+-1", "1e5"] {
            assert!(!is_valid(s), "{:?} should be rejected", s);
        }
    }

    #[test]
    fn test_validator_accepts() {
        for s in ["0", "-0.5", "+123.456", "000123", "-0", "9.000", "+0.0"] {
            assert!(is_valid(s), "{:?} should be accepted", s);
        }
    }

    #[test]
    fn test_validator_rejects_non_ascii_digits() {
        // Arabic-Indic digit five
        assert!(!is_valid("\u{0665}"));
        assert!(!is_valid("1.\u{0665}"));
    }

    #[test]
    fn test_sign_default() {
        assert_eq!(Sign::default(), Sign::Positive);
        assert_eq!(Sign::Positive.flip(), Sign::Negative);
        assert_eq!(Sign::from_char('-'), Some(Sign::Negative));
        assert_eq!(Sign::from_char('x'), None);
        assert_eq!(Sign::Negative.as_char(), '-');
    }

    #[test]
    fn test_decompose_integer() {
        let d = decompose("5");
        assert_eq!(d.sign(), Sign::Positive);
        assert_eq!(d.integer_digits(), "5");
        assert_eq!(d.fractional_digits(), "");
        assert_eq!(d.scale(), 0);
    }

    #[test]
    fn test_decompose_keeps_leading_zeros() {
        let d = decompose("-007.250");
        assert_eq!(d.sign(), Sign::Negative);
        assert_eq!(d.integer_digits(), "007");
        assert_eq!(d.fractional_digits(), "250");
        assert_eq!(d.scale(), 3);
    }

    #[test]
    fn test_decompose_explicit_plus() {
        let d = decompose("+123.456");
        assert_eq!(d, DecomposedNumber::new(Sign::Positive, "123", "456"));
        assert_eq!(d.to_string(), "123.456");
    }

    #[test]
    fn test_literal_parse() {
        let lit: DecimalLiteral = "-123.456".parse().unwrap();
        assert_eq!(lit.as_str(), "-123.456");
        assert_eq!(lit.decompose().scale(), 3);

        let err = DecimalLiteral::parse("abc").unwrap_err();
        assert_eq!(err, RejectionReason::invalid("abc"));
        assert!(DecimalLiteral::try_from("1.").is_err());
    }

    #[test]
    fn test_literal_negated() {
        let neg = |s: &str| DecimalLiteral::parse(s).unwrap().negated().into_inner();
        assert_eq!(neg("5"), "-5");
        assert_eq!(neg("+5.10"), "-5.10");
        assert_eq!(neg("-0012.5"), "0012.5");
        assert_eq!(neg("-0.00"), "0.00");
        assert_eq!(neg("0"), "0");
    }

    #[test]
    fn test_to_decimal() {
        let lit = DecimalLiteral::parse("-123.456").unwrap();
        assert_eq!(lit.to_decimal().unwrap(), Decimal::new(-123456, 3));

        let plus = DecimalLiteral::parse("+1.5").unwrap();
        assert_eq!(plus.to_decimal().unwrap(), Decimal::new(15, 1));
    }

    #[test]
    fn test_to_decimal_out_of_range() {
        let huge = DecimalLiteral::parse("9".repeat(40)).unwrap();
        assert!(matches!(
            huge.to_decimal(),
            Err(RejectionReason::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_from_decimal_keeps_scale() {
        let lit = DecimalLiteral::from_decimal(Decimal::new(150, 2));
        assert_eq!(lit.as_str(), "1.50");
    }

    quickcheck! {
        fn prop_decompose_reassembles(sign: bool, int_part: u64, frac: Vec<u8>) -> bool {
            let frac: String = frac.iter().map(|d| char::from(b'0' + d % 10)).collect();
            let mut s = String::new();
            if sign {
                s.push('-');
            }
            s.push_str(&int_part.to_string());
            if !frac.is_empty() {
                s.push('.');
                s.push_str(&frac);
            }
            is_valid(&s) && decompose(&s).to_string() == s
        }

        fn prop_validator_is_total(s: String) -> bool {
            // Must never panic; decomposition of a valid literal keeps its scale.
            if is_valid(&s) {
                let d = decompose(&s);
                d.scale() == s.split_once('.').map_or(0, |(_, f)| f.len())
            } else {
                DecimalLiteral::parse(s.clone()).is_err()
            }
        }
    }
}

// ============================================================================
// Digit-String Magnitudes
// Unsigned comparison, addition and subtraction with carry/borrow
// ============================================================================

use super::literal::Sign;
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;

/// Digit scratch space; sums up to 32 digits never touch the heap.
type DigitBuf = SmallVec<[u8; 32]>;

// ============================================================================
// Unsigned Magnitude
// ============================================================================

/// Non-negative integer as a decimal digit string with no leading zeros
/// (the single digit `"0"` excepted).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnsignedMagnitude(String);

impl UnsignedMagnitude {
    /// Build from a string of ASCII digits, stripping leading zeros.
    ///
    /// An empty or all-zero input collapses to `"0"`.
    pub fn from_digits(digits: &str) -> Self {
        debug_assert!(digits.bytes().all(|b| b.is_ascii_digit()));
        Self(strip_leading_zeros(digits).to_string())
    }

    /// The canonical zero.
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == "0"
    }
}

impl PartialOrd for UnsignedMagnitude {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UnsignedMagnitude {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(&self.0, &other.0)
    }
}

impl fmt::Display for UnsignedMagnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Signed Magnitude
// ============================================================================

/// An unsigned magnitude with a sign. Zero is always positive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignedMagnitude {
    sign: Sign,
    magnitude: UnsignedMagnitude,
}

impl SignedMagnitude {
    pub fn new(sign: Sign, magnitude: UnsignedMagnitude) -> Self {
        let sign = if magnitude.is_zero() {
            Sign::Positive
        } else {
            sign
        };
        Self { sign, magnitude }
    }

    pub fn positive(magnitude: UnsignedMagnitude) -> Self {
        Self::new(Sign::Positive, magnitude)
    }

    pub fn negative(magnitude: UnsignedMagnitude) -> Self {
        Self::new(Sign::Negative, magnitude)
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn magnitude(&self) -> &UnsignedMagnitude {
        &self.magnitude
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }
}

impl fmt::Display for SignedMagnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign.is_negative() {
            f.write_str("-")?;
        }
        f.write_str(self.magnitude.as_str())
    }
}

// ============================================================================
// Digit-String Operations
// ============================================================================

/// Order two digit strings numerically.
///
/// Leading zeros are ignored; after stripping them, shorter means smaller and
/// equal lengths compare digit by digit.
pub fn compare(a: &str, b: &str) -> Ordering {
    let (a, b) = (strip_leading_zeros(a), strip_leading_zeros(b));
    a.len().cmp(&b.len()).then_with(|| a.as_bytes().cmp(b.as_bytes()))
}

/// Exact sum of two non-negative digit strings.
pub fn add_unsigned(a: &str, b: &str) -> UnsignedMagnitude {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let long = long.as_bytes();
    let short = short.as_bytes();

    let mut digits = DigitBuf::with_capacity(long.len() + 1);
    let mut carry = 0u8;

    for i in 0..long.len() {
        let da = long[long.len() - 1 - i] - b'0';
        let db = if i < short.len() {
            short[short.len() - 1 - i] - b'0'
        } else {
            0
        };
        let sum = da + db + carry;
        carry = sum / 10;
        digits.push(b'0' + sum % 10);
    }
    if carry > 0 {
        digits.push(b'0' + carry);
    }

    from_reversed(digits)
}

/// Exact difference `a - b` of two non-negative digit strings.
///
/// When `a < b` the operands are swapped and the result carries a negative
/// sign, so the caller always receives `|a - b|` together with its sign.
pub fn sub_unsigned(a: &str, b: &str) -> SignedMagnitude {
    let (a, b) = (strip_leading_zeros(a), strip_leading_zeros(b));
    let (minuend, subtrahend, sign) = match compare(a, b) {
        Ordering::Less => (b, a, Sign::Negative),
        _ => (a, b, Sign::Positive),
    };
    let minuend = minuend.as_bytes();
    let subtrahend = subtrahend.as_bytes();

    let mut digits = DigitBuf::with_capacity(minuend.len());
    let mut borrow = 0u8;

    for i in 0..minuend.len() {
        let da = minuend[minuend.len() - 1 - i] - b'0';
        let db = if i < subtrahend.len() {
            subtrahend[subtrahend.len() - 1 - i] - b'0'
        } else {
            0
        };
        let need = db + borrow;
        if da < need {
            digits.push(b'0' + (da + 10 - need));
            borrow = 1;
        } else {
            digits.push(b'0' + (da - need));
            borrow = 0;
        }
    }
    debug_assert_eq!(borrow, 0, "minuend must not be smaller than subtrahend");

    SignedMagnitude::new(sign, from_reversed(digits))
}

/// Strip leading zeros; empty or all-zero input becomes `"0"`.
pub(crate) fn strip_leading_zeros(digits: &str) -> &str {
    match digits.trim_start_matches('0') {
        "" => "0",
        rest => rest,
    }
}

/// Turn least-significant-first ASCII digits into a canonical magnitude.
fn from_reversed(mut digits: DigitBuf) -> UnsignedMagnitude {
    while digits.len() > 1 && digits.last() == Some(&b'0') {
        digits.pop();
    }
    if digits.is_empty() {
        return UnsignedMagnitude::zero();
    }
    digits.reverse();
    // Only ASCII digits were pushed.
    let text: String = digits.iter().map(|&b| char::from(b)).collect();
    UnsignedMagnitude(text)
}

// ============================================================================
// Tests
// ============================================================================

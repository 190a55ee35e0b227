// ============================================================================
// Signed Combination
// Routes a signed addition to unsigned add or subtract
// ============================================================================

use super::literal::Sign;
use super::magnitude::{add_unsigned, sub_unsigned, SignedMagnitude};

/// Exact `a + b` for two signed magnitudes at the same implicit scale.
///
/// | a | b | operation                          |
/// |---|---|------------------------------------|
/// | + | + | `abs(a) + abs(b)`                  |
/// | + | - | `abs(a) - abs(b)`, sign from swap  |
/// | - | + | `abs(b) - abs(a)`, sign from swap  |
/// | - | - | `-(abs(a) + abs(b))`               |
pub fn add_signed(a: &SignedMagnitude, b: &SignedMagnitude) -> SignedMagnitude {
    let (ma, mb) = (a.magnitude().as_str(), b.magnitude().as_str());

    match (a.sign(), b.sign()) {
        (Sign::Positive, Sign::Positive) => SignedMagnitude::positive(add_unsigned(ma, mb)),
        (Sign::Positive, Sign::Negative) => sub_unsigned(ma, mb),
        (Sign::Negative, Sign::Positive) => sub_unsigned(mb, ma),
        (Sign::Negative, Sign::Negative) => SignedMagnitude::negative(add_unsigned(ma, mb)),
    }
}

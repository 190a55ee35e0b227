// ============================================================================
// Result Formatting
// Re-inserts the decimal point and sign at the target scale
// ============================================================================

use super::magnitude::SignedMagnitude;

/// Render `sum` (an integer scaled by `10^scale`) as a decimal string.
///
/// # Examples
/// - `118456` at scale 3, negative -> `-118.456`
/// - `5` at scale 3 -> `0.005`
/// - `0` at scale 2 -> `0.00`
pub fn format_sum(sum: &SignedMagnitude, scale: usize) -> String {
    let digits = sum.magnitude().as_str();
    let sign = if sum.is_negative() { "-" } else { "" };

    if sum.magnitude().is_zero() {
        return if scale > 0 {
            format!("0.{}", "0".repeat(scale))
        } else {
            "0".to_string()
        };
    }

    if scale == 0 {
        return format!("{}{}", sign, digits);
    }

    if digits.len() <= scale {
        format!("{}0.{:0>width$}", sign, digits, width = scale)
    } else {
        let (integer, fraction) = digits.split_at(digits.len() - scale);
        format!("{}{}.{}", sign, integer, fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::magnitude::UnsignedMagnitude;

    fn neg(s: &str) -> SignedMagnitude {
        SignedMagnitude::negative(UnsignedMagnitude::from_digits(s))
    }

    fn pos(s: &str) -> SignedMagnitude {
        SignedMagnitude::positive(UnsignedMagnitude::from_digits(s))
    }

    #[test]
    fn test_split_integer_and_fraction() {
        assert_eq!(format_sum(&neg("118456"), 3), "-118.456");
        assert_eq!(format_sum(&pos("76544"), 3), "76.544");
    }

    #[test]
    fn test_short_magnitude_pads_fraction() {
        assert_eq!(format_sum(&pos("5"), 3), "0.005");
        assert_eq!(format_sum(&neg("456"), 3), "-0.456");
        assert_eq!(format_sum(&neg("45"), 3), "-0.045");
    }

    #[test]
    fn test_zero_scale() {
        assert_eq!(format_sum(&neg("205"), 0), "-205");
        assert_eq!(format_sum(&pos("0"), 0), "0");
    }

    #[test]
    fn test_zero_padded_to_scale() {
        assert_eq!(format_sum(&pos("0"), 4), "0.0000");
        assert_eq!(format_sum(&neg("0"), 2), "0.00");
    }

    #[test]
    fn test_trailing_zeros_retained() {
        assert_eq!(format_sum(&pos("1500"), 3), "1.500");
    }
}

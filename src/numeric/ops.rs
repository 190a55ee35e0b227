// ============================================================================
// Decimal Operations
// Literal-in, literal-out entry points over the addition pipeline
// ============================================================================

use super::combine::add_signed;
use super::errors::SumResult;
use super::format::format_sum;
use super::literal::{DecimalLiteral, DecomposedNumber};
use super::normalize::{normalize_at, normalize_pair};

/// Exact sum of two already-decomposed numbers, formatted at the larger of
/// the two scales.
pub fn add_decomposed(lhs: &DecomposedNumber, rhs: &DecomposedNumber) -> String {
    let pair = normalize_pair(lhs, rhs);
    let sum = add_signed(&pair.lhs, &pair.rhs);
    tracing::trace!(lhs = %pair.lhs, rhs = %pair.rhs, sum = %sum, scale = pair.scale, "combined");
    format_sum(&sum, pair.scale)
}

/// Exact sum of two decimal literals.
///
/// # Errors
/// Returns `InvalidLiteral` for the first operand that fails validation; no
/// arithmetic is attempted in that case.
///
/// # Example
/// ```
/// use exact_decimal::numeric::add;
///
/// assert_eq!(add("5", "-123.456").unwrap(), "-118.456");
/// assert_eq!(add("200", "-123.456").unwrap(), "76.544");
/// assert!(add("abc", "1").is_err());
/// ```
pub fn add(a: &str, b: &str) -> SumResult<String> {
    let a = DecimalLiteral::parse(a)?;
    let b = DecimalLiteral::parse(b)?;
    Ok(add_decomposed(&a.decompose(), &b.decompose()))
}

/// The literal with its sign flipped, digits untouched.
pub fn negate(a: &str) -> SumResult<String> {
    DecimalLiteral::parse(a).map(|lit| lit.negated().into_inner())
}

/// Canonical form of a literal at its own scale: integer leading zeros
/// stripped, no `+`, no sign on zero. Same as `add(a, "0")`.
pub fn canonicalize(a: &str) -> SumResult<String> {
    let number = DecimalLiteral::parse(a)?.decompose();
    let scale = number.scale();
    Ok(format_sum(&normalize_at(&number, scale), scale))
}

/// Exact sum of any number of literals. An empty sequence sums to `"0"`.
///
/// # Errors
/// Stops at the first invalid literal.
pub fn sum<I, S>(literals: I) -> SumResult<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut total = DecomposedNumber::new(Default::default(), "0", "");
    for literal in literals {
        let next = DecimalLiteral::parse(literal.as_ref())?.decompose();
        // Formatted sums are themselves valid literals.
        total = super::literal::decompose(&add_decomposed(&total, &next));
    }
    Ok(total.to_string())
}

// ============================================================================
// Tests
// ============================================================================

//! Decimal-precision-preserving addition.
//!
//! Scores are built by adding many decimal-looking values (`0.1`, `0.25`, ...).
//! Plain `f64` addition drifts (`0.1 + 0.2 == 0.30000000000000004`), so every
//! accumulation step rounds the sum back to the precision of its most precise
//! operand.

/// Number of digits after the decimal point in the shortest round-trip text form
/// of `value`.
///
/// Integral values have precision 0 (`2.0` formats as `"2"`). Non-finite values
/// have no fractional digits either.
pub fn decimal_precision(value: f64) -> usize {
    // `Display` for f64 never switches to exponent notation.
    let text = value.to_string();
    match text.find('.') {
        Some(idx) => text.len() - idx - 1,
        None => 0,
    }
}

/// Add `a` and `b`, rounding the result to `max(precision(a), precision(b))`
/// decimal digits.
///
/// # Examples
///
/// ```rust
/// use mifs_selection::math::sum_precise;
///
/// assert_eq!(sum_precise(0.1, 0.2), 0.3);
/// assert_eq!(sum_precise(1.25, 2.0), 3.25);
/// ```
pub fn sum_precise(a: f64, b: f64) -> f64 {
    let precision = decimal_precision(a).max(decimal_precision(b));
    let sum = a + b;
    format!("{:.*}", precision, sum).parse::<f64>().unwrap_or(sum)
}

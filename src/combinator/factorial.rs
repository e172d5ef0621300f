//! Recursive factorial.

use crate::error::Error;
use crate::validation::require_numeric;
use crate::value::Value;

/// Returns `n!`, computed as `n * factorial(n - 1)` with `1` for `n < 2`.
///
/// Non-integer input follows the same recurrence. The result overflows to
/// infinity past `170!`; any `n` above `171` returns infinity directly, so
/// the recursion depth stays bounded.
///
/// # Errors
///
/// Returns [`ContractError::NotNumeric`](crate::error::ContractError::NotNumeric)
/// (worded for `n`) when `number` is not numeric.
///
/// # Examples
///
/// ```rust
/// use fpkit::combinator::factorial;
/// use fpkit::value::Value;
///
/// assert_eq!(factorial(&Value::from(5)), Ok(120.0));
/// assert_eq!(factorial(&Value::from(-3)), Ok(1.0));
/// ```
pub fn factorial(number: &Value) -> Result<f64, Error> {
    let number = require_numeric(number, "n")?;
    Ok(factorial_of(number))
}

/// Every product past this point exceeds `f64::MAX`.
const OVERFLOW_THRESHOLD: f64 = 171.0;

fn factorial_of(number: f64) -> f64 {
    if number > OVERFLOW_THRESHOLD {
        f64::INFINITY
    } else if number < 2.0 {
        1.0
    } else {
        number * factorial_of(number - 1.0)
    }
}

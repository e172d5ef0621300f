//! Numeric predicates.
//!
//! Arguments are coerced with
//! [`require_numeric`](crate::validation::require_numeric) and reported as
//! `num` when they are not numeric.

use crate::error::Error;
use crate::validation::require_numeric;
use crate::value::Value;

const PARAMETER: &str = "num";

/// Returns `true` if no integer in `[2, n)` divides `n`; `false` for `n < 2`.
///
/// # Errors
///
/// Returns [`ContractError::NotNumeric`](crate::error::ContractError::NotNumeric)
/// when `number` is not numeric.
///
/// # Examples
///
/// ```rust
/// use fpkit::numeric::is_prime;
/// use fpkit::value::Value;
///
/// assert_eq!(is_prime(&Value::from(11)), Ok(true));
/// assert_eq!(is_prime(&Value::from("1002")), Ok(false));
/// ```
pub fn is_prime(number: &Value) -> Result<bool, Error> {
    let number = require_numeric(number, PARAMETER)?;
    if number < 2.0 {
        return Ok(false);
    }

    let mut divisor = 2.0;
    while divisor < number {
        if number % divisor == 0.0 {
            return Ok(false);
        }
        divisor += 1.0;
    }
    Ok(true)
}

/// Returns `true` if `n % 2 == 0`.
///
/// # Errors
///
/// Returns [`ContractError::NotNumeric`](crate::error::ContractError::NotNumeric)
/// when `number` is not numeric.
pub fn is_even(number: &Value) -> Result<bool, Error> {
    let number = require_numeric(number, PARAMETER)?;
    Ok(number % 2.0 == 0.0)
}

/// Returns the negation of [`is_even`].
///
/// # Errors
///
/// Returns [`ContractError::NotNumeric`](crate::error::ContractError::NotNumeric)
/// when `number` is not numeric.
pub fn is_odd(number: &Value) -> Result<bool, Error> {
    is_even(number).map(|even| !even)
}

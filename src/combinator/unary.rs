//! The single-argument adapter.

use crate::error::Error;
use crate::validation::require_callable;
use crate::value::{Callable, Value};

/// Adapts `callback` to take exactly one argument.
///
/// A callable that already declares arity 1 is returned unchanged (the same
/// instance, not a wrapper). Any other callable is wrapped in an arity-1
/// callable that forwards only its first argument.
///
/// # Errors
///
/// Returns [`ContractError::NotCallableArg`](crate::error::ContractError::NotCallableArg)
/// when `callback` is not callable.
///
/// # Examples
///
/// ```rust
/// use fpkit::combinator::to_unary;
/// use fpkit::value::{Callable, Value};
///
/// let count = Callable::new(3, |arguments| Ok(Value::from(arguments.len())));
/// let unary = to_unary(&Value::from(count)).unwrap();
///
/// assert_eq!(unary.arity(), 1);
/// assert_eq!(unary.call(&[Value::from(1), Value::from(2)]), Ok(Value::from(1)));
/// ```
pub fn to_unary(callback: &Value) -> Result<Callable, Error> {
    let target = require_callable(callback)?;
    if target.arity() == 1 {
        return Ok(target.clone());
    }

    let target = target.clone();
    Ok(Callable::new(1, move |arguments| {
        target.call(&[Value::argument(arguments, 0)])
    }))
}

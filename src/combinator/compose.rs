//! Right-to-left and left-to-right function composition.

use crate::error::Error;
use crate::sequence::for_each;
use crate::validation::require_callable;
use crate::value::{Callable, Value};
use tracing::trace;

/// Checks every element with the sequence traversal and returns the
/// callables in their original order.
fn validated(functions: &[Value]) -> Result<Vec<Callable>, Error> {
    let check = Value::from(Callable::new(1, |arguments| {
        require_callable(&Value::argument(arguments, 0))?;
        Ok(Value::Undefined)
    }));
    for_each(&Value::from(functions.to_vec()), &check)?;

    Ok(functions
        .iter()
        .filter_map(Value::as_callable)
        .cloned()
        .collect())
}

/// Composes `functions` right to left.
///
/// `compose(&[f, g, h])` called with `x` returns `f(g(h(x)))`: the last
/// function receives the input and the first function's result is returned.
/// An empty list composes to the identity. The result declares arity `1`.
///
/// # Errors
///
/// Returns [`ContractError::NotCallableArg`](crate::error::ContractError::NotCallableArg)
/// for the first element that is not callable.
///
/// # Examples
///
/// ```rust
/// use fpkit::combinator::compose;
/// use fpkit::value::{Callable, Value};
///
/// let add_one = Value::from(Callable::new(1, |arguments| {
///     Ok(Value::from(Value::argument(arguments, 0).to_number() + 1.0))
/// }));
/// let double = Value::from(Callable::new(1, |arguments| {
///     Ok(Value::from(Value::argument(arguments, 0).to_number() * 2.0))
/// }));
///
/// let composed = compose(&[add_one, double]).unwrap();
/// assert_eq!(composed.call(&[Value::from(5)]), Ok(Value::from(11)));
/// ```
pub fn compose(functions: &[Value]) -> Result<Callable, Error> {
    let chain = validated(functions)?;
    trace!(functions = chain.len(), "composed right to left");

    Ok(Callable::new(1, move |arguments| {
        chain
            .iter()
            .rev()
            .try_fold(Value::argument(arguments, 0), |value, function| function.call(&[value]))
    }))
}

/// Composes `functions` left to right.
///
/// `pipe(&[f, g, h])` called with `x` returns `h(g(f(x)))`. An empty list
/// pipes to the identity. The result declares arity `1`.
///
/// # Errors
///
/// Returns [`ContractError::NotCallableArg`](crate::error::ContractError::NotCallableArg)
/// for the first element that is not callable.
///
/// # Examples
///
/// ```rust
/// use fpkit::combinator::pipe;
/// use fpkit::value::{Callable, Value};
///
/// let add_one = Value::from(Callable::new(1, |arguments| {
///     Ok(Value::from(Value::argument(arguments, 0).to_number() + 1.0))
/// }));
/// let double = Value::from(Callable::new(1, |arguments| {
///     Ok(Value::from(Value::argument(arguments, 0).to_number() * 2.0))
/// }));
///
/// let piped = pipe(&[add_one, double]).unwrap();
/// assert_eq!(piped.call(&[Value::from(5)]), Ok(Value::from(12)));
/// ```
pub fn pipe(functions: &[Value]) -> Result<Callable, Error> {
    let chain = validated(functions)?;
    trace!(functions = chain.len(), "composed left to right");

    Ok(Callable::new(1, move |arguments| {
        chain
            .iter()
            .try_fold(Value::argument(arguments, 0), |value, function| function.call(&[value]))
    }))
}

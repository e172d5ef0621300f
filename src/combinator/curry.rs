//! Currying over the declared arity.

use crate::error::Error;
use crate::validation::require_callable;
use crate::value::{Callable, Value};
use smallvec::SmallVec;
use tracing::trace;

/// Arguments accumulated by one stage of a curried call chain.
type Accumulated = SmallVec<[Value; 4]>;

/// Converts `function` into a chain of single-argument stages.
///
/// Each stage takes one argument (surplus arguments are ignored) and
/// appends it to its own copy of the accumulated list. While fewer
/// arguments than the declared arity have been collected, the stage returns
/// the next stage as a `Value::Callable`; once the count reaches the arity,
/// `function` is invoked with the accumulated arguments in order. A
/// zero-arity target is invoked on the first call.
///
/// Stages never share mutable state, so any intermediate stage can be
/// called again with a different argument to branch the chain.
///
/// # Errors
///
/// Returns [`ContractError::NotCallableArg`](crate::error::ContractError::NotCallableArg)
/// when `function` is not callable.
///
/// # Examples
///
/// ```rust
/// use fpkit::combinator::curry;
/// use fpkit::value::{Callable, Value};
///
/// let volume = Callable::new(3, |arguments| {
///     let product: f64 = arguments.iter().map(Value::to_number).product();
///     Ok(Value::from(product))
/// });
///
/// let curried = curry(&Value::from(volume)).unwrap();
/// let base = curried.call(&[Value::from(2)]).unwrap();
/// let base = base.as_callable().unwrap().call(&[Value::from(3)]).unwrap();
/// let stage = base.as_callable().unwrap();
///
/// assert_eq!(stage.call(&[Value::from(4)]), Ok(Value::from(24)));
/// assert_eq!(stage.call(&[Value::from(10)]), Ok(Value::from(60)));
/// ```
pub fn curry(function: &Value) -> Result<Callable, Error> {
    let target = require_callable(function)?.clone();
    Ok(stage(target, Accumulated::new()))
}

fn stage(target: Callable, accumulated: Accumulated) -> Callable {
    Callable::new(1, move |arguments| {
        let mut next = accumulated.clone();
        next.push(Value::argument(arguments, 0));

        if next.len() < target.arity() {
            trace!(collected = next.len(), arity = target.arity(), "curry stage");
            Ok(Value::from(stage(target.clone(), next)))
        } else {
            trace!(arity = target.arity(), "curry complete");
            target.call(&next)
        }
    })
}

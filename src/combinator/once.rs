//! The run-once adapter.

use crate::error::Error;
use crate::validation::require_callable;
use crate::value::{Callable, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::trace;

/// A callable guarded by a one-way armed → fired flag.
struct OnceGuard {
    fired: AtomicBool,
    target: Callable,
}

impl OnceGuard {
    fn invoke(&self, arguments: &[Value]) -> Result<Value, Error> {
        if self.fired.swap(true, Ordering::AcqRel) {
            trace!(arity = self.target.arity(), "once guard already fired");
            return Ok(Value::Undefined);
        }
        trace!(arity = self.target.arity(), "once guard firing");
        self.target.call(arguments)
    }
}

/// Wraps `callback` so that it runs at most once.
///
/// The first invocation flips the guard and returns the result of
/// `callback` called with all supplied arguments. Every later invocation
/// returns `Value::Undefined` without calling `callback`, whatever the
/// arguments. The guard is a check-and-set on an atomic flag, so the target
/// runs once even when the returned callable is shared across threads.
///
/// # Errors
///
/// Returns [`ContractError::NotCallableArg`](crate::error::ContractError::NotCallableArg)
/// when `callback` is not callable.
///
/// # Examples
///
/// ```rust
/// use fpkit::combinator::once;
/// use fpkit::value::{Callable, Value};
///
/// let greet = Callable::new(0, |_| Ok(Value::from("hello")));
/// let greet_once = once(&Value::from(greet)).unwrap();
///
/// assert_eq!(greet_once.call(&[]), Ok(Value::from("hello")));
/// assert_eq!(greet_once.call(&[]), Ok(Value::Undefined));
/// ```
pub fn once(callback: &Value) -> Result<Callable, Error> {
    let guard = OnceGuard {
        fired: AtomicBool::new(false),
        target: require_callable(callback)?.clone(),
    };
    Ok(Callable::new(0, move |arguments| guard.invoke(arguments)))
}

//! The memoizing adapter.

use crate::error::Error;
use crate::validation::require_callable;
use crate::value::{Callable, Value};
use parking_lot::Mutex;
use std::collections::HashMap;
use tracing::trace;

/// A callable backed by a monotonically growing result cache.
struct Memo {
    target: Callable,
    cache: Mutex<HashMap<String, Value>>,
}

impl Memo {
    fn invoke(&self, arguments: &[Value]) -> Result<Value, Error> {
        let key = cache_key(arguments);

        let cached = self.cache.lock().get(&key).cloned();
        if let Some(result) = cached {
            trace!(key = %key, "memo hit");
            return Ok(result);
        }

        trace!(key = %key, "memo miss");
        let computed = self.target.call(arguments)?;
        // The lock is released while the target runs; the first stored
        // result wins if another caller computed the same key meanwhile.
        Ok(self.cache.lock().entry(key).or_insert(computed).clone())
    }
}

/// The arguments joined with `,` in their string form.
fn cache_key(arguments: &[Value]) -> String {
    Value::from(arguments.to_vec()).to_string()
}

/// Wraps `callback` with a cache keyed by its arguments.
///
/// The cache key is the comma-joined string form of the argument list, so
/// argument lists that stringify identically share an entry: `(1, 2)` and
/// `("1,2")` collide, as do `(undefined)` and `(null)`. A cache hit never
/// calls `callback`, even when the stored result is falsy. Errors are not
/// cached. Entries are never evicted.
///
/// The cache lock is not held while `callback` runs, so a memoized callable
/// may call itself recursively.
///
/// # Errors
///
/// Returns [`ContractError::NotCallableArg`](crate::error::ContractError::NotCallableArg)
/// when `callback` is not callable.
///
/// # Examples
///
/// ```rust
/// use fpkit::combinator::memoized;
/// use fpkit::value::{Callable, Value};
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let calls = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&calls);
/// let square = Callable::new(1, move |arguments| {
///     counter.fetch_add(1, Ordering::SeqCst);
///     let number = Value::argument(arguments, 0).to_number();
///     Ok(Value::from(number * number))
/// });
///
/// let cached = memoized(&Value::from(square)).unwrap();
/// assert_eq!(cached.call(&[Value::from(4)]), Ok(Value::from(16)));
/// assert_eq!(cached.call(&[Value::from(4)]), Ok(Value::from(16)));
/// assert_eq!(calls.load(Ordering::SeqCst), 1);
/// ```
pub fn memoized(callback: &Value) -> Result<Callable, Error> {
    let memo = Memo {
        target: require_callable(callback)?.clone(),
        cache: Mutex::new(HashMap::new()),
    };
    Ok(Callable::new(0, move |arguments| memo.invoke(arguments)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_identity() -> (Callable, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let callable = Callable::new(1, move |arguments| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Value::argument(arguments, 0))
        });
        (callable, calls)
    }

    #[test]
    fn test_cache_key_joins_string_forms() {
        assert_eq!(cache_key(&[Value::from(1), Value::from("a")]), "1,a");
        assert_eq!(cache_key(&[Value::Undefined, Value::Null]), ",");
        assert_eq!(cache_key(&[]), "");
    }

    #[test]
    fn test_falsy_results_are_cache_hits() {
        let (identity, calls) = counting_identity();
        let cached = memoized(&Value::from(identity)).unwrap();

        assert_eq!(cached.call(&[Value::from(0)]), Ok(Value::from(0)));
        assert_eq!(cached.call(&[Value::from(0)]), Ok(Value::from(0)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_colliding_keys_share_an_entry() {
        let (identity, calls) = counting_identity();
        let cached = memoized(&Value::from(identity)).unwrap();

        let first = cached.call(&[Value::sequence([1, 2])]).unwrap();
        let second = cached.call(&[Value::from("1,2")]).unwrap();
        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_errors_are_not_cached() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let failing = Callable::new(0, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(Error::raise("unavailable"))
        });
        let cached = memoized(&Value::from(failing)).unwrap();

        assert!(cached.call(&[]).is_err());
        assert!(cached.call(&[]).is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}

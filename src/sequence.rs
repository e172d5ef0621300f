//! Traversal operations over sequences.
//!
//! Every operation takes a sequence and a callable, validates both before
//! invoking anything, and walks the sequence once in index order. Callbacks
//! receive `(element, index, sequence)`; [`reduce`] prepends the accumulator.
//! Errors returned by a callback stop the traversal and propagate unchanged.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::sequence::{filter, map, reduce};
//! use fpkit::value::{Callable, Value};
//!
//! let numbers = Value::sequence([1, 2, 3, 4]);
//! let double = Value::from(Callable::new(1, |arguments| {
//!     Ok(Value::from(Value::argument(arguments, 0).to_number() * 2.0))
//! }));
//! let is_even = Value::from(Callable::new(1, |arguments| {
//!     Ok(Value::from(Value::argument(arguments, 0).to_number() % 2.0 == 0.0))
//! }));
//! let add = Value::from(Callable::new(2, |arguments| {
//!     let accumulator = Value::argument(arguments, 0).to_number();
//!     Ok(Value::from(accumulator + Value::argument(arguments, 1).to_number()))
//! }));
//!
//! assert_eq!(map(&numbers, &double).unwrap(), Value::sequence([2, 4, 6, 8]));
//! assert_eq!(filter(&numbers, &is_even).unwrap(), Value::sequence([2, 4]));
//! assert_eq!(reduce(&numbers, &add, None).unwrap(), Value::from(10));
//! ```

use crate::error::{ContractError, Error};
use crate::validation::require_sequence_and_callable;
use crate::value::{Callable, Value};

fn invoke(callable: &Callable, element: &Value, index: usize, sequence: &Value) -> Result<Value, Error> {
    callable.call(&[element.clone(), Value::from(index), sequence.clone()])
}

/// Invokes `callback` once per element in index order.
///
/// # Errors
///
/// Returns a contract violation for invalid arguments, or the first error a
/// callback invocation returns.
pub fn for_each(sequence: &Value, callback: &Value) -> Result<(), Error> {
    let (elements, callable) = require_sequence_and_callable(sequence, callback)?;
    for (index, element) in elements.iter().enumerate() {
        invoke(callable, element, index, sequence)?;
    }
    Ok(())
}

/// Returns `true` if `callback` is truthy for every element.
///
/// The running result is combined with logical AND, so once it turns false
/// the callback is no longer invoked. An empty sequence is vacuously `true`.
///
/// # Errors
///
/// Returns a contract violation for invalid arguments, or the first error a
/// callback invocation returns.
pub fn every(sequence: &Value, callback: &Value) -> Result<bool, Error> {
    let (elements, callable) = require_sequence_and_callable(sequence, callback)?;
    let mut all = true;
    for (index, element) in elements.iter().enumerate() {
        all = all && invoke(callable, element, index, sequence)?.is_truthy();
    }
    Ok(all)
}

/// Returns `true` if `callback` is truthy for at least one element.
///
/// The callback is invoked for every element; the running result is
/// combined with logical OR. An empty sequence is vacuously `false`.
///
/// # Errors
///
/// Returns a contract violation for invalid arguments, or the first error a
/// callback invocation returns.
pub fn some(sequence: &Value, callback: &Value) -> Result<bool, Error> {
    let (elements, callable) = require_sequence_and_callable(sequence, callback)?;
    let mut any = false;
    for (index, element) in elements.iter().enumerate() {
        any = invoke(callable, element, index, sequence)?.is_truthy() || any;
    }
    Ok(any)
}

/// Returns a new sequence of the callback results, one per element.
///
/// # Errors
///
/// Returns a contract violation for invalid arguments, or the first error a
/// callback invocation returns.
pub fn map(sequence: &Value, callback: &Value) -> Result<Value, Error> {
    let (elements, callable) = require_sequence_and_callable(sequence, callback)?;
    let mapped = elements
        .iter()
        .enumerate()
        .map(|(index, element)| invoke(callable, element, index, sequence))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Value::from(mapped))
}

/// Returns a new sequence of the elements for which `callback` is truthy,
/// preserving order.
///
/// # Errors
///
/// Returns a contract violation for invalid arguments, or the first error a
/// callback invocation returns.
pub fn filter(sequence: &Value, callback: &Value) -> Result<Value, Error> {
    let (elements, callable) = require_sequence_and_callable(sequence, callback)?;
    let mut selected = Vec::new();
    for (index, element) in elements.iter().enumerate() {
        if invoke(callable, element, index, sequence)?.is_truthy() {
            selected.push(element.clone());
        }
    }
    Ok(Value::from(selected))
}

/// Folds the sequence with `callback(accumulator, element, index, sequence)`.
///
/// With an initial value the callback runs once per element. Without one
/// the accumulator starts at the first element and the callback runs over
/// the remaining elements.
///
/// # Errors
///
/// Returns [`ContractError::EmptyReduce`] when the sequence is empty and no
/// initial value is given, a contract violation for invalid arguments, or
/// the first error a callback invocation returns.
///
/// # Examples
///
/// ```rust
/// use fpkit::error::{ContractError, Error};
/// use fpkit::sequence::reduce;
/// use fpkit::value::{Callable, Value};
///
/// let add = Value::from(Callable::new(2, |arguments| {
///     let left = Value::argument(arguments, 0).to_number();
///     Ok(Value::from(left + Value::argument(arguments, 1).to_number()))
/// }));
///
/// assert_eq!(reduce(&Value::sequence([1, 2, 3]), &add, Some(Value::from(10))), Ok(Value::from(16)));
/// assert_eq!(
///     reduce(&Value::sequence(Vec::<Value>::new()), &add, None),
///     Err(Error::Contract(ContractError::EmptyReduce))
/// );
/// ```
pub fn reduce(sequence: &Value, callback: &Value, initial: Option<Value>) -> Result<Value, Error> {
    let (elements, callable) = require_sequence_and_callable(sequence, callback)?;

    let (mut accumulator, start) = match initial {
        Some(initial) => (initial, 0),
        None => match elements.first() {
            Some(first) => (first.clone(), 1),
            None => return Err(ContractError::EmptyReduce.into()),
        },
    };

    for (index, element) in elements.iter().enumerate().skip(start) {
        accumulator = callable.call(&[
            accumulator,
            element.clone(),
            Value::from(index),
            sequence.clone(),
        ])?;
    }
    Ok(accumulator)
}

/// Returns the first element for which `callback` is truthy, or `None`.
///
/// # Errors
///
/// Returns a contract violation for invalid arguments, or the first error a
/// callback invocation returns. Not finding an element is not an error.
pub fn find(sequence: &Value, callback: &Value) -> Result<Option<Value>, Error> {
    let (elements, callable) = require_sequence_and_callable(sequence, callback)?;
    for (index, element) in elements.iter().enumerate() {
        if invoke(callable, element, index, sequence)?.is_truthy() {
            return Ok(Some(element.clone()));
        }
    }
    Ok(None)
}

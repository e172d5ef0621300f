//! Argument-shape checks shared by every operation.
//!
//! Each check returns the typed view of the argument it accepted, so callers
//! validate once at entry and never match on the value again. When a check
//! covers two arguments, both conditions are evaluated before reporting so
//! that a combined violation is reported as such.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::error::ContractError;
//! use fpkit::validation::require_sequence_and_callable;
//! use fpkit::value::{Collection, Value};
//!
//! let sequence = Value::from(Collection::new());
//! let callback = Value::from("");
//! let result = require_sequence_and_callable(&sequence, &callback);
//! assert_eq!(result.unwrap_err(), ContractError::NotASequenceAndNotACallable);
//! ```

use crate::error::{ContractError, Subject};
use crate::value::{Callable, Collection, Value};

/// Checks that `sequence` is a sequence and `callback` is callable.
///
/// # Errors
///
/// Returns [`ContractError::NotASequenceAndNotACallable`],
/// [`ContractError::NotACallable`] or [`ContractError::NotASequence`].
pub fn require_sequence_and_callable<'a>(
    sequence: &'a Value,
    callback: &'a Value,
) -> Result<(&'a [Value], &'a Callable), ContractError> {
    match (sequence.as_sequence(), callback.as_callable()) {
        (Some(elements), Some(callable)) => Ok((elements, callable)),
        (None, None) => Err(ContractError::NotASequenceAndNotACallable),
        (Some(_), None) => Err(ContractError::NotACallable),
        (None, Some(_)) => Err(ContractError::NotASequence),
    }
}

/// Checks that `collection` is a key-value collection and `callback` is
/// callable.
///
/// Sequences, callables and primitives are never collections.
///
/// # Errors
///
/// Returns [`ContractError::NotACollectionAndNotACallable`],
/// [`ContractError::NotACallable`] or [`ContractError::NotACollection`].
pub fn require_collection_and_callable<'a>(
    collection: &'a Value,
    callback: &'a Value,
) -> Result<(&'a Collection, &'a Callable), ContractError> {
    match (collection.as_collection(), callback.as_callable()) {
        (Some(collection), Some(callable)) => Ok((collection, callable)),
        (None, None) => Err(ContractError::NotACollectionAndNotACallable),
        (Some(_), None) => Err(ContractError::NotACallable),
        (None, Some(_)) => Err(ContractError::NotACollection {
            subject: Subject::FirstArgument,
        }),
    }
}

/// Checks that `collection` is a key-value collection.
///
/// # Errors
///
/// Returns [`ContractError::NotACollection`] worded for `subject`.
pub fn require_collection(collection: &Value, subject: Subject) -> Result<&Collection, ContractError> {
    collection
        .as_collection()
        .ok_or(ContractError::NotACollection { subject })
}

/// Checks that `callback` is callable.
///
/// # Errors
///
/// Returns [`ContractError::NotCallableArg`].
pub const fn require_callable(callback: &Value) -> Result<&Callable, ContractError> {
    match callback.as_callable() {
        Some(callable) => Ok(callable),
        None => Err(ContractError::NotCallableArg),
    }
}

/// Coerces `number` to a finite number.
///
/// Sequences and blank strings are rejected outright even though they would
/// coerce to a number. `parameter` names the argument in the message.
///
/// # Errors
///
/// Returns [`ContractError::NotNumeric`].
pub fn require_numeric(number: &Value, parameter: &'static str) -> Result<f64, ContractError> {
    let rejected = match number {
        Value::Sequence(_) => true,
        Value::String(text) => text.trim().is_empty(),
        _ => false,
    };
    let coerced = number.to_number();

    if rejected || !coerced.is_finite() {
        Err(ContractError::NotNumeric { parameter })
    } else {
        Ok(coerced)
    }
}

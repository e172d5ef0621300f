//! Operations over key-value collections.
//!
//! Enumeration follows [`Collection::enumerate`]: own keys in enumeration
//! order, then inherited keys that are not shadowed. None of the operations
//! mutates its inputs.

use crate::error::{Error, Subject};
use crate::validation::{require_collection, require_collection_and_callable};
use crate::value::{Collection, Value};

/// Invokes `callback(value, key, collection)` for every enumerable own and
/// inherited entry.
///
/// # Errors
///
/// Returns a contract violation for invalid arguments, or the first error a
/// callback invocation returns.
pub fn for_each_entry(collection: &Value, callback: &Value) -> Result<(), Error> {
    let (entries, callable) = require_collection_and_callable(collection, callback)?;
    for (key, value) in entries.enumerate() {
        callable.call(&[value, Value::from(key), collection.clone()])?;
    }
    Ok(())
}

/// Returns a shallow copy of `target`'s own entries overlaid with each
/// source's enumerable entries, later sources winning.
///
/// All arguments are validated before anything is copied.
///
/// # Errors
///
/// Returns [`ContractError::NotACollection`](crate::error::ContractError::NotACollection)
/// worded for the first argument when `target` is invalid, or with the
/// generic wording for an invalid source.
///
/// # Examples
///
/// ```rust
/// use fpkit::collection::assign;
/// use fpkit::value::{Collection, Value};
///
/// let target = Value::from(Collection::from_iter([("name", "Ada")]));
/// let source = Value::from(Collection::from_iter([("name", "Grace"), ("field", "compilers")]));
///
/// let merged = assign(&target, &[source]).unwrap();
/// assert_eq!(merged.get("name"), Some(&Value::from("Grace")));
/// assert_eq!(merged.get("field"), Some(&Value::from("compilers")));
/// assert_eq!(target.as_collection().unwrap().get("name"), Some(&Value::from("Ada")));
/// ```
pub fn assign(target: &Value, sources: &[Value]) -> Result<Collection, Error> {
    let target = require_collection(target, Subject::FirstArgument)?;
    let sources = sources
        .iter()
        .map(|source| require_collection(source, Subject::Argument))
        .collect::<Result<Vec<_>, _>>()?;

    let mut merged: Collection = target
        .own_entries()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    for source in sources {
        for (key, value) in source.enumerate() {
            merged.insert(key, value);
        }
    }
    Ok(merged)
}

/// Returns a new sequence of the enumerable keys.
///
/// # Errors
///
/// Returns a contract violation when `collection` is not a collection.
pub fn keys_of(collection: &Value) -> Result<Value, Error> {
    let entries = require_collection(collection, Subject::Argument)?;
    Ok(Value::sequence(entries.enumerate().into_iter().map(|(key, _)| key)))
}

/// Returns a new sequence of the enumerable values.
///
/// # Errors
///
/// Returns a contract violation when `collection` is not a collection.
pub fn values_of(collection: &Value) -> Result<Value, Error> {
    let entries = require_collection(collection, Subject::Argument)?;
    Ok(Value::sequence(entries.enumerate().into_iter().map(|(_, value)| value)))
}

/// Returns a new sequence of `[key, value]` pairs.
///
/// # Errors
///
/// Returns a contract violation when `collection` is not a collection.
pub fn entries_of(collection: &Value) -> Result<Value, Error> {
    let entries = require_collection(collection, Subject::Argument)?;
    Ok(Value::sequence(
        entries
            .enumerate()
            .into_iter()
            .map(|(key, value)| Value::sequence([Value::from(key), value])),
    ))
}

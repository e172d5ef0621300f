//! # fpkit
//!
//! Functional programming utilities over dynamic values.
//!
//! ## Overview
//!
//! Every operation in this library validates the shape of its arguments at
//! run time and reports violations as typed errors with fixed messages. It
//! includes:
//!
//! - **Values**: [`Value`](value::Value), [`Callable`](value::Callable) with a declared arity,
//!   and [`Collection`](value::Collection)
//! - **Sequence traversal**: `for_each`, `every`, `some`, `map`, `filter`, `reduce`, `find`
//! - **Collection traversal**: `for_each_entry`, `assign`, `keys_of`, `values_of`, `entries_of`
//! - **Numeric predicates**: `is_prime`, `is_even`, `is_odd`
//! - **Combinators**: `to_unary`, `once`, `memoized`, `factorial`, `curry`, `partial`,
//!   `compose`, `pipe`
//!
//! ## Feature Flags
//!
//! - `sequence`: Sequence traversal
//! - `collection`: Collection traversal
//! - `numeric`: Numeric predicates
//! - `combinator`: Function combinators (requires `sequence`)
//! - `derive`: The `callable!` macro
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fpkit::prelude::*;
//!
//! let add = callable!(|x, y, z| x.to_number() + y.to_number() + z.to_number());
//! let curried = curry(&Value::from(add)).unwrap();
//!
//! let step = curried.call(&[Value::from(1)]).unwrap();
//! let step = step.as_callable().unwrap().call(&[Value::from(2)]).unwrap();
//! let total = step.as_callable().unwrap().call(&[Value::from(3)]).unwrap();
//! assert_eq!(total, Value::from(6));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

// `callable!` expands to `::fpkit::...` paths, including inside this crate.
extern crate self as fpkit;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and operations.
///
/// # Usage
///
/// ```rust
/// use fpkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ContractError, Error, Subject};
    pub use crate::value::{Callable, Collection, IntoOutcome, Value};

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "numeric")]
    pub use crate::numeric::*;

    #[cfg(feature = "combinator")]
    pub use crate::combinator::*;

    #[cfg(feature = "derive")]
    pub use crate::callable;
}

pub mod error;
pub mod validation;
pub mod value;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "numeric")]
pub mod numeric;

#[cfg(feature = "combinator")]
pub mod combinator;

pub use error::{ContractError, Error};
pub use value::{Callable, IntoOutcome, Value};

#[cfg(feature = "derive")]
pub use fpkit_derive::callable;

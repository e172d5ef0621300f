//! Function combinators.
//!
//! This module builds new callables out of existing ones. Every combinator
//! checks that it was given a callable before building anything and reports
//! [`ContractError::NotCallableArg`](crate::error::ContractError::NotCallableArg)
//! otherwise.
//!
//! # Overview
//!
//! - [`to_unary`]: Adapt a callable to take exactly one argument
//! - [`once`]: Run a callable at most once
//! - [`memoized`]: Cache results by argument list
//! - [`factorial`]: Recursive factorial
//! - [`curry`]: Convert a callable into a chain of single-argument stages
//! - [`partial`]: Fix some arguments now, fill the [`GAP`]s later
//! - [`compose`]: Compose callables right to left
//! - [`pipe`]: Compose callables left to right
//!
//! # Examples
//!
//! ## Composition
//!
//! ```rust
//! use fpkit::combinator::{compose, pipe};
//! use fpkit::value::{Callable, Value};
//!
//! let add_three = Value::from(Callable::new(1, |arguments| {
//!     Ok(Value::from(Value::argument(arguments, 0).to_number() + 3.0))
//! }));
//! let double = Value::from(Callable::new(1, |arguments| {
//!     Ok(Value::from(Value::argument(arguments, 0).to_number() * 2.0))
//! }));
//!
//! // compose(f, g)(x) = f(g(x))
//! let composed = compose(&[add_three.clone(), double.clone()]).unwrap();
//! assert_eq!(composed.call(&[Value::from(2)]), Ok(Value::from(7)));
//!
//! // pipe(f, g)(x) = g(f(x))
//! let piped = pipe(&[add_three, double]).unwrap();
//! assert_eq!(piped.call(&[Value::from(2)]), Ok(Value::from(10)));
//! ```
//!
//! ## Partial Application
//!
//! ```rust
//! use fpkit::combinator::{Arg, GAP, partial};
//! use fpkit::value::{Callable, Value};
//!
//! let subtract = Value::from(Callable::new(2, |arguments| {
//!     let minuend = Value::argument(arguments, 0).to_number();
//!     Ok(Value::from(minuend - Value::argument(arguments, 1).to_number()))
//! }));
//!
//! let from_ten = partial(&subtract).unwrap().with([Arg::value(10), GAP]);
//! assert_eq!(from_ten.call(&[Value::from(3)]), Ok(Value::from(7)));
//! ```
//!
//! # Laws
//!
//! - **Composition order**: `compose(f, g, h)(x) == f(g(h(x)))`
//! - **Pipeline order**: `pipe(f, g, h)(x) == h(g(f(x)))`
//! - **Identity**: `compose()` and `pipe()` return their input
//! - **Curry**: `curry(f)(a)(b)(c) == f(a, b, c)` for `f` of arity 3
//!
//! # State
//!
//! [`once`] and [`memoized`] own their state (a guard flag and a cache); the
//! state is private to the returned callable and synchronised, so the
//! callable may be shared across threads. Curried stages and partial
//! templates are immutable once built.

mod compose;
mod curry;
mod factorial;
mod memoize;
mod once;
mod partial;
mod unary;

pub use compose::{compose, pipe};
pub use curry::curry;
pub use factorial::factorial;
pub use memoize::memoized;
pub use once::once;
pub use partial::{Arg, GAP, Partial, partial};
pub use unary::to_unary;

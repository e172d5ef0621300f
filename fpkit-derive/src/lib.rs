//! Procedural macros for fpkit.
//!
//! # Available Function-like Macros
//!
//! - [`callable!`]: Builds an `fpkit::Callable` from a closure or a function
//!   path, recording the declared arity alongside the body.
//!
//! # Example
//!
//! ```rust,ignore
//! use fpkit::{Value, callable};
//!
//! let add = callable!(|left, right| left.to_number() + right.to_number());
//! assert_eq!(add.arity(), 2);
//! assert_eq!(add.call(&[Value::from(1), Value::from(2)]), Ok(Value::from(3)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod callable;

use proc_macro::TokenStream;

/// Builds an `fpkit::Callable` with a declared arity.
///
/// The arity is the number of closure parameters, or the integer literal
/// given after a function path. Parameters without a type annotation are
/// typed as `fpkit::Value`. Positional arguments the caller did not supply
/// are read as `Value::Undefined`; surplus arguments are ignored.
///
/// The body may return anything implementing `fpkit::IntoOutcome`: a
/// `Value`, a primitive convertible to one, `()`, or a `Result` whose error
/// converts into `fpkit::Error`.
///
/// # Usage
///
/// ```rust,ignore
/// use fpkit::callable;
///
/// let triple = callable!(|x| x.to_number() * 3.0);
/// assert_eq!(triple.arity(), 1);
///
/// let nothing = callable!(|| ());
/// assert_eq!(nothing.arity(), 0);
/// ```
///
/// # Wrapping existing functions
///
/// ```rust,ignore
/// use fpkit::{Value, callable};
///
/// fn concat(first: Value, second: Value) -> String {
///     format!("{first}{second}")
/// }
///
/// let joined = callable!(concat, 2);
/// assert_eq!(joined.arity(), 2);
/// ```
///
/// # Capturing state
///
/// The closure is moved into a shared, thread-safe body, so it must be
/// `Send + Sync + 'static`. Capture shared state through `Arc`:
///
/// ```rust,ignore
/// use fpkit::callable;
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let calls = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&calls);
/// let tick = callable!(move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
/// ```
#[proc_macro]
pub fn callable(input: TokenStream) -> TokenStream {
    callable::callable_impl(input)
}

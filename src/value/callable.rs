//! Callables with a declared arity.

use super::{Collection, Value};
use crate::error::Error;
use std::fmt;
use std::sync::Arc;

type CallableBody = dyn Fn(&[Value]) -> Result<Value, Error> + Send + Sync;

/// An invocable value paired with its declared arity.
///
/// The arity is the number of declared, non-variadic parameters. It is fixed
/// at construction and is what [`curry`](crate::combinator::curry) and
/// [`to_unary`](crate::combinator::to_unary) inspect. A variadic body
/// declares arity `0`.
///
/// Cloning shares the body, so clones compare equal and
/// [`Callable::ptr_eq`] holds between them.
///
/// # Examples
///
/// ```rust
/// use fpkit::value::{Callable, Value};
///
/// let add = Callable::new(2, |arguments| {
///     let left = Value::argument(arguments, 0).to_number();
///     let right = Value::argument(arguments, 1).to_number();
///     Ok(Value::from(left + right))
/// });
///
/// assert_eq!(add.arity(), 2);
/// assert_eq!(add.call(&[Value::from(2), Value::from(3)]), Ok(Value::from(5)));
/// ```
#[derive(Clone)]
pub struct Callable {
    arity: usize,
    body: Arc<CallableBody>,
}

impl Callable {
    /// Creates a callable with the given declared arity.
    pub fn new<F>(arity: usize, body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, Error> + Send + Sync + 'static,
    {
        Self {
            arity,
            body: Arc::new(body),
        }
    }

    /// Returns the declared arity.
    #[inline]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Invokes the body with the given positional arguments.
    ///
    /// # Errors
    ///
    /// Returns whatever error the body produces.
    #[inline]
    pub fn call(&self, arguments: &[Value]) -> Result<Value, Error> {
        (self.body)(arguments)
    }

    /// Returns `true` if both callables share the same body.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.body), Arc::as_ptr(&other.body))
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        self.arity == other.arity && self.ptr_eq(other)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Callable")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Conversion of a callable body's return value into a call outcome.
///
/// Implemented for [`Value`], the primitive types that convert into one,
/// and for `Result`s of those whose error converts into [`Error`]. The
/// `callable!` macro routes closure results through this trait.
pub trait IntoOutcome {
    /// Converts `self` into the result of a call.
    ///
    /// # Errors
    ///
    /// Returns the error carried by a `Result` return value.
    fn into_outcome(self) -> Result<Value, Error>;
}

macro_rules! impl_into_outcome {
    ($($source:ty),* $(,)?) => {
        $(
            impl IntoOutcome for $source {
                #[inline]
                fn into_outcome(self) -> Result<Value, Error> {
                    Ok(Value::from(self))
                }
            }
        )*
    };
}

impl_into_outcome!(
    Value,
    (),
    bool,
    f64,
    i32,
    u32,
    i64,
    usize,
    &str,
    String,
    Arc<str>,
    Vec<Value>,
    Collection,
    Callable,
);

impl<T, E> IntoOutcome for Result<T, E>
where
    T: IntoOutcome,
    E: Into<Error>,
{
    #[inline]
    fn into_outcome(self) -> Result<Value, Error> {
        self.map_err(Into::into)?.into_outcome()
    }
}

//! Placeholder-based partial application.

use crate::error::Error;
use crate::validation::require_callable;
use crate::value::{Callable, Value};
use smallvec::SmallVec;
use std::sync::Arc;

/// A slot of a partial-application template.
#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
    /// A value fixed now.
    Value(Value),
    /// A position filled by the next call.
    Gap,
}

/// The gap placeholder.
///
/// # Examples
///
/// ```rust
/// use fpkit::combinator::{Arg, GAP};
///
/// assert_eq!(GAP, Arg::Gap);
/// ```
pub const GAP: Arg = Arg::Gap;

impl Arg {
    /// Creates a fixed slot.
    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

/// A callable waiting for its argument template.
///
/// Produced by [`partial`]. The two stages of partial application are kept
/// apart: the template is a list of [`Arg`]s, so a gap is a distinct slot
/// rather than an `Undefined` argument. Call [`Partial::with`] to get the
/// [`Callable`] that can be composed or stored as a [`Value`].
#[derive(Clone, Debug)]
pub struct Partial {
    target: Callable,
}

impl Partial {
    /// Returns the wrapped callable.
    pub const fn target(&self) -> &Callable {
        &self.target
    }

    /// Fixes a template of values and gaps.
    ///
    /// The returned callable (declared arity `0`, it accepts any number of
    /// arguments) fills a fresh copy of the template on every call: each gap,
    /// left to right, takes the next supplied argument. Gaps left over once
    /// the arguments run out are `Value::Undefined`. Arguments left over once
    /// every gap is filled are appended after the template, so they supply
    /// the target's trailing positions. The template itself is never
    /// modified, so the callable can be reused with different arguments.
    pub fn with<I>(&self, template: I) -> Callable
    where
        I: IntoIterator<Item = Arg>,
    {
        let template: Arc<[Arg]> = template.into_iter().collect();
        let target = self.target.clone();

        Callable::new(0, move |remaining| {
            let mut supplied = remaining.iter();
            let mut filled: SmallVec<[Value; 4]> = template
                .iter()
                .map(|slot| match slot {
                    Arg::Value(value) => value.clone(),
                    Arg::Gap => supplied.next().cloned().unwrap_or_default(),
                })
                .collect();
            filled.extend(supplied.cloned());
            target.call(&filled)
        })
    }
}

/// Prepares `function` for partial application.
///
/// # Errors
///
/// Returns [`ContractError::NotCallableArg`](crate::error::ContractError::NotCallableArg)
/// when `function` is not callable.
///
/// # Examples
///
/// ```rust
/// use fpkit::combinator::{Arg, GAP, partial};
/// use fpkit::value::{Callable, Value};
///
/// let volume = Callable::new(3, |arguments| {
///     Ok(Value::from(arguments.iter().map(Value::to_number).product::<f64>()))
/// });
///
/// let with_ends = partial(&Value::from(volume))
///     .unwrap()
///     .with([Arg::value(1), GAP, Arg::value(3)]);
///
/// assert_eq!(with_ends.call(&[Value::from(4)]), Ok(Value::from(12)));
/// assert_eq!(with_ends.call(&[Value::from(5)]), Ok(Value::from(15)));
/// ```
pub fn partial(function: &Value) -> Result<Partial, Error> {
    Ok(Partial {
        target: require_callable(function)?.clone(),
    })
}

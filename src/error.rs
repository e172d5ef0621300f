//! Error types for fpkit operations.
//!
//! Every operation validates the shape of its arguments before doing any
//! work. A violated contract is reported as a [`ContractError`], whose
//! `Display` output is the fixed message for that kind of violation.
//! Errors raised by caller-supplied callables travel through the library
//! unchanged as [`Error::Raised`].

use std::fmt;

/// Which argument a collection check was applied to.
///
/// The wording of [`ContractError::NotACollection`] depends on the call
/// site: traversal operations name the first argument, while the listing
/// operations and the sources of [`assign`](crate::collection::assign) use
/// the generic wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    /// The first positional argument of the operation.
    FirstArgument,
    /// Any other argument.
    Argument,
}

/// A violated argument contract.
///
/// # Examples
///
/// ```rust
/// use fpkit::error::ContractError;
///
/// assert_eq!(
///     ContractError::NotASequenceAndNotACallable.to_string(),
///     "The first argument should be an array and the second argument should be a function"
/// );
/// assert_eq!(
///     ContractError::NotNumeric { parameter: "num" }.to_string(),
///     "num should be a number"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractError {
    /// The first argument of a sequence operation is not a sequence.
    NotASequence,
    /// The callback of a traversal operation is not callable.
    NotACallable,
    /// Both of the above at once.
    NotASequenceAndNotACallable,
    /// An argument expected to be a key-value collection is not one.
    NotACollection {
        /// The argument the check was applied to.
        subject: Subject,
    },
    /// The first argument is not a collection and the callback is not callable.
    NotACollectionAndNotACallable,
    /// The argument of a combinator is not callable.
    NotCallableArg,
    /// The argument cannot be coerced to a finite number.
    NotNumeric {
        /// The parameter name used in the message (`n` or `num`).
        parameter: &'static str,
    },
    /// A fold over an empty sequence was requested without an initial value.
    EmptyReduce,
}

impl fmt::Display for ContractError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotASequence => formatter.write_str("The first argument should be an array"),
            Self::NotACallable => formatter.write_str("The second argument should be a function"),
            Self::NotASequenceAndNotACallable => formatter.write_str(
                "The first argument should be an array and the second argument should be a function",
            ),
            Self::NotACollection {
                subject: Subject::FirstArgument,
            } => formatter.write_str("The first argument should be an object"),
            Self::NotACollection {
                subject: Subject::Argument,
            } => formatter.write_str("Argument should be an object"),
            Self::NotACollectionAndNotACallable => formatter.write_str(
                "The first argument should be an object and the second argument should be a function",
            ),
            Self::NotCallableArg => formatter.write_str("Callback should be a function"),
            Self::NotNumeric { parameter } => write!(formatter, "{parameter} should be a number"),
            Self::EmptyReduce => {
                formatter.write_str("Reduce of empty array with no initial value")
            }
        }
    }
}

impl std::error::Error for ContractError {}

/// The error type of every fallible fpkit operation.
///
/// # Examples
///
/// ```rust
/// use fpkit::error::{ContractError, Error};
///
/// let error = Error::from(ContractError::NotCallableArg);
/// assert_eq!(error.contract(), Some(&ContractError::NotCallableArg));
/// assert_eq!(error.to_string(), "Callback should be a function");
///
/// let raised = Error::raise("division by zero");
/// assert_eq!(raised.contract(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument contract was violated.
    Contract(ContractError),
    /// A caller-supplied callable failed.
    Raised(String),
}

impl Error {
    /// Creates an error raised from inside a callable.
    pub fn raise(message: impl Into<String>) -> Self {
        Self::Raised(message.into())
    }

    /// Returns the contract violation, if this error is one.
    pub const fn contract(&self) -> Option<&ContractError> {
        match self {
            Self::Contract(violation) => Some(violation),
            Self::Raised(_) => None,
        }
    }
}

impl From<ContractError> for Error {
    fn from(violation: ContractError) -> Self {
        Self::Contract(violation)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contract(violation) => write!(formatter, "{violation}"),
            Self::Raised(message) => formatter.write_str(message),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Contract(violation) => Some(violation),
            Self::Raised(_) => None,
        }
    }
}

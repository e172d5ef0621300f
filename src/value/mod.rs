//! Dynamic values passed through every fpkit operation.
//!
//! The operations in this crate check the *shape* of their arguments at run
//! time (is this a sequence, is this callable), so they work over a single
//! [`Value`] type rather than generic parameters:
//!
//! - [`Value`]: the value enum with JavaScript-like truthiness, numeric
//!   coercion and string conversion
//! - [`Callable`]: a shared function body paired with its declared arity
//! - [`Collection`]: an ordered string-keyed map with an optional prototype
//!
//! # Examples
//!
//! ```rust
//! use fpkit::value::Value;
//!
//! let sequence = Value::sequence([1, 2, 3]);
//! assert_eq!(sequence.to_string(), "1,2,3");
//! assert!(sequence.is_truthy());
//!
//! assert_eq!(Value::from(" 42 ").to_number(), 42.0);
//! assert!(Value::from("forty-two").to_number().is_nan());
//! ```

mod callable;
mod collection;

pub use callable::{Callable, IntoOutcome};
pub use collection::Collection;

use std::fmt;
use std::sync::Arc;

/// A dynamically typed value.
///
/// Sequences and collections are shared behind `Arc`, so cloning a value is
/// cheap and keeps the identity observable through [`Value::same_instance`].
/// Equality is structural for data and by identity for callables.
#[derive(Clone, Default, PartialEq)]
pub enum Value {
    /// The absent value.
    #[default]
    Undefined,
    /// The explicit empty value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A double-precision number.
    Number(f64),
    /// An immutable string.
    String(Arc<str>),
    /// An ordered, index-addressable sequence.
    Sequence(Arc<[Value]>),
    /// A string-keyed collection.
    Collection(Arc<Collection>),
    /// An invocable value with a declared arity.
    Callable(Callable),
}

impl Value {
    /// Builds a sequence from anything convertible into values.
    pub fn sequence<I, T>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        Self::Sequence(elements.into_iter().map(Into::into).collect())
    }

    /// Reads positional argument `index`, or `Undefined` when the caller
    /// supplied fewer arguments.
    pub fn argument(arguments: &[Self], index: usize) -> Self {
        arguments.get(index).cloned().unwrap_or_default()
    }

    /// Returns `false` for `undefined`, `null`, `false`, `0`, `NaN` and the
    /// empty string, `true` for everything else.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Number(number) => *number != 0.0 && !number.is_nan(),
            Self::String(text) => !text.is_empty(),
            Self::Sequence(_) | Self::Collection(_) | Self::Callable(_) => true,
        }
    }

    /// Coerces the value to a number.
    ///
    /// Strings are trimmed; an empty string is `0`; `0x`, `0o` and `0b`
    /// prefixes select the radix; `Infinity` may be spelled out. Anything
    /// that is not a numeric literal is `NaN`. Sequences coerce through
    /// their string form; collections and callables are `NaN`.
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Undefined | Self::Collection(_) | Self::Callable(_) => f64::NAN,
            Self::Null => 0.0,
            Self::Bool(flag) => f64::from(u8::from(*flag)),
            Self::Number(number) => *number,
            Self::String(text) => parse_number(text),
            Self::Sequence(_) => parse_number(&self.to_string()),
        }
    }

    /// Returns the number if this is a `Number`.
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the boolean if this is a `Bool`.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the text if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the elements if this is a `Sequence`.
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(elements) => Some(elements),
            _ => None,
        }
    }

    /// Returns the collection if this is a `Collection`.
    pub fn as_collection(&self) -> Option<&Collection> {
        match self {
            Self::Collection(collection) => Some(collection),
            _ => None,
        }
    }

    /// Returns the callable if this is a `Callable`.
    pub const fn as_callable(&self) -> Option<&Callable> {
        match self {
            Self::Callable(callable) => Some(callable),
            _ => None,
        }
    }

    /// Returns `true` if both values are the same shared sequence,
    /// collection or callable.
    ///
    /// ```rust
    /// use fpkit::value::Value;
    ///
    /// let original = Value::sequence([1, 2]);
    /// let copy = Value::sequence([1, 2]);
    ///
    /// assert!(original.same_instance(&original.clone()));
    /// assert!(!original.same_instance(&copy));
    /// assert_eq!(original, copy);
    /// ```
    pub fn same_instance(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Sequence(left), Self::Sequence(right)) => Arc::ptr_eq(left, right),
            (Self::Collection(left), Self::Collection(right)) => Arc::ptr_eq(left, right),
            (Self::Callable(left), Self::Callable(right)) => left.ptr_eq(right),
            _ => false,
        }
    }
}

fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let radix_digits = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)]
        .into_iter()
        .find_map(|(prefix, radix)| trimmed.strip_prefix(prefix).map(|digits| (digits, radix)));
    if let Some((digits, radix)) = radix_digits {
        return parse_radix(digits, radix);
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let is_decimal_literal = trimmed
        .chars()
        .all(|character| character.is_ascii_digit() || matches!(character, '.' | 'e' | 'E' | '+' | '-'));
    if is_decimal_literal {
        trimmed.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |accumulator, character| {
            character
                .to_digit(radix)
                .map(|digit| accumulator.mul_add(f64::from(radix), f64::from(digit)))
        })
        .unwrap_or(f64::NAN)
}

fn format_number(number: f64, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
    if number.is_nan() {
        formatter.write_str("NaN")
    } else if number.is_infinite() {
        formatter.write_str(if number > 0.0 { "Infinity" } else { "-Infinity" })
    } else if number == 0.0 {
        formatter.write_str("0")
    } else {
        write!(formatter, "{number}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => formatter.write_str("undefined"),
            Self::Null => formatter.write_str("null"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Number(number) => format_number(*number, formatter),
            Self::String(text) => formatter.write_str(text),
            Self::Sequence(elements) => {
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(",")?;
                    }
                    if !matches!(element, Self::Undefined | Self::Null) {
                        write!(formatter, "{element}")?;
                    }
                }
                Ok(())
            }
            Self::Collection(_) => formatter.write_str("[object Object]"),
            Self::Callable(_) => formatter.write_str("function"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => formatter.write_str("Undefined"),
            Self::Null => formatter.write_str("Null"),
            Self::Bool(flag) => formatter.debug_tuple("Bool").field(flag).finish(),
            Self::Number(number) => formatter.debug_tuple("Number").field(number).finish(),
            Self::String(text) => formatter.debug_tuple("String").field(text).finish(),
            Self::Sequence(elements) => formatter.debug_list().entries(elements.iter()).finish(),
            Self::Collection(collection) => fmt::Debug::fmt(collection, formatter),
            Self::Callable(callable) => fmt::Debug::fmt(callable, formatter),
        }
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Undefined
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(number: i64) -> Self {
        Self::Number(number as f64)
    }
}

impl From<usize> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(number: usize) -> Self {
        Self::Number(number as f64)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(Arc::from(text))
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(Arc::from(text))
    }
}

impl From<Arc<str>> for Value {
    fn from(text: Arc<str>) -> Self {
        Self::String(text)
    }
}

impl From<Vec<Self>> for Value {
    fn from(elements: Vec<Self>) -> Self {
        Self::Sequence(Arc::from(elements))
    }
}

impl From<Collection> for Value {
    fn from(collection: Collection) -> Self {
        Self::Collection(Arc::new(collection))
    }
}

impl From<Callable> for Value {
    fn from(callable: Callable) -> Self {
        Self::Callable(callable)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Undefined, Into::into)
    }
}

//! Key/value context entries and the arguments they are built from.
//!
//! A wrap call receives a flat list of [`Arg`]s. String-like arguments become
//! [`Arg::Text`] and can act as keys; every other argument is rendered through
//! `Display` into [`Arg::Value`] and can only act as a value.
//!
//! # Examples
//!
//! ```
//! use causeway::{Arg, Failure};
//!
//! let err = Failure::new("disk full").wrap([Arg::from("corrupt file"), "path".into(), "/tmp/a".into()]);
//!
//! assert_eq!(err.lookup_value("msg"), Some("corrupt file"));
//! assert_eq!(err.lookup_value("path"), Some("/tmp/a"));
//! ```

use crate::types::alloc_type::{Cow, String, ToString};
use crate::types::ErrorVec;
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Key used for the human readable message of a node.
pub const MSG_KEY: &str = "msg";

/// Message used when a node carries no `msg` entry.
pub const DEFAULT_MSG: &str = "error";

/// One `key = value` entry attached to an error chain node.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContextValue {
    pub key: String,
    pub value: String,
}

impl ContextValue {
    #[inline]
    pub fn new<K: Into<String>, V: Into<String>>(key: K, value: V) -> Self {
        Self { key: key.into(), value: value.into() }
    }

    /// Shorthand for a `msg` entry.
    #[inline]
    pub fn msg<V: Into<String>>(value: V) -> Self {
        Self::new(MSG_KEY, value)
    }
}

impl Display for ContextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// A single wrap argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// Textual argument; valid as a key or a value.
    Text(String),
    /// Any other argument, already rendered; never valid as a key.
    Value(String),
}

impl Arg {
    /// Renders an arbitrary `Display` value as a non-key argument.
    #[inline]
    pub fn value<T: Display>(value: T) -> Self {
        Self::Value(value.to_string())
    }

    /// Returns the argument as a key, if it is textual.
    #[inline]
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Value(_) => None,
        }
    }

    #[inline]
    pub fn into_string(self) -> String {
        match self {
            Self::Text(s) | Self::Value(s) => s,
        }
    }
}

impl From<&str> for Arg {
    #[inline]
    fn from(s: &str) -> Self {
        Self::Text(s.into())
    }
}

impl From<String> for Arg {
    #[inline]
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for Arg {
    #[inline]
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<Cow<'_, str>> for Arg {
    #[inline]
    fn from(s: Cow<'_, str>) -> Self {
        Self::Text(s.into_owned())
    }
}

macro_rules! impl_value_arg {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Arg {
                #[inline]
                fn from(v: $ty) -> Self {
                    Self::Value(v.to_string())
                }
            }
        )*
    };
}

impl_value_arg!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char
);

/// Builds the context of a wrap from its flat argument list.
///
/// Odd length: the first argument is the message. The rest is read in
/// key/value pairs; pairs with a non-text key are skipped. An empty list
/// yields `msg = "error"`.
pub(crate) fn collect_context<I>(args: I) -> ErrorVec<ContextValue>
where
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    let args: crate::types::alloc_type::Vec<Arg> = args.into_iter().map(Into::into).collect();
    let mut values = ErrorVec::new();

    if args.is_empty() {
        values.push(ContextValue::msg(DEFAULT_MSG));
        return values;
    }

    let odd = args.len() % 2 == 1;
    let mut iter = args.into_iter();
    if odd {
        if let Some(first) = iter.next() {
            values.push(ContextValue::msg(first.into_string()));
        }
    }

    while let (Some(key), Some(value)) = (iter.next(), iter.next()) {
        if let Arg::Text(key) = key {
            values.push(ContextValue::new(key, value.into_string()));
        }
    }

    values
}

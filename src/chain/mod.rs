//! Free-function entry points for building and querying chains.
//!
//! These mirror the methods on [`Failure`] but accept an optional cause, so a
//! possibly absent error can be wrapped without checking it first: wrapping
//! `None` yields `None`.
//!
//! # Examples
//!
//! ```
//! use causeway::chain::{root_cause, wrap};
//! use causeway::Failure;
//!
//! fn step(fail: bool) -> Option<Failure> {
//!     fail.then(|| Failure::new("step failed"))
//! }
//!
//! assert!(wrap(step(false), ["running step"]).is_none());
//!
//! let err = wrap(step(true), ["running step"]).unwrap();
//! assert_eq!(root_cause(&err).to_string(), "step failed");
//! ```

use crate::types::alloc_type::String;
use crate::types::{Arg, Failure};
use core::fmt;

/// Creates a depth-0 error. Same as [`Failure::new`].
#[track_caller]
#[inline]
pub fn new<M: Into<String>>(message: M) -> Failure {
    Failure::new(message)
}

/// Wraps `cause` with context; `None` stays `None`.
///
/// See [`Failure::wrap`] for how `args` is interpreted.
#[track_caller]
pub fn wrap<E, I>(cause: Option<E>, args: I) -> Option<Failure>
where
    E: Into<Failure>,
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    match cause {
        Some(cause) => {
            let cause: Failure = cause.into();
            Some(cause.wrap(args))
        },
        None => None,
    }
}

/// Wraps `cause` with a formatted message; `None` stays `None`.
#[track_caller]
pub fn wrap_fmt<E>(cause: Option<E>, args: fmt::Arguments<'_>) -> Option<Failure>
where
    E: Into<Failure>,
{
    match cause {
        Some(cause) => {
            let cause: Failure = cause.into();
            Some(cause.wrap_fmt(args))
        },
        None => None,
    }
}

/// The directly wrapped error of `err`, or `err` itself.
#[inline]
pub fn proper_cause(err: &Failure) -> &Failure {
    err.proper_cause()
}

/// The originating error of `err`'s chain, or `err` itself.
#[inline]
pub fn root_cause(err: &Failure) -> &Failure {
    err.root_cause()
}

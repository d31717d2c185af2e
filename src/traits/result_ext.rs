//! Extension trait for wrapping the error of a `Result`.
//!
//! This is the usual way to add context while propagating: `Ok` passes
//! through untouched, `Err` is converted into a [`Failure`] and wrapped with
//! the call site of the extension method.
//!
//! # Examples
//!
//! ```
//! use causeway::traits::ResultExt;
//! use causeway::Failure;
//!
//! fn load_config(path: &str) -> Result<String, Failure> {
//!     std::fs::read_to_string(path).wrap_err(["loading configuration", "path", path])
//! }
//!
//! let err = load_config("/definitely/not/here.toml").unwrap_err();
//! assert!(err.to_string().starts_with("loading configuration: "));
//! assert_eq!(err.lookup_value("path"), Some("/definitely/not/here.toml"));
//! ```

use crate::types::{Arg, Failure};
use core::fmt;

/// Extension trait for wrapping `Result` errors into a [`Failure`] chain.
pub trait ResultExt<T, E> {
    /// Wraps the error with context built from `args`.
    ///
    /// See [`Failure::wrap`] for how `args` is interpreted.
    fn wrap_err<I>(self, args: I) -> Result<T, Failure>
    where
        I: IntoIterator,
        I::Item: Into<Arg>;

    /// Wraps the error with context produced lazily by `f`.
    ///
    /// `f` is only called on `Err`.
    ///
    /// ```
    /// use causeway::traits::ResultExt;
    /// use causeway::{Arg, Failure};
    ///
    /// let user_id = 42;
    /// let result: Result<(), Failure> = Err(Failure::new("not found"));
    /// let err = result
    ///     .wrap_err_with(|| [Arg::from("loading user"), "user_id".into(), user_id.into()])
    ///     .unwrap_err();
    ///
    /// assert_eq!(err.lookup_value("user_id"), Some("42"));
    /// ```
    fn wrap_err_with<F, I>(self, f: F) -> Result<T, Failure>
    where
        F: FnOnce() -> I,
        I: IntoIterator,
        I::Item: Into<Arg>;

    /// Wraps the error with a formatted message.
    fn wrapf_err(self, args: fmt::Arguments<'_>) -> Result<T, Failure>;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Into<Failure>,
{
    #[track_caller]
    #[inline]
    fn wrap_err<I>(self, args: I) -> Result<T, Failure>
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => {
                let err: Failure = err.into();
                Err(err.wrap(args))
            },
        }
    }

    #[track_caller]
    #[inline]
    fn wrap_err_with<F, I>(self, f: F) -> Result<T, Failure>
    where
        F: FnOnce() -> I,
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => {
                let err: Failure = err.into();
                Err(err.wrap(f()))
            },
        }
    }

    #[track_caller]
    #[inline]
    fn wrapf_err(self, args: fmt::Arguments<'_>) -> Result<T, Failure> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => {
                let err: Failure = err.into();
                Err(err.wrap_fmt(args))
            },
        }
    }
}

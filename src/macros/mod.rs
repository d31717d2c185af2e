//! Construction macros.
//!
//! - [`macro@crate::failure`] - creates a depth-0 error from a format string.
//! - [`macro@crate::wrap`] - wraps an error with a flat list of context
//!   arguments of any mix of types.
//! - [`macro@crate::wrapf`] - wraps an error with a formatted message.
//!
//! All three record the location of the macro invocation.
//!
//! # Examples
//!
//! ```
//! use causeway::{failure, wrap, wrapf};
//!
//! let err = failure!("shard {} unavailable", 3);
//! let err = wrap!(err, "replicating", "attempt", 2, "primary", true);
//! let err = wrapf!(err, "commit {} failed", "a1b2");
//!
//! assert_eq!(err.to_string(), "commit a1b2 failed: shard 3 unavailable");
//! ```

/// Creates a depth-0 [`Failure`](crate::Failure) with a formatted message.
///
/// # Examples
///
/// ```
/// use causeway::failure;
///
/// let err = failure!("unexpected tag {:#x}", 0x7f);
/// assert_eq!(err.to_string(), "unexpected tag 0x7f");
/// ```
#[macro_export]
macro_rules! failure {
    ($($arg:tt)+) => {
        $crate::Failure::new_fmt(::core::format_args!($($arg)+))
    };
}

/// Wraps an error with context arguments.
///
/// Every argument goes through [`Arg::from`](crate::Arg), so strings,
/// numbers, booleans and chars can be mixed freely. With an odd number of
/// arguments the first one is the message; the rest are key/value pairs.
/// Without arguments the message is `"error"`.
///
/// # Examples
///
/// ```
/// use causeway::{wrap, Failure};
///
/// let err = wrap!(Failure::new("eof"), "corrupt file", "path", "/path", "offset", 4096);
/// assert_eq!(err.lookup_value("msg"), Some("corrupt file"));
/// assert_eq!(err.lookup_value("offset"), Some("4096"));
///
/// let bare = wrap!(Failure::new("eof"));
/// assert_eq!(bare.to_string(), "error: eof");
/// ```
#[macro_export]
macro_rules! wrap {
    ($err:expr $(,)?) => {
        $crate::Failure::from($err).wrap(::core::iter::empty::<$crate::Arg>())
    };
    ($err:expr, $($arg:expr),+ $(,)?) => {
        $crate::Failure::from($err).wrap([$($crate::Arg::from($arg)),+])
    };
}

/// Wraps an error with a formatted message.
///
/// # Examples
///
/// ```
/// use causeway::{wrapf, Failure};
///
/// let err = wrapf!(Failure::new("timeout"), "dialing {}:{}", "db", 5432);
/// assert_eq!(err.to_string(), "dialing db:5432: timeout");
/// ```
#[macro_export]
macro_rules! wrapf {
    ($err:expr, $($arg:tt)+) => {
        $crate::Failure::from($err).wrap_fmt(::core::format_args!($($arg)+))
    };
}

//! Extension trait for `Future<Output = Result<T, E>>`.
//!
//! Provides `.wrap_err()` and `.wrap_err_with()` for futures, mirroring
//! the sync [`ResultExt`](crate::traits::ResultExt) trait.

use core::future::Future;

use crate::types::{Arg, Origin};

use super::wrap_future::WrapFuture;

/// Extension trait for wrapping the error of a `Result`-returning future.
///
/// # Examples
///
/// ```rust
/// use causeway::async_ext::FutureWrapExt;
/// use causeway::Failure;
///
/// async fn fetch_row(id: u64) -> Result<String, Failure> {
///     Err(Failure::new("row missing"))
/// }
///
/// async fn load(id: u64) -> Result<String, Failure> {
///     fetch_row(id).wrap_err(["loading row", "id", "7"]).await
/// }
/// ```
pub trait FutureWrapExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Wraps the future's error with context built from `args`.
    fn wrap_err<I>(self, args: I) -> WrapFuture<Self, impl FnOnce() -> I>
    where
        I: IntoIterator,
        I::Item: Into<Arg>;

    /// Wraps the future's error with context produced lazily by `f`.
    ///
    /// `f` is only called when the future resolves to an error.
    fn wrap_err_with<F, I>(self, f: F) -> WrapFuture<Self, F>
    where
        F: FnOnce() -> I,
        I: IntoIterator,
        I::Item: Into<Arg>;
}

impl<Fut, T, E> FutureWrapExt<T, E> for Fut
where
    Fut: Future<Output = Result<T, E>>,
{
    #[track_caller]
    #[inline]
    fn wrap_err<I>(self, args: I) -> WrapFuture<Self, impl FnOnce() -> I>
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        WrapFuture::new(self, move || args, Origin::caller())
    }

    #[track_caller]
    #[inline]
    fn wrap_err_with<F, I>(self, f: F) -> WrapFuture<Self, F>
    where
        F: FnOnce() -> I,
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        WrapFuture::new(self, f, Origin::caller())
    }
}

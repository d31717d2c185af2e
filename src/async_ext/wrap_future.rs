//! Future adapter that wraps the error of its output.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::types::{Arg, Failure, Origin};

pin_project! {
    /// Wraps the `Err` output of a future into a [`Failure`] chain.
    ///
    /// The context arguments are only produced when the inner future resolves
    /// to an error. The recorded origin is where the adapter was created, not
    /// where it was polled.
    ///
    /// # Cancel Safety
    ///
    /// `WrapFuture` is cancel-safe if the inner future is cancel-safe.
    #[must_use = "futures do nothing unless polled"]
    pub struct WrapFuture<Fut, F> {
        #[pin]
        future: Fut,
        args_fn: Option<F>,
        origin: Origin,
    }
}

impl<Fut, F> WrapFuture<Fut, F> {
    #[inline]
    pub fn new(future: Fut, args_fn: F, origin: Origin) -> Self {
        Self { future, args_fn: Some(args_fn), origin }
    }
}

impl<Fut, F, I, T, E> Future for WrapFuture<Fut, F>
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<Failure>,
    F: FnOnce() -> I,
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    type Output = Result<T, Failure>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        let result = match this.future.poll(cx) {
            Poll::Ready(result) => result,
            Poll::Pending => return Poll::Pending,
        };

        let args_fn = this
            .args_fn
            .take()
            .expect("WrapFuture polled after completion; this is a bug");

        Poll::Ready(match result {
            Ok(value) => Ok(value),
            Err(err) => {
                let err: Failure = err.into();
                Err(err.wrap_at(this.origin.clone(), args_fn()))
            },
        })
    }
}

impl<Fut, F, I, T, E> FusedFuture for WrapFuture<Fut, F>
where
    Fut: FusedFuture<Output = Result<T, E>>,
    E: Into<Failure>,
    F: FnOnce() -> I,
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    fn is_terminated(&self) -> bool {
        self.args_fn.is_none() || self.future.is_terminated()
    }
}

//! Tracing integration for causeway.
//!
//! Wraps errors with the name of a `tracing` span, so a chain records which
//! instrumented operation it passed through.
//!
//! The span name is only known when a subscriber has enabled the span. A
//! disabled span, [`Span::none`] or the lack of a current span records the
//! name `unknown`.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! causeway = { version = "0.3", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::types::{Arg, Failure};

/// Extension trait for `Result` types to wrap errors with span context.
///
/// The wrap carries the message `in span '<name>'` and a `span = <name>`
/// entry. Without a subscriber that enabled the span, `<name>` is `unknown`.
pub trait ResultSpanExt<T, E> {
    /// Wraps the error with the current span's name.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use causeway::tracing_ext::ResultSpanExt;
    ///
    /// fn process() -> Result<Data, Failure> {
    ///     do_work().wrap_current_span()
    /// }
    /// ```
    fn wrap_current_span(self) -> Result<T, Failure>;

    /// Wraps the error with a specific span's name.
    fn wrap_span(self, span: &Span) -> Result<T, Failure>;
}

impl<T, E> ResultSpanExt<T, E> for Result<T, E>
where
    E: Into<Failure>,
{
    #[track_caller]
    fn wrap_current_span(self) -> Result<T, Failure> {
        self.wrap_span(&Span::current())
    }

    #[track_caller]
    fn wrap_span(self, span: &Span) -> Result<T, Failure> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(instrument_in(e.into(), span)),
        }
    }
}

/// Wraps `error` with the current span's name.
#[track_caller]
pub fn instrument_failure<E: Into<Failure>>(error: E) -> Failure {
    instrument_in(error.into(), &Span::current())
}

#[track_caller]
fn instrument_in(error: Failure, span: &Span) -> Failure {
    error.wrap(span_args(span))
}

/// `in span '<name>'` as message plus a `span = <name>` entry.
fn span_args(span: &Span) -> [Arg; 3] {
    let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    [Arg::from(alloc::format!("in span '{}'", name)), Arg::from("span"), Arg::from(name)]
}

//! The value every constructor returns.
//!
//! [`Failure`] is a closed sum over the three kinds of errors the crate deals
//! with: chain nodes built here, named errors with a registered code, and
//! foreign errors from anywhere else. Foreign errors are opaque terminal
//! causes; they are never looked into beyond `Display` and `source`.
//!
//! # Examples
//!
//! ```
//! use causeway::{wrap, wrapf, Failure};
//! use std::io;
//!
//! let eof = Failure::from(io::Error::from(io::ErrorKind::UnexpectedEof));
//! let err = wrap!(eof.clone(), "msg", "initial error");
//! let err = wrap!(err, "id", 5);
//! let err = wrapf!(err, "another {}", "error");
//!
//! assert_eq!(err.to_string(), "another error: unexpected end of file");
//! assert!(err.root_cause().same_as(&eof));
//! assert_eq!(err.depth(), 3);
//! ```

use crate::named::{ErrorCode, NamedError};
use crate::types::alloc_type::{Arc, Box, String};
use crate::types::context_value::{collect_context, Arg, ContextValue};
use crate::types::error_chain::{ErrorChain, RemoteNode};
use crate::types::origin::Origin;
use crate::types::trace::Trace;
use core::error::Error;
use core::fmt::{self, Display};
use smallvec::smallvec;

/// A failure: a chain node, a named error, or a foreign error.
#[must_use]
#[derive(Debug, Clone)]
pub enum Failure {
    Chain(Arc<ErrorChain>),
    Named(NamedError),
    Foreign(Arc<dyn Error + Send + Sync + 'static>),
}

impl Failure {
    /// Creates a depth-0 error with the given message.
    #[track_caller]
    #[inline]
    pub fn new<M: Into<String>>(message: M) -> Self {
        Self::Chain(Arc::new(ErrorChain::root(message.into())))
    }

    /// Creates a depth-0 error from pre-built format arguments.
    ///
    /// Usually reached through [`failure!`](crate::failure).
    #[track_caller]
    #[inline]
    pub fn new_fmt(args: fmt::Arguments<'_>) -> Self {
        Self::new(alloc::fmt::format(args))
    }

    /// Wraps an error that is not part of this crate.
    #[inline]
    pub fn foreign<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Foreign(Arc::new(error))
    }

    /// Wraps `self` with context built from a flat argument list.
    ///
    /// With an odd number of arguments the first one is the message. The rest
    /// is read as key/value pairs; pairs whose key is not text are skipped.
    /// No arguments at all yields the message `"error"`.
    ///
    /// ```
    /// use causeway::{Arg, Failure};
    ///
    /// let err = Failure::new("eof").wrap([Arg::from("read failed"), "offset".into(), 512u64.into()]);
    /// assert_eq!(err.to_string(), "read failed: eof");
    /// assert_eq!(err.lookup_value("offset"), Some("512"));
    /// ```
    #[track_caller]
    #[inline]
    pub fn wrap<I>(self, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.wrap_at(Origin::caller(), args)
    }

    /// Like [`wrap`](Self::wrap) with an explicitly supplied origin.
    pub fn wrap_at<I>(self, origin: Origin, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        Self::Chain(Arc::new(ErrorChain::wrapping(self, collect_context(args), origin)))
    }

    /// Wraps `self` with a formatted message.
    ///
    /// Usually reached through [`wrapf!`](crate::wrapf).
    #[track_caller]
    pub fn wrap_fmt(self, args: fmt::Arguments<'_>) -> Self {
        let values = smallvec![ContextValue::msg(alloc::fmt::format(args))];
        Self::Chain(Arc::new(ErrorChain::wrapping(self, values, Origin::caller())))
    }

    /// Rebuilds a node described by another host on top of `cause`.
    pub fn rebuild(node: RemoteNode, cause: Option<Failure>) -> Self {
        Self::Chain(Arc::new(ErrorChain::rebuild(node, cause)))
    }

    /// Number of wraps between the root cause and `self`; 0 for non-chain failures.
    #[inline]
    pub fn depth(&self) -> u64 {
        match self {
            Self::Chain(node) => node.depth(),
            _ => 0,
        }
    }

    /// The directly wrapped error, or `self` when there is none.
    #[inline]
    pub fn proper_cause(&self) -> &Failure {
        match self {
            Self::Chain(node) => ErrorChain::cause(node).unwrap_or(self),
            _ => self,
        }
    }

    /// The originating error of the chain, or `self` when none is recorded.
    #[inline]
    pub fn root_cause(&self) -> &Failure {
        match self {
            Self::Chain(node) => node.root_cause().unwrap_or(self),
            _ => self,
        }
    }

    /// Registered code of a named error, [`ErrorCode::ANONYMOUS`] otherwise.
    #[inline]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Named(named) => named.code(),
            _ => ErrorCode::ANONYMOUS,
        }
    }

    /// First context value stored under `key` on this node.
    pub fn lookup_value(&self, key: &str) -> Option<&str> {
        self.as_chain().and_then(|node| node.lookup_value(key))
    }

    /// Whether the chain below this node was pruned.
    #[inline]
    pub fn dropped_info(&self) -> bool {
        self.as_chain().is_some_and(ErrorChain::dropped_info)
    }

    /// The chain node, if this failure is one.
    ///
    /// ```
    /// use causeway::Failure;
    ///
    /// let err = Failure::new("eof").wrap(["reading", "offset", "12"]);
    /// let node = err.as_chain().unwrap();
    ///
    /// assert_eq!(node.message(), "reading");
    /// assert_eq!(node.depth(), 1);
    /// ```
    #[inline]
    pub fn as_chain(&self) -> Option<&ErrorChain> {
        match self {
            Self::Chain(node) => Some(&**node),
            _ => None,
        }
    }

    /// The named error, if this failure is one. Wrapping a named error yields
    /// a chain node, so check [`root_cause`](Self::root_cause) to find it
    /// under context.
    #[inline]
    pub fn as_named(&self) -> Option<&NamedError> {
        match self {
            Self::Named(named) => Some(named),
            _ => None,
        }
    }

    /// Downcasts a foreign error to its concrete type.
    pub fn downcast_ref<T>(&self) -> Option<&T>
    where
        T: Error + 'static,
    {
        match self {
            Self::Foreign(err) => err.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Whether both values are the very same error instance.
    pub fn same_as(&self, other: &Failure) -> bool {
        match (self, other) {
            (Self::Chain(a), Self::Chain(b)) => Arc::ptr_eq(a, b),
            (Self::Named(a), Self::Named(b)) => a.ptr_eq(b),
            (Self::Foreign(a), Self::Foreign(b)) => {
                core::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ())
            },
            _ => false,
        }
    }

    /// Walks the chain and collects its frames.
    #[inline]
    pub fn trace(&self) -> Trace {
        Trace::capture(self)
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chain(node) => Display::fmt(node, f),
            Self::Named(named) => Display::fmt(named, f),
            Self::Foreign(err) => Display::fmt(err, f),
        }
    }
}

impl Error for Failure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Chain(node) => ErrorChain::cause(node).map(|c| c as &(dyn Error + 'static)),
            Self::Named(_) => None,
            Self::Foreign(err) => err.source(),
        }
    }
}

impl From<ErrorChain> for Failure {
    #[inline]
    fn from(node: ErrorChain) -> Self {
        Self::Chain(Arc::new(node))
    }
}

impl From<Arc<ErrorChain>> for Failure {
    #[inline]
    fn from(node: Arc<ErrorChain>) -> Self {
        Self::Chain(node)
    }
}

impl From<NamedError> for Failure {
    #[inline]
    fn from(named: NamedError) -> Self {
        Self::Named(named)
    }
}

impl From<&NamedError> for Failure {
    #[inline]
    fn from(named: &NamedError) -> Self {
        Self::Named(named.clone())
    }
}

impl From<Box<dyn Error + Send + Sync + 'static>> for Failure {
    #[inline]
    fn from(err: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Self::Foreign(Arc::from(err))
    }
}

impl From<Arc<dyn Error + Send + Sync + 'static>> for Failure {
    #[inline]
    fn from(err: Arc<dyn Error + Send + Sync + 'static>) -> Self {
        Self::Foreign(err)
    }
}

impl From<fmt::Error> for Failure {
    #[inline]
    fn from(err: fmt::Error) -> Self {
        Self::foreign(err)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for Failure {
    #[inline]
    fn from(err: std::io::Error) -> Self {
        Self::foreign(err)
    }
}

//! Error chain types.
//!
//! This module holds the node every wrap produces ([`ErrorChain`]), the value
//! callers pass around ([`Failure`]), the context entries attached to nodes,
//! and the [`Trace`] used to render a whole chain.
//!
//! # Examples
//!
//! ```
//! use causeway::{wrap, Failure};
//!
//! let err = wrap!(Failure::new("connection reset"), "fetch failed", "attempt", 3);
//!
//! assert_eq!(err.to_string(), "fetch failed: connection reset");
//! assert_eq!(err.lookup_value("attempt"), Some("3"));
//! assert_eq!(err.trace().len(), 2);
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod context_value;
pub mod error_chain;
pub mod failure;
pub mod origin;
pub mod trace;

pub use context_value::*;
pub use error_chain::*;
pub use failure::*;
pub use origin::*;
pub use trace::*;

/// SmallVec-backed collection used for the context entries of a node.
///
/// Most wraps attach a message and at most one key/value pair, which fits
/// inline.
pub type ErrorVec<E> = SmallVec<[E; 2]>;

/// Result alias that fails with a [`Failure`].
pub type FailureResult<T> = Result<T, Failure>;

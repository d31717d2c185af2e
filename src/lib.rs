//! Causal error chains with bounded depth and stable error identities.
//!
//! Every layer of a program wraps the error it received with its own context
//! instead of replacing it. Each wrap is an immutable node that remembers
//! where it was created, what it wraps and what the original failure was.
//!
//! - [`Failure`] is the value passed around: a chain node, a [`NamedError`]
//!   or any foreign error.
//! - [`Failure::trace`] renders every node of a chain; the one-line `Display`
//!   shows only the outermost message and the root cause.
//! - Chains deeper than [`MAX_CHAIN_DEPTH`] collapse links as they grow, while
//!   [`Failure::root_cause`] keeps reporting the original failure.
//! - [`NamedErrorRegistry`] gives selected failures a numeric [`ErrorCode`]
//!   that can be turned back into the same error in another process.
//!
//! # Examples
//!
//! ## Wrapping and rendering
//!
//! ```
//! use causeway::{wrap, wrapf, Failure};
//!
//! fn read_block() -> Failure {
//!     Failure::new("unexpected eof")
//! }
//!
//! let err = wrap!(read_block(), "reading superblock", "device", "/dev/sda1");
//! let err = wrapf!(err, "mounting {}", "/data");
//!
//! assert_eq!(err.to_string(), "mounting /data: unexpected eof");
//!
//! let trace = err.trace();
//! assert_eq!(trace.len(), 3);
//! assert!(trace.to_string().contains("\"device\" = \"/dev/sda1\""));
//! ```
//!
//! ## Named errors
//!
//! ```
//! use causeway::{code_of, ErrorCode, NamedErrorRegistry};
//!
//! const PERMISSION_DENIED: ErrorCode = ErrorCode::new(0xc1f4_2d98_7662_66aa);
//!
//! let mut registry = NamedErrorRegistry::new();
//! let denied = registry.register("permission denied", PERMISSION_DENIED);
//!
//! let received = registry.from_code("permission denied", PERMISSION_DENIED);
//! assert_eq!(code_of(&received), PERMISSION_DENIED);
//! assert!(received.as_named().is_some_and(|n| n.ptr_eq(&denied)));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Free-function constructors and cause queries
pub mod chain;
/// Construction macros
pub mod macros;
/// Named errors and their registry
pub mod named;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits
pub mod traits;
/// Error chain, failure, context and trace types
pub mod types;

/// Async extensions (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use chain::{proper_cause, root_cause};
pub use named::{code_of, ErrorCode, NamedError, NamedErrorRegistry, RegistrationError};
#[cfg(feature = "std")]
pub use named::{from_code, lookup_named, register_named};
pub use traits::ResultExt;
pub use types::{
    Arg, ContextValue, ErrorChain, ErrorVec, Failure, FailureResult, Frame, FrameKind,
    OpaqueError, Origin, RemoteNode, SourceLocation, Trace, DEFAULT_MSG, MAX_CHAIN_DEPTH,
    MAX_FRAME_COUNT, MSG_KEY,
};

//! The immutable causal node created by every wrap.
//!
//! Each [`ErrorChain`] records the context of one wrap, where it happened, the
//! error it wraps and the root cause of the whole chain. The root cause is
//! memoized when the node is built, which keeps [`Failure::root_cause`]
//! constant time and correct after intermediate nodes have been pruned.
//!
//! # Depth cap
//!
//! A node deeper than [`MAX_CHAIN_DEPTH`] does not keep its direct cause.
//! It keeps the cause's own cause instead and sets
//! [`dropped_info`](ErrorChain::dropped_info). Re-wrapping a long-lived error
//! any number of times therefore never grows the reachable chain much beyond
//! the cap.

use crate::types::alloc_type::String;
use crate::types::context_value::{ContextValue, DEFAULT_MSG, MSG_KEY};
use crate::types::origin::{Origin, SourceLocation};
use crate::types::{ErrorVec, Failure};
use core::fmt::{self, Display};
use smallvec::smallvec;

/// Depth past which wrapping collapses one link of the chain.
pub const MAX_CHAIN_DEPTH: u64 = 200;

/// One immutable wrap of a failure.
#[derive(Debug, Clone)]
pub struct ErrorChain {
    values: ErrorVec<ContextValue>,
    origin: Origin,
    cause: Option<Failure>,
    root_cause: Option<Failure>,
    depth: u64,
    dropped_info: bool,
}

/// Description of a node that was created on another host.
///
/// Usually built from a [`Frame`](crate::Frame) by
/// [`Trace::rematerialize`](crate::Trace::rematerialize) and turned into a
/// node with [`Failure::rebuild`].
///
/// ```
/// use causeway::{ContextValue, Failure, RemoteNode, SourceLocation};
///
/// let node = RemoteNode {
///     location: SourceLocation { host: Some("db-1".into()), file: "store.rs".into(), line: 42 },
///     values: [ContextValue::msg("write failed")].into_iter().collect(),
///     depth: 0,
///     dropped_info: false,
/// };
///
/// let err = Failure::rebuild(node, None);
/// assert!(err.as_chain().is_some_and(|n| n.was_deserialized()));
/// assert_eq!(err.to_string(), "write failed");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteNode {
    /// Host, file and line resolved where the node was created.
    pub location: SourceLocation,
    /// Context entries in insertion order.
    pub values: ErrorVec<ContextValue>,
    /// Depth the node had on its original host.
    pub depth: u64,
    /// Whether the original node had pruned part of its chain.
    pub dropped_info: bool,
}

impl ErrorChain {
    /// Depth-0 node with no cause.
    #[track_caller]
    pub(crate) fn root(message: String) -> Self {
        Self {
            values: smallvec![ContextValue::msg(message)],
            origin: Origin::caller(),
            cause: None,
            root_cause: None,
            depth: 0,
            dropped_info: false,
        }
    }

    pub(crate) fn wrapping(cause: Failure, values: ErrorVec<ContextValue>, origin: Origin) -> Self {
        let depth = cause.depth() + 1;
        let root_cause = cause.root_cause().clone();

        let (cause, dropped_info) = if depth > MAX_CHAIN_DEPTH {
            if depth == MAX_CHAIN_DEPTH + 1 {
                note_pruned(depth);
            }
            (cause.proper_cause().clone(), true)
        } else {
            (cause, false)
        };

        Self {
            values,
            origin,
            cause: Some(cause),
            root_cause: Some(root_cause),
            depth,
            dropped_info,
        }
    }

    pub(crate) fn rebuild(node: RemoteNode, cause: Option<Failure>) -> Self {
        let root_cause = cause.as_ref().map(|c| c.root_cause().clone());
        Self {
            values: node.values,
            origin: Origin::Remote(node.location),
            cause,
            root_cause,
            depth: node.depth,
            dropped_info: node.dropped_info,
        }
    }

    /// Context entries in insertion order.
    #[inline]
    pub fn values(&self) -> &[ContextValue] {
        &self.values
    }

    /// First value stored under `key`.
    pub fn lookup_value(&self, key: &str) -> Option<&str> {
        self.values.iter().find(|kv| kv.key == key).map(|kv| kv.value.as_str())
    }

    /// The node's own message, `"error"` when it has none.
    #[inline]
    pub fn message(&self) -> &str {
        self.lookup_value(MSG_KEY).unwrap_or(DEFAULT_MSG)
    }

    /// Where the node was built: a local call site, or the text carried by a
    /// rebuilt node. Use [`Origin::resolve`] for printable host/file/line.
    #[inline]
    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// The directly wrapped error.
    #[inline]
    pub fn cause(&self) -> Option<&Failure> {
        self.cause.as_ref()
    }

    /// Root cause memoized at construction.
    #[inline]
    pub fn root_cause(&self) -> Option<&Failure> {
        self.root_cause.as_ref()
    }

    /// Number of wraps below this node; 0 for a root.
    ///
    /// Keeps counting past [`MAX_CHAIN_DEPTH`] even though the reachable chain
    /// does not grow.
    #[inline]
    pub fn depth(&self) -> u64 {
        self.depth
    }

    /// Whether part of the chain below this node was discarded.
    #[inline]
    pub fn dropped_info(&self) -> bool {
        self.dropped_info
    }

    /// Whether this node was rebuilt from a remote description.
    #[inline]
    pub fn was_deserialized(&self) -> bool {
        self.origin.is_remote()
    }
}

impl Display for ErrorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = self.message();
        match (&self.cause, &self.root_cause) {
            (Some(_), Some(root)) => write!(f, "{}: {}", msg, root),
            _ => f.write_str(msg),
        }
    }
}

impl core::error::Error for ErrorChain {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.cause.as_ref().map(|c| c as &(dyn core::error::Error + 'static))
    }
}

#[cfg(feature = "tracing")]
fn note_pruned(depth: u64) {
    tracing::trace!(depth, max_depth = MAX_CHAIN_DEPTH, "error chain hit depth cap, collapsing links");
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
fn note_pruned(_depth: u64) {}

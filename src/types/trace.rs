//! Frame-by-frame reconstruction of an error chain.
//!
//! [`Trace::capture`] walks from the outermost wrap towards the root and
//! records one [`Frame`] per node. The walk stops at the end of the chain, at
//! the first failure that is not a chain node (rendered as a single terminal
//! frame), or after [`MAX_FRAME_COUNT`] frames. A walk cut short by the frame
//! cap still records the chain's memoized root cause as a separate
//! [`root`](Trace::root) frame, so the originating failure is never lost.
//!
//! The one-line `Display` of a [`Failure`] only shows the outermost message and
//! the root cause. Everything in between is visible here.
//!
//! # Examples
//!
//! ```
//! use causeway::{wrap, Failure};
//!
//! let err = wrap!(Failure::new("eof"), "corrupt file", "path", "/path");
//! let trace = err.trace();
//!
//! assert_eq!(trace.len(), 2);
//! let text = trace.to_string();
//! assert!(text.contains("Where:\n  \"msg\" = \"corrupt file\"\n  \"path\" = \"/path\"\n"));
//! ```

use crate::named::{ErrorCode, NamedErrorRegistry};
use crate::types::alloc_type::{String, ToString, Vec};
use crate::types::context_value::{ContextValue, MSG_KEY};
use crate::types::error_chain::{ErrorChain, RemoteNode, MAX_CHAIN_DEPTH};
use crate::types::origin::SourceLocation;
use crate::types::{ErrorVec, Failure};
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// Upper bound on the frames collected by one trace.
pub const MAX_FRAME_COUNT: usize = 200;

const _: () = assert!(MAX_FRAME_COUNT as u64 >= MAX_CHAIN_DEPTH);

/// What produced a frame.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKind {
    /// A chain node.
    Chain,
    /// A named or foreign error terminating the walk.
    Foreign,
}

/// One rendered unit of a trace.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub kind: FrameKind,
    /// Context entries of a chain node, or the `msg` of a terminal error.
    pub values: ErrorVec<ContextValue>,
    /// `None` for terminal foreign frames.
    pub location: Option<SourceLocation>,
    pub dropped_info: bool,
    /// Depth of the node; 0 for terminal frames.
    pub depth: u64,
    /// Code of a terminal named error, anonymous otherwise.
    pub code: ErrorCode,
}

impl Frame {
    /// Frame of a single failure: a chain frame for a node, a terminal one otherwise.
    fn of(err: &Failure) -> Self {
        match err {
            Failure::Chain(node) => Self::from_node(node),
            _ => Self::from_terminal(err),
        }
    }

    fn from_node(node: &ErrorChain) -> Self {
        Self {
            kind: FrameKind::Chain,
            values: node.values().iter().cloned().collect(),
            location: Some(node.origin().resolve()),
            dropped_info: node.dropped_info(),
            depth: node.depth(),
            code: ErrorCode::ANONYMOUS,
        }
    }

    fn from_terminal(err: &Failure) -> Self {
        Self {
            kind: FrameKind::Foreign,
            values: smallvec![ContextValue::msg(err.to_string())],
            location: None,
            dropped_info: false,
            depth: 0,
            code: err.code(),
        }
    }

    #[inline]
    pub fn is_chain(&self) -> bool {
        self.kind == FrameKind::Chain
    }

    pub fn lookup_value(&self, key: &str) -> Option<&str> {
        self.values.iter().find(|kv| kv.key == key).map(|kv| kv.value.as_str())
    }
}

impl Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(loc) if self.is_chain() => writeln!(f, "{}", loc)?,
            _ => writeln!(f, "???:???:???")?,
        }

        if !self.values.is_empty() {
            writeln!(f, "Where:")?;
            for kv in &self.values {
                writeln!(f, "  {:?} = {:?}", kv.key, kv.value)?;
            }
        }

        if self.dropped_info {
            writeln!(f, "... dropped info (depth cap reached) ...")?;
        }
        Ok(())
    }
}

/// Ordered frames of a chain, most recent wrap first.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    frames: Vec<Frame>,
    truncated: bool,
    /// Root cause of a truncated walk.
    #[cfg_attr(feature = "serde", serde(default))]
    root: Option<Frame>,
}

impl Trace {
    /// Collects the frames of `err`.
    pub fn capture(err: &Failure) -> Self {
        let mut frames = Vec::new();
        let mut next = Some(err);

        while let Some(current) = next {
            if frames.len() == MAX_FRAME_COUNT {
                return Self {
                    frames,
                    truncated: true,
                    root: Some(Frame::of(err.root_cause())),
                };
            }

            let Failure::Chain(node) = current else {
                frames.push(Frame::from_terminal(current));
                break;
            };

            frames.push(Frame::from_node(node));
            next = ErrorChain::cause(node);
        }

        Self { frames, truncated: false, root: None }
    }

    /// Frames in walk order, outermost wrap first.
    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    /// Number of walked frames, not counting [`root`](Self::root).
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Whether the walk hit [`MAX_FRAME_COUNT`] before the end of the chain.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// The chain's root cause when the walk was truncated.
    ///
    /// Not counted in [`len`](Self::len); `None` for a complete walk, whose
    /// last frame already is the root.
    ///
    /// ```
    /// use causeway::Failure;
    ///
    /// let mut err = Failure::new("disk gone");
    /// for _ in 0..250 {
    ///     err = err.wrap(["retrying"]);
    /// }
    ///
    /// let trace = err.trace();
    /// assert!(trace.is_truncated());
    /// assert_eq!(trace.root().and_then(|f| f.lookup_value("msg")), Some("disk gone"));
    /// ```
    #[inline]
    pub fn root(&self) -> Option<&Frame> {
        self.root.as_ref()
    }

    /// Rebuilds a failure from the frames, innermost first.
    ///
    /// Chain frames become remote nodes. A terminal frame with a code known to
    /// `registry` becomes that named error; any other terminal frame becomes
    /// an [`OpaqueError`] with the recorded message. The innermost frame of a
    /// truncated trace is rebuilt on top of its [`root`](Self::root). Returns
    /// `None` for an empty trace.
    pub fn rematerialize(&self, registry: &NamedErrorRegistry) -> Option<Failure> {
        let mut cause: Option<Failure> = None;

        for frame in self.root.iter().chain(self.frames.iter().rev()) {
            let failure = match frame.kind {
                FrameKind::Foreign => {
                    let message = frame.lookup_value(MSG_KEY).unwrap_or_default();
                    if frame.code.is_anonymous() {
                        Failure::foreign(OpaqueError::new(message))
                    } else {
                        registry.from_code(message, frame.code)
                    }
                },
                FrameKind::Chain => {
                    let node = RemoteNode {
                        location: frame.location.clone().unwrap_or_default(),
                        values: frame.values.clone(),
                        depth: frame.depth,
                        dropped_info: frame.dropped_info,
                    };
                    Failure::rebuild(node, cause.take())
                },
            };
            cause = Some(failure);
        }

        cause
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Frame;
    type IntoIter = core::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

impl Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for frame in &self.frames {
            Display::fmt(frame, f)?;
        }
        if self.truncated {
            writeln!(f, "... trace truncated ...")?;
        }
        if let Some(root) = &self.root {
            Display::fmt(root, f)?;
        }
        Ok(())
    }
}

/// A terminal error known only by its message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpaqueError {
    message: String,
}

impl OpaqueError {
    pub fn new<M: Into<String>>(message: M) -> Self {
        Self { message: message.into() }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for OpaqueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl core::error::Error for OpaqueError {}

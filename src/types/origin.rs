//! Where an error chain node was constructed.

use crate::types::alloc_type::String;
use core::fmt::{self, Display};
use core::panic::Location;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Construction site of a node.
///
/// Local nodes keep the `Location` captured through `#[track_caller]` and
/// resolve it lazily. Rebuilt nodes carry text that was resolved on the host
/// that created them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    Local(&'static Location<'static>),
    Remote(SourceLocation),
}

impl Origin {
    /// Captures the caller's location.
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        Self::Local(Location::caller())
    }

    /// Describes a location on another host.
    pub fn remote<H, F>(host: Option<H>, file: F, line: u32) -> Self
    where
        H: Into<String>,
        F: Into<String>,
    {
        Self::Remote(SourceLocation { host: host.map(Into::into), file: file.into(), line })
    }

    #[inline]
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }

    /// Resolves the origin into printable host/file/line text.
    pub fn resolve(&self) -> SourceLocation {
        match self {
            Self::Local(loc) => SourceLocation {
                host: local_host(),
                file: loc.file().into(),
                line: loc.line(),
            },
            Self::Remote(loc) => loc.clone(),
        }
    }
}

/// Resolved `host:file:line` of a frame.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub host: Option<String>,
    pub file: String,
    pub line: u32,
}

impl Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let host = self.host.as_deref().unwrap_or("???");
        write!(f, "{}:{}:{}", host, self.file, self.line)
    }
}

/// Host name reported by the operating system, resolved once per process.
#[cfg(feature = "std")]
fn local_host() -> Option<String> {
    use std::sync::OnceLock;

    static HOST: OnceLock<Option<String>> = OnceLock::new();
    HOST.get_or_init(|| {
        let host = gethostname::gethostname();
        let host = host.to_string_lossy();
        let host = host.trim();
        (!host.is_empty()).then(|| String::from(host))
    })
    .clone()
}

#[cfg(not(feature = "std"))]
fn local_host() -> Option<String> {
    None
}

use core::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable, process-independent identity of a named error.
///
/// Codes are meant to be chosen at random once and never change meaning, so
/// they can travel between processes and hosts. `0` is reserved for
/// anonymous errors.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ErrorCode(u64);

impl ErrorCode {
    /// Code carried by every error that is not a named error.
    pub const ANONYMOUS: ErrorCode = ErrorCode(0);

    /// Wraps a raw code. `0` is [`ANONYMOUS`](Self::ANONYMOUS).
    #[inline]
    pub const fn new(code: u64) -> Self {
        Self(code)
    }

    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_anonymous(self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for ErrorCode {
    #[inline]
    fn from(code: u64) -> Self {
        Self(code)
    }
}

impl From<ErrorCode> for u64 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

impl fmt::LowerHex for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

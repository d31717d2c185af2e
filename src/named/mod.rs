//! Named errors: failures with a stable numeric identity.
//!
//! A [`NamedError`] pairs a fixed message with an [`ErrorCode`]. Only the code
//! needs to cross a process boundary; the receiving side recovers the same
//! identity from its own [`NamedErrorRegistry`], or falls back to an anonymous
//! error when it does not know the code.
//!
//! With the `std` feature a process-wide registry is available through
//! [`register_named`], [`from_code`] and [`lookup_named`]. It must be filled
//! during start-up, before errors are reconstructed from codes.

use crate::types::alloc_type::{Arc, Cow};
use crate::types::Failure;
use core::fmt;

mod code;
#[cfg(feature = "std")]
mod global;
mod registry;

pub use code::ErrorCode;
#[cfg(feature = "std")]
pub use global::{from_code, lookup_named, register_named, with_registry};
pub use registry::{NamedErrorRegistry, RegistrationError};

/// A globally identified error.
///
/// Cloning is cheap and keeps the identity: clones are
/// [`ptr_eq`](NamedError::ptr_eq) to the registered instance.
#[derive(Clone)]
pub struct NamedError(Arc<Inner>);

struct Inner {
    message: Cow<'static, str>,
    code: ErrorCode,
}

impl NamedError {
    pub(crate) fn new(message: Cow<'static, str>, code: ErrorCode) -> Self {
        Self(Arc::new(Inner { message, code }))
    }

    /// Message fixed at registration.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0.message
    }

    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.0.code
    }

    /// Whether both handles refer to the same registered error.
    #[inline]
    pub fn ptr_eq(&self, other: &NamedError) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for NamedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedError")
            .field("code", &self.0.code)
            .field("message", &self.0.message)
            .finish()
    }
}

impl fmt::Display for NamedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.message)
    }
}

impl core::error::Error for NamedError {}

/// Code of `err` if it is a named error, [`ErrorCode::ANONYMOUS`] otherwise.
#[inline]
pub fn code_of(err: &Failure) -> ErrorCode {
    err.code()
}

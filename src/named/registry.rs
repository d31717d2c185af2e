//! Table of named errors keyed by code.
//!
//! A registry is filled once, while the program starts, from a fixed list of
//! known failures, and only read afterwards. Registering the reserved code or
//! the same code twice is a build-time identity collision: [`register`]
//! panics on both, [`try_register`] reports them.
//!
//! [`register`]: NamedErrorRegistry::register
//! [`try_register`]: NamedErrorRegistry::try_register
//!
//! # Examples
//!
//! ```
//! use causeway::{ErrorCode, NamedErrorRegistry};
//!
//! let mut registry = NamedErrorRegistry::new();
//! let not_found = registry.register("not found", 0x5b1e_94d2_c0a7_7e31_u64);
//!
//! let remote = registry.from_code("unused fallback", ErrorCode::new(0x5b1e_94d2_c0a7_7e31));
//! assert!(remote.as_named().is_some_and(|n| n.ptr_eq(&not_found)));
//!
//! let unknown = registry.from_code("disk on fire", 42_u64);
//! assert_eq!(unknown.to_string(), "disk on fire");
//! ```

use crate::named::{ErrorCode, NamedError};
use crate::types::alloc_type::{BTreeMap, Cow, String};
use crate::types::Failure;
use core::fmt;

/// Why a registration was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// Code `0` is reserved for anonymous errors.
    ReservedCode,
    /// The code already names another error.
    DuplicateCode { code: ErrorCode, existing: String },
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReservedCode => f.write_str("error code 0 is reserved to mean anonymous error"),
            Self::DuplicateCode { code, existing } => {
                write!(f, "redefinition of error code {} (already registered as {:?})", code, existing)
            },
        }
    }
}

impl core::error::Error for RegistrationError {}

/// Maps error codes to their named errors.
#[derive(Debug, Clone, Default)]
pub struct NamedErrorRegistry {
    entries: BTreeMap<ErrorCode, NamedError>,
}

impl NamedErrorRegistry {
    #[inline]
    pub const fn new() -> Self {
        Self { entries: BTreeMap::new() }
    }

    /// Registers a named error, reporting reserved or duplicate codes.
    pub fn try_register<M, C>(&mut self, message: M, code: C) -> Result<NamedError, RegistrationError>
    where
        M: Into<Cow<'static, str>>,
        C: Into<ErrorCode>,
    {
        let code = code.into();
        if code.is_anonymous() {
            return Err(RegistrationError::ReservedCode);
        }
        if let Some(existing) = self.entries.get(&code) {
            return Err(RegistrationError::DuplicateCode {
                code,
                existing: existing.message().into(),
            });
        }

        let named = NamedError::new(message.into(), code);
        self.entries.insert(code, named.clone());
        note_registered(&named);
        Ok(named)
    }

    /// Registers a named error.
    ///
    /// # Panics
    ///
    /// Panics when `code` is `0` or already registered.
    #[track_caller]
    pub fn register<M, C>(&mut self, message: M, code: C) -> NamedError
    where
        M: Into<Cow<'static, str>>,
        C: Into<ErrorCode>,
    {
        match self.try_register(message, code) {
            Ok(named) => named,
            Err(err) => panic!("{}", err),
        }
    }

    #[inline]
    pub fn get<C: Into<ErrorCode>>(&self, code: C) -> Option<&NamedError> {
        self.entries.get(&code.into())
    }

    #[inline]
    pub fn contains<C: Into<ErrorCode>>(&self, code: C) -> bool {
        self.entries.contains_key(&code.into())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered errors ordered by code.
    pub fn iter(&self) -> impl Iterator<Item = &NamedError> + '_ {
        self.entries.values()
    }

    /// Recovers an error identity from a code.
    ///
    /// Returns the registered singleton, or a fresh anonymous error carrying
    /// `fallback` when this registry does not know the code.
    #[track_caller]
    pub fn from_code<M, C>(&self, fallback: M, code: C) -> Failure
    where
        M: Into<String>,
        C: Into<ErrorCode>,
    {
        match self.entries.get(&code.into()) {
            Some(named) => Failure::Named(named.clone()),
            None => Failure::new(fallback),
        }
    }
}

#[cfg(feature = "tracing")]
fn note_registered(named: &NamedError) {
    tracing::debug!(code = %named.code(), message = named.message(), "registered named error");
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
fn note_registered(_named: &NamedError) {}

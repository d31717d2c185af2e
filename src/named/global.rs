//! The process-wide registry.

use crate::named::{ErrorCode, NamedError, NamedErrorRegistry};
use crate::types::alloc_type::{Cow, String};
use crate::types::Failure;
use std::sync::{PoisonError, RwLock};

// Append-only, so a writer that panicked mid-registration cannot leave it
// inconsistent; poisoning is ignored.
static REGISTRY: RwLock<NamedErrorRegistry> = RwLock::new(NamedErrorRegistry::new());

/// Registers a named error in the process-wide registry.
///
/// Call this during start-up, typically from a fixed table of known failures.
///
/// # Panics
///
/// Panics when `code` is `0` or already registered.
///
/// # Examples
///
/// ```
/// use causeway::named::{code_of, register_named};
/// use causeway::Failure;
///
/// let quota = register_named("quota exceeded", 0x9e37_79b9_7f4a_7c15_u64);
/// assert_eq!(code_of(&Failure::from(&quota)).get(), 0x9e37_79b9_7f4a_7c15);
/// ```
#[track_caller]
pub fn register_named<M, C>(message: M, code: C) -> NamedError
where
    M: Into<Cow<'static, str>>,
    C: Into<ErrorCode>,
{
    let result = REGISTRY
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .try_register(message, code);

    match result {
        Ok(named) => named,
        Err(err) => panic!("{}", err),
    }
}

/// Recovers an error identity from a code using the process-wide registry.
///
/// See [`NamedErrorRegistry::from_code`].
#[track_caller]
pub fn from_code<M, C>(fallback: M, code: C) -> Failure
where
    M: Into<String>,
    C: Into<ErrorCode>,
{
    let registry = REGISTRY.read().unwrap_or_else(PoisonError::into_inner);
    registry.from_code(fallback, code)
}

/// Looks up a registered named error.
pub fn lookup_named<C: Into<ErrorCode>>(code: C) -> Option<NamedError> {
    with_registry(|registry| registry.get(code).cloned())
}

/// Runs `f` with shared access to the process-wide registry.
pub fn with_registry<R>(f: impl FnOnce(&NamedErrorRegistry) -> R) -> R {
    let registry = REGISTRY.read().unwrap_or_else(PoisonError::into_inner);
    f(&registry)
}

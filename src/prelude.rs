//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use causeway::prelude::*;
//!
//! fn open(path: &str) -> FailureResult<std::fs::File> {
//!     std::fs::File::open(path).wrap_err(["opening file", "path", path])
//! }
//!
//! let err = open("/no/such/file").unwrap_err();
//! assert_eq!(err.trace().len(), 2);
//! ```

// Macros
pub use crate::{failure, wrap, wrapf};

// Core types
pub use crate::named::{ErrorCode, NamedError};
pub use crate::types::{Arg, Failure, FailureResult, Trace};

// Traits
pub use crate::traits::ResultExt;

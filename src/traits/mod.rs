//! Extension traits.
//!
//! - [`ResultExt`]: wrap the error of a `Result` with context while letting
//!   `Ok` through.
//!
//! # Examples
//!
//! ```
//! use causeway::traits::ResultExt;
//! use causeway::Failure;
//!
//! let ok: Result<u8, Failure> = Ok(7);
//! assert_eq!(ok.wrap_err(["never used"]).unwrap(), 7);
//! ```

pub mod result_ext;

pub use result_ext::ResultExt;

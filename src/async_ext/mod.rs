//! Async extensions for causeway.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! causeway = { version = "0.3", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use causeway::async_ext::FutureWrapExt;
//!
//! async fn fetch_user(id: u64) -> Result<User, Failure> {
//!     fetch_from_db(id)
//!         .wrap_err_with(|| [Arg::from("fetching user"), "id".into(), id.into()])
//!         .await
//! }
//! ```

mod future_ext;
mod wrap_future;

pub use future_ext::FutureWrapExt;
pub use wrap_future::WrapFuture;

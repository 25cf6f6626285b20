//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use easy_result::prelude::*;
//!
//! fn register(email: &str) -> Result<String> {
//!     Result::success(email.to_owned())
//!         .ensure(|e| e.contains('@'), Error::new("Email.Invalid", "The email is invalid."))
//!         .map(|e| e.to_lowercase())
//! }
//!
//! assert_eq!(register("Ann@Example.com").value(), "ann@example.com");
//! assert_eq!(register("nope").error().code(), "Email.Invalid");
//! ```
//!
//! Importing the prelude shadows `core::result::Result` with
//! [`Result`](crate::Result); refer to the standard type by its full path.

pub use crate::convert::collect_results;
pub use crate::types::{Error, Result};

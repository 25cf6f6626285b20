//! Core value types.
//!
//! - [`Error`]: immutable `(code, message)` pair.
//! - [`Result`]: success payload or failure [`Error`].
//!
//! # Examples
//!
//! ```
//! use easy_result::types::{Error, Result};
//!
//! let r: Result<i32> = Result::failure(Error::new("E1", "bad"));
//! let (is_success, error) = r.deconstruct();
//! assert!(!is_success);
//! assert_eq!(error.code(), "E1");
//! ```

pub mod alloc_type;
pub mod error;
pub mod result;

pub use error::Error;
pub use result::Result;

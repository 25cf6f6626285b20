//! Value-based success/failure results with a typed error descriptor.
//!
//! `easy-result` replaces exception-style control flow with an explicit
//! [`Result`] value that is either a success (optionally holding a payload)
//! or a failure holding an [`Error`]. A handful of operators compose results
//! without unpacking them by hand.
//!
//! Two kinds of problems are kept apart:
//!
//! - **Domain failures** are [`Error`] values inside a failed [`Result`].
//! - **Programming errors** such as reading the value of a failure, or
//!   building a failure from [`Error::NONE`], panic.
//!
//! # Examples
//!
//! ## Returning and Inspecting Results
//!
//! ```
//! use easy_result::{Error, Result};
//!
//! const NOT_FOUND: Error = Error::from_static("Book.NotFound", "No book has that ISBN.");
//!
//! fn title(isbn: &str) -> Result<&'static str> {
//!     match isbn {
//!         "978-0" => Result::success("The Rust Programming Language"),
//!         _ => Result::failure(NOT_FOUND),
//!     }
//! }
//!
//! let found = title("978-0");
//! assert!(found.is_success());
//! assert_eq!(*found.value(), "The Rust Programming Language");
//!
//! let missing = title("000");
//! assert!(missing.is_failure());
//! assert_eq!(missing.error(), &NOT_FOUND);
//! ```
//!
//! ## Composing Operators
//!
//! ```
//! use easy_result::{Error, Result};
//!
//! let body = Result::success(21)
//!     .map(|n| n * 2)
//!     .ensure(|n| *n < 100, Error::new("Answer.TooBig", "Out of range."))
//!     .tap(|n| assert_eq!(*n, 42))
//!     .match_with(|n| format!("ok:{n}"), |e| format!("err:{}", e.code()));
//!
//! assert_eq!(body, "ok:42");
//! ```
//!
//! ## Coercions
//!
//! ```
//! use easy_result::{Error, Result};
//!
//! let present: Result<i32> = Some(0).into();
//! assert!(present.is_success());
//!
//! let absent: Result<i32> = None.into();
//! assert_eq!(absent.error(), &Error::NULL_VALUE);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between bare values, errors, standard results and [`Result`]
pub mod convert;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Error and Result value types
pub mod types;

mod fault;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use convert::{collect_results, from_std_result, from_std_result_with, into_std_result};
pub use types::{Error, Result};

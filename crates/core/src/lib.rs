//! Optional and Outcome containers for Railway-Oriented Programming.
//!
//! - [`Optional`]: a value that may be absent
//! - [`Outcome`]: a value or an [`Error`] describing why there is none
//! - [`ErrorInfo`]: the open capability custom error kinds implement
//!
//! Business failures are data, threaded through combinators. Reading the
//! wrong variant yields [`InvalidState`]. Panics from user functions are only
//! turned into failures by the `try_catch` family.
//!
//! # Example
//!
//! ```
//! use monads_core::prelude::*;
//!
//! let total = try_catch_fallible(|| "21".parse::<i32>())
//!     .validate(|n| *n > 0, Error::new("must be positive"))
//!     .map(|n| n * 2)
//!     .on_failure(|e| eprintln!("{e}"))
//!     .unwrap_or(0);
//! assert_eq!(total, 42);
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
#[cfg(feature = "async")]
pub mod future;
pub mod option;
pub mod prelude;
pub mod result;

pub use error::{Cause, Error, ErrorInfo, InvalidState, PanicError};
#[cfg(feature = "async")]
pub use future::try_catch_async;
pub use option::Optional;
pub use result::{Completion, Outcome, try_catch, try_catch_fallible, try_run};

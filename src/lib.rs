#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # monads
//!
//! Optional and Outcome containers with a fluent combinator API.
//!
//! This library re-exports the `monads-core` crate for convenience.

pub use monads_core::*;

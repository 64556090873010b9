//! Prelude module - common imports for pipelines
//!
//! ```rust
//! use monads_core::prelude::*;
//! ```

// Re-export functional utilities
pub use tap::{Pipe, Tap};

pub use crate::error::{Error, ErrorInfo, InvalidState};
pub use crate::option::Optional;
pub use crate::result::{Completion, Outcome, try_catch, try_catch_fallible, try_run};

#[cfg(feature = "async")]
pub use crate::future::try_catch_async;

//! Error values carried by failed [`Outcome`](crate::Outcome)s.
//!
//! Two tiers live here:
//!
//! - [`Error`] and the [`ErrorInfo`] trait describe domain failures. They are
//!   plain data and travel through combinator chains.
//! - [`InvalidState`] signals a programmer error: reading a value or an error
//!   from the wrong variant. It is returned by accessors and never converted
//!   into a failure.

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

/// Shared handle to the underlying fault that produced an [`Error`].
pub type Cause = Arc<dyn StdError + Send + Sync + 'static>;

/// Capability shared by every error kind that can describe a failure.
///
/// [`Error`] is the structural minimum. Domain code defines its own kinds
/// with extra typed fields and implements this trait for them, then uses them
/// as the `E` parameter of [`Outcome`](crate::Outcome).
///
/// # Examples
///
/// ```
/// use monads_core::{ErrorInfo, Outcome};
///
/// #[derive(Debug)]
/// struct QuotaExceeded {
///     limit: u32,
///     message: String,
/// }
///
/// impl std::fmt::Display for QuotaExceeded {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "{} (limit {})", self.message, self.limit)
///     }
/// }
///
/// impl ErrorInfo for QuotaExceeded {
///     fn message(&self) -> &str {
///         &self.message
///     }
/// }
///
/// let outcome: Outcome<u32, QuotaExceeded> = Outcome::failure(QuotaExceeded {
///     limit: 10,
///     message: "too many requests".into(),
/// });
/// assert!(outcome.is_failure_and(|e| e.limit == 10));
/// ```
pub trait ErrorInfo: fmt::Debug + fmt::Display {
    /// Human-readable description of the failure.
    fn message(&self) -> &str;

    /// Optional longer explanation.
    fn details(&self) -> Option<&str> {
        None
    }

    /// The underlying fault, if one was captured.
    fn cause(&self) -> Option<&Cause> {
        None
    }
}

/// The base error value: a message, optional details, and an optional cause.
///
/// Errors are immutable; the `with_*` builders consume `self` and return a new
/// value. Equality is deliberately not implemented.
///
/// When serialized, `details` and `cause` are omitted if absent. The cause is
/// written as its display text and is never read back.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Error {
    message: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    details: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            skip_deserializing,
            skip_serializing_if = "Option::is_none",
            serialize_with = "serialize_cause"
        )
    )]
    cause: Option<Cause>,
}

impl Error {
    /// Create an error with only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
            cause: None,
        }
    }

    /// Attach a longer explanation.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Attach the underlying fault.
    #[must_use]
    pub fn with_cause(self, cause: impl StdError + Send + Sync + 'static) -> Self {
        self.with_shared_cause(Arc::new(cause))
    }

    /// Attach an already shared fault.
    #[must_use]
    pub fn with_shared_cause(mut self, cause: Cause) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Wrap a foreign error: its display text becomes the message and the
    /// error itself becomes the cause.
    pub fn caused_by(cause: impl StdError + Send + Sync + 'static) -> Self {
        Self::new(cause.to_string()).with_cause(cause)
    }

    /// Copy the message, details, and cause out of any error kind.
    pub fn from_info<K: ErrorInfo + ?Sized>(info: &K) -> Self {
        Self {
            message: info.message().to_owned(),
            details: info.details().map(str::to_owned),
            cause: info.cause().cloned(),
        }
    }

    /// Build the failure recorded for a captured panic.
    pub(crate) fn from_panic(panic: PanicError) -> Self {
        Self::new(panic.message.clone()).with_cause(panic)
    }

    /// Human-readable description of the failure.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Longer explanation, if one was attached.
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// The underlying fault, if one was attached.
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }
}

impl ErrorInfo for Error {
    fn message(&self) -> &str {
        &self.message
    }

    fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(details) = &self.details {
            write!(f, " ({details})")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn StdError + 'static))
    }
}

#[cfg(feature = "serde")]
fn serialize_cause<S>(cause: &Option<Cause>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match cause {
        Some(cause) => serializer.collect_str(cause),
        None => serializer.serialize_none(),
    }
}

/// Programmer-error signal: a value or error was read from the wrong variant.
///
/// Callers are expected to check the variant first or use a combinator that
/// cannot fail. This is never produced for expected control flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid state: {message}")]
pub struct InvalidState {
    message: String,
}

impl InvalidState {
    /// Create the fault with a description of the misuse.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Description of the misuse.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl ErrorInfo for InvalidState {
    fn message(&self) -> &str {
        &self.message
    }
}

/// The cause recorded when a panic is captured by the `try_catch` family.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PanicError {
    message: String,
}

impl PanicError {
    /// Extract the panic message from an unwinding payload.
    pub(crate) fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&'static str>()
            .map(|s| (*s).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "panicked with a non-string payload".to_owned());
        Self { message }
    }

    /// The panic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

//! The optional-value container and its combinators.
//!
//! Every combinator consumes the `Optional` and returns a new one; nothing is
//! mutated in place. Side effects are confined to [`Optional::on_some`] and
//! [`Optional::on_none`].

use crate::error::{Error, InvalidState};
use crate::result::Outcome;

/// Presence or absence of a value of type `T`.
///
/// # Examples
///
/// ```
/// use monads_core::Optional;
///
/// let port = Optional::some("8080")
///     .and_then(|raw| Optional::from(raw.parse::<u16>().ok()))
///     .filter(|port| *port > 1024)
///     .unwrap_or(80);
/// assert_eq!(port, 8080);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    /// A value is present.
    Some(T),
    /// No value.
    None,
}

impl<T> Optional<T> {
    /// Wrap a present value.
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// The absent value.
    pub const fn none() -> Self {
        Self::None
    }

    /// True for `Some`.
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// True for `None`; always the opposite of [`is_some`](Self::is_some).
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Borrow the wrapped value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidState`] when called on `None`.
    pub fn value(&self) -> Result<&T, InvalidState> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(value_on_none()),
        }
    }

    /// Take the wrapped value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidState`] when called on `None`.
    pub fn into_value(self) -> Result<T, InvalidState> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(value_on_none()),
        }
    }

    /// Take the wrapped value, labelling the fault with `message` if absent.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState(message)` when called on `None`.
    pub fn expect(self, message: impl Into<String>) -> Result<T, InvalidState> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(InvalidState::new(message)),
        }
    }

    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }

    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Optional::Some(f(value)),
            Self::None => Optional::None,
        }
    }

    /// Keep the value only if `predicate` holds.
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => {
                if predicate(&value) {
                    Self::Some(value)
                } else {
                    Self::None
                }
            }
            Self::None => Self::None,
        }
    }

    /// Return `other` when `self` is `Some`, otherwise `None`.
    ///
    /// The value held by `self` is discarded; `other` is returned verbatim.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match self {
            Self::Some(_) => other,
            Self::None => Self::None,
        }
    }

    /// Chain a computation that may itself produce nothing. `f` is not called
    /// on `None`.
    pub fn and_then<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Some(value) => f(value),
            Self::None => Optional::None,
        }
    }

    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => other,
        }
    }

    /// Return `self` if `Some`, otherwise wrap `value`.
    #[must_use]
    pub fn or_some(self, value: T) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => Self::Some(value),
        }
    }

    /// Return `self` if `Some`, otherwise wrap the value produced by `f`.
    #[must_use]
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(_) => self,
            Self::None => Self::Some(f()),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => f(),
        }
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        matches!(self, Self::Some(inner) if inner == value)
    }

    pub fn is_some_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => false,
        }
    }

    pub fn is_none_or<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => true,
        }
    }

    /// Run `action` on the value if present, then hand back `self`.
    #[must_use]
    pub fn on_some<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            action(value);
        }
        self
    }

    /// Run `action` if no value is present, then hand back `self`.
    #[must_use]
    pub fn on_none<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_none() {
            action();
        }
        self
    }

    /// `Some(v)` becomes `Success(v)`; `None` becomes `Failure(error)`.
    pub fn to_outcome<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Some(value) => Outcome::Success(value),
            Self::None => Outcome::Failure(error),
        }
    }

    /// Like [`to_outcome`](Self::to_outcome), building the error only when
    /// it is needed.
    pub fn to_outcome_with<E, F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Outcome::Success(value),
            Self::None => Outcome::Failure(f()),
        }
    }

    /// Convert into an `Outcome` carrying the base [`Error`] with `message`.
    pub fn ok_or_message(self, message: impl Into<String>) -> Outcome<T> {
        self.to_outcome_with(|| Error::new(message))
    }
}

fn value_on_none() -> InvalidState {
    InvalidState::new("value accessed on None")
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Optional::Some(value) => Some(value),
            Optional::None => None,
        }
    }
}

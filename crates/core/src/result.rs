//! The success/failure container and Railway-Oriented combinators.
//!
//! An [`Outcome`] is fixed to one of two states when it is built. Combinators
//! never mutate it; each returns a new `Outcome` (or a plain value), so a
//! pipeline reads top to bottom and short-circuits on the first failure.
//!
//! Panics raised by functions passed to [`Outcome::map`], [`Outcome::and_then`],
//! [`Outcome::validate`] and friends propagate to the caller untouched. Only
//! the `try_catch` family converts them into failures.

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::error::{Error, InvalidState, PanicError};
use crate::option::Optional;

/// Success with a value of type `T`, or failure with an error of type `E`.
///
/// `E` defaults to the base [`Error`]; any other error kind (typically one
/// implementing [`ErrorInfo`](crate::ErrorInfo)) can be used instead.
///
/// # Examples
///
/// ```
/// use monads_core::{Error, Outcome};
///
/// fn parse_age(raw: &str) -> Outcome<u8> {
///     Outcome::from(raw.parse::<u8>().map_err(Error::caused_by))
///         .validate(|age| *age >= 18, Error::new("must be an adult"))
/// }
///
/// assert_eq!(parse_age("42").unwrap_or(0), 42);
/// assert!(parse_age("12").is_failure_and(|e| e.message() == "must be an adult"));
/// assert!(parse_age("abc").is_failure());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E = Error> {
    /// The operation produced a value.
    Success(T),
    /// The operation failed.
    Failure(E),
}

/// An outcome with no payload: the operation either completed or failed.
pub type Completion<E = Error> = Outcome<(), E>;

impl<E> Outcome<(), E> {
    /// A payload-free success.
    pub const fn completed() -> Self {
        Self::Success(())
    }
}

impl<T, E> Outcome<T, E> {
    /// Wrap a value as a success.
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wrap an error as a failure.
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// True for `Success`.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// True for `Failure`; always the opposite of [`is_success`](Self::is_success).
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrow the success value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidState`] when called on a failure.
    pub fn value(&self) -> Result<&T, InvalidState> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(value_on_failure()),
        }
    }

    /// Take the success value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidState`] when called on a failure.
    pub fn into_value(self) -> Result<T, InvalidState> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(value_on_failure()),
        }
    }

    /// Borrow the error.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidState`] when called on a success.
    pub fn error(&self) -> Result<&E, InvalidState> {
        match self {
            Self::Success(_) => Err(error_on_success()),
            Self::Failure(error) => Ok(error),
        }
    }

    /// Take the error.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidState`] when called on a success.
    pub fn into_error(self) -> Result<E, InvalidState> {
        match self {
            Self::Success(_) => Err(error_on_success()),
            Self::Failure(error) => Ok(error),
        }
    }

    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    pub fn map_error<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Dispatch to exactly one branch and return what it produces.
    ///
    /// With `R = ()` this is the side-effecting form.
    pub fn match_with<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// `self` if it failed, otherwise `other`.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match self {
            Self::Success(_) => other,
            Self::Failure(_) => self,
        }
    }

    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Success(_) => self,
            Self::Failure(_) => other,
        }
    }

    /// Replace a failure with whatever `f` builds from its error.
    #[must_use]
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce(E) -> Self,
    {
        match self {
            Self::Success(_) => self,
            Self::Failure(error) => f(error),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => f(),
        }
    }

    /// Re-check a success against `predicate`, failing with `error` when it
    /// does not hold. Failures pass through and the predicate is not run.
    #[must_use]
    pub fn validate<P>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.validate_with(predicate, |_| error)
    }

    /// Like [`validate`](Self::validate), building the error from the
    /// rejected value.
    #[must_use]
    pub fn validate_with<P, F>(self, predicate: P, error_factory: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> E,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(error_factory(&value))
                }
            }
            Self::Failure(_) => self,
        }
    }

    /// Chaining form of [`try_catch`]: apply `f` to the success value and
    /// turn a panic inside it into a failure.
    pub fn try_catch<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
        E: From<Error>,
    {
        match self {
            Self::Success(value) => try_catch(|| f(value)).map_error(E::from),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    #[must_use]
    pub fn on_success<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    #[must_use]
    pub fn on_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            action(error);
        }
        self
    }

    /// Keep the value, discarding any error.
    pub fn ok(self) -> Optional<T> {
        match self {
            Self::Success(value) => Optional::Some(value),
            Self::Failure(_) => Optional::None,
        }
    }

    pub fn err(self) -> Optional<E> {
        match self {
            Self::Success(_) => Optional::None,
            Self::Failure(error) => Optional::Some(error),
        }
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        matches!(self, Self::Success(inner) if inner == value)
    }

    pub fn is_success_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => predicate(value),
            Self::Failure(_) => false,
        }
    }

    pub fn is_failure_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&E) -> bool,
    {
        match self {
            Self::Success(_) => false,
            Self::Failure(error) => predicate(error),
        }
    }

    /// True for any failure, or for a success whose value satisfies
    /// `predicate`.
    pub fn is_failure_or<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => predicate(value),
            Self::Failure(_) => true,
        }
    }
}

impl<T, E: fmt::Display> Outcome<T, E> {
    /// Convert to an [`Optional`], logging the error if present.
    pub fn ok_logged(self) -> Optional<T> {
        match self {
            Self::Success(value) => Optional::Some(value),
            Self::Failure(error) => {
                tracing::error!("Operation failed: {}", error);
                Optional::None
            }
        }
    }

    /// Get the value or a default, logging the error if present.
    pub fn unwrap_or_logged(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => {
                tracing::error!("Operation failed, using default: {}", error);
                default
            }
        }
    }
}

fn value_on_failure() -> InvalidState {
    InvalidState::new("value accessed on Failure")
}

fn error_on_success() -> InvalidState {
    InvalidState::new("error accessed on Success")
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

/// Run `f`, converting a panic into a failure.
///
/// The failure's message is the panic message and its cause is a
/// [`PanicError`]. Nothing unwinds out of this function. The process panic
/// hook still runs, so the panic is reported on stderr as usual.
///
/// ```
/// use monads_core::try_catch;
///
/// let divisor = std::hint::black_box(0);
/// let outcome = try_catch(|| 10 / divisor);
/// assert!(outcome.is_failure_and(|e| e.message() == "attempt to divide by zero"));
/// assert_eq!(try_catch(|| 42).unwrap_or(0), 42);
/// ```
pub fn try_catch<T, F>(f: F) -> Outcome<T>
where
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Outcome::Success(value),
        Err(payload) => Outcome::Failure(captured(payload.as_ref())),
    }
}

/// Run a side-effecting operation with no payload, converting a panic into a
/// failure.
pub fn try_run<F>(f: F) -> Completion
where
    F: FnOnce(),
{
    try_catch(f)
}

/// Run a fallible `f`. An `Err` becomes a failure whose message is the
/// error's text and whose cause is the error itself; a panic is captured as
/// in [`try_catch`].
pub fn try_catch_fallible<T, X, F>(f: F) -> Outcome<T>
where
    F: FnOnce() -> Result<T, X>,
    X: StdError + Send + Sync + 'static,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => Outcome::Success(value),
        Ok(Err(error)) => Outcome::Failure(Error::caused_by(error)),
        Err(payload) => Outcome::Failure(captured(payload.as_ref())),
    }
}

pub(crate) fn captured(payload: &(dyn Any + Send)) -> Error {
    let panic = PanicError::from_payload(payload);
    tracing::debug!(message = panic.message(), "captured panic as failure");
    Error::from_panic(panic)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]
    #![allow(clippy::arithmetic_side_effects)]

    use std::cell::Cell;

    use super::*;

    fn failed(message: &str) -> Outcome<i32> {
        Outcome::failure(Error::new(message))
    }

    fn message_of<T>(outcome: &Outcome<T>) -> &str {
        outcome.error().map(Error::message).unwrap()
    }

    #[test]
    fn test_factories_and_state() {
        let ok: Outcome<i32> = Outcome::success(1);
        assert!(ok.is_success() && !ok.is_failure());

        let err = failed("boom");
        assert!(err.is_failure() && !err.is_success());
    }

    #[test]
    fn test_accessors_on_wrong_variant() {
        let ok: Outcome<i32> = Outcome::success(1);
        assert_eq!(ok.value(), Ok(&1));
        assert_eq!(
            ok.error().unwrap_err(),
            InvalidState::new("error accessed on Success")
        );

        let err = failed("boom");
        assert_eq!(
            err.value().unwrap_err(),
            InvalidState::new("value accessed on Failure")
        );
        assert_eq!(err.into_error().map(|e| e.to_string()), Ok("boom".into()));
    }

    #[test]
    fn test_map_skips_failure() {
        let calls = Cell::new(0);
        let mapped = failed("boom").map(|v| {
            calls.set(calls.get() + 1);
            v.to_string()
        });
        assert_eq!(message_of(&mapped), "boom");
        assert_eq!(calls.get(), 0);

        let ok: Outcome<i32, &str> = Outcome::success(2);
        assert_eq!(ok.map(|v| v * 10), Outcome::success(20));
    }

    #[test]
    fn test_map_error() {
        let err: Outcome<i32, &str> = Outcome::failure("boom");
        assert_eq!(err.map_error(str::len), Outcome::failure(4));

        let ok: Outcome<i32, &str> = Outcome::success(1);
        assert_eq!(ok.map_error(str::len), Outcome::success(1));
    }

    #[test]
    fn test_match_with_runs_one_branch() {
        let successes = Cell::new(0);
        let failures = Cell::new(0);

        Outcome::<i32>::success(1).match_with(
            |_| successes.set(successes.get() + 1),
            |_| failures.set(failures.get() + 1),
        );
        failed("boom").match_with(
            |_| successes.set(successes.get() + 1),
            |_| failures.set(failures.get() + 1),
        );

        assert_eq!((successes.get(), failures.get()), (1, 1));

        let text = failed("boom").match_with(|v| v.to_string(), |e| e.to_string());
        assert_eq!(text, "boom");
    }

    #[test]
    fn test_and() {
        let a: Outcome<i32, &str> = Outcome::success(1);
        assert_eq!(a.and(Outcome::success(2)), Outcome::success(2));

        let b: Outcome<i32, &str> = Outcome::failure("first");
        assert_eq!(b.and(Outcome::failure("second")), Outcome::failure("first"));
    }

    #[test]
    fn test_and_then_short_circuits() {
        let calls = Cell::new(0);
        let chained = failed("boom").and_then(|v| {
            calls.set(calls.get() + 1);
            Outcome::success(v + 1)
        });
        assert_eq!(message_of(&chained), "boom");
        assert_eq!(calls.get(), 0);

        let ok: Outcome<i32, &str> = Outcome::success(1);
        assert_eq!(ok.and_then(|v| Outcome::success(v + 1)), Outcome::success(2));
    }

    #[test]
    fn test_or_and_or_else() {
        let ok: Outcome<i32, &str> = Outcome::success(1);
        assert_eq!(ok.or(Outcome::success(2)), Outcome::success(1));
        assert_eq!(ok.or_else(|_| Outcome::success(2)), Outcome::success(1));

        let err: Outcome<i32, &str> = Outcome::failure("boom");
        assert_eq!(err.or(Outcome::success(2)), Outcome::success(2));
        assert_eq!(
            err.or_else(|e| Outcome::success(e.len() as i32)),
            Outcome::success(4)
        );
    }

    #[test]
    fn test_unwrap_fallbacks() {
        assert_eq!(Outcome::<i32>::success(1).unwrap_or(9), 1);
        assert_eq!(failed("boom").unwrap_or(9), 9);
        assert_eq!(failed("boom").unwrap_or_else(|| 7), 7);
    }

    #[test]
    fn test_validate() {
        let ok: Outcome<i32, &str> = Outcome::success(42);
        assert_eq!(ok.validate(|x| *x > 40, "too small"), Outcome::success(42));

        let small: Outcome<i32, &str> = Outcome::success(36);
        assert_eq!(
            small.validate(|x| *x > 40, "too small"),
            Outcome::failure("too small")
        );
    }

    #[test]
    fn test_validate_skips_predicate_on_failure() {
        let calls = Cell::new(0);
        let err: Outcome<i32, &str> = Outcome::failure("original");
        let checked = err.validate(
            |_| {
                calls.set(calls.get() + 1);
                false
            },
            "replacement",
        );
        assert_eq!(checked, Outcome::failure("original"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_validate_with_builds_error_from_value() {
        let small: Outcome<i32> = Outcome::success(36);
        let checked =
            small.validate_with(|x| *x > 40, |x| Error::new(format!("{x} is too small")));
        assert_eq!(message_of(&checked), "36 is too small");
    }

    #[test]
    fn test_try_catch_success() {
        assert_eq!(try_catch(|| 42).into_value(), Ok(42));
    }

    #[test]
    fn test_try_catch_captures_panic() {
        let divisor = std::hint::black_box(0);
        let outcome = try_catch(|| 10 / divisor);
        assert_eq!(message_of(&outcome), "attempt to divide by zero");
        assert!(outcome.error().unwrap().cause().is_some());
    }

    #[test]
    fn test_try_catch_captures_formatted_panic() {
        let outcome: Outcome<i32> = try_catch(|| panic!("bad input: {}", 3));
        assert_eq!(message_of(&outcome), "bad input: 3");
    }

    #[test]
    fn test_try_run_completion() {
        let ran = Cell::new(false);
        let done = try_run(|| ran.set(true));
        assert!(done.is_success());
        assert!(ran.get());

        let aborted = try_run(|| panic!("aborted"));
        assert!(aborted.is_failure_and(|e| e.message() == "aborted"));
    }

    #[test]
    fn test_try_catch_fallible() {
        let parsed = try_catch_fallible(|| "12".parse::<i32>());
        assert_eq!(parsed.into_value(), Ok(12));

        let invalid = try_catch_fallible(|| "hello".parse::<i32>());
        assert_eq!(message_of(&invalid), "invalid digit found in string");
        assert!(invalid.error().unwrap().cause().is_some());
    }

    #[test]
    fn test_chained_try_catch() {
        let ok: Outcome<i32> = Outcome::success(5);
        assert_eq!(ok.try_catch(|v| v * 2).into_value(), Ok(10));

        let zero: Outcome<i32> = Outcome::success(std::hint::black_box(0));
        let divided = zero.try_catch(|v| 10 / v);
        assert_eq!(message_of(&divided), "attempt to divide by zero");

        let calls = Cell::new(0);
        let skipped = failed("earlier").try_catch(|v| {
            calls.set(calls.get() + 1);
            v
        });
        assert_eq!(message_of(&skipped), "earlier");
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_hooks_pass_through() {
        let seen = Cell::new(0);
        let errors = Cell::new(0);

        let ok = Outcome::<i32>::success(3)
            .on_success(|v| seen.set(*v))
            .on_failure(|_| errors.set(errors.get() + 1));
        assert_eq!(ok.into_value(), Ok(3));

        let err = failed("boom")
            .on_success(|v| seen.set(*v))
            .on_failure(|_| errors.set(errors.get() + 1));
        assert_eq!(message_of(&err), "boom");

        assert_eq!((seen.get(), errors.get()), (3, 1));
    }

    #[test]
    fn test_ok_and_err() {
        assert_eq!(Outcome::<i32>::success(1).ok(), Optional::some(1));
        assert_eq!(failed("boom").ok(), Optional::None);

        let err: Outcome<i32, &str> = Outcome::failure("boom");
        assert_eq!(err.err(), Optional::some("boom"));
    }

    #[test]
    fn test_predicates() {
        let ok: Outcome<i32> = Outcome::success(5);
        assert!(ok.contains(&5));
        assert!(!ok.contains(&6));
        assert!(ok.is_success_and(|v| *v > 3));
        assert!(!ok.is_failure_and(|_| true));
        assert!(ok.is_failure_or(|v| *v > 3));
        assert!(!ok.is_failure_or(|v| *v > 10));

        let err = failed("boom");
        assert!(!err.contains(&5));
        assert!(!err.is_success_and(|_| true));
        assert!(err.is_failure_and(|e| e.message() == "boom"));
        assert!(err.is_failure_or(|_| false));
    }

    #[test]
    fn test_logged_fallbacks() {
        assert_eq!(failed("boom").ok_logged(), Optional::None);
        assert_eq!(failed("boom").unwrap_or_logged(3), 3);
        assert_eq!(Outcome::<i32>::success(1).unwrap_or_logged(3), 1);
    }

    #[test]
    fn test_completion() {
        let done: Completion = Outcome::completed();
        assert!(done.is_success());
        assert_eq!(done.into_value(), Ok(()));
    }

    #[test]
    fn test_std_conversions() {
        let ok: Outcome<i32, &str> = Ok(1).into();
        assert_eq!(ok, Outcome::success(1));

        let back: Result<i32, &str> = Outcome::<i32, &str>::failure("boom").into();
        assert_eq!(back, Err("boom"));
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_map_lets_panic_escape() {
        let divisor = std::hint::black_box(0);
        let _ = Outcome::<i32>::success(10).map(|v| v / divisor);
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_validate_lets_predicate_panic_escape() {
        let divisor = std::hint::black_box(0);
        let _ = Outcome::<i32>::success(10).validate(|v| v / divisor > 1, Error::new("unused"));
    }
}

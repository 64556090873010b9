//! Async variants of the chaining combinators.
//!
//! These await the caller's future only on the positive state and otherwise
//! short-circuit without creating it. A panic inside the future propagates,
//! except through [`try_catch_async`].

use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;

use crate::option::Optional;
use crate::result::{Outcome, captured};

impl<T> Optional<T> {
    pub async fn map_async<U, F, Fut>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Some(value) => Optional::Some(f(value).await),
            Self::None => Optional::None,
        }
    }

    pub async fn and_then_async<U, F, Fut>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Optional<U>>,
    {
        match self {
            Self::Some(value) => f(value).await,
            Self::None => Optional::None,
        }
    }
}

impl<T, E> Outcome<T, E> {
    pub async fn map_async<U, F, Fut>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value).await),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    pub async fn and_then_async<U, F, Fut>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        match self {
            Self::Success(value) => f(value).await,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

/// Await `future`, converting a panic raised while polling it into a failure.
pub async fn try_catch_async<T, Fut>(future: Fut) -> Outcome<T>
where
    Fut: Future<Output = T>,
{
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(value) => Outcome::Success(value),
        Err(payload) => Outcome::Failure(captured(payload.as_ref())),
    }
}

use futures_util::FutureExt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use tracing::trace;

use super::Panic;
use crate::outcome::Outcome;

/// Await a computation already in flight and turn its `Result` into an [`Outcome`].
///
/// A `tokio::task::JoinHandle` can be passed as-is: a task that panicked or
/// was aborted settles as a `Failure` holding the `JoinError`. Dropping the
/// returned future drops `pending` with it.
pub async fn wrap_async<F, T, E>(pending: F) -> Outcome<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    let outcome = Outcome::from(pending.await);
    if outcome.is_failure() {
        trace!(target: "settle::wrap", "async computation failed");
    }
    outcome
}

/// Await `pending`, capturing a panic raised while polling it.
pub async fn catch_async<F, T>(pending: F) -> Outcome<T, Panic>
where
    F: Future<Output = T>,
{
    match AssertUnwindSafe(pending).catch_unwind().await {
        Ok(data) => Outcome::Success { data },
        Err(payload) => {
            let error = Panic::new(payload);
            trace!(target: "settle::wrap", panic = %error, "async computation panicked");
            Outcome::Failure { error }
        }
    }
}

/// Method-call form of [`wrap_async`] and [`catch_async`]
pub trait OutcomeFutureExt: Future + Sized {
    fn outcome<T, E>(self) -> impl Future<Output = Outcome<T, E>>
    where
        Self: Future<Output = Result<T, E>>,
    {
        wrap_async(self)
    }

    fn catch_outcome(self) -> impl Future<Output = Outcome<Self::Output, Panic>> {
        catch_async(self)
    }
}

impl<F: Future> OutcomeFutureExt for F {}

use std::panic::{self, AssertUnwindSafe};
use tracing::trace;

use super::Panic;
use crate::outcome::Outcome;

/// Run `thunk` once and turn its `Result` into an [`Outcome`].
///
/// The cause of an `Err` is kept as-is.
pub fn wrap_sync<F, T, E>(thunk: F) -> Outcome<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    let outcome = Outcome::from(thunk());
    if outcome.is_failure() {
        trace!(target: "settle::wrap", "sync computation failed");
    }
    outcome
}

/// Run `thunk` once, capturing a panic instead of letting it unwind.
///
/// The thunk is treated as unwind safe; state it shares with the caller
/// may be left half-updated when it panics.
pub fn catch_sync<F, T>(thunk: F) -> Outcome<T, Panic>
where
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(thunk)) {
        Ok(data) => Outcome::Success { data },
        Err(payload) => {
            let error = Panic::new(payload);
            trace!(target: "settle::wrap", panic = %error, "sync computation panicked");
            Outcome::Failure { error }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::fmt;

    #[derive(Debug, Clone, PartialEq)]
    struct RangeError(String);

    impl fmt::Display for RangeError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "RangeError: {}", self.0)
        }
    }

    impl std::error::Error for RangeError {}

    #[test]
    fn test_returned_value_is_success() {
        let outcome = wrap_sync(|| Ok::<_, RangeError>(42));

        assert_eq!(outcome, Outcome::Success { data: 42 });
        assert_eq!(outcome.error(), None);
        assert!(outcome.is_success());
    }

    #[test]
    fn test_returned_error_is_failure() {
        let outcome: Outcome<i32, RangeError> =
            wrap_sync(|| Err(RangeError("bad".to_string())));

        assert_eq!(outcome.data(), None);
        assert_eq!(outcome.error(), Some(&RangeError("bad".to_string())));
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_unit_return_is_success() {
        let outcome = wrap_sync(|| Ok::<(), RangeError>(()));
        assert_eq!(outcome, Outcome::Success { data: () });
    }

    #[test]
    fn test_thunk_invoked_exactly_once() {
        let calls = Cell::new(0);
        let _ = wrap_sync(|| {
            calls.set(calls.get() + 1);
            Err::<(), _>(RangeError("bad".to_string()))
        });
        assert_eq!(calls.get(), 1);

        let _ = catch_sync(|| calls.set(calls.get() + 1));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_anyhow_error_kept_verbatim() {
        let outcome: Outcome<u16> = wrap_sync(|| -> anyhow::Result<u16> {
            let port: u16 = "not a port".parse()?;
            Ok(port)
        });

        let error = outcome.into_error().expect("parse should fail");
        assert!(
            error.downcast_ref::<std::num::ParseIntError>().is_some(),
            "Cause should be the original ParseIntError: {:?}",
            error
        );
    }

    #[test]
    fn test_catch_returned_value() {
        let outcome = catch_sync(|| 42);
        assert_eq!(outcome.into_data(), Some(42));
    }

    #[test]
    fn test_catch_panic_message() {
        let outcome: Outcome<i32, Panic> = catch_sync(|| panic!("bad"));

        assert!(outcome.is_failure());
        assert_eq!(outcome.data(), None);
        assert_eq!(outcome.error().and_then(Panic::message), Some("bad"));
    }

    #[test]
    fn test_catch_non_string_payload() {
        let outcome: Outcome<(), Panic> =
            catch_sync(|| std::panic::panic_any(RangeError("bad".to_string())));

        let error = outcome.into_error().expect("thunk panicked");
        let raised = error
            .downcast::<RangeError>()
            .expect("Raised value should be captured unmodified");
        assert_eq!(*raised, RangeError("bad".to_string()));
    }

    #[test]
    fn test_catch_does_not_intercept_returned_errors() {
        let outcome = catch_sync(|| Err::<i32, _>(RangeError("bad".to_string())));

        assert!(outcome.is_success(), "A returned Err is a value, not a panic");
        assert_eq!(outcome.into_data(), Some(Err(RangeError("bad".to_string()))));
    }
}

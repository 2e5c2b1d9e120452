//! Result-typed wrappers for fallible computations.
//!
//! [`wrap_sync`] and [`wrap_async`] turn a computation's `Result` into an
//! [`Outcome`]; [`catch_sync`] and [`catch_async`] do the same for panics.

pub mod config;
pub mod observability;
pub mod outcome;
pub mod scenarios;
pub mod wrap;

pub use anyhow::{Context, Result};
pub use outcome::Outcome;
pub use wrap::{catch_async, catch_sync, wrap_async, wrap_sync, OutcomeFutureExt, Panic};

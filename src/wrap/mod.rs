pub mod future;
pub mod panic;
pub mod sync;

pub use future::{catch_async, wrap_async, OutcomeFutureExt};
pub use panic::Panic;
pub use sync::{catch_sync, wrap_sync};

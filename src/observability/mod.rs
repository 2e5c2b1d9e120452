pub mod logger;

pub use logger::{init_logging, route_panics_to_tracing};

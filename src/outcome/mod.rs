pub mod models;
pub mod wire;

pub use models::Outcome;

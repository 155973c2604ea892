pub mod telemetry;
pub mod types;

pub use types::*;

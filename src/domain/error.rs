//! Engine errors
//!
//! Failures of the availability and tariff engine. Geo filtering and overlap
//! checks never fail; only window construction and pricing can.

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Requested window is empty or reversed
    #[error("Invalid window: start {start} is not before end {end}")]
    InvalidWindow {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// No active tariff window covers this instant
    #[error("No tariff window applies at {at}")]
    TariffGap { at: NaiveDateTime },
}

/// Result type for engine computations
pub type EngineResult<T> = Result<T, EngineError>;

//! Tariff aggregate
//!
//! Contains the TariffWindow entity, rate resolution, reservation pricing,
//! and configuration checks.

pub mod cost;
pub mod model;
pub mod repository;
pub mod resolver;
pub mod validation;

pub use cost::{compute_cost, CostBreakdown, CostSegment};
pub use model::{DailyRange, TariffWindow};
pub use repository::TariffRepository;
pub use resolver::{rate_at, TariffMatch};
pub use validation::{ensure_no_overlap, find_overlaps, windows_overlap};

//! # EV Booking Service
//!
//! Availability and tariff resolution for a peer-to-peer EV charging station
//! booking platform.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Entities, the synchronous search and pricing engine, and
//!   repository traits
//! - **application**: Search, billing and booking services over the repositories
//! - **infrastructure**: In-memory storage and TOML seed loading
//! - **shared**: Error types and logging setup

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use config::{default_config_path, AppConfig};
pub use infrastructure::{InMemoryStore, SeedData};
pub use shared::telemetry::init_tracing;

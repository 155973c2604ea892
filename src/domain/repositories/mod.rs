//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::reservation::ReservationRepository;
use super::site::{AddressRepository, SiteRepository};
use super::station::StationRepository;
use super::tariff::TariffRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

// ── RepositoryProvider ──────────────────────────────────────────

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let station = repos.stations().find_by_id(7).await?;
///     let tariffs = repos.tariffs().find_for_station(7).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn stations(&self) -> &dyn StationRepository;
    fn sites(&self) -> &dyn SiteRepository;
    fn addresses(&self) -> &dyn AddressRepository;
    fn reservations(&self) -> &dyn ReservationRepository;
    fn tariffs(&self) -> &dyn TariffRepository;
}

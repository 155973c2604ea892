//! Station repository interface

use async_trait::async_trait;

use super::model::Station;
use crate::domain::DomainResult;

#[async_trait]
pub trait StationRepository: Send + Sync {
    /// Save a new station
    async fn save(&self, station: Station) -> DomainResult<()>;

    /// Find station by ID
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Station>>;

    /// Find all stations (any status)
    async fn find_all(&self) -> DomainResult<Vec<Station>>;

    /// Find all stations hosted by a site
    async fn find_by_site(&self, site_id: i64) -> DomainResult<Vec<Station>>;
}

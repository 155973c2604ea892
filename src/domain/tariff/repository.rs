//! Tariff repository interface

use async_trait::async_trait;

use super::model::TariffWindow;
use crate::domain::DomainResult;

#[async_trait]
pub trait TariffRepository: Send + Sync {
    /// Store a window; may refuse one that overlaps the station's active set.
    async fn save(&self, window: TariffWindow) -> DomainResult<()>;

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<TariffWindow>>;

    /// All windows of a station, active or not
    async fn find_for_station(&self, station_id: i64) -> DomainResult<Vec<TariffWindow>>;
}

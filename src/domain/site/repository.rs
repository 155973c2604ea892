//! Site & address repository interfaces

use async_trait::async_trait;

use super::model::{Address, Site};
use crate::domain::DomainResult;

#[async_trait]
pub trait SiteRepository: Send + Sync {
    async fn save(&self, site: Site) -> DomainResult<()>;
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Site>>;
}

#[async_trait]
pub trait AddressRepository: Send + Sync {
    async fn save(&self, address: Address) -> DomainResult<()>;

    /// All addresses located in `city`
    async fn find_by_city(&self, city: &str) -> DomainResult<Vec<Address>>;
}

//! Billing service: prices a prospective reservation

use std::sync::Arc;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::config::BillingConfig;
use crate::domain::tariff::{compute_cost, rate_at};
use crate::domain::{CostBreakdown, DomainError, DomainResult, RepositoryProvider};

/// Price of using a station over a span
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub station_id: i64,
    pub currency: String,
    /// Rate in force when the span starts
    pub rate_per_minute: Decimal,
    #[serde(flatten)]
    pub breakdown: CostBreakdown,
}

/// Service for billing operations
pub struct BillingService {
    repos: Arc<dyn RepositoryProvider>,
    currency: String,
    scale: u32,
}

impl BillingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, config: &BillingConfig) -> Self {
        Self {
            repos,
            currency: config.currency.clone(),
            scale: config.minor_unit_scale,
        }
    }

    /// Price `[start, end)` on `station_id` against its tariff windows.
    pub async fn quote(
        &self,
        station_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> DomainResult<Quote> {
        if self.repos.stations().find_by_id(station_id).await?.is_none() {
            return Err(DomainError::not_found("Station", "id", station_id));
        }

        let windows = self.repos.tariffs().find_for_station(station_id).await?;
        let breakdown = compute_cost(&windows, start, end, self.scale)?;
        let rate_per_minute = rate_at(&windows, start)?.rate();

        info!(
            station_id,
            %start,
            %end,
            total = %breakdown.total,
            currency = %self.currency,
            segments = breakdown.segments.len(),
            "Quote computed"
        );

        Ok(Quote {
            station_id,
            currency: self.currency.clone(),
            rate_per_minute,
            breakdown,
        })
    }
}

// ── Tests ──────────────────────────────────────────────────────

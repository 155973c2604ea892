//! Configuration-time checks on a station's tariff set
//!
//! The resolver tolerates overlapping windows (highest id wins); these checks
//! let the data store refuse such sets when they are written.

use super::model::TariffWindow;
use crate::domain::DomainResult;
use crate::shared::errors::DomainError;

/// Whether two active windows of the same station can price the same instant.
pub fn windows_overlap(a: &TariffWindow, b: &TariffWindow) -> bool {
    if a.id == b.id || a.station_id != b.station_id || !a.active || !b.active {
        return false;
    }
    if !a.shares_dates_with(b) {
        return false;
    }
    let b_spans = b.daily.day_spans();
    a.daily
        .day_spans()
        .iter()
        .any(|&(a_from, a_to)| b_spans.iter().any(|&(b_from, b_to)| a_from < b_to && b_from < a_to))
}

/// Id pairs of overlapping windows, lower id first.
pub fn find_overlaps(windows: &[TariffWindow]) -> Vec<(i64, i64)> {
    let mut pairs = Vec::new();
    for (i, a) in windows.iter().enumerate() {
        for b in &windows[i + 1..] {
            if windows_overlap(a, b) {
                pairs.push((a.id.min(b.id), a.id.max(b.id)));
            }
        }
    }
    pairs
}

/// Refuse `candidate` if it overlaps any window already configured.
pub fn ensure_no_overlap(candidate: &TariffWindow, existing: &[TariffWindow]) -> DomainResult<()> {
    let clashing: Vec<i64> = existing
        .iter()
        .filter(|w| windows_overlap(candidate, w))
        .map(|w| w.id)
        .collect();

    if clashing.is_empty() {
        Ok(())
    } else {
        Err(DomainError::Conflict(format!(
            "tariff window {} overlaps active window(s) {:?} of station {}",
            candidate.id, clashing, candidate.station_id
        )))
    }
}

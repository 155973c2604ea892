//! Tariff window domain entity

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Daily time-of-day range `[start, end)`.
///
/// When `end < start` the range wraps past midnight (22:00–06:00 covers the
/// night). `start == end` covers nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl DailyRange {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    pub fn wraps(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        if self.wraps() {
            time >= self.start || time < self.end
        } else {
            self.start <= time && time < self.end
        }
    }

    /// Covered seconds of the day as non-wrapping `[from, to)` spans, `to <= 86_400`.
    pub fn day_spans(&self) -> Vec<(u32, u32)> {
        let start = self.start.num_seconds_from_midnight();
        let end = self.end.num_seconds_from_midnight();
        if self.wraps() {
            let mut spans = vec![(start, 86_400)];
            if end > 0 {
                spans.push((0, end));
            }
            spans
        } else if start < end {
            vec![(start, end)]
        } else {
            Vec::new()
        }
    }
}

/// Time-of-day price rule attached to a station
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffWindow {
    pub id: i64,
    pub station_id: i64,
    /// Price per minute of reservation, in currency units
    pub rate_per_minute: Decimal,
    /// First day the window is in force (inclusive)
    pub valid_from: NaiveDate,
    /// Last day the window is in force (inclusive); open-ended when absent
    #[serde(default)]
    pub valid_until: Option<NaiveDate>,
    pub daily: DailyRange,
    pub active: bool,
}

impl TariffWindow {
    /// Active and inside its activation dates on `date`
    pub fn is_in_force_on(&self, date: NaiveDate) -> bool {
        self.active
            && self.valid_from <= date
            && self.valid_until.map_or(true, |until| date <= until)
    }

    /// Whether this window prices the minute starting at `instant`
    pub fn applies_at(&self, instant: NaiveDateTime) -> bool {
        self.is_in_force_on(instant.date()) && self.daily.contains(instant.time())
    }

    /// Whether both windows can be in force on a common day
    pub fn shares_dates_with(&self, other: &TariffWindow) -> bool {
        let self_starts_in_time = other.valid_until.map_or(true, |until| self.valid_from <= until);
        let other_starts_in_time = self.valid_until.map_or(true, |until| other.valid_from <= until);
        self_starts_in_time && other_starts_in_time
    }
}

// ── Tests ──────────────────────────────────────────────────────

//! Reservation pricing over time-of-day tariff windows
//!
//! The reservation is cut into segments over which the same window applies.
//! A segment ends at the next daily edge of any active window, at midnight
//! (activation dates change there), or at the reservation end. Each segment
//! costs `rate * minutes`; the sum is rounded once, at the end.

use chrono::{Duration, NaiveDateTime, NaiveTime};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tracing::warn;

use super::model::TariffWindow;
use super::resolver::rate_at;
use crate::domain::error::EngineResult;
use crate::domain::window::TimeWindow;

const NANOS_PER_MINUTE: i64 = 60_000_000_000;
const MILLIS_PER_MINUTE: i64 = 60_000;

/// Portion of a reservation priced by a single window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostSegment {
    pub window_id: i64,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Exact fractional minutes
    pub minutes: Decimal,
    pub rate_per_minute: Decimal,
    /// Unrounded `rate * minutes`
    pub amount: Decimal,
}

/// Priced reservation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub segments: Vec<CostSegment>,
    /// Exact sum of segment amounts
    pub raw_total: Decimal,
    /// `raw_total` rounded to the currency's minor unit
    pub total: Decimal,
    /// Windows hidden by a higher-id overlapping window somewhere in the span
    pub shadowed_windows: Vec<i64>,
}

impl CostBreakdown {
    pub fn total_minutes(&self) -> Decimal {
        self.segments.iter().map(|s| s.minutes).sum()
    }
}

/// Price `[start, end)` against `windows`, rounding the total to `scale` digits.
///
/// Fails with `InvalidWindow` for an empty span and with `TariffGap` as soon
/// as any instant of the span is not covered; no partial result is returned.
pub fn compute_cost(
    windows: &[TariffWindow],
    start: NaiveDateTime,
    end: NaiveDateTime,
    scale: u32,
) -> EngineResult<CostBreakdown> {
    let span = TimeWindow::new(start, end)?;

    let mut segments: Vec<CostSegment> = Vec::new();
    let mut shadowed_windows: Vec<i64> = Vec::new();
    let mut cursor = span.start();

    while cursor < span.end() {
        let matched = rate_at(windows, cursor)?;
        if matched.is_ambiguous() {
            warn!(
                window_id = matched.window.id,
                shadowed = ?matched.shadowed,
                at = %cursor,
                "Overlapping tariff windows, highest id wins"
            );
            metrics::counter!("tariff_ambiguity_total").increment(1);
            for id in &matched.shadowed {
                if !shadowed_windows.contains(id) {
                    shadowed_windows.push(*id);
                }
            }
        }

        let segment_end = next_boundary(windows, cursor).min(span.end());
        let (units, per_minute) = duration_units(segment_end - cursor);
        let rate = matched.rate();
        let minutes = units / per_minute;
        let amount = rate * units / per_minute;

        match segments.last_mut() {
            Some(last) if last.window_id == matched.window.id && last.end == cursor => {
                last.end = segment_end;
                last.minutes += minutes;
                last.amount += amount;
            }
            _ => segments.push(CostSegment {
                window_id: matched.window.id,
                start: cursor,
                end: segment_end,
                minutes,
                rate_per_minute: rate,
                amount,
            }),
        }

        cursor = segment_end;
    }

    let raw_total: Decimal = segments.iter().map(|s| s.amount).sum();
    let total = raw_total.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);

    Ok(CostBreakdown {
        segments,
        raw_total,
        total,
        shadowed_windows,
    })
}

/// `duration` as a count of units plus the units in one minute.
///
/// Nanoseconds when they fit in an `i64` (about 292 years), milliseconds otherwise.
fn duration_units(duration: Duration) -> (Decimal, Decimal) {
    match duration.num_nanoseconds() {
        Some(nanos) => (Decimal::from(nanos), Decimal::from(NANOS_PER_MINUTE)),
        None => (
            Decimal::from(duration.num_milliseconds()),
            Decimal::from(MILLIS_PER_MINUTE),
        ),
    }
}

/// Earliest instant after `cursor` at which the set of matching windows may change.
fn next_boundary(windows: &[TariffWindow], cursor: NaiveDateTime) -> NaiveDateTime {
    let next_midnight = (cursor + Duration::days(1))
        .date()
        .and_time(NaiveTime::default());

    windows
        .iter()
        .filter(|w| w.active)
        .flat_map(|w| [w.daily.start, w.daily.end])
        .map(|edge| next_occurrence(cursor, edge))
        .fold(next_midnight, std::cmp::min)
}

/// First instant strictly after `cursor` whose time of day is `time`.
fn next_occurrence(cursor: NaiveDateTime, time: NaiveTime) -> NaiveDateTime {
    let same_day = cursor.date().and_time(time);
    if same_day > cursor {
        same_day
    } else {
        same_day + Duration::days(1)
    }
}

// ── Tests ──────────────────────────────────────────────────────

//! Rate lookup at a point in time

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use super::model::TariffWindow;
use crate::domain::error::{EngineError, EngineResult};

/// The window pricing an instant.
///
/// When several active windows match, the highest id wins and the others are
/// listed in `shadowed` (a configuration defect the caller should report).
#[derive(Debug, Clone, PartialEq)]
pub struct TariffMatch<'a> {
    pub window: &'a TariffWindow,
    pub shadowed: Vec<i64>,
}

impl TariffMatch<'_> {
    pub fn rate(&self) -> Decimal {
        self.window.rate_per_minute
    }

    pub fn is_ambiguous(&self) -> bool {
        !self.shadowed.is_empty()
    }
}

/// Find the window whose rate applies at `instant`.
pub fn rate_at(windows: &[TariffWindow], instant: NaiveDateTime) -> EngineResult<TariffMatch<'_>> {
    let mut matching: Vec<&TariffWindow> = windows.iter().filter(|w| w.applies_at(instant)).collect();
    matching.sort_by_key(|w| std::cmp::Reverse(w.id));

    let mut matching = matching.into_iter();
    let window = matching
        .next()
        .ok_or(EngineError::TariffGap { at: instant })?;

    Ok(TariffMatch {
        window,
        shadowed: matching.map(|w| w.id).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::model::DailyRange;
    use chrono::{NaiveDate, NaiveTime};
    use std::str::FromStr;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn window(id: i64, from: NaiveTime, to: NaiveTime, rate: &str) -> TariffWindow {
        TariffWindow {
            id,
            station_id: 1,
            rate_per_minute: Decimal::from_str(rate).unwrap(),
            valid_from: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            valid_until: None,
            daily: DailyRange::new(from, to),
            active: true,
        }
    }

    fn day_and_night() -> Vec<TariffWindow> {
        vec![
            window(1, t(8, 0), t(20, 0), "0.004167"),
            window(2, t(20, 0), t(8, 0), "0.003333"),
        ]
    }

    #[test]
    fn picks_day_and_night_rates() {
        let windows = day_and_night();
        assert_eq!(rate_at(&windows, at(2, 12, 0)).unwrap().window.id, 1);
        assert_eq!(rate_at(&windows, at(2, 20, 0)).unwrap().window.id, 2);
        assert_eq!(rate_at(&windows, at(3, 7, 59)).unwrap().window.id, 2);
        assert_eq!(
            rate_at(&windows, at(3, 8, 0)).unwrap().rate(),
            Decimal::from_str("0.004167").unwrap()
        );
    }

    #[test]
    fn wrap_around_window_matches_night_instants() {
        let windows = vec![window(5, t(22, 0), t(6, 0), "0.002")];
        for instant in [at(2, 23, 0), at(3, 0, 30), at(3, 5, 59)] {
            assert_eq!(rate_at(&windows, instant).unwrap().window.id, 5);
        }
        assert!(rate_at(&windows, at(2, 12, 0)).is_err());
    }

    #[test]
    fn uncovered_instant_is_a_gap() {
        let windows = vec![window(1, t(8, 0), t(20, 0), "0.004167")];
        assert_eq!(
            rate_at(&windows, at(2, 21, 0)),
            Err(EngineError::TariffGap { at: at(2, 21, 0) })
        );
    }

    #[test]
    fn no_windows_is_a_gap() {
        assert!(matches!(
            rate_at(&[], at(2, 12, 0)),
            Err(EngineError::TariffGap { .. })
        ));
    }

    #[test]
    fn inactive_and_out_of_date_windows_are_ignored() {
        let mut windows = day_and_night();
        windows[0].active = false;
        windows.push({
            let mut future = window(9, t(0, 0), t(23, 59), "1");
            future.valid_from = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
            future
        });
        assert!(rate_at(&windows, at(2, 12, 0)).is_err());
        assert_eq!(rate_at(&windows, at(2, 22, 0)).unwrap().window.id, 2);
    }

    #[test]
    fn overlapping_windows_resolve_to_highest_id() {
        let windows = vec![
            window(3, t(10, 0), t(14, 0), "0.010"),
            window(7, t(12, 0), t(18, 0), "0.020"),
            window(4, t(0, 0), t(13, 0), "0.030"),
        ];
        let m = rate_at(&windows, at(2, 12, 30)).unwrap();
        assert_eq!(m.window.id, 7);
        assert!(m.is_ambiguous());
        assert_eq!(m.shadowed, vec![4, 3]);

        let single = rate_at(&windows, at(2, 16, 0)).unwrap();
        assert_eq!(single.window.id, 7);
        assert!(!single.is_ambiguous());
    }
}

//! Slot availability
//!
//! Linear scan of a station's reservations against a requested window.
//! Callers pass only slot-blocking reservations; status is not looked at here.

use super::model::Reservation;
use crate::domain::window::TimeWindow;

/// True when no existing reservation overlaps `window`.
///
/// Stops at the first conflict.
pub fn is_available(existing: &[Reservation], window: &TimeWindow) -> bool {
    !existing.iter().any(|r| r.window.overlaps(window))
}

/// Every reservation overlapping `window`, in input order.
pub fn conflicts<'a>(
    existing: &'a [Reservation],
    window: &'a TimeWindow,
) -> impl Iterator<Item = &'a Reservation> + 'a {
    existing.iter().filter(move |r| r.window.overlaps(window))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 2)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn window(from: NaiveDateTime, to: NaiveDateTime) -> TimeWindow {
        TimeWindow::new(from, to).unwrap()
    }

    fn booked(id: i64, from: NaiveDateTime, to: NaiveDateTime) -> Reservation {
        Reservation::new(id, 1, 1, window(from, to), Decimal::ZERO, Decimal::ZERO)
    }

    #[test]
    fn overlapping_request_is_rejected() {
        let existing = vec![booked(1, at(10, 0), at(12, 0))];
        assert!(!is_available(&existing, &window(at(11, 0), at(13, 0))));
    }

    #[test]
    fn back_to_back_request_is_accepted() {
        let existing = vec![booked(1, at(10, 0), at(12, 0))];
        assert!(is_available(&existing, &window(at(12, 0), at(13, 0))));
        assert!(is_available(&existing, &window(at(9, 0), at(10, 0))));
    }

    #[test]
    fn no_reservations_means_available() {
        assert!(is_available(&[], &window(at(0, 0), at(23, 59))));
    }

    #[test]
    fn enclosing_request_conflicts_with_every_inner_reservation() {
        let existing = vec![
            booked(1, at(8, 0), at(9, 0)),
            booked(2, at(9, 30), at(10, 0)),
            booked(3, at(14, 0), at(15, 0)),
        ];
        let request = window(at(7, 0), at(12, 0));

        assert!(!is_available(&existing, &request));
        let ids: Vec<i64> = conflicts(&existing, &request).map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    fn arb_window() -> impl Strategy<Value = TimeWindow> {
        (0i64..10_000, 1i64..2_000).prop_map(|(offset, len)| {
            let base = at(0, 0);
            let start = base + Duration::minutes(offset);
            TimeWindow::new(start, start + Duration::minutes(len)).unwrap()
        })
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(a in arb_window(), b in arb_window()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn window_starting_at_end_never_conflicts(a in arb_window(), len in 1i64..500) {
            let existing = vec![Reservation::new(1, 1, 1, a, Decimal::ZERO, Decimal::ZERO)];
            let next = TimeWindow::new(a.end(), a.end() + Duration::minutes(len)).unwrap();
            prop_assert!(is_available(&existing, &next));
        }
    }
}

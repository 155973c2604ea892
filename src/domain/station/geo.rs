//! Proximity filtering
//!
//! Great-circle (haversine) distance on a spherical Earth.

use super::model::{GeoPoint, Station};

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance between two points, in meters.
pub fn distance_m(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    // rounding can push h a hair above 1 for antipodal points
    let c = 2.0 * h.min(1.0).sqrt().asin();

    EARTH_RADIUS_M * c
}

/// Stations within `radius_m` of `origin` (boundary inclusive), in input order.
pub fn nearby<'a>(candidates: &'a [Station], origin: GeoPoint, radius_m: f64) -> Vec<&'a Station> {
    candidates
        .iter()
        .filter(|station| distance_m(origin, station.coordinate.to_point()) <= radius_m)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::station::Coordinate;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn station(id: i64, lat: &str, lon: &str) -> Station {
        let c = Coordinate::new(Decimal::from_str(lat).unwrap(), Decimal::from_str(lon).unwrap())
            .unwrap();
        Station::new(id, format!("Borne {}", id), c, Decimal::from(22), 1)
    }

    #[test]
    fn paris_neighbours_within_a_kilometre() {
        let origin = GeoPoint::new(48.8566, 2.3522);
        let candidates = vec![station(1, "48.8567", "2.3523")];

        assert_eq!(nearby(&candidates, origin, 1_000.0).len(), 1);
        assert!(nearby(&candidates, origin, 0.0).is_empty());
    }

    #[test]
    fn zero_radius_keeps_coincident_points() {
        let origin = GeoPoint::new(48.8566, 2.3522);
        let candidates = vec![station(1, "48.8566", "2.3522"), station(2, "48.8567", "2.3522")];

        let found = nearby(&candidates, origin, 0.0);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[test]
    fn radius_boundary_is_inclusive() {
        let origin = GeoPoint::new(48.8566, 2.3522);
        let candidates = vec![station(1, "48.8600", "2.3600")];
        let exact = distance_m(origin, candidates[0].coordinate.to_point());

        assert_eq!(nearby(&candidates, origin, exact).len(), 1);
        assert!(nearby(&candidates, origin, exact - 1e-6).is_empty());
    }

    #[test]
    fn empty_candidates_give_empty_result() {
        assert!(nearby(&[], GeoPoint::new(0.0, 0.0), 10_000.0).is_empty());
    }

    #[test]
    fn negative_radius_matches_nothing() {
        let candidates = vec![station(1, "0", "0")];
        assert!(nearby(&candidates, GeoPoint::new(0.0, 0.0), -1.0).is_empty());
    }

    #[test]
    fn preserves_input_order() {
        let origin = GeoPoint::new(45.7640, 4.8357);
        let candidates = vec![
            station(3, "45.7650", "4.8360"),
            station(1, "48.8566", "2.3522"),
            station(2, "45.7641", "4.8358"),
        ];
        let ids: Vec<i64> = nearby(&candidates, origin, 5_000.0).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn paris_to_lyon_is_about_392_km() {
        let paris = GeoPoint::new(48.8566, 2.3522);
        let lyon = GeoPoint::new(45.7640, 4.8357);
        let d = distance_m(paris, lyon);
        assert!(d > 390_000.0 && d < 394_000.0, "got {}", d);
    }

    #[test]
    fn antipodal_points_are_half_circumference() {
        let d = distance_m(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 180.0));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_M).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn distance_to_self_is_zero(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
            let p = GeoPoint::new(lat, lon);
            prop_assert_eq!(distance_m(p, p), 0.0);
        }

        #[test]
        fn distance_is_symmetric(
            lat1 in -90.0f64..=90.0, lon1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0, lon2 in -180.0f64..=180.0,
        ) {
            let p = GeoPoint::new(lat1, lon1);
            let q = GeoPoint::new(lat2, lon2);
            prop_assert!((distance_m(p, q) - distance_m(q, p)).abs() < 1e-6);
        }
    }
}

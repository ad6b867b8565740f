//! Unit tests for nav-core primitives.

#[cfg(test)]
mod angle {
    use crate::{normalize_degrees, wrap_degrees_signed};

    #[test]
    fn normalize_identity_in_range() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(90.0), 90.0);
        assert_eq!(normalize_degrees(359.9), 359.9);
    }

    #[test]
    fn normalize_wraps_negative_and_over() {
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(450.0), 90.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-360.0), 0.0);
        assert_eq!(normalize_degrees(720.0 + 10.0), 10.0);
    }

    #[test]
    fn normalize_always_in_range() {
        for h in [-1e-9, -0.1, -359.9, -720.5, 1234.5, 359.999_999, 1e6] {
            let n = normalize_degrees(h);
            assert!((0.0..360.0).contains(&n), "normalize({h}) = {n}");
        }
    }

    #[test]
    fn wrap_signed_shortest_path() {
        assert_eq!(wrap_degrees_signed(20.0), 20.0);
        assert_eq!(wrap_degrees_signed(-20.0), -20.0);
        assert_eq!(wrap_degrees_signed(190.0), -170.0);
        assert_eq!(wrap_degrees_signed(-190.0), 170.0);
        assert_eq!(wrap_degrees_signed(540.0), 180.0);
    }

    #[test]
    fn wrap_signed_boundary_is_positive_180() {
        // Both half-turn spellings land on +180, the closed end of (-180, 180].
        assert_eq!(wrap_degrees_signed(180.0), 180.0);
        assert_eq!(wrap_degrees_signed(-180.0), 180.0);
    }
}

#[cfg(test)]
mod geo {
    use crate::{GeoPoint, NavError};

    const BERLIN: GeoPoint = GeoPoint { lat: 52.52, lon: 13.405 };
    const PARIS: GeoPoint = GeoPoint { lat: 48.8566, lon: 2.3522 };

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(30.694, -88.043);
        assert!(p.distance_m(p) < 0.01);
    }

    #[test]
    fn distance_symmetric() {
        let d_ab = BERLIN.distance_m(PARIS);
        let d_ba = PARIS.distance_m(BERLIN);
        assert!((d_ab - d_ba).abs() < 1e-6, "asymmetry: {d_ab} vs {d_ba}");
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111 km
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }

    #[test]
    fn quarter_great_circle() {
        // Equator to 90°E along the equator: R * π/2.
        let d = GeoPoint::new(0.0, 0.0).distance_m(GeoPoint::new(0.0, 90.0));
        assert!((d - 10_007_543.0).abs() < 5.0, "got {d}");
    }

    #[test]
    fn berlin_to_paris_distance() {
        let d = BERLIN.distance_m(PARIS);
        assert!((d - 878_000.0).abs() < 8_780.0, "got {d}");
    }

    #[test]
    fn bearing_due_east_along_equator() {
        let b = GeoPoint::new(0.0, 0.0).bearing_to(GeoPoint::new(0.0, 90.0));
        assert!((b - 90.0).abs() < 1e-9, "got {b}");
    }

    #[test]
    fn bearing_due_north() {
        let b = GeoPoint::new(0.0, 0.0).bearing_to(GeoPoint::new(90.0, 0.0));
        assert!(b.abs() < 1e-9, "got {b}");
    }

    #[test]
    fn bearing_berlin_to_paris_southwest() {
        let b = BERLIN.bearing_to(PARIS);
        assert!((245.0..248.0).contains(&b), "got {b}");
    }

    #[test]
    fn bearing_always_in_range() {
        let points = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(52.52, 13.405),
            GeoPoint::new(-33.4489, -70.6693),
            GeoPoint::new(64.1466, -21.9426),
            GeoPoint::new(-41.2865, 174.7762),
        ];
        for a in points {
            for b in points {
                let brg = a.bearing_to(b);
                assert!((0.0..360.0).contains(&brg), "bearing {a} -> {b} = {brg}");
            }
        }
    }

    #[test]
    fn coincident_bearing_is_north() {
        // atan2(0, 0) = 0: degenerate but defined.
        assert_eq!(BERLIN.bearing_to(BERLIN), 0.0);
    }

    #[test]
    fn destination_round_trip() {
        let dest = BERLIN.destination(90.0, 1_000.0);
        assert!((BERLIN.distance_m(dest) - 1_000.0).abs() < 0.5);
        assert!((BERLIN.bearing_to(dest) - 90.0).abs() < 0.5);
    }

    #[test]
    fn destination_wraps_antimeridian() {
        let dest = GeoPoint::new(0.0, 179.9).destination(90.0, 50_000.0);
        assert!(dest.lon < -179.0, "got {}", dest.lon);
    }

    #[test]
    fn try_new_accepts_valid() {
        let p = GeoPoint::try_new(52.52, 13.405).unwrap();
        assert_eq!(p, BERLIN);
        GeoPoint::try_new(-90.0, 180.0).unwrap();
        GeoPoint::try_new(90.0, -180.0).unwrap();
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert!(matches!(
            GeoPoint::try_new(90.1, 0.0),
            Err(NavError::InvalidLatitude(_))
        ));
        assert!(matches!(
            GeoPoint::try_new(0.0, -180.5),
            Err(NavError::InvalidLongitude(_))
        ));
    }

    #[test]
    fn try_new_rejects_non_finite() {
        assert!(matches!(
            GeoPoint::try_new(f64::NAN, 0.0),
            Err(NavError::InvalidLatitude(_))
        ));
        assert!(matches!(
            GeoPoint::try_new(0.0, f64::INFINITY),
            Err(NavError::InvalidLongitude(_))
        ));
    }

    #[test]
    fn display() {
        assert_eq!(BERLIN.to_string(), "(52.520000, 13.405000)");
    }
}

#[cfg(test)]
mod compass {
    use crate::{CompassDirection, normalize_degrees};

    #[test]
    fn cardinal_centers() {
        assert_eq!(CompassDirection::from_degrees(0.0), CompassDirection::North);
        assert_eq!(CompassDirection::from_degrees(90.0), CompassDirection::East);
        assert_eq!(CompassDirection::from_degrees(180.0), CompassDirection::South);
        assert_eq!(CompassDirection::from_degrees(270.0), CompassDirection::West);
    }

    #[test]
    fn sector_boundaries() {
        // N covers [-22.5, 22.5); NE starts exactly at 22.5.
        assert_eq!(CompassDirection::from_degrees(22.4), CompassDirection::North);
        assert_eq!(CompassDirection::from_degrees(22.5), CompassDirection::NorthEast);
        assert_eq!(CompassDirection::from_degrees(44.9), CompassDirection::NorthEast);
        assert_eq!(CompassDirection::from_degrees(45.1), CompassDirection::NorthEast);
        assert_eq!(CompassDirection::from_degrees(67.5), CompassDirection::East);
        assert_eq!(CompassDirection::from_degrees(337.4), CompassDirection::NorthWest);
        assert_eq!(CompassDirection::from_degrees(337.5), CompassDirection::North);
        assert_eq!(CompassDirection::from_degrees(359.9), CompassDirection::North);
    }

    #[test]
    fn unnormalized_headings() {
        assert_eq!(CompassDirection::from_degrees(360.0), CompassDirection::North);
        assert_eq!(CompassDirection::from_degrees(-90.0), CompassDirection::West);
        assert_eq!(CompassDirection::from_degrees(-45.0), CompassDirection::NorthWest);
        assert_eq!(CompassDirection::from_degrees(810.0), CompassDirection::East);
    }

    #[test]
    fn normalization_invariance() {
        for h in [-720.5, -359.9, -22.5, -0.1, 0.0, 22.5, 359.9, 360.0, 1234.5] {
            assert_eq!(
                CompassDirection::from_degrees(h),
                CompassDirection::from_degrees(normalize_degrees(h)),
                "heading {h}"
            );
        }
    }

    #[test]
    fn center_degrees_round_trip() {
        for dir in CompassDirection::ALL {
            assert_eq!(CompassDirection::from_degrees(dir.center_degrees()), dir);
        }
    }

    #[test]
    fn display() {
        assert_eq!(CompassDirection::North.to_string(), "N");
        assert_eq!(CompassDirection::SouthWest.to_string(), "SW");
    }
}

#[cfg(test)]
mod arrow {
    use crate::{ArrowSolution, CompassDirection, GeoPoint, relative_bearing};

    const BERLIN: GeoPoint = GeoPoint { lat: 52.52, lon: 13.405 };
    const PARIS: GeoPoint = GeoPoint { lat: 48.8566, lon: 2.3522 };

    #[test]
    fn aligned_heading_needs_no_rotation() {
        assert_eq!(relative_bearing(90.0, 90.0), 0.0);
    }

    #[test]
    fn wraps_through_north() {
        // Facing 350°, target at 10°: turn +20°, not -340°.
        assert_eq!(relative_bearing(350.0, 10.0), 20.0);
        assert_eq!(relative_bearing(10.0, 350.0), -20.0);
    }

    #[test]
    fn unnormalized_inputs() {
        assert_eq!(relative_bearing(-10.0, 370.0), 20.0);
        assert_eq!(relative_bearing(720.0, 90.0), 90.0);
    }

    #[test]
    fn result_always_in_signed_range() {
        for heading in [-400.0, -180.0, 0.0, 90.0, 359.9, 800.0] {
            for bearing in [-400.0, 0.0, 179.9, 180.0, 359.9, 800.0] {
                let r = relative_bearing(heading, bearing);
                assert!(
                    -180.0 < r && r <= 180.0,
                    "relative_bearing({heading}, {bearing}) = {r}"
                );
            }
        }
    }

    #[test]
    fn solve_berlin_to_paris() {
        // Walker in Berlin facing true north; Paris is to the southwest.
        let fix = ArrowSolution::solve(BERLIN, 0.0, PARIS);
        assert!((fix.distance_m - 878_000.0).abs() < 8_780.0);
        assert!((245.0..248.0).contains(&fix.bearing_deg));
        assert!((-115.0..-112.0).contains(&fix.rotation_deg), "got {}", fix.rotation_deg);
        assert_eq!(fix.direction, CompassDirection::SouthWest);
    }

    #[test]
    fn solve_at_destination_is_degenerate_but_defined() {
        let fix = ArrowSolution::solve(BERLIN, 123.0, BERLIN);
        assert!(fix.distance_m < 0.01);
        assert_eq!(fix.bearing_deg, 0.0);
        assert_eq!(fix.rotation_deg, -123.0);
    }
}

//! Geographic coordinate type and great-circle math.
//!
//! `GeoPoint` stores `f64` latitude/longitude in decimal degrees.  All
//! computations use a spherical Earth of radius [`EARTH_RADIUS_M`]; the
//! error against the WGS-84 ellipsoid stays below 0.5 %, which is well
//! inside what a pointer display or nearest-city query can resolve.

use crate::angle::normalize_degrees;
use crate::error::{NavError, NavResult};

/// Mean Earth radius in metres (spherical model).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    /// Latitude, degrees north of the equator.  Valid range `[-90, 90]`.
    pub lat: f64,
    /// Longitude, degrees east of the prime meridian.  Valid range `[-180, 180]`.
    pub lon: f64,
}

impl GeoPoint {
    /// Construct without validation.
    ///
    /// The math operations are total, so an out-of-range point cannot crash
    /// them, but their results are meaningless.  Use [`GeoPoint::try_new`]
    /// wherever coordinates enter from outside the program.
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Construct with range validation: latitude in `[-90, 90]`, longitude
    /// in `[-180, 180]`, both finite.
    pub fn try_new(lat: f64, lon: f64) -> NavResult<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(NavError::InvalidLatitude(lat));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(NavError::InvalidLongitude(lon));
        }
        Ok(Self { lat, lon })
    }

    /// Haversine great-circle distance to `other`, in metres.
    ///
    /// Symmetric, non-negative, zero for coincident points.  No altitude
    /// term; surface distance only.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Initial great-circle bearing from `self` to `other`, in degrees
    /// clockwise from true north, always in `[0, 360)`.
    ///
    /// For coincident points the formula degenerates to `atan2(0, 0) = 0`
    /// (due north) rather than failing; callers that care should check
    /// [`GeoPoint::distance_m`] for zero first.
    pub fn bearing_to(self, other: GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let x = d_lon.sin() * lat2.cos();
        let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

        normalize_degrees(x.atan2(y).to_degrees())
    }

    /// The point reached by travelling `distance_m` metres from `self` along
    /// the initial bearing `bearing_deg`.
    ///
    /// Inverse of bearing + distance (up to great-circle path curvature).
    /// The result's longitude is wrapped into `[-180, 180)`.
    pub fn destination(self, bearing_deg: f64, distance_m: f64) -> GeoPoint {
        let lat1 = self.lat.to_radians();
        let lon1 = self.lon.to_radians();
        let brg = bearing_deg.to_radians();
        let ang = distance_m / EARTH_RADIUS_M; // angular distance

        let lat2 = (lat1.sin() * ang.cos() + lat1.cos() * ang.sin() * brg.cos()).asin();
        let lon2 = lon1
            + (brg.sin() * ang.sin() * lat1.cos()).atan2(ang.cos() - lat1.sin() * lat2.sin());

        let lon2_deg = (lon2.to_degrees() + 180.0).rem_euclid(360.0) - 180.0;
        GeoPoint::new(lat2.to_degrees(), lon2_deg)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

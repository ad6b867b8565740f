//! Arrow rotation: how far to turn from "device forward" to face a target.
//!
//! # Rotation policy
//!
//! [`relative_bearing`] always wraps into `(-180, 180]`, the shortest
//! rotation.  A display animating the arrow continuously can accumulate the
//! signed deltas itself; this crate never hands out an unbounded angle.

use crate::angle::wrap_degrees_signed;
use crate::compass::CompassDirection;
use crate::geo::GeoPoint;

/// Signed rotation from `heading_deg` to `bearing_deg`, in `(-180, 180]`.
///
/// Positive is clockwise.  Both inputs may be unnormalized; the result is
/// the same as for their normalized equivalents.
#[inline]
pub fn relative_bearing(heading_deg: f64, bearing_deg: f64) -> f64 {
    wrap_degrees_signed(bearing_deg - heading_deg)
}

/// Everything a pointer display needs for one position/heading sample.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrowSolution {
    /// Great-circle distance to the destination, metres.
    pub distance_m: f64,
    /// Initial bearing to the destination, degrees in `[0, 360)`.
    pub bearing_deg: f64,
    /// Shortest rotation from the current heading to the bearing,
    /// degrees in `(-180, 180]`.  Positive is clockwise.
    pub rotation_deg: f64,
    /// Compass sector the destination lies in, as seen from `position`.
    pub direction: CompassDirection,
}

impl ArrowSolution {
    /// Compute all pointer facts for one sample.
    ///
    /// `heading_deg` may be unnormalized.  When `destination` coincides with
    /// `position` the bearing degenerates to due north (the math is total);
    /// check `distance_m` before trusting `rotation_deg` in that case.
    pub fn solve(position: GeoPoint, heading_deg: f64, destination: GeoPoint) -> ArrowSolution {
        let bearing_deg = position.bearing_to(destination);
        ArrowSolution {
            distance_m: position.distance_m(destination),
            bearing_deg,
            rotation_deg: relative_bearing(heading_deg, bearing_deg),
            direction: CompassDirection::from_degrees(bearing_deg),
        }
    }
}

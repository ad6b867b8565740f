//! `nav-core` — geodesy and compass primitives for the rust_nav toolkit.
//!
//! Pure functions over coordinates and headings: no state, no I/O, and no
//! failure paths in the math itself.  Every operation returns immediately
//! with a deterministic result and is safe to call from any thread.
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`angle`]   | `normalize_degrees`, `wrap_degrees_signed`                |
//! | [`geo`]     | `GeoPoint`: haversine distance, initial bearing,          |
//! |             | destination point                                         |
//! | [`compass`] | `CompassDirection`, 45°-sector bucketing                  |
//! | [`arrow`]   | `relative_bearing`, `ArrowSolution`                       |
//! | [`error`]   | `NavError`, `NavResult`                                   |
//!
//! # Angle convention
//!
//! All angles are degrees clockwise from true north.  Every operation
//! normalizes its own output into `[0, 360)` (or `(-180, 180]` where the
//! signature says so); none assumes normalized input.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.     |

pub mod angle;
pub mod arrow;
pub mod compass;
pub mod error;
pub mod geo;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use angle::{normalize_degrees, wrap_degrees_signed};
pub use arrow::{ArrowSolution, relative_bearing};
pub use compass::CompassDirection;
pub use error::{NavError, NavResult};
pub use geo::{EARTH_RADIUS_M, GeoPoint};

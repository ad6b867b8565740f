//! City record type.

use nav_core::GeoPoint;

/// A capital city from the directory.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    /// City name.  English exonym — the directory is not localized.
    pub name: String,
    /// English country name.
    pub country: String,
    /// Geographic position.
    pub position: GeoPoint,
    /// Standard-time UTC offset in hours.  Fractional offsets exist
    /// (New Delhi +5.5, Kathmandu +5.75).
    pub utc_offset_hours: f64,
}

impl City {
    /// Hours this city's clocks run ahead of `other` (negative: behind).
    #[inline]
    pub fn utc_offset_from(&self, other: &City) -> f64 {
        self.utc_offset_hours - other.utc_offset_hours
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.name, self.country)
    }
}

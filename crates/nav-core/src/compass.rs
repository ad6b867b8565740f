//! Compass direction bucketing.
//!
//! A heading is quantized into 8 sectors of 45° centred on the cardinal and
//! intercardinal points: N covers `[-22.5°, 22.5°)`, NE covers
//! `[22.5°, 67.5°)`, and so on clockwise.

use crate::angle::normalize_degrees;

/// One of the 8 principal compass directions, clockwise from north.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompassDirection {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl CompassDirection {
    /// All 8 directions in clockwise order starting at north.  The position
    /// of a direction in this table is its sector index.
    pub const ALL: [CompassDirection; 8] = [
        CompassDirection::North,
        CompassDirection::NorthEast,
        CompassDirection::East,
        CompassDirection::SouthEast,
        CompassDirection::South,
        CompassDirection::SouthWest,
        CompassDirection::West,
        CompassDirection::NorthWest,
    ];

    /// Bucket a heading into its sector.
    ///
    /// The heading is normalized first, so unnormalized inputs bucket
    /// identically to their normalized equivalents:
    /// `from_degrees(-90) == from_degrees(270)`.
    pub fn from_degrees(heading: f64) -> CompassDirection {
        let sector = ((normalize_degrees(heading) + 22.5) / 45.0) as usize % 8;
        Self::ALL[sector]
    }

    /// Heading at the centre of this sector, degrees in `[0, 360)`.
    #[inline]
    pub fn center_degrees(self) -> f64 {
        self as usize as f64 * 45.0
    }

    /// Short label, useful for display and CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            CompassDirection::North     => "N",
            CompassDirection::NorthEast => "NE",
            CompassDirection::East      => "E",
            CompassDirection::SouthEast => "SE",
            CompassDirection::South     => "S",
            CompassDirection::SouthWest => "SW",
            CompassDirection::West      => "W",
            CompassDirection::NorthWest => "NW",
        }
    }
}

impl std::fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

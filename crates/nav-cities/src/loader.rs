//! CSV city loader.
//!
//! # CSV format
//!
//! One row per city, header required:
//!
//! ```csv
//! name,country,latitude,longitude,utc_offset_hours
//! Berlin,Germany,52.52,13.405,1
//! New Delhi,India,28.6139,77.209,5.5
//! ```
//!
//! Coordinates pass through [`GeoPoint::try_new`], so a row with an
//! out-of-range or non-finite coordinate fails the whole load rather than
//! producing a city the geodesy math would silently mishandle.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use nav_core::GeoPoint;

use crate::city::City;
use crate::error::CityError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CityRecord {
    name:             String,
    country:          String,
    latitude:         f64,
    longitude:        f64,
    utc_offset_hours: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load city records from a CSV file.
pub fn load_cities_csv(path: &Path) -> Result<Vec<City>, CityError> {
    let file = std::fs::File::open(path).map_err(CityError::Io)?;
    load_cities_reader(file)
}

/// Like [`load_cities_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) and for the bundled
/// directory, which reads from a compiled-in string.
pub fn load_cities_reader<R: Read>(reader: R) -> Result<Vec<City>, CityError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut cities = Vec::new();

    for result in csv_reader.deserialize::<CityRecord>() {
        let row = result.map_err(|e| CityError::Parse(e.to_string()))?;
        let position = GeoPoint::try_new(row.latitude, row.longitude)
            .map_err(|e| CityError::Parse(format!("city {:?}: {e}", row.name)))?;
        cities.push(City {
            name:             row.name,
            country:          row.country,
            position,
            utc_offset_hours: row.utc_offset_hours,
        });
    }

    Ok(cities)
}

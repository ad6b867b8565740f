//! City directory: bundled data, substring search, nearest-city lookup.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(lat, lon)` to the owning [`City`].  Ranking
//! uses squared Euclidean distance in degree space; callers that need metres
//! recompute with [`GeoPoint::distance_m`] on the returned city.
//!
//! [`GeoPoint::distance_m`]: nav_core::GeoPoint::distance_m

use std::io::Cursor;

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use nav_core::GeoPoint;

use crate::city::City;
use crate::error::CityResult;
use crate::loader::load_cities_reader;

/// Capital cities compiled into this crate, one CSV row per capital.
const BUNDLED_CSV: &str = include_str!("../data/capitals.csv");

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[lat, lon]` point with
/// the index of the city in `CityDirectory::cities`.
#[derive(Clone)]
struct CityEntry {
    point: [f64; 2], // [lat, lon]
    index: usize,
}

impl RTreeObject for CityEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for CityEntry {
    /// Squared Euclidean distance in lat/lon space.  Ranks candidates only;
    /// near the poles or the antimeridian the ranking can differ from
    /// great-circle order.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── CityDirectory ─────────────────────────────────────────────────────────────

/// An immutable set of cities with name search and spatial lookup.
pub struct CityDirectory {
    cities: Vec<City>,
    spatial_idx: RTree<CityEntry>,
}

impl CityDirectory {
    /// Build a directory from pre-loaded city records.
    pub fn new(cities: Vec<City>) -> Self {
        let entries: Vec<CityEntry> = cities
            .iter()
            .enumerate()
            .map(|(index, c)| CityEntry {
                point: [c.position.lat, c.position.lon],
                index,
            })
            .collect();
        Self {
            cities,
            spatial_idx: RTree::bulk_load(entries),
        }
    }

    /// The directory of world capitals compiled into this crate.
    pub fn bundled() -> CityResult<Self> {
        Ok(Self::new(load_cities_reader(Cursor::new(BUNDLED_CSV))?))
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Iterator over all cities in file order.
    pub fn iter(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    // ── Name lookup ───────────────────────────────────────────────────────

    /// Case-insensitive substring search over city names, in file order.
    ///
    /// An empty query matches every city.
    pub fn search(&self, query: &str) -> Vec<&City> {
        let q = query.to_lowercase();
        self.cities
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&q))
            .collect()
    }

    /// Exact, case-insensitive name match.
    pub fn by_name(&self, name: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The city nearest to `pos`.
    ///
    /// Returns `None` only if the directory is empty.
    pub fn nearest(&self, pos: GeoPoint) -> Option<&City> {
        self.spatial_idx
            .nearest_neighbor(&[pos.lat, pos.lon])
            .map(|e| &self.cities[e.index])
    }

    /// Up to `k` nearest cities to `pos`, sorted by ascending distance.
    pub fn k_nearest(&self, pos: GeoPoint, k: usize) -> Vec<&City> {
        self.spatial_idx
            .nearest_neighbor_iter(&[pos.lat, pos.lon])
            .take(k)
            .map(|e| &self.cities[e.index])
            .collect()
    }
}

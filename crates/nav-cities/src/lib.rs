//! `nav-cities` — capital-city records for the rust_nav toolkit.
//!
//! The data layer behind a destination picker: a bundled list of world
//! capitals with name search and nearest-city lookup.  No UI, no
//! persistence; the directory is immutable once built.
//!
//! # Crate layout
//!
//! | Module        | Contents                                        |
//! |---------------|-------------------------------------------------|
//! | [`city`]      | `City` record                                   |
//! | [`directory`] | `CityDirectory`: search, nearest, bundled data  |
//! | [`loader`]    | `load_cities_csv` / `load_cities_reader`        |
//! | [`error`]     | `CityError`, `CityResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `City` and the       |
//! |         | `nav-core` types it embeds.                               |

pub mod city;
pub mod directory;
pub mod error;
pub mod loader;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use city::City;
pub use directory::CityDirectory;
pub use error::{CityError, CityResult};
pub use loader::{load_cities_csv, load_cities_reader};

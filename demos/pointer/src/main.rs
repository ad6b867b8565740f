//! pointer — simulated walk toward a destination capital.
//!
//! Picks a destination from the bundled capital directory (first
//! case-insensitive substring match of the command-line query, default
//! "Paris"), starts a walker in another capital, and at each step prints the
//! facts a pointer display renders: remaining distance, bearing, arrow
//! rotation relative to the walker's heading, and compass sector.
//!
//! The walker's heading carries seeded compass noise, so the arrow rotation
//! is nonzero and the path wanders a little; the run is fully deterministic
//! for a given seed.

use anyhow::{Context, Result, bail};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use nav_cities::CityDirectory;
use nav_core::ArrowSolution;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:          u64 = 42;
const STEP_M:        f64 = 250_000.0; // walker travel per step
const ARRIVAL_M:     f64 = 1_000.0;
const HEADING_NOISE: f64 = 25.0;      // simulated compass error, ± degrees
const MAX_STEPS:     usize = 500;

const START_CITY:    &str = "Berlin";
const ALT_START:     &str = "Wellington"; // used when the destination is Berlin

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let query = std::env::args().nth(1).unwrap_or_else(|| "Paris".to_string());

    // 1. Load the bundled capital directory.
    let directory = CityDirectory::bundled().context("loading bundled capitals")?;
    println!("=== pointer — walk toward a capital ===");
    println!("Directory: {} capitals  |  Seed: {SEED}", directory.len());

    // 2. Resolve the destination: first substring match, picker-style.
    let matches = directory.search(&query);
    let Some(&destination) = matches.first() else {
        bail!("no capital matches {query:?}");
    };
    if matches.len() > 1 {
        println!("({} matches for {query:?}; taking the first)", matches.len());
    }

    // 3. Start city, with a fallback when the destination is the start.
    let start_name = if destination.name == START_CITY { ALT_START } else { START_CITY };
    let start = directory
        .by_name(start_name)
        .with_context(|| format!("start city {start_name:?} missing from directory"))?;

    println!("Start: {start}  |  Destination: {destination}");
    println!(
        "Clocks at the destination run {:+.2} h relative to the start",
        destination.utc_offset_from(start)
    );
    println!();

    // 4. Walk.
    let mut rng = SmallRng::seed_from_u64(SEED);
    let mut position = start.position;
    let mut steps = 0;

    println!(
        "{:<6} {:>12} {:>9} {:>9} {:>5}",
        "Step", "Distance", "Bearing", "Arrow", "Dir"
    );
    println!("{}", "-".repeat(46));

    let arrived = loop {
        if steps >= MAX_STEPS {
            break false;
        }
        steps += 1;

        // The walker faces roughly toward the destination, compass noise on top.
        let true_bearing = position.bearing_to(destination.position);
        let heading = true_bearing + rng.gen_range(-HEADING_NOISE..HEADING_NOISE);

        let fix = ArrowSolution::solve(position, heading, destination.position);
        println!(
            "{:<6} {:>9.1} km {:>8.1}° {:>+8.1}° {:>5}",
            steps,
            fix.distance_m / 1_000.0,
            fix.bearing_deg,
            fix.rotation_deg,
            fix.direction
        );

        if fix.distance_m <= ARRIVAL_M {
            break true;
        }

        // Final approach goes straight along the bearing; long legs follow
        // the noisy heading.
        if fix.distance_m <= STEP_M {
            position = position.destination(fix.bearing_deg, fix.distance_m);
        } else {
            position = position.destination(heading, STEP_M);
        }
    };

    // 5. Summary.
    println!();
    if !arrived {
        bail!("gave up after {MAX_STEPS} steps at {position}");
    }
    println!("Arrived after {steps} steps at {position}");
    if let Some(nearest) = directory.nearest(position) {
        println!("Nearest capital: {nearest}");
    }

    Ok(())
}

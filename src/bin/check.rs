//! Evaluates a point against the imaginary surfaces of every runway in a
//! CSV file and reports the governing surface and build limit.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use part77::{evaluate_all, io::read_runways, GeoPoint, Part77Error, Query, SurfaceCache, ZoneInfo};

#[derive(Parser, Debug)]
#[command(
    name = "part77_check",
    about = "Locate a point within the Part 77 imaginary surfaces of nearby runways",
    version
)]
struct Args {
    /// CSV file of runway definitions
    csv_file: PathBuf,

    /// Query position x, decimal degrees (longitude-like)
    position_x: f64,

    /// Query position y, decimal degrees (latitude-like)
    position_y: f64,

    /// Elevation of the structure top, feet MSL
    elevation: f64,

    /// Established airport elevation, feet MSL
    airport_elevation: f64,

    /// Only consider the named runway
    #[arg(long)]
    runway: Option<String>,

    /// Print the generated surfaces as JSON instead of a verdict
    #[arg(long)]
    dump_surfaces: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    if let Err(error) = run(&args) {
        eprintln!("error: {error}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Part77Error> {
    let mut runways = read_runways(&args.csv_file)?;
    if let Some(name) = &args.runway {
        runways.retain(|runway| runway.name() == name);
    }
    info!(count = runways.len(), "evaluating against runways");

    let mut cache = SurfaceCache::new();
    for runway in &runways {
        cache.get_or_build(runway)?;
    }

    if args.dump_surfaces {
        let mut all: Vec<_> = cache.iter().collect();
        all.sort_by(|a, b| a.runway_name().cmp(b.runway_name()));
        println!("{}", serde_json::to_string_pretty(&all)?);
        return Ok(());
    }

    let query = Query::new(
        GeoPoint::new(args.position_x, args.position_y),
        args.elevation,
        args.airport_elevation,
    );
    let governing = evaluate_all(cache.iter(), &query);

    report(&query, governing.as_ref());
    Ok(())
}

fn report(query: &Query, zone: Option<&ZoneInfo>) {
    let position = format!("({}, {})", query.position.x, query.position.y);
    match zone {
        None => println!("{position} was not found in any imaginary surface"),
        Some(zone) => {
            match &zone.end {
                Some(end) => println!(
                    "{position} was found in the {} Surface for runway {} at end {}. \
                     The maximum build limit is {:.1} feet",
                    zone.surface, zone.runway, end, zone.ceiling_elevation
                ),
                None => println!(
                    "{position} was found in the {} Surface for runway {}. \
                     The maximum build limit is {:.1} feet",
                    zone.surface, zone.runway, zone.ceiling_elevation
                ),
            }
            if zone.is_penetrating {
                println!(
                    "An elevation of {:.1} feet penetrates the surface by {:.1} feet",
                    query.elevation,
                    query.elevation - zone.ceiling_elevation
                );
            }
        }
    }
}

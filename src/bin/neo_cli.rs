use std::path::PathBuf;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use neo_orbits::catalog::{load_elements, read_file};
use neo_orbits::config::EngineConfig;

#[derive(Debug, Parser)]
#[command(about = "Print orbital characteristics and positions from a comet catalog")]
struct Args {
    /// JSON catalog of orbital elements
    catalog: PathBuf,

    /// Only show bodies whose name contains this (case-insensitive)
    #[arg(long)]
    name: Option<String>,

    /// Years since periapsis passage
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    time: f64,

    /// Engine settings (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    tolerance: Option<f64>,

    #[arg(long)]
    max_iterations: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if let Some(tolerance) = args.tolerance {
        config.tolerance = tolerance;
    }
    if let Some(max_iterations) = args.max_iterations {
        config.max_iterations = max_iterations;
    }
    config.validate()?;
    let propagator = config.propagator()?;

    let records = read_file(&args.catalog)?;
    let filter = args.name.as_ref().map(|name| name.to_lowercase());

    for entry in load_elements(&records, config.primary()) {
        if let Some(filter) = &filter {
            if !entry.name.to_lowercase().contains(filter) {
                continue;
            }
        }

        let orbit = &entry.elements;
        println!("Orbital characteristics for {}", entry.name);
        println!("- Semi-major axis: {} AU", orbit.semimajor_axis());
        println!("- Periapsis: {} AU", orbit.periapsis());
        println!("- Apoapsis: {} AU", orbit.apoapsis());
        println!("- Orbital eccentricity: {}", orbit.eccentricity());
        println!(
            "- Orbital inclination: {}",
            orbit.inclination().to_degrees()
        );
        println!(
            "- Argument of periapsis: {}",
            orbit.arg_periapse().to_degrees()
        );
        println!("- LAN: {}", orbit.long_asc_node().to_degrees());
        println!("- Mean motion: {} rad/yr", orbit.mean_motion());
        println!("- Orbital period: {} yr", orbit.period());

        // A failure for one body shouldn't stop the rest
        match propagator.position_at(orbit, args.time) {
            Ok(p) => println!(
                "- Position at t = {}: ({:.6}, {:.6}, {:.6}) AU, r = {:.6} AU",
                args.time,
                p.x,
                p.y,
                p.z,
                p.norm()
            ),
            Err(err) => error!("{}: {}", entry.name, err),
        }
        println!();
    }

    Ok(())
}

use std::path::{Path, PathBuf};

use clap::Parser;
use plotters::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use neo_orbits::astro::{OrbitCurve, Position};
use neo_orbits::catalog::{load_elements, read_file};
use neo_orbits::config::EngineConfig;

#[derive(Debug, Parser)]
#[command(about = "Draw the orbits in a comet catalog, projected onto the x-y plane")]
struct Args {
    /// JSON catalog of orbital elements
    catalog: PathBuf,

    #[arg(short, long, default_value = "plots/orbits.png")]
    output: PathBuf,

    /// Points per orbit curve
    #[arg(long)]
    steps: Option<usize>,

    /// Also mark where each body is this many years after periapsis
    #[arg(short, long, allow_negative_numbers = true)]
    time: Option<f64>,

    /// Engine settings (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
}

struct Track {
    name: String,
    curve: OrbitCurve,
    position: Option<Position>,
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if let Some(steps) = args.steps {
        config.curve_steps = steps;
    }
    config.validate()?;
    let propagator = config.propagator()?;

    let records = read_file(&args.catalog)?;
    let mut tracks = vec![];
    for entry in load_elements(&records, config.primary()) {
        let curve = propagator.default_orbit_curve(&entry.elements)?;
        let position = match args.time {
            None => None,
            Some(time) => match propagator.position_at(&entry.elements, time) {
                Ok(p) => Some(p),
                Err(err) => {
                    error!("{}: {}", entry.name, err);
                    None
                }
            },
        };
        tracks.push(Track {
            name: entry.name,
            curve,
            position,
        });
    }

    if let Some(dir) = args.output.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    draw_plot(&args.output, &tracks)?;
    info!(bodies = tracks.len(), output = %args.output.display(), "wrote plot");

    Ok(())
}

fn draw_plot(name: &Path, tracks: &[Track]) -> Result<(), Box<dyn std::error::Error>> {
    // Square window around the primary, big enough for every orbit
    let extent = tracks
        .iter()
        .flat_map(|track| track.curve.iter())
        .map(|p| p.x.abs().max(p.y.abs()))
        .fold(1.0, f64::max)
        * 1.05;

    let root = BitMapBackend::new(name, (800, 800)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Orbits, x-y projection (AU)", ("sans-serif", 20))
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(-extent..extent, -extent..extent)?;

    chart.configure_mesh().draw()?;

    // The primary
    chart.draw_series(std::iter::once(Circle::new((0.0, 0.0), 4, YELLOW.filled())))?;

    for (i, track) in tracks.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();

        // Close the loop by repeating the first point
        let points = track
            .curve
            .iter()
            .chain(track.curve.points().first())
            .map(|p| (p.x, p.y));
        chart
            .draw_series(LineSeries::new(points, color))?
            .label(track.name.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));

        if let Some(p) = track.position {
            chart.draw_series(std::iter::once(Circle::new((p.x, p.y), 3, color.filled())))?;
        }
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    root.present()?;

    Ok(())
}

mod availability;
mod catalog;
mod config;
mod coverage;
mod location;
mod passes;
mod recommend;
mod report;
mod weather;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use thiserror::Error;

use crate::catalog::{Catalog, CatalogFilter};
use crate::config::{Config, ConfigError};
use crate::coverage::CoverageError;
use crate::location::{Area, BoundingBox, Location, LocationError};
use crate::passes::PassError;
use crate::recommend::{Constraints, RecommendationOutcome};
use crate::weather::{WeatherCache, WeatherSnapshot, WeatherSource};

#[derive(Parser)]
#[command(name = "sat-monitor")]
#[command(about = "Satellite imagery availability and recommendations")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Latitude of the area center
    #[arg(long, global = true, requires = "lon", allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Longitude of the area center
    #[arg(long, global = true, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,
    /// Preset or configured location name
    #[arg(short, long, global = true)]
    location: Option<String>,
    /// Area to cover in km²
    #[arg(long, global = true)]
    area_km: Option<f64>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show last and next imagery for every constellation
    Check {
        #[arg(long)]
        watch: bool,
        #[arg(long)]
        json: bool,
    },
    /// Rank constellations for current weather and requirements
    Recommend {
        /// Maximum spend per image in USD
        #[arg(long)]
        budget: Option<f64>,
        /// Coarsest acceptable resolution in meters
        #[arg(long)]
        resolution: Option<f64>,
        /// Hours until imagery is needed
        #[arg(long)]
        urgent: Option<f64>,
        #[arg(long)]
        json: bool,
        #[arg(long)]
        watch: bool,
    },
    /// Project upcoming passes for all constellations
    Passes {
        #[arg(long, default_value_t = 48.0)]
        hours: f64,
        #[arg(long)]
        json: bool,
    },
    /// Estimate the monthly cost of continuous coverage
    Coverage {
        /// Coarsest acceptable resolution in meters
        #[arg(long, default_value_t = 1.0)]
        resolution: f64,
        /// Days between images
        #[arg(long, default_value_t = 1.0)]
        frequency: f64,
        #[arg(long, default_value_t = 1.0)]
        months: f64,
        #[arg(long)]
        json: bool,
    },
    /// Full text report: archive, next 24 hours and monthly costs
    Report {
        #[arg(long, default_value_t = 24.0)]
        hours: f64,
    },
    /// List constellations in the catalog
    Catalog {
        #[arg(long)]
        free: bool,
        #[arg(long, conflicts_with = "optical")]
        sar: bool,
        #[arg(long)]
        optical: bool,
        /// Only constellations at least this sharp, in meters
        #[arg(long)]
        max_resolution: Option<f64>,
    },
    /// List preset and configured locations
    Locations,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Location(#[from] LocationError),
    #[error(transparent)]
    Pass(#[from] PassError),
    #[error(transparent)]
    Coverage(#[from] CoverageError),
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown location '{0}' (see `sat-monitor locations`)")]
    UnknownLocation(String),
    #[error("Watch mode failed: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Location and area shared by every command's output.
#[derive(Serialize)]
struct Target<'a> {
    location: &'a Location,
    area_sqkm: f64,
    bbox: BoundingBox,
}

impl<'a> Target<'a> {
    fn new(location: &'a Location, area: &Area) -> Self {
        Self {
            location,
            area_sqkm: area.area_sqkm(),
            bbox: area.to_bbox(),
        }
    }
}

#[derive(Serialize)]
struct CheckReport<'a> {
    #[serde(flatten)]
    target: Target<'a>,
    weather: Option<&'a WeatherSnapshot>,
    weather_stale: bool,
    satellites: Vec<availability::AvailabilityRow>,
}

#[derive(Serialize)]
struct RecommendReport<'a> {
    #[serde(flatten)]
    target: Target<'a>,
    weather: Option<&'a WeatherSnapshot>,
    weather_stale: bool,
    recommendations: RecommendationOutcome,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let catalog = Catalog::builtin();

    match &cli.command {
        Commands::Locations => {
            println!("{}", report::locations());
            if !config.locations.is_empty() {
                println!("Configured:");
                for named in &config.locations {
                    println!("  {} ({})", named.name, named.coordinates);
                }
            }
            return Ok(());
        }
        Commands::Catalog {
            free,
            sar,
            optical,
            max_resolution,
        } => {
            let filter = CatalogFilter {
                free_only: *free,
                sar_only: *sar,
                optical_only: *optical,
                max_resolution_m: *max_resolution,
            };
            println!("{}", report::catalog(catalog.select(filter)));
            return Ok(());
        }
        _ => {}
    }

    let location = resolve_location(&cli, &config)?;
    let area = resolve_area(&cli, &config, &location)?;
    log::debug!("{}", report::header(&location, &area));

    match cli.command {
        Commands::Check { watch, json } => {
            let source = config.weather_source();
            let render = |cache: &WeatherCache, now: DateTime<Utc>| -> Result<String, CliError> {
                let rows =
                    availability::availability(catalog, cache.state(), area.area_sqkm(), now)?;
                if json {
                    Ok(serde_json::to_string_pretty(&CheckReport {
                        target: Target::new(&location, &area),
                        weather: cache.state().snapshot(),
                        weather_stale: cache.is_stale(),
                        satellites: rows,
                    })?)
                } else {
                    Ok(format!(
                        "{}\n{}",
                        report::header(&location, &area),
                        report::availability(&rows, cache.state(), cache.is_stale(), now)
                    ))
                }
            };
            run_view(source.as_ref(), &location, watch, &config, render)
        }
        Commands::Recommend {
            budget,
            resolution,
            urgent,
            json,
            watch,
        } => {
            let constraints = Constraints {
                max_budget: budget,
                min_resolution: resolution,
                urgency_hours: urgent,
            };
            let source = config.weather_source();
            let render = |cache: &WeatherCache, _now: DateTime<Utc>| -> Result<String, CliError> {
                let outcome =
                    recommend::recommend(catalog, cache.state(), area.area_sqkm(), &constraints);
                if json {
                    Ok(serde_json::to_string_pretty(&RecommendReport {
                        target: Target::new(&location, &area),
                        weather: cache.state().snapshot(),
                        weather_stale: cache.is_stale(),
                        recommendations: outcome,
                    })?)
                } else {
                    Ok(format!(
                        "{}\n{}",
                        report::header(&location, &area),
                        report::recommendations(&outcome, cache.state(), cache.is_stale())
                    ))
                }
            };
            run_view(source.as_ref(), &location, watch, &config, render)
        }
        Commands::Passes { hours, json } => {
            let now = Utc::now();
            let upcoming = passes::predict_all(catalog, area.area_sqkm(), now, hours);
            if json {
                println!("{}", serde_json::to_string_pretty(&upcoming)?);
            } else {
                println!("{}", report::header(&location, &area));
                println!("{}", report::passes(&upcoming, now));
            }
            Ok(())
        }
        Commands::Coverage {
            resolution,
            frequency,
            months,
            json,
        } => {
            let estimates = coverage::estimate_monthly_cost(
                catalog,
                area.area_sqkm(),
                resolution,
                frequency,
                months,
            )?;
            if json {
                println!("{}", serde_json::to_string_pretty(&estimates)?);
            } else {
                println!("{}", report::header(&location, &area));
                println!("{}", report::coverage(&estimates));
            }
            Ok(())
        }
        Commands::Report { hours } => {
            let now = Utc::now();
            let images = passes::last_available_images(catalog, area.area_sqkm(), now)?;
            let upcoming = passes::predict_all(catalog, area.area_sqkm(), now, hours);
            let monthly =
                coverage::estimate_monthly_cost(catalog, area.area_sqkm(), 5.0, 1.0, 1.0)?;
            println!(
                "{}",
                report::full_report(&location, &area, &images, &upcoming, &monthly, now)
            );
            Ok(())
        }
        Commands::Catalog { .. } | Commands::Locations => Ok(()),
    }
}

/// Explicit coordinates, then a named location, then the configured
/// default, then Brussels.
fn resolve_location(cli: &Cli, config: &Config) -> Result<Location, CliError> {
    if let (Some(lat), Some(lon)) = (cli.lat, cli.lon) {
        return Ok(Location::from_coordinates(lat, lon, cli.location.as_deref())?);
    }
    if let Some(name) = &cli.location {
        return config
            .resolve_location(name)?
            .ok_or_else(|| CliError::UnknownLocation(name.clone()));
    }
    Ok(config.default_location()?.unwrap_or_else(Location::brussels))
}

/// Square of `--area-km` (or the configured size) km² around `location`.
fn resolve_area(cli: &Cli, config: &Config, location: &Location) -> Result<Area, LocationError> {
    let area_km = cli.area_km.unwrap_or(config.area_km);
    Area::from_location(location, area_km.sqrt() / 2.0)
}

/// Prints one rendering, or re-renders on the configured interval until
/// interrupted. Weather is refreshed before every watch iteration.
fn run_view<F>(
    source: &dyn WeatherSource,
    location: &Location,
    watch: bool,
    config: &Config,
    render: F,
) -> Result<(), CliError>
where
    F: Fn(&WeatherCache, DateTime<Utc>) -> Result<String, CliError>,
{
    let mut cache = WeatherCache::load(source, location);
    if !watch {
        println!("{}", render(&cache, Utc::now())?);
        return Ok(());
    }

    let interval = config.watch_interval()?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let mut first = true;
    runtime.block_on(watch_loop(interval, || {
        // The first tick fires immediately and reuses the initial fetch
        if !first {
            cache.refresh(source, location);
        }
        first = false;
        let output = render(&cache, Utc::now())?;
        // Clear screen and home the cursor
        print!("\x1B[2J\x1B[H");
        println!("{}", output);
        println!("\nRefreshing every {}; Ctrl+C to exit", humantime::format_duration(interval));
        Ok(())
    }))
}

async fn watch_loop<F>(interval: Duration, mut tick: F) -> Result<(), CliError>
where
    F: FnMut() -> Result<(), CliError>,
{
    let mut ticker = tokio::time::interval(interval);
    loop {
        let stop = tokio::select! {
            _ = ticker.tick() => false,
            _ = tokio::signal::ctrl_c() => true,
        };
        if stop {
            log::info!("Stopping watch");
            return Ok(());
        }
        tick()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("sat-monitor").chain(args.iter().copied())).unwrap()
    }

    fn config(yaml: &str) -> Config {
        Config::from_str(yaml).unwrap()
    }

    #[test]
    fn coordinates_beat_location_and_config() {
        let cli = cli(&["--lat", "10", "--lon", "-20", "-l", "tokyo", "check"]);
        let location = resolve_location(&cli, &config("location: paris")).unwrap();
        assert_eq!((location.latitude(), location.longitude()), (10.0, -20.0));
        assert_eq!(location.name(), "tokyo");
    }

    #[test]
    fn named_location_beats_config() {
        let cli = cli(&["check", "-l", "tokyo"]);
        let location = resolve_location(&cli, &config("location: paris")).unwrap();
        assert_eq!(location.name(), "Tokyo");
    }

    #[test]
    fn config_default_when_no_flags() {
        let location = resolve_location(&cli(&["check"]), &config("location: paris")).unwrap();
        assert_eq!(location.name(), "Paris");
    }

    #[test]
    fn brussels_when_nothing_is_set() {
        let location = resolve_location(&cli(&["check"]), &Config::default()).unwrap();
        assert_eq!(location, Location::brussels());
    }

    #[test]
    fn unknown_location_name_is_reported() {
        let cli = cli(&["recommend", "--location", "Atlantis"]);
        assert!(matches!(
            resolve_location(&cli, &Config::default()),
            Err(CliError::UnknownLocation(name)) if name == "Atlantis"
        ));
    }

    #[test]
    fn lat_requires_lon() {
        let args = ["sat-monitor", "--lat", "10", "check"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn area_matches_requested_size() {
        let location = Location::brussels();
        let area = resolve_area(&cli(&["check"]), &Config::default(), &location).unwrap();
        assert!((area.area_sqkm() - 100.0).abs() < 1e-6, "{}", area.area_sqkm());

        let area = resolve_area(&cli(&["check"]), &config("area_km: 400"), &location).unwrap();
        assert!((area.area_sqkm() - 400.0).abs() < 1e-6);

        let cli = cli(&["--area-km", "250", "check"]);
        let area = resolve_area(&cli, &config("area_km: 400"), &location).unwrap();
        assert!((area.area_sqkm() - 250.0).abs() < 1e-6);
    }

    #[test]
    fn degenerate_area_sizes_are_rejected() {
        let location = Location::brussels();
        for size in ["inf", "0", "-5", "NaN"] {
            let arg = format!("--area-km={}", size);
            let cli = cli(&[&arg, "check"]);
            assert!(
                matches!(
                    resolve_area(&cli, &Config::default(), &location),
                    Err(LocationError::InvalidBounds { .. })
                ),
                "--area-km {} accepted",
                size
            );
        }
    }
}

//! Search command handler
//!
//! Finds on-duty pharmacies around the current location, explicit
//! coordinates, or a city/district selection.

use crate::config::Config;
use crate::coord::Coordinate;
use crate::error::{Error, Result};
use crate::format::{available_formats, get_formatter, Report};
use crate::geo::get_ip_locator;
use crate::pharmacy::get_directory;
use crate::search::state::{reduce, SearchAction, SearchError, SearchState};
use crate::search::{search_at, search_here, search_manual};
use clap::Args;

/// Search command arguments
#[derive(Args)]
pub struct SearchArgs {
    /// Latitude
    #[arg(long, requires = "lng", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lng: Option<f64>,

    /// Use current location (IP geolocation)
    #[arg(long, conflicts_with_all = ["lat", "lng", "city"])]
    pub here: bool,

    /// Ignore the cached IP location and look it up again
    #[arg(long)]
    pub refresh_location: bool,

    /// City for manual search (see `cities`)
    #[arg(long, requires = "district", conflicts_with_all = ["lat", "lng"])]
    pub city: Option<String>,

    /// District for manual search
    #[arg(long, requires = "city")]
    pub district: Option<String>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Maximum number of pharmacies to show
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Promotional slot after every N results (0 disables)
    #[arg(long)]
    pub ads: Option<usize>,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

/// Run the search command
pub async fn run(args: SearchArgs) -> Result<()> {
    if args.list_formats {
        list_formats();
        return Ok(());
    }

    let config = Config::load()?;

    let format = args.format.clone().unwrap_or(config.defaults.format.clone());
    let formatter = get_formatter(&format)
        .ok_or_else(|| Error::Config(format!("Unknown format: {}", format)))?;
    let limit = args.limit.unwrap_or(config.defaults.limit);
    let ad_interval = args.ads.unwrap_or(config.defaults.ad_interval);

    let state = execute(&args, &config).await?;

    if let Some(error) = &state.error {
        if state.mode == crate::search::LocationMode::Manual && args.city.is_none() {
            eprintln!("{}", error);
            eprintln!("Try: duty-pharmacy search --city <CITY> --district <DISTRICT>");
        }
        return Err(search_failure(error));
    }

    let Some(location) = state.location else {
        return Err(Error::Directory("Search finished without a location".to_string()));
    };

    let label = state
        .location_label
        .unwrap_or_else(|| location.to_string());
    let mut results = state.results;
    results.truncate(limit);

    let report = Report::new(location, label, results, ad_interval);
    let output = formatter.format(&report)?;

    if let Some(path) = args.output {
        std::fs::write(&path, &output)?;
        eprintln!("Output written to {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// Crate error for a search that finished with `error`
fn search_failure(error: &SearchError) -> Error {
    match error {
        SearchError::NoPharmacies => Error::NoPharmacies,
        SearchError::GeolocationFailed => Error::Geo(error.to_string()),
        SearchError::MissingSelection
        | SearchError::InvalidSelection(_)
        | SearchError::LookupFailed => Error::Directory(error.to_string()),
    }
}

/// Run the search the arguments ask for
async fn execute(args: &SearchArgs, config: &Config) -> Result<SearchState> {
    let state = SearchState::default();

    if let (Some(city), Some(district)) = (&args.city, &args.district) {
        let state = reduce(state, SearchAction::EnterManualMode);
        let state = reduce(state, SearchAction::SelectCity(city.clone()));
        let state = reduce(state, SearchAction::SelectDistrict(district.clone()));
        return Ok(search_manual(state).await);
    }

    if let (Some(lat), Some(lng)) = (args.lat, args.lng) {
        let location = Coordinate::new(lat, lng);
        location.validate()?;
        let directory = get_directory(config)?;
        return Ok(search_at(state, location, &directory).await);
    }

    if args.here || config.location.default_here {
        let directory = get_directory(config)?;
        let locator = get_ip_locator();
        if args.refresh_location {
            locator.clear_cache();
        }
        return Ok(search_here(state, &locator, &directory).await);
    }

    Err(Error::InvalidCoordinates(
        "No location specified. Use --lat/--lng, --here, or --city/--district".to_string(),
    ))
}

/// Print available output formats
fn list_formats() {
    println!("Available output formats:");
    for format in available_formats() {
        println!("  {:6} - {}", format.name, format.description);
    }
}

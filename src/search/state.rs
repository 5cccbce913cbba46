//! Search state and its reducer
//!
//! All search progress is held in one `SearchState` value. Every event is a
//! `SearchAction`, and `reduce` produces the next state from the previous
//! one without side effects.

use crate::coord::Coordinate;
use crate::error::Error;
use crate::pharmacy::Pharmacy;
use crate::rank::Ranked;
use serde::Serialize;

/// How the search location is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationMode {
    /// Use the detected current location
    #[default]
    Automatic,
    /// Use a city/district picked by the user
    Manual,
}

/// User-facing search failures
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchError {
    #[error("Could not determine your location. Choose a location manually.")]
    GeolocationFailed,

    #[error("Please select a city and a district.")]
    MissingSelection,

    /// The selection names a city or district that is not in the table
    #[error("{0}. Choose one from the list.")]
    InvalidSelection(String),

    #[error("No on-duty pharmacies found near you.")]
    NoPharmacies,

    #[error("Could not fetch pharmacy information. Please try again later.")]
    LookupFailed,
}

impl From<&Error> for SearchError {
    fn from(err: &Error) -> Self {
        match err {
            Error::NoPharmacies => Self::NoPharmacies,
            Error::UnknownCity(_) | Error::UnknownDistrict { .. } => {
                Self::InvalidSelection(err.to_string())
            }
            Error::Geo(_) => Self::GeolocationFailed,
            _ => Self::LookupFailed,
        }
    }
}

/// Everything the presentation layer needs to render a search
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchState {
    pub mode: LocationMode,
    pub selected_city: Option<String>,
    pub selected_district: Option<String>,
    pub loading: bool,
    pub error: Option<SearchError>,
    pub location: Option<Coordinate>,
    /// Human-readable name of `location`
    pub location_label: Option<String>,
    pub results: Vec<Ranked<Pharmacy>>,
}

/// Events that move a search forward
#[derive(Debug, Clone, PartialEq)]
pub enum SearchAction {
    /// "Use my location" pressed
    RequestLocation,
    /// A position is known; the lookup is still pending
    LocationResolved { location: Coordinate, label: String },
    /// The provider failed
    LocationFailed,
    EnterManualMode,
    LeaveManualMode,
    /// A city was picked; clears the district
    SelectCity(String),
    SelectDistrict(String),
    /// "Search" pressed in manual mode
    SubmitManualSearch,
    /// The lookup finished with ranked results for `location`
    ResultsLoaded {
        location: Coordinate,
        results: Vec<Ranked<Pharmacy>>,
    },
    /// The lookup failed
    LookupFailed(SearchError),
    /// Discard results and go back to the start screen
    Reset,
}

impl SearchState {
    /// Whether a manual search may be submitted
    pub fn can_submit(&self) -> bool {
        !self.loading && self.selected_city.is_some() && self.selected_district.is_some()
    }

    /// Whether results are on screen
    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }
}

/// Compute the next state
pub fn reduce(state: SearchState, action: SearchAction) -> SearchState {
    match action {
        SearchAction::RequestLocation => SearchState {
            loading: true,
            error: None,
            results: Vec::new(),
            ..state
        },

        SearchAction::LocationResolved { location, label } => SearchState {
            location: Some(location),
            location_label: Some(label),
            ..state
        },

        SearchAction::LocationFailed => SearchState {
            loading: false,
            error: Some(SearchError::GeolocationFailed),
            mode: LocationMode::Manual,
            ..state
        },

        SearchAction::EnterManualMode => SearchState {
            mode: LocationMode::Manual,
            ..state
        },

        SearchAction::LeaveManualMode => SearchState {
            mode: LocationMode::Automatic,
            ..state
        },

        SearchAction::SelectCity(city) => SearchState {
            selected_city: non_empty(city),
            selected_district: None,
            ..state
        },

        SearchAction::SelectDistrict(district) => SearchState {
            selected_district: non_empty(district),
            ..state
        },

        SearchAction::SubmitManualSearch => {
            if state.selected_city.is_none() || state.selected_district.is_none() {
                SearchState {
                    error: Some(SearchError::MissingSelection),
                    ..state
                }
            } else {
                SearchState {
                    loading: true,
                    error: None,
                    results: Vec::new(),
                    ..state
                }
            }
        }

        SearchAction::ResultsLoaded { location, results } => SearchState {
            loading: false,
            error: None,
            location: Some(location),
            results,
            ..state
        },

        SearchAction::LookupFailed(error) => SearchState {
            loading: false,
            error: Some(error),
            ..state
        },

        SearchAction::Reset => SearchState {
            mode: state.mode,
            ..SearchState::default()
        },
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

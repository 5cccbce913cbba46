//! Search orchestration
//!
//! Drives a `SearchState` through one search: resolve a location, query a
//! directory, rank the answer. Providers are passed in, so the same flow
//! serves the CLI, the HTTP API and tests.

pub mod state;

use crate::geo::Geolocator;
use crate::pharmacy::mock::MockDirectory;
use crate::pharmacy::PharmacyDirectory;
use crate::rank::rank_by_distance;
use state::{reduce, SearchAction, SearchError, SearchState};
use tracing::{info, warn};

pub use state::LocationMode;

/// Search around the current location
///
/// A geolocation failure leaves the state in manual mode with an error set.
pub async fn search_here<G, D>(state: SearchState, geolocator: &G, directory: &D) -> SearchState
where
    G: Geolocator,
    D: PharmacyDirectory,
{
    let state = reduce(state, SearchAction::RequestLocation);

    let found = match geolocator.locate().await {
        Ok(found) => {
            info!("Searching around {} ({})", found.display_name, found.coordinate);
            found
        }
        Err(e) => {
            warn!("Geolocation failed: {}", e);
            return reduce(state, SearchAction::LocationFailed);
        }
    };

    let state = reduce(
        state,
        SearchAction::LocationResolved {
            location: found.coordinate,
            label: found.display_name,
        },
    );
    lookup(state, directory).await
}

/// Search around a known coordinate
pub async fn search_at<D>(
    state: SearchState,
    location: crate::coord::Coordinate,
    directory: &D,
) -> SearchState
where
    D: PharmacyDirectory,
{
    let state = reduce(state, SearchAction::RequestLocation);
    let state = reduce(
        state,
        SearchAction::LocationResolved {
            location,
            label: location.to_string(),
        },
    );
    lookup(state, directory).await
}

/// Search the city/district currently selected in `state`
pub async fn search_manual(state: SearchState) -> SearchState {
    let state = reduce(state, SearchAction::SubmitManualSearch);
    if !state.loading {
        return state;
    }

    let (Some(city), Some(district)) = (&state.selected_city, &state.selected_district) else {
        return state;
    };

    let directory = match MockDirectory::for_selection(city, district) {
        Ok(directory) => directory,
        Err(e) => {
            warn!("Manual selection rejected: {}", e);
            return reduce(state, SearchAction::LookupFailed(SearchError::from(&e)));
        }
    };

    info!("Searching manually in {}", directory.label());
    let state = reduce(
        state,
        SearchAction::LocationResolved {
            location: directory.center(),
            label: directory.label(),
        },
    );
    lookup(state, &directory).await
}

/// Query `directory` at the state's location and load the ranked results
async fn lookup<D: PharmacyDirectory>(state: SearchState, directory: &D) -> SearchState {
    let Some(location) = state.location else {
        return reduce(state, SearchAction::LookupFailed(SearchError::LookupFailed));
    };

    match directory.on_duty(location).await {
        Ok(pharmacies) => {
            let results = rank_by_distance(location, pharmacies);
            info!("{} directory returned {} pharmacies", directory.name(), results.len());
            reduce(state, SearchAction::ResultsLoaded { location, results })
        }
        Err(e) => {
            warn!("{} directory lookup failed: {}", directory.name(), e);
            reduce(state, SearchAction::LookupFailed(SearchError::from(&e)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coordinate;
    use crate::error::{Error, Result};
    use crate::geo::GeoLocation;
    use crate::pharmacy::Pharmacy;

    struct FixedLocator(Option<Coordinate>);

    impl Geolocator for FixedLocator {
        async fn locate(&self) -> Result<GeoLocation> {
            self.0
                .map(|coordinate| GeoLocation {
                    coordinate,
                    display_name: "test".to_string(),
                })
                .ok_or_else(|| Error::Geo("denied".to_string()))
        }
    }

    struct FixedDirectory(Vec<Pharmacy>);

    impl PharmacyDirectory for FixedDirectory {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn on_duty(&self, _location: Coordinate) -> Result<Vec<Pharmacy>> {
            if self.0.is_empty() {
                Err(Error::NoPharmacies)
            } else {
                Ok(self.0.clone())
            }
        }
    }

    fn here() -> Coordinate {
        Coordinate::new(41.0082, 28.9784)
    }

    fn directory() -> FixedDirectory {
        FixedDirectory(vec![
            Pharmacy::new("Far", "", "", here().offset(0.05, 0.0)),
            Pharmacy::new("Near", "", "", here().offset(0.01, 0.0)),
        ])
    }

    #[tokio::test]
    async fn test_search_here_ranks_results() {
        let state = search_here(SearchState::default(), &FixedLocator(Some(here())), &directory()).await;

        assert!(!state.loading);
        assert_eq!(state.location, Some(here()));
        assert_eq!(state.location_label.as_deref(), Some("test"));
        let names: Vec<&str> = state.results.iter().map(|r| r.entity.name.as_str()).collect();
        assert_eq!(names, vec!["Near", "Far"]);
    }

    #[tokio::test]
    async fn test_search_here_falls_back_to_manual() {
        let state = search_here(SearchState::default(), &FixedLocator(None), &directory()).await;

        assert_eq!(state.mode, LocationMode::Manual);
        assert_eq!(state.error, Some(SearchError::GeolocationFailed));
        assert!(state.results.is_empty());
    }

    #[tokio::test]
    async fn test_search_at_with_empty_directory() {
        let state = search_at(SearchState::default(), here(), &FixedDirectory(Vec::new())).await;

        assert!(!state.loading);
        assert_eq!(state.error, Some(SearchError::NoPharmacies));
    }

    #[tokio::test]
    async fn test_search_manual() {
        let state = reduce(SearchState::default(), SearchAction::EnterManualMode);
        let state = reduce(state, SearchAction::SelectCity("istanbul".to_string()));
        let state = reduce(state, SearchAction::SelectDistrict("Üsküdar".to_string()));

        let state = search_manual(state).await;

        assert!(state.error.is_none());
        assert_eq!(state.results.len(), 3);
        assert_eq!(state.location, Some(Coordinate::new(41.0082, 28.9784)));
        assert_eq!(state.results[0].entity.address, "Üsküdar, İstanbul");
        assert_eq!(state.location_label.as_deref(), Some("Üsküdar, İstanbul"));
    }

    #[tokio::test]
    async fn test_search_manual_missing_selection() {
        let state = search_manual(SearchState::default()).await;
        assert_eq!(state.error, Some(SearchError::MissingSelection));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_search_manual_unknown_city() {
        let state = reduce(SearchState::default(), SearchAction::SelectCity("Paris".to_string()));
        let state = reduce(state, SearchAction::SelectDistrict("Louvre".to_string()));

        let state = search_manual(state).await;
        assert!(matches!(state.error, Some(SearchError::InvalidSelection(_))));
        assert!(state.error.unwrap().to_string().contains("Paris"));
        assert!(!state.loading);
    }
}

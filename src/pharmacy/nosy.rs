//! NosyAPI on-duty pharmacy directory
//!
//! Queries the `pharmacies-on-duty/locations` endpoint with a bearer token.
//! The service returns pharmacies around a coordinate; distance ranking is
//! done locally.

use crate::config::Config;
use crate::coord::Coordinate;
use crate::error::{Error, Result};
use crate::pharmacy::{Pharmacy, PharmacyDirectory};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("duty-pharmacy/", env!("CARGO_PKG_VERSION"));
const LOCATIONS_PATH: &str = "pharmacies-on-duty/locations";

/// NosyAPI directory client
#[derive(Debug, Clone)]
pub struct NosyDirectory {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

/// Response envelope
#[derive(Debug, Deserialize)]
struct NosyResponse {
    data: Option<Vec<NosyPharmacy>>,
}

/// A single pharmacy as the service reports it
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NosyPharmacy {
    pharmacy_name: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    phone: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl From<NosyPharmacy> for Pharmacy {
    /// Missing coordinates become `NaN` so the ranker places them last
    fn from(p: NosyPharmacy) -> Self {
        let coordinate = Coordinate::new(
            p.latitude.unwrap_or(f64::NAN),
            p.longitude.unwrap_or(f64::NAN),
        );
        Pharmacy::new(p.pharmacy_name, p.address, p.phone, coordinate)
    }
}

impl NosyDirectory {
    /// Create a client against `base_url` authenticating with `token`
    pub fn new(base_url: impl Into<String>, token: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// Create a client from the `[api]` config section
    ///
    /// Fails when no API token is configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        let token = config.api_token();
        if token.is_empty() {
            return Err(Error::Config(
                "No API token configured (set api.token or DUTY_PHARMACY_TOKEN)".to_string(),
            ));
        }
        Self::new(
            config.api.base_url.clone(),
            token,
            Duration::from_secs(config.api.timeout_secs),
        )
    }

    fn locations_url(&self) -> String {
        format!("{}/{}", self.base_url, LOCATIONS_PATH)
    }
}

impl PharmacyDirectory for NosyDirectory {
    fn name(&self) -> &'static str {
        "nosy"
    }

    async fn on_duty(&self, location: Coordinate) -> Result<Vec<Pharmacy>> {
        debug!("Querying on-duty pharmacies around {}", location);

        let response = self
            .client
            .get(self.locations_url())
            .query(&[("latitude", location.lat), ("longitude", location.lng)])
            .bearer_auth(&self.token)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| Error::Directory(format!("Pharmacy lookup request failed: {}", e)))?;

        if !response.status().is_success() {
            warn!("Pharmacy lookup returned status {}", response.status());
            return Err(Error::Directory(format!(
                "Pharmacy lookup returned status: {}",
                response.status()
            )));
        }

        let body: NosyResponse = response
            .json()
            .await
            .map_err(|e| Error::Directory(format!("Failed to parse pharmacy response: {}", e)))?;

        let pharmacies: Vec<Pharmacy> = body
            .data
            .unwrap_or_default()
            .into_iter()
            .map(Pharmacy::from)
            .collect();

        if pharmacies.is_empty() {
            return Err(Error::NoPharmacies);
        }

        debug!("Pharmacy lookup returned {} entries", pharmacies.len());
        Ok(pharmacies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TOKEN: &str = "test-token";

    fn directory(server: &MockServer) -> NosyDirectory {
        NosyDirectory::new(server.uri(), TOKEN, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_on_duty_parses_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pharmacies-on-duty/locations"))
            .and(query_param("latitude", "41.0082"))
            .and(query_param("longitude", "28.9784"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "success",
                "data": [
                    {
                        "pharmacyName": "Şifa Eczanesi",
                        "address": "Fatih, İstanbul",
                        "phone": "02125551122",
                        "latitude": 41.0190,
                        "longitude": 28.9400
                    },
                    {
                        "pharmacyName": "Deniz Eczanesi",
                        "address": "Beyoğlu, İstanbul",
                        "phone": "02125553344",
                        "latitude": 41.0330,
                        "longitude": 28.9770
                    }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let pharmacies = directory(&server)
            .on_duty(Coordinate::new(41.0082, 28.9784))
            .await
            .unwrap();

        assert_eq!(pharmacies.len(), 2);
        assert_eq!(pharmacies[0].name, "Şifa Eczanesi");
        assert_eq!(pharmacies[1].coordinate, Coordinate::new(41.0330, 28.9770));
        assert!(pharmacies.iter().all(|p| p.is_open));
    }

    #[tokio::test]
    async fn test_missing_coordinates_become_nan() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pharmacies-on-duty/locations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{ "pharmacyName": "Nowhere Eczanesi", "latitude": 41.0 }]
            })))
            .mount(&server)
            .await;

        let pharmacies = directory(&server)
            .on_duty(Coordinate::new(41.0, 29.0))
            .await
            .unwrap();

        assert_eq!(pharmacies[0].address, "");
        assert!(pharmacies[0].coordinate.lng.is_nan());
        assert!(!pharmacies[0].coordinate.is_finite());
    }

    #[tokio::test]
    async fn test_empty_data_is_no_pharmacies() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })))
            .mount(&server)
            .await;

        let result = directory(&server).on_duty(Coordinate::new(41.0, 29.0)).await;
        assert!(matches!(result, Err(Error::NoPharmacies)));
    }

    #[tokio::test]
    async fn test_missing_data_is_no_pharmacies() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "status": "ok" })))
            .mount(&server)
            .await;

        let result = directory(&server).on_duty(Coordinate::new(41.0, 29.0)).await;
        assert!(matches!(result, Err(Error::NoPharmacies)));
    }

    #[tokio::test]
    async fn test_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let result = directory(&server).on_duty(Coordinate::new(41.0, 29.0)).await;
        match result {
            Err(Error::Directory(msg)) => assert!(msg.contains("401")),
            other => panic!("expected directory error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_config_requires_token() {
        let mut config = Config::default();
        config.api.token = String::new();
        if std::env::var(crate::constants::api::TOKEN_ENV_VAR).is_err() {
            assert!(NosyDirectory::from_config(&config).is_err());
        }

        config.api.token = "abc".to_string();
        let directory = NosyDirectory::from_config(&config).unwrap();
        assert_eq!(directory.name(), "nosy");
        assert!(directory.locations_url().ends_with("/service/pharmacies-on-duty/locations"));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let directory = NosyDirectory::new("http://localhost:1/", "t", Duration::from_secs(1)).unwrap();
        assert_eq!(
            directory.locations_url(),
            "http://localhost:1/pharmacies-on-duty/locations"
        );
    }
}

//! HTTP-based `RouteProvider` using the Google Routes `computeRoutes` method.
//!
//! One POST is sent per travel mode. The response is restricted with a field
//! mask to the first route's distance and duration.
//!
//! # Example
//!
//! ```no_run
//! use travelcompare_core::{RouteQuery, TravelDataOrchestrator};
//! use travelcompare_data::routing::{RoutesApiConfig, RoutesApiProvider};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = RoutesApiProvider::new(RoutesApiConfig::from_env()?)?;
//! let orchestrator = TravelDataOrchestrator::new(provider);
//! let query = RouteQuery::new("Bern", "Zürich", None)?;
//!
//! let report = orchestrator.get_all_travel_data(&query).await;
//! println!("{} modes routed", report.routes_found());
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use reqwest::header::REFERER;
use thiserror::Error;
use travelcompare_core::{RawTravelData, RouteError, RouteProvider, RouteRequest};

use super::config::RoutesApiConfig;
use super::wire::{ComputeRoutesRequest, ComputeRoutesResponse};

/// Header carrying the API key.
const API_KEY_HEADER: &str = "X-Goog-Api-Key";

/// Header restricting the response fields.
const FIELD_MASK_HEADER: &str = "X-Goog-FieldMask";

/// Response fields requested from the backend.
pub const FIELD_MASK: &str = "routes.duration,routes.distanceMeters";

/// Error type for [`RoutesApiProvider`] construction failures.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Route provider backed by the Google Routes API.
///
/// The client is reused across requests, so the five concurrent mode
/// requests of one comparison share a connection pool.
#[derive(Debug)]
pub struct RoutesApiProvider {
    client: Client,
    config: RoutesApiConfig,
    endpoint: String,
}

impl RoutesApiProvider {
    /// Create a provider from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: RoutesApiConfig) -> Result<Self, ProviderBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let endpoint = config.endpoint_url();
        Ok(Self {
            client,
            config,
            endpoint,
        })
    }

    /// Configuration this provider was built from.
    #[must_use]
    pub const fn config(&self) -> &RoutesApiConfig {
        &self.config
    }

    /// Convert a reqwest error to a `RouteError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error) -> RouteError {
        if error.is_timeout() {
            return RouteError::Timeout {
                url: self.endpoint.clone(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return RouteError::Http {
                url: self.endpoint.clone(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        RouteError::Network {
            url: self.endpoint.clone(),
            message: error.to_string(),
        }
    }
}

#[async_trait]
impl RouteProvider for RoutesApiProvider {
    async fn fetch_route(
        &self,
        request: &RouteRequest,
    ) -> Result<Option<RawTravelData>, RouteError> {
        let payload = ComputeRoutesRequest::from_request(request, &self.config.language_code);
        debug!("POST {} for mode {}", self.endpoint, request.mode);

        let mut builder = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, self.config.api_key())
            .header(FIELD_MASK_HEADER, FIELD_MASK)
            .json(&payload);
        if let Some(referer) = &self.config.referer {
            builder = builder.header(REFERER, referer);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err))?;

        let body: ComputeRoutesResponse =
            response.json().await.map_err(|err| RouteError::Parse {
                message: err.to_string(),
            })?;

        body.into_first_route()
    }
}

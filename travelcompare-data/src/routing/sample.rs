//! Offline provider answering every request with a canned route.

use async_trait::async_trait;
use log::debug;
use travelcompare_core::{RawTravelData, RouteError, RouteProvider, RouteRequest};

use super::wire::ComputeRoutesResponse;

/// Response body served by [`SampleRouteProvider`], as the backend would
/// send it.
pub const SAMPLE_RESPONSE: &str = r#"{"routes":[{"distanceMeters":121556,"duration":"5535s"}]}"#;

/// Route provider that never touches the network.
///
/// Every mode receives the same route (121 km in 1h 32min), which is
/// useful for demos and for exercising the rendering path without an API
/// key. The canned body goes through the same decoding as a live response.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleRouteProvider;

#[async_trait]
impl RouteProvider for SampleRouteProvider {
    async fn fetch_route(
        &self,
        request: &RouteRequest,
    ) -> Result<Option<RawTravelData>, RouteError> {
        debug!("serving sample route for mode {}", request.mode);
        let body: ComputeRoutesResponse =
            serde_json::from_str(SAMPLE_RESPONSE).map_err(|err| RouteError::Parse {
                message: err.to_string(),
            })?;
        body.into_first_route()
    }
}

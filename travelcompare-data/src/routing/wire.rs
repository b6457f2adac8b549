//! Google Routes API `computeRoutes` request and response types.
//!
//! Only the fields selected by the `routes.duration,routes.distanceMeters`
//! field mask are modelled.
//!
//! See: <https://developers.google.com/maps/documentation/routes/reference/rest/v2/TopLevel/computeRoutes>

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use travelcompare_core::{RawTravelData, RouteError, RouteRequest, TravelMode};

/// Routing preference sent for traffic-aware modes.
const TRAFFIC_AWARE: &str = "TRAFFIC_AWARE";

/// An address-based waypoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Waypoint {
    /// Free-form address resolved by the backend.
    pub address: String,
}

/// Body of a `computeRoutes` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeRoutesRequest {
    /// Start of the route.
    pub origin: Waypoint,
    /// End of the route.
    pub destination: Waypoint,
    /// Transport mode.
    pub travel_mode: TravelMode,
    /// Language for any textual fields in the response.
    pub language_code: String,
    /// Present only for modes that support traffic-aware routing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_preference: Option<&'static str>,
    /// RFC 3339 departure instant; present only for future departures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<String>,
}

impl ComputeRoutesRequest {
    /// Build the wire payload for a single-mode request.
    #[must_use]
    pub fn from_request(request: &RouteRequest, language_code: &str) -> Self {
        Self {
            origin: Waypoint {
                address: request.origin.clone(),
            },
            destination: Waypoint {
                address: request.destination.clone(),
            },
            travel_mode: request.mode,
            language_code: language_code.to_owned(),
            routing_preference: request.is_traffic_aware().then_some(TRAFFIC_AWARE),
            departure_time: request
                .departure_time
                .map(|departure| departure.to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }
}

/// Body of a `computeRoutes` response.
///
/// The backend omits `routes` entirely (answering `{}`) when nothing was
/// found.
#[derive(Debug, Default, Deserialize)]
pub struct ComputeRoutesResponse {
    /// Candidate routes, best first.
    #[serde(default)]
    pub routes: Vec<ApiRoute>,
}

/// A single route restricted to the masked fields.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRoute {
    /// Route length in metres. Omitted by the backend when zero.
    #[serde(default)]
    pub distance_meters: u64,
    /// Duration as a protobuf duration string, e.g. `"5535s"`. Omitted by
    /// the backend when zero.
    #[serde(default)]
    pub duration: Option<String>,
}

impl ComputeRoutesResponse {
    /// Convert the first route, if any, into raw travel data.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Parse`] when the first route's duration is
    /// malformed.
    pub fn into_first_route(self) -> Result<Option<RawTravelData>, RouteError> {
        self.routes
            .into_iter()
            .next()
            .map(ApiRoute::into_raw)
            .transpose()
    }
}

impl ApiRoute {
    fn into_raw(self) -> Result<RawTravelData, RouteError> {
        let seconds = match self.duration {
            Some(duration) => {
                parse_duration_seconds(&duration).ok_or_else(|| RouteError::Parse {
                    message: format!("unrecognised duration {duration:?}"),
                })?
            }
            None => 0,
        };
        Ok(RawTravelData::new(self.distance_meters, seconds))
    }
}

/// Parse a duration string of the form `"<seconds>s"`.
///
/// The trailing `s` is optional. Fractional seconds are truncated, so
/// `"1.5s"` reads as one second.
#[must_use]
pub fn parse_duration_seconds(duration: &str) -> Option<u64> {
    let trimmed = duration.trim();
    let number = trimmed.strip_suffix('s').unwrap_or(trimmed);
    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
    if !fraction.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    whole.parse().ok()
}

//! Deterministic test doubles for the routing seam.
//!
//! [`StubRouteProvider`] answers every mode from a canned table and records
//! the requests it receives; [`FixedClock`] pins "now" so departure-time
//! filtering is reproducible.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::clock::Clock;
use crate::{ModeMap, RawTravelData, RouteError, RouteProvider, RouteRequest, TravelMode};

/// Clock that always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum StubOutcome {
    Route(RawTravelData),
    NoRoute,
    Error(RouteError),
}

/// Stub [`RouteProvider`] for testing.
///
/// # Example
///
/// ```
/// use travelcompare_core::test_support::StubRouteProvider;
/// use travelcompare_core::{RawTravelData, TravelMode};
///
/// let provider = StubRouteProvider::with_route(RawTravelData::new(1_000, 60))
///     .with_no_route(TravelMode::Transit)
///     .with_mode_route(TravelMode::Walk, RawTravelData::new(900, 720));
/// assert!(provider.requests().is_empty());
/// ```
#[derive(Debug)]
pub struct StubRouteProvider {
    outcomes: ModeMap<StubOutcome>,
    requests: Mutex<Vec<RouteRequest>>,
}

impl StubRouteProvider {
    /// Create a provider that returns `raw` for every mode.
    #[must_use]
    pub fn with_route(raw: RawTravelData) -> Self {
        Self::from_outcomes(ModeMap::from_fn(|_| StubOutcome::Route(raw)))
    }

    /// Create a provider that finds no route for any mode.
    #[must_use]
    pub fn without_routes() -> Self {
        Self::from_outcomes(ModeMap::from_fn(|_| StubOutcome::NoRoute))
    }

    fn from_outcomes(outcomes: ModeMap<StubOutcome>) -> Self {
        Self {
            outcomes,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Return `raw` for `mode`.
    #[must_use]
    pub fn with_mode_route(mut self, mode: TravelMode, raw: RawTravelData) -> Self {
        *self.outcomes.get_mut(mode) = StubOutcome::Route(raw);
        self
    }

    /// Report "no route" for `mode`.
    #[must_use]
    pub fn with_no_route(mut self, mode: TravelMode) -> Self {
        *self.outcomes.get_mut(mode) = StubOutcome::NoRoute;
        self
    }

    /// Fail `mode` with `error`.
    #[must_use]
    pub fn with_error(mut self, mode: TravelMode, error: RouteError) -> Self {
        *self.outcomes.get_mut(mode) = StubOutcome::Error(error);
        self
    }

    /// Requests received so far, in arrival order.
    #[must_use]
    pub fn requests(&self) -> Vec<RouteRequest> {
        self.lock_requests().clone()
    }

    fn lock_requests(&self) -> MutexGuard<'_, Vec<RouteRequest>> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl RouteProvider for StubRouteProvider {
    async fn fetch_route(
        &self,
        request: &RouteRequest,
    ) -> Result<Option<RawTravelData>, RouteError> {
        self.lock_requests().push(request.clone());
        match self.outcomes.get(request.mode) {
            StubOutcome::Route(raw) => Ok(Some(*raw)),
            StubOutcome::NoRoute => Ok(None),
            StubOutcome::Error(error) => Err(error.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RouteQuery;
    use rstest::rstest;

    fn request(mode: TravelMode) -> RouteRequest {
        let query = RouteQuery::new("Bern", "Thun", None).expect("valid query");
        RouteRequest::for_mode(&query, mode, Utc::now())
    }

    #[rstest]
    #[tokio::test]
    async fn answers_from_table() {
        let provider = StubRouteProvider::without_routes()
            .with_mode_route(TravelMode::Walk, RawTravelData::new(10, 20))
            .with_error(
                TravelMode::Drive,
                RouteError::Parse {
                    message: "bad body".to_owned(),
                },
            );

        let walk = provider.fetch_route(&request(TravelMode::Walk)).await;
        let drive = provider.fetch_route(&request(TravelMode::Drive)).await;
        let transit = provider.fetch_route(&request(TravelMode::Transit)).await;

        assert_eq!(walk, Ok(Some(RawTravelData::new(10, 20))));
        assert!(matches!(drive, Err(RouteError::Parse { .. })));
        assert_eq!(transit, Ok(None));
        assert_eq!(provider.requests().len(), 3);
    }
}

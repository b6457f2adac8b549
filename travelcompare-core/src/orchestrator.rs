//! Fan a query out to every travel mode and gather the results.

use futures_util::future::join_all;
use log::{info, warn};

use crate::clock::{Clock, SystemClock};
use crate::route::{RouteProvider, RouteQuery, RouteRequest};
use crate::sink::TravelDataSink;
use crate::{AllTravelDataRaw, RawTravelData, TravelDataReport, TravelMode};

/// Requests a route for each [`TravelMode`] and aggregates the answers.
///
/// All five requests run concurrently and the report is produced once every
/// one of them has settled. A failed or empty answer for one mode only leaves
/// that mode absent; it never affects the others and never surfaces as an
/// error. Nothing is cached between calls.
///
/// # Examples
///
/// ```
/// use travelcompare_core::test_support::StubRouteProvider;
/// use travelcompare_core::{RawTravelData, RouteQuery, TravelDataOrchestrator, TravelMode};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let provider = StubRouteProvider::with_route(RawTravelData::new(2_400, 600))
///     .with_no_route(TravelMode::Transit);
/// let orchestrator = TravelDataOrchestrator::new(provider);
/// let query = RouteQuery::new("Bern", "Thun", None).unwrap();
///
/// let report = orchestrator.get_all_travel_data(&query).await;
/// assert_eq!(report.routes_found(), 4);
/// assert!(report.formatted.get(TravelMode::Transit).is_none());
/// # });
/// ```
#[derive(Debug)]
pub struct TravelDataOrchestrator<P, C = SystemClock> {
    provider: P,
    clock: C,
}

impl<P: RouteProvider> TravelDataOrchestrator<P> {
    /// Create an orchestrator that reads the wall clock.
    #[must_use]
    pub const fn new(provider: P) -> Self {
        Self::with_clock(provider, SystemClock)
    }
}

impl<P: RouteProvider, C: Clock> TravelDataOrchestrator<P, C> {
    /// Create an orchestrator with an explicit clock.
    #[must_use]
    pub const fn with_clock(provider: P, clock: C) -> Self {
        Self { provider, clock }
    }

    /// Borrow the underlying provider.
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Fetch every mode for `query` and return the aggregate.
    pub async fn get_all_travel_data(&self, query: &RouteQuery) -> TravelDataReport {
        let now = self.clock.now();
        let requests = TravelMode::ALL.map(|mode| RouteRequest::for_mode(query, mode, now));
        let outcomes = join_all(requests.iter().map(|request| self.fetch_mode(request))).await;
        let raw: AllTravelDataRaw = outcomes.into_iter().flatten().collect();
        TravelDataReport::from_raw(raw)
    }

    /// Fetch every mode for `query` and hand the aggregate to `sink`.
    pub async fn publish_all_travel_data<S>(&self, query: &RouteQuery, sink: &mut S)
    where
        S: TravelDataSink + ?Sized,
    {
        let report = self.get_all_travel_data(query).await;
        sink.deliver(report);
    }

    async fn fetch_mode(&self, request: &RouteRequest) -> Option<(TravelMode, RawTravelData)> {
        let mode = request.mode;
        match self.provider.fetch_route(request).await {
            Ok(Some(raw)) => {
                info!(
                    "Received a route for mode {mode} (from '{}' to '{}')",
                    request.origin, request.destination
                );
                Some((mode, raw))
            }
            Ok(None) => {
                info!(
                    "No route found for mode {mode} (from '{}' to '{}')",
                    request.origin, request.destination
                );
                None
            }
            Err(err) => {
                warn!("Route request for mode {mode} failed: {err}");
                None
            }
        }
    }
}

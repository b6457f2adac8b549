//! Routing backend trait.

use async_trait::async_trait;

use super::error::RouteError;
use super::request::RouteRequest;
use crate::RawTravelData;

/// Fetch the best route for a single travel mode.
///
/// `Ok(None)` means the backend answered but found no route; `Err` means the
/// backend could not be asked or its answer could not be read. Callers treat
/// both as "unavailable" and only distinguish them when logging.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use travelcompare_core::{RawTravelData, RouteError, RouteProvider, RouteRequest, TravelMode};
///
/// struct WalkOnly;
///
/// #[async_trait]
/// impl RouteProvider for WalkOnly {
///     async fn fetch_route(
///         &self,
///         request: &RouteRequest,
///     ) -> Result<Option<RawTravelData>, RouteError> {
///         Ok((request.mode == TravelMode::Walk).then(|| RawTravelData::new(400, 300)))
///     }
/// }
/// ```
#[async_trait]
pub trait RouteProvider: Send + Sync {
    /// Return the first route for `request`, if any.
    async fn fetch_route(&self, request: &RouteRequest)
    -> Result<Option<RawTravelData>, RouteError>;
}

#[async_trait]
impl<P: RouteProvider + ?Sized> RouteProvider for Box<P> {
    async fn fetch_route(
        &self,
        request: &RouteRequest,
    ) -> Result<Option<RawTravelData>, RouteError> {
        (**self).fetch_route(request).await
    }
}

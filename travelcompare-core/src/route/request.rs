//! User queries and the per-mode requests derived from them.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::TravelMode;

/// Errors returned by [`RouteQuery::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// An address was empty or whitespace.
    #[error("{field} address must not be empty")]
    BlankAddress {
        /// Which address was blank (`"origin"` or `"destination"`).
        field: &'static str,
    },
}

/// A comparison request entered by the user.
///
/// # Examples
///
/// ```
/// use travelcompare_core::RouteQuery;
///
/// # fn main() -> Result<(), travelcompare_core::QueryError> {
/// let query = RouteQuery::new(" Bern ", "Zürich", None)?;
/// assert_eq!(query.origin(), "Bern");
/// assert!(RouteQuery::new("", "Zürich", None).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteQuery {
    origin: String,
    destination: String,
    departure_time: Option<DateTime<Utc>>,
}

impl RouteQuery {
    /// Validate and construct a query. Addresses are trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::BlankAddress`] when either address is empty
    /// after trimming.
    pub fn new(
        origin: impl AsRef<str>,
        destination: impl AsRef<str>,
        departure_time: Option<DateTime<Utc>>,
    ) -> Result<Self, QueryError> {
        Ok(Self {
            origin: Self::require_address(origin.as_ref(), "origin")?,
            destination: Self::require_address(destination.as_ref(), "destination")?,
            departure_time,
        })
    }

    fn require_address(address: &str, field: &'static str) -> Result<String, QueryError> {
        let trimmed = address.trim();
        if trimmed.is_empty() {
            return Err(QueryError::BlankAddress { field });
        }
        Ok(trimmed.to_owned())
    }

    /// Start address.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// End address.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Requested departure time, if any.
    #[must_use]
    pub const fn departure_time(&self) -> Option<DateTime<Utc>> {
        self.departure_time
    }
}

/// A single-mode request handed to a [`crate::RouteProvider`].
///
/// Built by [`RouteRequest::for_mode`], which drops departure times that are
/// not strictly in the future.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    /// Start address.
    pub origin: String,
    /// End address.
    pub destination: String,
    /// Mode to route for.
    pub mode: TravelMode,
    /// Departure time, present only when it lies after the request instant.
    pub departure_time: Option<DateTime<Utc>>,
}

impl RouteRequest {
    /// Derive the request for `mode` as seen at instant `now`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{Duration, Utc};
    /// use travelcompare_core::{RouteQuery, RouteRequest, TravelMode};
    ///
    /// # fn main() -> Result<(), travelcompare_core::QueryError> {
    /// let now = Utc::now();
    /// let past = RouteQuery::new("Bern", "Thun", Some(now - Duration::hours(1)))?;
    /// let request = RouteRequest::for_mode(&past, TravelMode::Drive, now);
    /// assert!(request.departure_time.is_none());
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn for_mode(query: &RouteQuery, mode: TravelMode, now: DateTime<Utc>) -> Self {
        Self {
            origin: query.origin.clone(),
            destination: query.destination.clone(),
            mode,
            departure_time: query.departure_time.filter(|departure| *departure > now),
        }
    }

    /// Whether the backend should use traffic-aware routing.
    #[must_use]
    pub const fn is_traffic_aware(&self) -> bool {
        self.mode.is_traffic_aware()
    }
}

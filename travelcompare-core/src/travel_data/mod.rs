//! Per-mode travel results and the aggregates built from them.
//!
//! A request cycle yields one [`TravelDataReport`]: the raw distance/duration
//! pairs returned by the backend and their formatted counterparts, each keyed
//! by [`TravelMode`](crate::TravelMode). A mode without a route is `None` in
//! both halves.

mod mode_map;

pub use mode_map::ModeMap;

use serde::{Deserialize, Serialize};

use crate::format::{format_distance, format_duration};

/// Unformatted distance and duration for a single route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTravelData {
    /// Route length in metres.
    pub distance_meters: u64,
    /// Travel time in seconds.
    pub duration_seconds: u64,
}

impl RawTravelData {
    /// Construct a raw travel record.
    #[must_use]
    pub const fn new(distance_meters: u64, duration_seconds: u64) -> Self {
        Self {
            distance_meters,
            duration_seconds,
        }
    }
}

/// Display strings derived from a [`RawTravelData`].
///
/// # Examples
///
/// ```
/// use travelcompare_core::{FormattedTravelData, RawTravelData};
///
/// let formatted = FormattedTravelData::from(&RawTravelData::new(121_556, 5_535));
/// assert_eq!(formatted.formatted_time, "1h 32min");
/// assert_eq!(formatted.formatted_distance, "121 km");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedTravelData {
    /// Human-readable travel time, e.g. `"1h 32min"`.
    pub formatted_time: String,
    /// Human-readable distance, e.g. `"4.2 km"`.
    pub formatted_distance: String,
}

impl From<&RawTravelData> for FormattedTravelData {
    fn from(raw: &RawTravelData) -> Self {
        Self {
            formatted_time: format_duration(raw.duration_seconds),
            formatted_distance: format_distance(raw.distance_meters),
        }
    }
}

/// Formatted results for every mode; `None` where no route was found.
pub type AllTravelData = ModeMap<Option<FormattedTravelData>>;

/// Raw results for every mode; `None` where no route was found.
pub type AllTravelDataRaw = ModeMap<Option<RawTravelData>>;

/// The aggregate delivered once per request cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TravelDataReport {
    /// Formatted strings per mode.
    pub formatted: AllTravelData,
    /// Raw backend values per mode.
    pub raw: AllTravelDataRaw,
}

impl TravelDataReport {
    /// Build a report by formatting the raw results.
    ///
    /// # Examples
    ///
    /// ```
    /// use travelcompare_core::{AllTravelDataRaw, RawTravelData, TravelDataReport, TravelMode};
    ///
    /// let mut raw = AllTravelDataRaw::default();
    /// *raw.get_mut(TravelMode::Walk) = Some(RawTravelData::new(800, 600));
    /// let report = TravelDataReport::from_raw(raw);
    ///
    /// let walk = report.formatted.get(TravelMode::Walk).as_ref();
    /// assert_eq!(walk.map(|d| d.formatted_time.as_str()), Some("10min"));
    /// assert!(report.formatted.get(TravelMode::Drive).is_none());
    /// ```
    #[must_use]
    pub fn from_raw(raw: AllTravelDataRaw) -> Self {
        let formatted = raw.map_ref(|entry| entry.as_ref().map(FormattedTravelData::from));
        Self { formatted, raw }
    }

    /// Number of modes for which a route was found.
    #[must_use]
    pub fn routes_found(&self) -> usize {
        self.raw.values().filter(|entry| entry.is_some()).count()
    }
}

//! The closed set of transport modes a route can be requested for.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A transportation method understood by the routing backend.
///
/// The serialised form is the backend's wire name, e.g. `"TWO_WHEELER"`.
///
/// # Examples
///
/// ```
/// use travelcompare_core::TravelMode;
///
/// assert_eq!(TravelMode::TwoWheeler.as_str(), "TWO_WHEELER");
/// assert!(TravelMode::Drive.is_traffic_aware());
/// assert!(!TravelMode::Walk.is_traffic_aware());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelMode {
    /// Passenger car.
    Drive,
    /// Bicycle.
    Bicycle,
    /// On foot.
    Walk,
    /// Motorcycle or scooter.
    TwoWheeler,
    /// Public transport.
    Transit,
}

impl TravelMode {
    /// Every mode in the order requests are issued and results are rendered.
    pub const ALL: [Self; 5] = [
        Self::Drive,
        Self::Transit,
        Self::TwoWheeler,
        Self::Bicycle,
        Self::Walk,
    ];

    /// Wire name used by the routing backend.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Drive => "DRIVE",
            Self::Bicycle => "BICYCLE",
            Self::Walk => "WALK",
            Self::TwoWheeler => "TWO_WHEELER",
            Self::Transit => "TRANSIT",
        }
    }

    /// Short label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Drive => "Car",
            Self::Bicycle => "Bicycle",
            Self::Walk => "On foot",
            Self::TwoWheeler => "Motorbike",
            Self::Transit => "Public transport",
        }
    }

    /// Whether routes for this mode should take live traffic into account.
    ///
    /// The backend rejects a traffic-aware routing preference for walking,
    /// cycling and transit requests.
    #[must_use]
    pub const fn is_traffic_aware(self) -> bool {
        !matches!(self, Self::Walk | Self::Bicycle | Self::Transit)
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

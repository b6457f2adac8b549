//! Core domain logic for comparing travel modes between two addresses.
//!
//! Responsibilities:
//! - Define travel modes, per-mode results and the aggregate report.
//! - Format raw seconds and metres into short display strings.
//! - Fan a query out to a [`RouteProvider`] for every mode and gather the
//!   answers into a [`TravelDataReport`].
//!
//! Boundaries:
//! - No HTTP here; backends implement [`RouteProvider`] in `travelcompare-data`.
//! - No caching: every request cycle starts from scratch.

#![forbid(unsafe_code)]

pub mod clock;
mod format;
mod notice;
mod orchestrator;
mod route;
mod sink;
mod travel_data;
mod travel_mode;

#[doc(hidden)]
pub mod test_support;

pub use clock::{Clock, SystemClock};
pub use format::{DAY, HOUR, MINUTE, format_distance, format_duration};
pub use notice::{Notice, NoticeBus, NoticeKind, SubscriptionId};
pub use orchestrator::TravelDataOrchestrator;
pub use route::{QueryError, RouteError, RouteProvider, RouteQuery, RouteRequest};
pub use sink::TravelDataSink;
pub use travel_data::{
    AllTravelData, AllTravelDataRaw, FormattedTravelData, ModeMap, RawTravelData,
    TravelDataReport,
};
pub use travel_mode::TravelMode;

//! Facade crate for the travel mode comparison engine.
//!
//! This crate re-exports the core domain types and exposes the Google Routes
//! backend behind the `routes-api` feature flag.

#![forbid(unsafe_code)]

pub use travelcompare_core::{
    AllTravelData, AllTravelDataRaw, Clock, FormattedTravelData, ModeMap, Notice, NoticeBus,
    NoticeKind, QueryError, RawTravelData, RouteError, RouteProvider, RouteQuery, RouteRequest,
    SubscriptionId, SystemClock, TravelDataOrchestrator, TravelDataReport, TravelDataSink,
    TravelMode, format_distance, format_duration,
};

#[cfg(feature = "routes-api")]
pub use travelcompare_data::routing::{
    ConfigError, ProviderBuildError, RoutesApiConfig, RoutesApiProvider, SampleRouteProvider,
};

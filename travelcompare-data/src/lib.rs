//! Routing backends for the travel comparison engine.
//!
//! Responsibilities:
//! - Implement [`travelcompare_core::RouteProvider`] over HTTP.
//! - Own the wire format of the routing service.
//! - Validate backend configuration such as the API key.
//!
//! Boundaries:
//! - Do not encode formatting or aggregation rules (live in
//!   `travelcompare-core`).
//! - Stay async end to end; never block an executor thread.
//!
//! Invariants:
//! - A transport failure is returned as a value, never a panic.
//! - No global mutable state.

pub mod routing;

pub use routing::{
    ConfigError, ProviderBuildError, RoutesApiConfig, RoutesApiProvider, SampleRouteProvider,
};

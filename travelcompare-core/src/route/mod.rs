//! Route queries and the provider seam to routing backends.
//!
//! A [`RouteQuery`] is what the user asks for. The orchestrator derives one
//! [`RouteRequest`] per [`crate::TravelMode`] from it and hands each to a
//! [`RouteProvider`].

mod error;
mod provider;
mod request;

pub use error::RouteError;
pub use provider::RouteProvider;
pub use request::{QueryError, RouteQuery, RouteRequest};

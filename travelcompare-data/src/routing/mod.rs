//! Route providers for the Google Routes API.
//!
//! This module provides [`RoutesApiProvider`], an implementation of
//! [`travelcompare_core::RouteProvider`] that asks the `computeRoutes` method
//! for one route per travel mode, and [`SampleRouteProvider`], which answers
//! from a canned response without network access.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use travelcompare_data::routing::{RoutesApiConfig, RoutesApiProvider};
//!
//! let config = RoutesApiConfig::new("my-api-key")?
//!     .with_language_code("en-GB")
//!     .with_timeout(Duration::from_secs(10))
//!     .with_user_agent("my-app/1.0");
//! let provider = RoutesApiProvider::new(config)?;
//! # let _ = provider;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod provider;
mod sample;
pub mod wire;

pub use config::{
    ConfigError, DEFAULT_BASE_URL, DEFAULT_LANGUAGE_CODE, DEFAULT_USER_AGENT, ENV_API_KEY,
    RoutesApiConfig,
};
pub use provider::{FIELD_MASK, ProviderBuildError, RoutesApiProvider};
pub use sample::{SAMPLE_RESPONSE, SampleRouteProvider};

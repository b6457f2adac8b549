//! Error types emitted by the travelcompare CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use thiserror::Error;
use travelcompare_core::QueryError;
use travelcompare_data::routing::{ConfigError, ProviderBuildError};

/// Errors emitted by the travelcompare CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// The departure time is not an RFC 3339 timestamp.
    #[error("invalid departure time {value:?}: {source}")]
    InvalidDepartureTime {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    /// The origin or destination failed validation.
    #[error(transparent)]
    InvalidQuery(#[from] QueryError),
    /// The Routes API settings are incomplete.
    #[error(transparent)]
    RoutesApiConfig(#[from] ConfigError),
    /// Constructing the route provider failed.
    #[error("failed to build route provider for {base_url:?}: {source}")]
    BuildRouteProvider {
        base_url: String,
        #[source]
        source: ProviderBuildError,
    },
    /// Serializing the report failed.
    #[error("failed to serialize travel report: {0}")]
    SerializeReport(#[source] serde_json::Error),
    /// Writing the report failed.
    #[error("failed to write travel report: {0}")]
    WriteReport(#[source] std::io::Error),
}

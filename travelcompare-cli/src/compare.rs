//! Compare command implementation for the travelcompare CLI.

use std::io::Write;
use std::time::Duration;

use chrono::{DateTime, Utc};
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use travelcompare_core::{
    Notice, NoticeBus, NoticeKind, QueryError, RouteProvider, RouteQuery, TravelDataOrchestrator,
    TravelDataReport,
};
use travelcompare_data::routing::{
    DEFAULT_BASE_URL, DEFAULT_LANGUAGE_CODE, RoutesApiConfig, RoutesApiProvider,
    SampleRouteProvider,
};

use crate::render::{OutputFormat, write_report};
use crate::{
    ARG_API_KEY, ARG_BASE_URL, ARG_DEPARTURE_TIME, ARG_FROM, ARG_JSON, ARG_LANGUAGE_CODE,
    ARG_REFERER, ARG_SAMPLE, ARG_TIMEOUT_SECS, ARG_TO, CliError, ENV_FROM, ENV_TO,
};

/// Request timeout used when none is configured.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// CLI arguments for the `compare` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "compare",
    long_about = "Ask the routing backend for a route in every travel mode and \
                 print travel time and distance side by side. Options can \
                 come from CLI flags, configuration files, or environment \
                 variables; the API key falls back to ROUTES_API_KEY.",
    about = "Compare travel modes between two addresses"
)]
#[ortho_config(prefix = "TRAVELCOMPARE")]
pub(crate) struct CompareArgs {
    /// Address to start from.
    #[arg(long = ARG_FROM, value_name = "address")]
    #[serde(default)]
    pub(crate) from: Option<String>,
    /// Address to travel to.
    #[arg(long = ARG_TO, value_name = "address")]
    #[serde(default)]
    pub(crate) to: Option<String>,
    /// Planned departure as an RFC 3339 timestamp; ignored unless in the
    /// future.
    #[arg(long = ARG_DEPARTURE_TIME, value_name = "rfc3339")]
    #[serde(default)]
    pub(crate) departure_time: Option<String>,
    /// Routes API key (defaults to `ROUTES_API_KEY`).
    #[arg(long = ARG_API_KEY, value_name = "key")]
    #[serde(default)]
    pub(crate) api_key: Option<String>,
    /// Base URL of the Routes API (e.g. "https://routes.googleapis.com").
    #[arg(long = ARG_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) base_url: Option<String>,
    /// Language code for the request (defaults to "de-CH").
    #[arg(long = ARG_LANGUAGE_CODE, value_name = "code")]
    #[serde(default)]
    pub(crate) language_code: Option<String>,
    /// `Referer` header for keys restricted to HTTP referrers.
    #[arg(long = ARG_REFERER, value_name = "url")]
    #[serde(default)]
    pub(crate) referer: Option<String>,
    /// Per-request timeout in seconds.
    #[arg(long = ARG_TIMEOUT_SECS, value_name = "seconds")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    /// Answer from a built-in sample route instead of calling the API.
    #[arg(long = ARG_SAMPLE)]
    #[serde(default)]
    pub(crate) sample: bool,
    /// Print the report as JSON instead of a table.
    #[arg(long = ARG_JSON)]
    #[serde(default)]
    pub(crate) json: bool,
}

impl CompareArgs {
    pub(crate) fn into_config(self) -> Result<CompareConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        CompareConfig::try_from(merged)
    }
}

/// Where routes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Backend {
    /// Built-in sample answer; no network access.
    Sample,
    /// The Google Routes API.
    RoutesApi(RoutesApiSettings),
}

/// Routes API options resolved from the configuration layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RoutesApiSettings {
    /// Explicit key; `None` falls back to the environment.
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: String,
    pub(crate) language_code: String,
    pub(crate) referer: Option<String>,
    pub(crate) timeout: Duration,
}

impl RoutesApiSettings {
    /// Validate the key and assemble the provider configuration.
    pub(crate) fn to_provider_config(&self) -> Result<RoutesApiConfig, CliError> {
        let config = match &self.api_key {
            Some(key) => RoutesApiConfig::new(key.clone()),
            None => RoutesApiConfig::from_env(),
        }?;
        let config = config
            .with_base_url(self.base_url.clone())
            .with_language_code(self.language_code.clone())
            .with_timeout(self.timeout);
        Ok(match &self.referer {
            Some(referer) => config.with_referer(referer.clone()),
            None => config,
        })
    }
}

/// Resolved `compare` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CompareConfig {
    /// Validated origin, destination and departure.
    pub(crate) query: RouteQuery,
    pub(crate) backend: Backend,
    pub(crate) output: OutputFormat,
}

impl TryFrom<CompareArgs> for CompareConfig {
    type Error = CliError;

    fn try_from(args: CompareArgs) -> Result<Self, Self::Error> {
        let origin = args.from.ok_or(CliError::MissingArgument {
            field: ARG_FROM,
            env: ENV_FROM,
        })?;
        let destination = args.to.ok_or(CliError::MissingArgument {
            field: ARG_TO,
            env: ENV_TO,
        })?;
        let departure_time = args
            .departure_time
            .as_deref()
            .map(parse_departure_time)
            .transpose()?;
        let query = RouteQuery::new(origin, destination, departure_time)?;

        let backend = if args.sample {
            Backend::Sample
        } else {
            Backend::RoutesApi(RoutesApiSettings {
                api_key: args.api_key,
                base_url: args
                    .base_url
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
                language_code: args
                    .language_code
                    .unwrap_or_else(|| DEFAULT_LANGUAGE_CODE.to_owned()),
                referer: args.referer,
                timeout: Duration::from_secs(args.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
            })
        };
        let output = if args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        };

        Ok(Self {
            query,
            backend,
            output,
        })
    }
}

/// Parse an RFC 3339 timestamp into UTC.
pub(crate) fn parse_departure_time(value: &str) -> Result<DateTime<Utc>, CliError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|source| CliError::InvalidDepartureTime {
            value: value.to_owned(),
            source,
        })
}

/// Builds a route provider for the current compare invocation.
pub(crate) trait RouteProviderBuilder {
    fn build(&self, backend: &Backend) -> Result<Box<dyn RouteProvider>, CliError>;
}

pub(crate) struct DefaultRouteProviderBuilder;

impl RouteProviderBuilder for DefaultRouteProviderBuilder {
    fn build(&self, backend: &Backend) -> Result<Box<dyn RouteProvider>, CliError> {
        match backend {
            Backend::Sample => Ok(Box::new(SampleRouteProvider)),
            Backend::RoutesApi(settings) => {
                let config = settings.to_provider_config()?;
                let provider = RoutesApiProvider::new(config).map_err(|source| {
                    CliError::BuildRouteProvider {
                        base_url: settings.base_url.clone(),
                        source,
                    }
                })?;
                Ok(Box::new(provider))
            }
        }
    }
}

pub(crate) async fn run_compare(args: CompareArgs) -> Result<(), CliError> {
    let mut notices = stderr_notices();
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultRouteProviderBuilder;
    run_compare_with(args, &builder, &mut stdout, &mut notices).await
}

pub(crate) async fn run_compare_with(
    args: CompareArgs,
    builder: &dyn RouteProviderBuilder,
    writer: &mut dyn Write,
    notices: &mut NoticeBus,
) -> Result<(), CliError> {
    let config = args.into_config().inspect_err(|err| {
        if let Some(notice) = form_error_notice(err) {
            notices.publish(&notice);
        }
    })?;
    let report = execute_compare(&config, builder, notices).await?;
    write_report(writer, &report, config.output)
}

async fn execute_compare(
    config: &CompareConfig,
    builder: &dyn RouteProviderBuilder,
    notices: &mut NoticeBus,
) -> Result<TravelDataReport, CliError> {
    let provider = builder.build(&config.backend)?;
    debug!(
        "comparing with the {} backend",
        match config.backend {
            Backend::Sample => "sample",
            Backend::RoutesApi(_) => "Routes API",
        }
    );
    let orchestrator = TravelDataOrchestrator::new(provider);
    notices.publish(&Notice::FormSubmitted {
        message: format!(
            "Comparing travel from {} to {}",
            config.query.origin(),
            config.query.destination()
        ),
    });

    let mut delivered = None;
    orchestrator
        .publish_all_travel_data(&config.query, &mut |report: TravelDataReport| {
            delivered = Some(report);
        })
        .await;
    let report = delivered.unwrap_or_default();

    notices.publish(&Notice::TravelDataReceived {
        routes_found: report.routes_found(),
    });
    Ok(report)
}

/// Map input validation failures onto a form error notice.
fn form_error_notice(err: &CliError) -> Option<Notice> {
    match err {
        CliError::MissingArgument { field, .. } => Some(Notice::FormError {
            field: (*field).to_owned(),
            message: err.to_string(),
        }),
        CliError::InvalidDepartureTime { .. } => Some(Notice::FormError {
            field: ARG_DEPARTURE_TIME.to_owned(),
            message: err.to_string(),
        }),
        CliError::InvalidQuery(QueryError::BlankAddress { field }) => Some(Notice::FormError {
            field: (*field).to_owned(),
            message: err.to_string(),
        }),
        _ => None,
    }
}

/// Notice bus printing progress to stderr.
///
/// Form errors are not subscribed: they also end the run and `main` reports
/// them.
fn stderr_notices() -> NoticeBus {
    let mut bus = NoticeBus::default();
    for kind in [NoticeKind::FormSubmitted, NoticeKind::TravelDataReceived] {
        bus.subscribe(kind, |notice: &Notice| eprintln!("{notice}"));
    }
    bus
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<CompareConfig, CliError> {
    let merged = CompareArgs::merge_from_layers(layers).map_err(CliError::from)?;
    CompareConfig::try_from(merged)
}

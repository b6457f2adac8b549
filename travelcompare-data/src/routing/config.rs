//! Configuration for [`super::RoutesApiProvider`].

use std::time::Duration;

use thiserror::Error;

/// Environment variable consulted by [`RoutesApiConfig::from_env`].
pub const ENV_API_KEY: &str = "ROUTES_API_KEY";

/// Production Routes API host.
pub const DEFAULT_BASE_URL: &str = "https://routes.googleapis.com";

/// Language requested for textual response fields.
pub const DEFAULT_LANGUAGE_CODE: &str = "de-CH";

/// Default user agent for Routes API requests.
pub const DEFAULT_USER_AGENT: &str = "travelcompare/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Path of the `computeRoutes` method relative to the base URL.
const COMPUTE_ROUTES_PATH: &str = "/directions/v2:computeRoutes";

/// Errors raised while assembling a [`RoutesApiConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No usable API key was supplied.
    #[error("missing Routes API key: set {env} or pass one explicitly")]
    MissingApiKey {
        /// Environment variable that would have supplied the key.
        env: &'static str,
    },
}

/// Settings for talking to the Google Routes API.
///
/// The key is validated when the value is built, so a provider constructed
/// from it can always authenticate its requests.
#[derive(Clone)]
pub struct RoutesApiConfig {
    api_key: String,
    /// Scheme and host of the service, without the method path.
    pub base_url: String,
    /// BCP-47 language code sent with every request.
    pub language_code: String,
    /// Optional `Referer` header for keys restricted to HTTP referrers.
    pub referer: Option<String>,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl std::fmt::Debug for RoutesApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutesApiConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("language_code", &self.language_code)
            .field("referer", &self.referer)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl RoutesApiConfig {
    /// Create a configuration with the given API key and default settings.
    ///
    /// Surrounding whitespace is stripped from the key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] when the key is blank.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        let trimmed = api_key.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::MissingApiKey { env: ENV_API_KEY });
        }
        Ok(Self {
            api_key: trimmed.to_owned(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            language_code: DEFAULT_LANGUAGE_CODE.to_owned(),
            referer: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        })
    }

    /// Read the API key from [`ENV_API_KEY`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] when the variable is unset,
    /// not valid Unicode, or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve the API key through `lookup`, which maps a variable name to
    /// its value.
    pub(crate) fn from_lookup(
        lookup: impl FnOnce(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let key = lookup(ENV_API_KEY).ok_or(ConfigError::MissingApiKey { env: ENV_API_KEY })?;
        Self::new(key)
    }

    /// The validated API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Set the service base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the response language code.
    #[must_use]
    pub fn with_language_code(mut self, language_code: impl Into<String>) -> Self {
        self.language_code = language_code.into();
        self
    }

    /// Send a `Referer` header with every request.
    #[must_use]
    pub fn with_referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = Some(referer.into());
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Full `computeRoutes` endpoint derived from the base URL.
    #[must_use]
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}{COMPUTE_ROUTES_PATH}",
            self.base_url.trim_end_matches('/')
        )
    }
}

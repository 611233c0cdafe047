//! Public client surface + builder.
//! Hosts and defaults live in `constants`; request execution lives in `core::net`.

pub(crate) mod constants;

use crate::core::endpoint::{Endpoint, Environment};
use crate::core::OandaError;
use constants::{DEFAULT_TIMEOUT, ENV_ENVIRONMENT, ENV_TOKEN, USER_AGENT};
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Thin wrapper that holds configured HTTP clients, the bearer token and base URLs.
///
/// Cloning is cheap; the underlying connection pools are shared.
#[derive(Clone)]
pub struct OandaClient {
    http: Client,
    stream_http: Client,
    token: String,
    environment: Environment,
    base_rest: Url,
    base_stream: Url,
}

impl fmt::Debug for OandaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OandaClient")
            .field("token", &"<redacted>")
            .field("environment", &self.environment)
            .field("base_rest", &self.base_rest.as_str())
            .field("base_stream", &self.base_stream.as_str())
            .finish_non_exhaustive()
    }
}

impl OandaClient {
    /// Create a new builder.
    pub fn builder() -> OandaClientBuilder {
        OandaClientBuilder::default()
    }

    /// Shorthand for a client with default settings against `environment`.
    ///
    /// # Errors
    ///
    /// Fails if the token is empty or the HTTP client cannot be constructed.
    pub fn new(token: impl Into<String>, environment: Environment) -> Result<Self, OandaError> {
        Self::builder()
            .token(token)
            .environment(environment)
            .build()
    }

    /// The environment this client was built for.
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// Resolve `endpoint` against this client's REST or stream base.
    ///
    /// # Errors
    ///
    /// Fails if the configured base cannot carry a path.
    pub fn url_for(&self, endpoint: &Endpoint) -> Result<Url, OandaError> {
        let base = if endpoint.is_stream() {
            &self.base_stream
        } else {
            &self.base_rest
        };
        endpoint.url_on(base)
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn stream_http(&self) -> &Client {
        &self.stream_http
    }
    pub(crate) fn token(&self) -> &str {
        &self.token
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct OandaClientBuilder {
    token: Option<String>,
    environment: Option<Environment>,
    user_agent: Option<String>,
    base_rest: Option<Url>,
    base_stream: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl fmt::Debug for OandaClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OandaClientBuilder")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("environment", &self.environment)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl OandaClientBuilder {
    /// Start a builder pre-filled from `OANDA_TOKEN` and `OANDA_ENVIRONMENT`.
    ///
    /// Unset variables are simply left unset; an unparsable environment is an error.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParams` if `OANDA_ENVIRONMENT` is neither `live` nor `practice`.
    pub fn from_env() -> Result<Self, OandaError> {
        let mut b = Self::default();
        if let Ok(token) = std::env::var(ENV_TOKEN) {
            b.token = Some(token);
        }
        if let Ok(env) = std::env::var(ENV_ENVIRONMENT) {
            b.environment = Some(env.parse()?);
        }
        Ok(b)
    }

    /// Set the bearer token sent with every request.
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Choose live or practice. Default: practice.
    #[must_use]
    pub const fn environment(mut self, env: Environment) -> Self {
        self.environment = Some(env);
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the REST base (e.g., `https://api-fxpractice.oanda.com`).
    #[must_use]
    pub fn base_rest(mut self, url: Url) -> Self {
        self.base_rest = Some(url);
        self
    }

    /// Override the streaming base (e.g., `https://stream-fxpractice.oanda.com`).
    #[must_use]
    pub fn base_stream(mut self, url: Url) -> Self {
        self.base_stream = Some(url);
        self
    }

    /// Set the per-request timeout for REST calls. Default: 5 seconds.
    ///
    /// One-shot stream reads share this timeout. Continuous streams are bound only by the
    /// connect timeout.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParams` if no token was provided, or `Http` if the
    /// underlying HTTP client fails to initialize.
    pub fn build(self) -> Result<OandaClient, OandaError> {
        let token = self
            .token
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| OandaError::InvalidParams("a bearer token is required".into()))?;
        let environment = self.environment.unwrap_or_default();

        let base_rest = match self.base_rest {
            Some(u) => u,
            None => Url::parse(environment.rest_host())?,
        };
        let base_stream = match self.base_stream {
            Some(u) => u,
            None => Url::parse(environment.stream_host())?,
        };

        let ua = self.user_agent.as_deref().unwrap_or(USER_AGENT);

        let mut httpb = reqwest::Client::builder()
            .user_agent(ua)
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT));
        let mut streamb = reqwest::Client::builder().user_agent(ua);

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
            streamb = streamb.connect_timeout(ct);
        }

        Ok(OandaClient {
            http: httpb.build()?,
            stream_http: streamb.build()?,
            token,
            environment,
            base_rest,
            base_stream,
        })
    }
}

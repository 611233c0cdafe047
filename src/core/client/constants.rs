//! Centralized constants for hosts, headers and defaults.

use std::time::Duration;

/// Default UA sent with every request.
pub(crate) const USER_AGENT: &str = concat!("oanda-rs/", env!("CARGO_PKG_VERSION"));

/// REST host for real-money accounts.
pub(crate) const LIVE_REST_HOST: &str = "https://api-fxtrade.oanda.com";

/// REST host for practice (simulated) accounts.
pub(crate) const PRACTICE_REST_HOST: &str = "https://api-fxpractice.oanda.com";

/// Streaming host for real-money accounts.
pub(crate) const LIVE_STREAM_HOST: &str = "https://stream-fxtrade.oanda.com";

/// Streaming host for practice (simulated) accounts.
pub(crate) const PRACTICE_STREAM_HOST: &str = "https://stream-fxpractice.oanda.com";

/// Fixed per-request timeout applied unless the builder overrides it.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Environment variable read by `OandaClientBuilder::from_env` for the bearer token.
pub(crate) const ENV_TOKEN: &str = "OANDA_TOKEN";

/// Environment variable read by `OandaClientBuilder::from_env` for `live` / `practice`.
pub(crate) const ENV_ENVIRONMENT: &str = "OANDA_ENVIRONMENT";

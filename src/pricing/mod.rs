mod api;
mod model;

pub use model::{
    ClientPrice, HomeConversions, LatestCandlesResponse, PriceBucket, PriceStreamMessage,
    PricingResponse,
};

use chrono::{DateTime, Utc};
use futures_util::stream::BoxStream;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::query::{csv, rfc3339};
use crate::core::{Granularity, OandaClient, OandaError, PriceComponent, WeeklyAlignment};
use crate::instrument::{CandlesQuery, CandlesResponse};

/// Options for the latest-candles endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LatestCandlesQuery {
    #[serde(rename = "candleSpecifications", skip_serializing_if = "Option::is_none")]
    pub candle_specifications: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smooth: Option<String>,
    #[serde(rename = "dailyAlignment", skip_serializing_if = "Option::is_none")]
    pub daily_alignment: Option<String>,
    #[serde(rename = "alignmentTimezone", skip_serializing_if = "Option::is_none")]
    pub alignment_timezone: Option<String>,
    #[serde(rename = "weeklyAlignment", skip_serializing_if = "Option::is_none")]
    pub weekly_alignment: Option<String>,
}

impl LatestCandlesQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// One `INSTRUMENT:GRANULARITY:COMPONENT` specification per instrument. [required]
    #[must_use]
    pub fn candle_specifications<S: AsRef<str>>(
        mut self,
        instruments: &[S],
        granularity: Granularity,
        component: PriceComponent,
    ) -> Self {
        let specs = instruments
            .iter()
            .map(|i| format!("{}:{}:{}", i.as_ref(), granularity, component));
        self.candle_specifications = csv(specs);
        self
    }

    /// Units for the volume-weighted bid and ask. Below 1 becomes 1.
    #[must_use]
    pub fn units(mut self, units: Decimal) -> Self {
        let units = if units < Decimal::ONE { Decimal::ONE } else { units };
        self.units = Some(units.normalize().to_string());
        self
    }

    #[must_use]
    pub fn smooth(mut self) -> Self {
        self.smooth = Some("true".into());
        self
    }

    /// Outside `0..=23` falls back to the default of 17.
    #[must_use]
    pub fn daily_alignment(mut self, hour: u32) -> Self {
        let hour = if hour <= 23 { hour } else { 17 };
        self.daily_alignment = Some(hour.to_string());
        self
    }

    #[must_use]
    pub fn alignment_timezone(mut self, tz: impl Into<String>) -> Self {
        self.alignment_timezone = Some(tz.into());
        self
    }

    #[must_use]
    pub fn weekly_alignment(mut self, day: WeeklyAlignment) -> Self {
        self.weekly_alignment = Some(day.as_str().to_string());
        self
    }
}

/// Options for a one-off pricing request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PricingQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    #[serde(rename = "includeHomeConversions", skip_serializing_if = "Option::is_none")]
    pub include_home_conversions: Option<String>,
}

impl PricingQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instruments to price. [required]
    #[must_use]
    pub fn instruments<S: AsRef<str>>(mut self, instruments: &[S]) -> Self {
        self.instruments = csv(instruments);
        self
    }

    /// Only prices that changed after `since`. A future time is replaced with now.
    #[must_use]
    pub fn since(mut self, since: DateTime<Utc>) -> Self {
        let now = Utc::now();
        self.since = Some(rfc3339(if since > now { now } else { since }));
        self
    }

    #[must_use]
    pub fn include_home_conversions(mut self) -> Self {
        self.include_home_conversions = Some("true".into());
        self
    }
}

/// Options for the price stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StreamQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<String>,
    #[serde(rename = "includeHomeConversions", skip_serializing_if = "Option::is_none")]
    pub include_home_conversions: Option<String>,
}

impl StreamQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instruments to stream. [required]
    #[must_use]
    pub fn instruments<S: AsRef<str>>(mut self, instruments: &[S]) -> Self {
        self.instruments = csv(instruments);
        self
    }

    /// Skip the snapshot sent on connect.
    #[must_use]
    pub fn without_snapshot(mut self) -> Self {
        self.snapshot = Some("false".into());
        self
    }

    #[must_use]
    pub fn include_home_conversions(mut self) -> Self {
        self.include_home_conversions = Some("true".into());
        self
    }
}

/// Pricing endpoints for one client.
#[derive(Debug, Clone, Copy)]
pub struct PricingApi<'a> {
    client: &'a OandaClient,
}

impl OandaClient {
    /// Account-scoped prices, candles and the price stream.
    pub const fn pricing(&self) -> PricingApi<'_> {
        PricingApi { client: self }
    }
}

impl PricingApi<'_> {
    /// Latest candles for each candle specification.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn latest_candles(
        &self,
        account: &str,
        query: &LatestCandlesQuery,
    ) -> Result<LatestCandlesResponse, OandaError> {
        api::fetch_latest_candles(self.client, account, query).await
    }

    /// Current prices for the requested instruments.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn prices(
        &self,
        account: &str,
        query: &PricingQuery,
    ) -> Result<PricingResponse, OandaError> {
        api::fetch_prices(self.client, account, query).await
    }

    /// Candles for `instrument` priced for this account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn candles(
        &self,
        account: &str,
        instrument: &str,
        query: &CandlesQuery,
    ) -> Result<CandlesResponse, OandaError> {
        api::fetch_candles(self.client, account, instrument, query).await
    }

    /// Connect to the price stream, read the first message and disconnect.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the stream closes without data, or the
    /// line cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn stream_first(
        &self,
        account: &str,
        query: &StreamQuery,
    ) -> Result<PriceStreamMessage, OandaError> {
        api::fetch_stream_first(self.client, account, query).await
    }

    /// Follow the price stream, heartbeats included.
    ///
    /// # Errors
    ///
    /// Fails if the stream cannot be opened; errors while reading arrive as stream items.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn stream(
        &self,
        account: &str,
        query: &StreamQuery,
    ) -> Result<BoxStream<'static, Result<PriceStreamMessage, OandaError>>, OandaError> {
        api::open_stream(self.client, account, query).await
    }
}

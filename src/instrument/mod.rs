mod api;
mod model;

pub use model::{
    Book, BookBucket, CandlesResponse, Candlestick, CandlestickData, OrderBookResponse,
    PositionBookResponse,
};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::query::{check_range, rfc3339};
use crate::core::{Granularity, OandaClient, OandaError, PriceComponent, WeeklyAlignment};

/// Options for a candlestick request.
///
/// Each setter checks its own input; out-of-range values fall back to the upstream
/// default rather than failing.
///
/// ```
/// use oanda_rs::instrument::CandlesQuery;
/// use oanda_rs::Granularity;
///
/// let q = CandlesQuery::new().granularity(Granularity::H1).count(10_000);
/// assert_eq!(q.count.as_deref(), Some("500"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CandlesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granularity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smooth: Option<String>,
    #[serde(rename = "includeFirst", skip_serializing_if = "Option::is_none")]
    pub include_first: Option<String>,
    #[serde(rename = "dailyAlignment", skip_serializing_if = "Option::is_none")]
    pub daily_alignment: Option<String>,
    #[serde(rename = "alignmentTimezone", skip_serializing_if = "Option::is_none")]
    pub alignment_timezone: Option<String>,
    #[serde(rename = "weeklyAlignment", skip_serializing_if = "Option::is_none")]
    pub weekly_alignment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

impl CandlesQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Price components to include. [default=M]
    #[must_use]
    pub fn price(mut self, price: PriceComponent) -> Self {
        self.price = Some(price.as_str().to_string());
        self
    }

    /// [default=S5]
    #[must_use]
    pub fn granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = Some(granularity.as_str().to_string());
        self
    }

    /// Number of candles. Outside `1..=5000` falls back to the default of 500.
    ///
    /// Leave unset when both ends of a range are given.
    #[must_use]
    pub fn count(mut self, count: u32) -> Self {
        let count = if (1..=5000).contains(&count) { count } else { 500 };
        self.count = Some(count.to_string());
        self
    }

    /// Start of the time range.
    ///
    /// The range is re-checked as in [`between`](Self::between).
    #[must_use]
    pub fn from(mut self, from: DateTime<Utc>) -> Self {
        self.from = Some(rfc3339(from));
        check_range(&mut self.from, &mut self.to);
        self
    }

    /// End of the time range.
    ///
    /// The range is re-checked as in [`between`](Self::between).
    #[must_use]
    pub fn to(mut self, to: DateTime<Utc>) -> Self {
        self.to = Some(rfc3339(to));
        check_range(&mut self.from, &mut self.to);
        self
    }

    /// Both ends of the range at once.
    ///
    /// A range with `from >= to` or ending in the future is ignored and both ends are
    /// cleared.
    #[must_use]
    pub fn between(mut self, from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        self.from = Some(rfc3339(from));
        self.to = Some(rfc3339(to));
        check_range(&mut self.from, &mut self.to);
        self
    }

    /// Use the previous candle's close as each candle's open.
    #[must_use]
    pub fn smooth(mut self) -> Self {
        self.smooth = Some("true".into());
        self
    }

    /// Drop the candle covering `from`, for polling from the last one received.
    #[must_use]
    pub fn without_include_first(mut self) -> Self {
        self.include_first = Some("false".into());
        self
    }

    /// Hour of day for daily alignment. Outside `0..=23` falls back to the default of 17.
    #[must_use]
    pub fn daily_alignment(mut self, hour: u32) -> Self {
        let hour = if hour <= 23 { hour } else { 17 };
        self.daily_alignment = Some(hour.to_string());
        self
    }

    /// IANA timezone for `daily_alignment`. [default=America/New_York]
    #[must_use]
    pub fn alignment_timezone(mut self, tz: impl Into<String>) -> Self {
        self.alignment_timezone = Some(tz.into());
        self
    }

    /// [default=Friday]
    #[must_use]
    pub fn weekly_alignment(mut self, day: WeeklyAlignment) -> Self {
        self.weekly_alignment = Some(day.as_str().to_string());
        self
    }

    /// Units used for the volume-weighted bid and ask of account candles. Below 1 becomes 1.
    #[must_use]
    pub fn units(mut self, units: Decimal) -> Self {
        let units = if units < Decimal::ONE { Decimal::ONE } else { units };
        self.units = Some(units.normalize().to_string());
        self
    }
}

/// Snapshot selector for the order and position books.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl BookQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot time. A time in the future is ignored and the latest snapshot is fetched.
    #[must_use]
    pub fn time(mut self, time: DateTime<Utc>) -> Self {
        self.time = if time > Utc::now() {
            None
        } else {
            Some(rfc3339(time))
        };
        self
    }
}

/// Instrument endpoints for one client.
#[derive(Debug, Clone, Copy)]
pub struct InstrumentApi<'a> {
    client: &'a OandaClient,
}

impl OandaClient {
    /// Candles and books per instrument.
    pub const fn instruments(&self) -> InstrumentApi<'_> {
        InstrumentApi { client: self }
    }
}

impl InstrumentApi<'_> {
    /// Candlesticks for `instrument` (e.g. `EUR_USD`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn candles(
        &self,
        instrument: &str,
        query: &CandlesQuery,
    ) -> Result<CandlesResponse, OandaError> {
        api::fetch_candles(self.client, instrument, query).await
    }

    /// Order book snapshot for `instrument`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn order_book(
        &self,
        instrument: &str,
        query: &BookQuery,
    ) -> Result<OrderBookResponse, OandaError> {
        api::fetch_order_book(self.client, instrument, query).await
    }

    /// Position book snapshot for `instrument`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn position_book(
        &self,
        instrument: &str,
        query: &BookQuery,
    ) -> Result<PositionBookResponse, OandaError> {
        api::fetch_position_book(self.client, instrument, query).await
    }
}

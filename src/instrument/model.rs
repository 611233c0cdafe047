use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Granularity;

/// Open, high, low and close of one price component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandlestickData {
    #[serde(rename = "o")]
    pub open: Decimal,
    #[serde(rename = "h")]
    pub high: Decimal,
    #[serde(rename = "l")]
    pub low: Decimal,
    #[serde(rename = "c")]
    pub close: Decimal,
}

/// One candle. Only the components that were requested are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candlestick {
    pub time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid: Option<CandlestickData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ask: Option<CandlestickData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mid: Option<CandlestickData>,
    pub volume: i64,
    /// `false` while the candle's time range is still open.
    pub complete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CandlesResponse {
    pub instrument: String,
    pub granularity: Granularity,
    #[serde(default)]
    pub candles: Vec<Candlestick>,
}

/// Share of orders or positions at one price level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BookBucket {
    pub price: Decimal,
    #[serde(rename = "longCountPercent")]
    pub long_count_percent: Decimal,
    #[serde(rename = "shortCountPercent")]
    pub short_count_percent: Decimal,
}

/// Snapshot of an order book or position book.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Book {
    pub instrument: String,
    pub time: DateTime<Utc>,
    /// Instrument price at the snapshot time.
    pub price: Decimal,
    #[serde(rename = "bucketWidth")]
    pub bucket_width: Decimal,
    #[serde(default)]
    pub buckets: Vec<BookBucket>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderBookResponse {
    #[serde(rename = "orderBook")]
    pub order_book: Book,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PositionBookResponse {
    #[serde(rename = "positionBook")]
    pub position_book: Book,
}

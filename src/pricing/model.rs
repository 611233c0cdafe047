use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::instrument::CandlesResponse;

/// One level of the quoted depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBucket {
    pub price: Decimal,
    pub liquidity: i64,
}

/// A bid/ask quote for one instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientPrice {
    pub instrument: String,
    pub time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tradeable: Option<bool>,
    #[serde(default)]
    pub bids: Vec<PriceBucket>,
    #[serde(default)]
    pub asks: Vec<PriceBucket>,
    #[serde(rename = "closeoutBid")]
    pub closeout_bid: Decimal,
    #[serde(rename = "closeoutAsk")]
    pub closeout_ask: Decimal,
}

impl ClientPrice {
    /// Best bid, if any depth was quoted.
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.first().map(|b| b.price)
    }

    /// Best ask, if any depth was quoted.
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.first().map(|b| b.price)
    }
}

/// Factors to convert amounts in `currency` to the account's home currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeConversions {
    pub currency: String,
    #[serde(rename = "accountGain")]
    pub account_gain: Decimal,
    #[serde(rename = "accountLoss")]
    pub account_loss: Decimal,
    #[serde(rename = "positionValue")]
    pub position_value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PricingResponse {
    #[serde(default)]
    pub prices: Vec<ClientPrice>,
    #[serde(default, rename = "homeConversions")]
    pub home_conversions: Vec<HomeConversions>,
    pub time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LatestCandlesResponse {
    #[serde(default, rename = "latestCandles")]
    pub latest_candles: Vec<CandlesResponse>,
}

/// One line of the price stream.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum PriceStreamMessage {
    #[serde(rename = "PRICE")]
    Price(ClientPrice),
    #[serde(rename = "HEARTBEAT")]
    Heartbeat { time: DateTime<Utc> },
}

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::ClientExtensions;
use crate::order::Order;
use crate::transaction::Transaction;

/// A trade opened in the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: String,
    pub instrument: String,
    pub price: Decimal,
    #[serde(rename = "openTime")]
    pub open_time: DateTime<Utc>,
    /// `OPEN`, `CLOSED` or `CLOSE_WHEN_TRADEABLE`.
    pub state: String,
    #[serde(rename = "initialUnits")]
    pub initial_units: Decimal,
    #[serde(rename = "currentUnits")]
    pub current_units: Decimal,
    #[serde(default, rename = "realizedPL")]
    pub realized_pl: Decimal,
    #[serde(default, rename = "unrealizedPL", skip_serializing_if = "Option::is_none")]
    pub unrealized_pl: Option<Decimal>,
    #[serde(default, rename = "marginUsed", skip_serializing_if = "Option::is_none")]
    pub margin_used: Option<Decimal>,
    #[serde(default)]
    pub financing: Decimal,
    #[serde(default, rename = "closeTime", skip_serializing_if = "Option::is_none")]
    pub close_time: Option<DateTime<Utc>>,
    #[serde(default, rename = "clientExtensions", skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    #[serde(default, rename = "takeProfitOrder", skip_serializing_if = "Option::is_none")]
    pub take_profit_order: Option<Order>,
    #[serde(default, rename = "stopLossOrder", skip_serializing_if = "Option::is_none")]
    pub stop_loss_order: Option<Order>,
    #[serde(default, rename = "trailingStopLossOrder", skip_serializing_if = "Option::is_none")]
    pub trailing_stop_loss_order: Option<Order>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TradesResponse {
    #[serde(default)]
    pub trades: Vec<Trade>,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TradeResponse {
    pub trade: Trade,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CloseTradeResponse {
    #[serde(rename = "orderCreateTransaction")]
    pub order_create_transaction: Transaction,
    #[serde(default, rename = "orderFillTransaction")]
    pub order_fill_transaction: Option<Transaction>,
    #[serde(default, rename = "orderCancelTransaction")]
    pub order_cancel_transaction: Option<Transaction>,
    #[serde(default, rename = "relatedTransactionIDs")]
    pub related_transaction_ids: Vec<String>,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TradeClientExtensionsResponse {
    #[serde(rename = "tradeClientExtensionsModifyTransaction")]
    pub trade_client_extensions_modify_transaction: Transaction,
    #[serde(default, rename = "relatedTransactionIDs")]
    pub related_transaction_ids: Vec<String>,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: String,
}

/// Transactions produced by creating, replacing or cancelling a trade's dependent orders.
///
/// Only the transactions for the orders that were touched are present.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TradeOrdersResponse {
    #[serde(default, rename = "takeProfitOrderCancelTransaction")]
    pub take_profit_order_cancel_transaction: Option<Transaction>,
    #[serde(default, rename = "takeProfitOrderTransaction")]
    pub take_profit_order_transaction: Option<Transaction>,
    #[serde(default, rename = "takeProfitOrderFillTransaction")]
    pub take_profit_order_fill_transaction: Option<Transaction>,
    #[serde(default, rename = "stopLossOrderCancelTransaction")]
    pub stop_loss_order_cancel_transaction: Option<Transaction>,
    #[serde(default, rename = "stopLossOrderTransaction")]
    pub stop_loss_order_transaction: Option<Transaction>,
    #[serde(default, rename = "stopLossOrderFillTransaction")]
    pub stop_loss_order_fill_transaction: Option<Transaction>,
    #[serde(default, rename = "trailingStopLossOrderCancelTransaction")]
    pub trailing_stop_loss_order_cancel_transaction: Option<Transaction>,
    #[serde(default, rename = "trailingStopLossOrderTransaction")]
    pub trailing_stop_loss_order_transaction: Option<Transaction>,
    #[serde(default, rename = "guaranteedStopLossOrderCancelTransaction")]
    pub guaranteed_stop_loss_order_cancel_transaction: Option<Transaction>,
    #[serde(default, rename = "guaranteedStopLossOrderTransaction")]
    pub guaranteed_stop_loss_order_transaction: Option<Transaction>,
    #[serde(default, rename = "relatedTransactionIDs")]
    pub related_transaction_ids: Vec<String>,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: String,
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::transaction::Transaction;

/// One side of a position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionSideDetails {
    pub units: Decimal,
    #[serde(rename = "averagePrice", skip_serializing_if = "Option::is_none")]
    pub average_price: Option<Decimal>,
    #[serde(rename = "tradeIDs")]
    pub trade_ids: Vec<String>,
    pub pl: Decimal,
    #[serde(rename = "unrealizedPL")]
    pub unrealized_pl: Decimal,
    #[serde(rename = "resettablePL")]
    pub resettable_pl: Decimal,
    pub financing: Decimal,
    #[serde(rename = "guaranteedExecutionFees")]
    pub guaranteed_execution_fees: Decimal,
}

/// The long and short exposure of one instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub instrument: String,
    #[serde(default)]
    pub pl: Decimal,
    #[serde(default, rename = "unrealizedPL")]
    pub unrealized_pl: Decimal,
    #[serde(default, rename = "marginUsed")]
    pub margin_used: Decimal,
    #[serde(default, rename = "resettablePL")]
    pub resettable_pl: Decimal,
    #[serde(default)]
    pub financing: Decimal,
    #[serde(default)]
    pub commission: Decimal,
    #[serde(default, rename = "guaranteedExecutionFees")]
    pub guaranteed_execution_fees: Decimal,
    #[serde(default)]
    pub long: PositionSideDetails,
    #[serde(default)]
    pub short: PositionSideDetails,
}

impl Position {
    /// Net units held: long units plus (negative) short units.
    pub fn net_units(&self) -> Decimal {
        self.long.units + self.short.units
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PositionsResponse {
    #[serde(default)]
    pub positions: Vec<Position>,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PositionResponse {
    pub position: Position,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: String,
}

/// Transactions produced by closing out one or both sides of a position.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClosePositionResponse {
    #[serde(default, rename = "longOrderCreateTransaction")]
    pub long_order_create_transaction: Option<Transaction>,
    #[serde(default, rename = "longOrderFillTransaction")]
    pub long_order_fill_transaction: Option<Transaction>,
    #[serde(default, rename = "longOrderCancelTransaction")]
    pub long_order_cancel_transaction: Option<Transaction>,
    #[serde(default, rename = "shortOrderCreateTransaction")]
    pub short_order_create_transaction: Option<Transaction>,
    #[serde(default, rename = "shortOrderFillTransaction")]
    pub short_order_fill_transaction: Option<Transaction>,
    #[serde(default, rename = "shortOrderCancelTransaction")]
    pub short_order_cancel_transaction: Option<Transaction>,
    #[serde(default, rename = "relatedTransactionIDs")]
    pub related_transaction_ids: Vec<String>,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: String,
}

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::order::Order;
use crate::position::Position;
use crate::trade::Trade;
use crate::transaction::Transaction;

/// An account the token can access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountProperties {
    pub id: String,
    #[serde(default, rename = "mt4AccountID", skip_serializing_if = "Option::is_none")]
    pub mt4_account_id: Option<i64>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccountList {
    #[serde(default)]
    pub accounts: Vec<AccountProperties>,
}

/// Balances, margin and counters of an account, without its orders, trades and positions.
///
/// Identity, balance and margin fields are required. The rest default to zero when the
/// server leaves them out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub id: String,
    #[serde(default)]
    pub alias: String,
    pub currency: String,
    #[serde(rename = "createdByUserID", default)]
    pub created_by_user_id: i64,
    #[serde(rename = "createdTime", default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(rename = "hedgingEnabled", default)]
    pub hedging_enabled: bool,
    pub balance: Decimal,
    #[serde(rename = "NAV")]
    pub nav: Decimal,
    pub pl: Decimal,
    #[serde(rename = "unrealizedPL")]
    pub unrealized_pl: Decimal,
    #[serde(rename = "resettablePL", default)]
    pub resettable_pl: Decimal,
    #[serde(default)]
    pub financing: Decimal,
    #[serde(default)]
    pub commission: Decimal,
    #[serde(rename = "marginRate", default)]
    pub margin_rate: Decimal,
    #[serde(rename = "marginUsed")]
    pub margin_used: Decimal,
    #[serde(rename = "marginAvailable")]
    pub margin_available: Decimal,
    #[serde(rename = "positionValue", default)]
    pub position_value: Decimal,
    #[serde(rename = "marginCloseoutUnrealizedPL", default)]
    pub margin_closeout_unrealized_pl: Decimal,
    #[serde(rename = "marginCloseoutNAV", default)]
    pub margin_closeout_nav: Decimal,
    #[serde(rename = "marginCloseoutMarginUsed", default)]
    pub margin_closeout_margin_used: Decimal,
    #[serde(rename = "marginCloseoutPercent", default)]
    pub margin_closeout_percent: Decimal,
    #[serde(rename = "marginCloseoutPositionValue", default)]
    pub margin_closeout_position_value: Decimal,
    #[serde(rename = "withdrawalLimit", default)]
    pub withdrawal_limit: Decimal,
    #[serde(rename = "openTradeCount", default)]
    pub open_trade_count: i64,
    #[serde(rename = "openPositionCount", default)]
    pub open_position_count: i64,
    #[serde(rename = "pendingOrderCount", default)]
    pub pending_order_count: i64,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: String,
}

/// Full account state, including pending orders, open trades and positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(flatten)]
    pub summary: AccountSummary,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub trades: Vec<Trade>,
    #[serde(default)]
    pub positions: Vec<Position>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AccountResponse {
    pub account: Account,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccountSummaryResponse {
    pub account: AccountSummary,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: String,
}

/// Trading limits and precision of one instrument, as seen by an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    pub name: String,
    /// `CURRENCY`, `CFD` or `METAL`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "pipLocation")]
    pub pip_location: i32,
    #[serde(rename = "displayPrecision")]
    pub display_precision: u32,
    #[serde(rename = "tradeUnitsPrecision")]
    pub trade_units_precision: u32,
    #[serde(rename = "minimumTradeSize")]
    pub minimum_trade_size: Decimal,
    #[serde(rename = "maximumTrailingStopDistance")]
    pub maximum_trailing_stop_distance: Decimal,
    #[serde(rename = "minimumTrailingStopDistance")]
    pub minimum_trailing_stop_distance: Decimal,
    #[serde(rename = "maximumPositionSize")]
    pub maximum_position_size: Decimal,
    #[serde(rename = "maximumOrderUnits")]
    pub maximum_order_units: Decimal,
    #[serde(rename = "marginRate")]
    pub margin_rate: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccountInstrumentsResponse {
    #[serde(default)]
    pub instruments: Vec<Instrument>,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: String,
}

/// What happened to the account since a given transaction.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AccountChanges {
    #[serde(rename = "ordersCreated")]
    pub orders_created: Vec<Order>,
    #[serde(rename = "ordersCancelled")]
    pub orders_cancelled: Vec<Order>,
    #[serde(rename = "ordersFilled")]
    pub orders_filled: Vec<Order>,
    #[serde(rename = "ordersTriggered")]
    pub orders_triggered: Vec<Order>,
    #[serde(rename = "tradesOpened")]
    pub trades_opened: Vec<Trade>,
    #[serde(rename = "tradesReduced")]
    pub trades_reduced: Vec<Trade>,
    #[serde(rename = "tradesClosed")]
    pub trades_closed: Vec<Trade>,
    pub positions: Vec<Position>,
    pub transactions: Vec<Transaction>,
}

/// Price-dependent account values at the time of a changes request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AccountChangesState {
    #[serde(rename = "NAV")]
    pub nav: Option<Decimal>,
    #[serde(rename = "unrealizedPL")]
    pub unrealized_pl: Option<Decimal>,
    #[serde(rename = "marginUsed")]
    pub margin_used: Option<Decimal>,
    #[serde(rename = "marginAvailable")]
    pub margin_available: Option<Decimal>,
    #[serde(rename = "positionValue")]
    pub position_value: Option<Decimal>,
    #[serde(rename = "withdrawalLimit")]
    pub withdrawal_limit: Option<Decimal>,
    #[serde(rename = "marginCloseoutPercent")]
    pub margin_closeout_percent: Option<Decimal>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AccountChangesResponse {
    pub changes: AccountChanges,
    #[serde(default)]
    pub state: AccountChangesState,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: String,
}

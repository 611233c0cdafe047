use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::{ClientExtensions, OrderState, OrderType, TimeInForce};
use crate::transaction::Transaction;

/// An order as reported by the account.
///
/// Fields shared by every order type are typed; type-specific fields such as
/// `priceBound` or `distance` land in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    #[serde(rename = "createTime")]
    pub create_time: DateTime<Utc>,
    pub state: OrderState,
    #[serde(rename = "type")]
    pub kind: OrderType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, rename = "timeInForce", skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(default, rename = "tradeID", skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<String>,
    #[serde(default, rename = "clientExtensions", skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrdersResponse {
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderResponse {
    pub order: Order,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: String,
}

/// Transactions produced by submitting an order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderCreateResponse {
    #[serde(rename = "orderCreateTransaction")]
    pub order_create_transaction: Transaction,
    #[serde(default, rename = "orderFillTransaction")]
    pub order_fill_transaction: Option<Transaction>,
    #[serde(default, rename = "orderCancelTransaction")]
    pub order_cancel_transaction: Option<Transaction>,
    #[serde(default, rename = "orderReissueTransaction")]
    pub order_reissue_transaction: Option<Transaction>,
    #[serde(default, rename = "orderReissueRejectTransaction")]
    pub order_reissue_reject_transaction: Option<Transaction>,
    #[serde(default, rename = "relatedTransactionIDs")]
    pub related_transaction_ids: Vec<String>,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: String,
}

/// Transactions produced by replacing an order: the old one is cancelled, a new one created.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderReplaceResponse {
    #[serde(rename = "orderCancelTransaction")]
    pub order_cancel_transaction: Transaction,
    #[serde(rename = "orderCreateTransaction")]
    pub order_create_transaction: Transaction,
    #[serde(default, rename = "orderFillTransaction")]
    pub order_fill_transaction: Option<Transaction>,
    #[serde(default, rename = "orderReissueTransaction")]
    pub order_reissue_transaction: Option<Transaction>,
    #[serde(default, rename = "orderReissueRejectTransaction")]
    pub order_reissue_reject_transaction: Option<Transaction>,
    #[serde(default, rename = "replacingOrderCancelTransaction")]
    pub replacing_order_cancel_transaction: Option<Transaction>,
    #[serde(default, rename = "relatedTransactionIDs")]
    pub related_transaction_ids: Vec<String>,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderCancelResponse {
    #[serde(rename = "orderCancelTransaction")]
    pub order_cancel_transaction: Transaction,
    #[serde(default, rename = "relatedTransactionIDs")]
    pub related_transaction_ids: Vec<String>,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderClientExtensionsResponse {
    #[serde(rename = "orderClientExtensionsModifyTransaction")]
    pub order_client_extensions_modify_transaction: Transaction,
    #[serde(default, rename = "relatedTransactionIDs")]
    pub related_transaction_ids: Vec<String>,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: String,
}

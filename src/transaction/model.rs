use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of the account's transaction history.
///
/// The upstream defines several dozen transaction shapes. The fields every shape shares
/// are typed here; everything else is kept verbatim in `details`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub time: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, rename = "userID", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, rename = "accountID", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, rename = "batchID", skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,
    #[serde(default, rename = "requestID", skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Transaction {
    /// Look up a type-specific field, e.g. `"instrument"` or `"units"`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.details.get(key)
    }

    /// A type-specific string field, e.g. `"reason"`.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.details.get(key).and_then(Value::as_str)
    }
}

/// Page links returned by the time-based transaction query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionPages {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    #[serde(default, rename = "type")]
    pub types: Vec<String>,
    pub count: u64,
    #[serde(default)]
    pub pages: Vec<String>,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionResponse {
    pub transaction: Transaction,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionsResponse {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: String,
}

/// One line of the transaction stream.
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionStreamMessage {
    Transaction(Transaction),
    Heartbeat {
        time: DateTime<Utc>,
        last_transaction_id: Option<String>,
    },
}

impl TransactionStreamMessage {
    pub(crate) fn from_line(line: &str) -> Result<Self, crate::core::OandaError> {
        #[derive(Deserialize)]
        struct Envelope {
            #[serde(rename = "type")]
            kind: String,
            time: DateTime<Utc>,
            #[serde(default, rename = "lastTransactionID")]
            last_transaction_id: Option<String>,
        }

        let head: Envelope = crate::core::net::decode("transaction stream", line)?;
        if head.kind == "HEARTBEAT" {
            return Ok(Self::Heartbeat {
                time: head.time,
                last_transaction_id: head.last_transaction_id,
            });
        }
        crate::core::net::decode("transaction stream", line).map(Self::Transaction)
    }
}

//! Broker keywords shared across resources.
//!
//! Each enum serializes to the exact upstream string, and `as_str` returns the same text
//! for use in query strings.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $text)] $variant, )+
        }

        impl $name {
            /// The upstream string for this value.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $text, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

keyword_enum! {
    /// Candlestick time bucket.
    #[derive(Default)]
    pub enum Granularity {
        /// 5 second candlesticks, minute alignment
        #[default]
        S5 => "S5",
        S10 => "S10",
        S15 => "S15",
        S30 => "S30",
        /// 1 minute candlesticks, minute alignment
        M1 => "M1",
        M2 => "M2",
        M4 => "M4",
        M5 => "M5",
        M10 => "M10",
        M15 => "M15",
        M30 => "M30",
        /// 1 hour candlesticks, hour alignment
        H1 => "H1",
        H2 => "H2",
        H3 => "H3",
        H4 => "H4",
        H6 => "H6",
        H8 => "H8",
        H12 => "H12",
        /// 1 day candlesticks, day alignment
        D => "D",
        /// 1 week candlesticks, aligned to start of week
        W => "W",
        /// 1 month candlesticks, aligned to first day of the month
        M => "M",
    }
}

keyword_enum! {
    /// Which prices a candle carries: mid, bid, ask or a combination.
    #[derive(Default)]
    pub enum PriceComponent {
        #[default]
        Mid => "M",
        Bid => "B",
        Ask => "A",
        AskMid => "AM",
        BidMid => "BM",
        AskBid => "AB",
        BidAskMid => "BAM",
    }
}

keyword_enum! {
    /// Day of the week used for weekly-aligned granularities.
    pub enum WeeklyAlignment {
        Monday => "Monday",
        Tuesday => "Tuesday",
        Wednesday => "Wednesday",
        Thursday => "Thursday",
        Friday => "Friday",
        Saturday => "Saturday",
        Sunday => "Sunday",
    }
}

keyword_enum! {
    /// Filter for the order list endpoint.
    pub enum OrderState {
        Pending => "PENDING",
        Filled => "FILLED",
        Triggered => "TRIGGERED",
        Cancelled => "CANCELLED",
        All => "ALL",
    }
}

keyword_enum! {
    pub enum OrderType {
        Market => "MARKET",
        Limit => "LIMIT",
        Stop => "STOP",
        MarketIfTouched => "MARKET_IF_TOUCHED",
        TakeProfit => "TAKE_PROFIT",
        StopLoss => "STOP_LOSS",
        GuaranteedStopLoss => "GUARANTEED_STOP_LOSS",
        TrailingStopLoss => "TRAILING_STOP_LOSS",
        FixedPrice => "FIXED_PRICE",
    }
}

impl OrderType {
    /// Orders that attach to an existing trade rather than opening one.
    pub const fn is_dependent(self) -> bool {
        matches!(
            self,
            Self::TakeProfit | Self::StopLoss | Self::GuaranteedStopLoss | Self::TrailingStopLoss
        )
    }
}

keyword_enum! {
    pub enum TimeInForce {
        /// Good unTil Cancelled
        Gtc => "GTC",
        /// Good unTil Date, cancelled at `gtdTime`
        Gtd => "GTD",
        /// Good For Day, cancelled at 5pm New York time
        Gfd => "GFD",
        /// Filled Or Killed
        Fok => "FOK",
        /// Immediately partially filled Or Cancelled
        Ioc => "IOC",
    }
}

keyword_enum! {
    /// How a fill interacts with an existing position.
    #[derive(Default)]
    pub enum OrderPositionFill {
        OpenOnly => "OPEN_ONLY",
        ReduceFirst => "REDUCE_FIRST",
        ReduceOnly => "REDUCE_ONLY",
        #[default]
        Default => "DEFAULT",
    }
}

keyword_enum! {
    /// Which price component triggers an order.
    #[derive(Default)]
    pub enum TriggerCondition {
        /// Ask for long orders, bid for short orders.
        #[default]
        Default => "DEFAULT",
        /// Bid for long orders, ask for short orders.
        Inverse => "INVERSE",
        Bid => "BID",
        Ask => "ASK",
        Mid => "MID",
    }
}

keyword_enum! {
    pub enum TradeStateFilter {
        Open => "OPEN",
        Closed => "CLOSED",
        CloseWhenTradeable => "CLOSE_WHEN_TRADEABLE",
        All => "ALL",
    }
}

keyword_enum! {
    /// Transaction type filter for the transaction history endpoints.
    pub enum TransactionFilter {
        Order => "ORDER",
        Funding => "FUNDING",
        Admin => "ADMIN",
        Create => "CREATE",
        Close => "CLOSE",
        Reopen => "REOPEN",
        ClientConfigure => "CLIENT_CONFIGURE",
        ClientConfigureReject => "CLIENT_CONFIGURE_REJECT",
        TransferFunds => "TRANSFER_FUNDS",
        TransferFundsReject => "TRANSFER_FUNDS_REJECT",
        MarketOrder => "MARKET_ORDER",
        MarketOrderReject => "MARKET_ORDER_REJECT",
        LimitOrder => "LIMIT_ORDER",
        LimitOrderReject => "LIMIT_ORDER_REJECT",
        StopOrder => "STOP_ORDER",
        StopOrderReject => "STOP_ORDER_REJECT",
        MarketIfTouchedOrder => "MARKET_IF_TOUCHED_ORDER",
        MarketIfTouchedOrderReject => "MARKET_IF_TOUCHED_ORDER_REJECT",
        TakeProfitOrder => "TAKE_PROFIT_ORDER",
        TakeProfitOrderReject => "TAKE_PROFIT_ORDER_REJECT",
        StopLossOrder => "STOP_LOSS_ORDER",
        StopLossOrderReject => "STOP_LOSS_ORDER_REJECT",
        GuaranteedStopLossOrder => "GUARANTEED_STOP_LOSS_ORDER",
        GuaranteedStopLossOrderReject => "GUARANTEED_STOP_LOSS_ORDER_REJECT",
        TrailingStopLossOrder => "TRAILING_STOP_LOSS_ORDER",
        TrailingStopLossOrderReject => "TRAILING_STOP_LOSS_ORDER_REJECT",
        OneCancelsAllOrder => "ONE_CANCELS_ALL_ORDER",
        OneCancelsAllOrderReject => "ONE_CANCELS_ALL_ORDER_REJECT",
        OneCancelsAllOrderTriggered => "ONE_CANCELS_ALL_ORDER_TRIGGERED",
        OrderFill => "ORDER_FILL",
        OrderCancel => "ORDER_CANCEL",
        OrderCancelReject => "ORDER_CANCEL_REJECT",
        OrderClientExtensionsModify => "ORDER_CLIENT_EXTENSIONS_MODIFY",
        OrderClientExtensionsModifyReject => "ORDER_CLIENT_EXTENSIONS_MODIFY_REJECT",
        TradeClientExtensionsModify => "TRADE_CLIENT_EXTENSIONS_MODIFY",
        TradeClientExtensionsModifyReject => "TRADE_CLIENT_EXTENSIONS_MODIFY_REJECT",
        MarginCallEnter => "MARGIN_CALL_ENTER",
        MarginCallExtend => "MARGIN_CALL_EXTEND",
        MarginCallExit => "MARGIN_CALL_EXIT",
        DelayedTradeClosure => "DELAYED_TRADE_CLOSURE",
        DailyFinancing => "DAILY_FINANCING",
        ResetResettablePl => "RESET_RESETTABLE_PL",
    }
}

keyword_enum! {
    /// Long or short side of a position.
    pub enum PositionSide {
        Long => "long",
        Short => "short",
    }
}

/// Client-supplied tags attached to an order or trade.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientExtensions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// How many units to close on a trade or one side of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseUnits {
    /// Close everything (`"ALL"`).
    All,
    /// Close this many units; must be positive.
    Units(rust_decimal::Decimal),
}

impl CloseUnits {
    /// Reject zero or negative unit counts before anything is sent.
    pub(crate) fn validate(self) -> Result<Self, crate::core::OandaError> {
        match self {
            Self::Units(u) if u <= rust_decimal::Decimal::ZERO => {
                Err(crate::core::OandaError::InvalidParams(format!(
                    "units must be greater than 0, got {u}"
                )))
            }
            other => Ok(other),
        }
    }
}

impl fmt::Display for CloseUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("ALL"),
            Self::Units(u) => write!(f, "{u}"),
        }
    }
}

impl Serialize for CloseUnits {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Body for the order and trade client-extension update endpoints.
///
/// Trades only accept `client_extensions`; `trade_client_extensions` applies to orders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClientExtensionsUpdate {
    #[serde(rename = "clientExtensions", skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    #[serde(rename = "tradeClientExtensions", skip_serializing_if = "Option::is_none")]
    pub trade_client_extensions: Option<ClientExtensions>,
}

impl ClientExtensionsUpdate {
    pub fn new(client_extensions: ClientExtensions) -> Self {
        Self {
            client_extensions: Some(client_extensions),
            trade_client_extensions: None,
        }
    }

    /// Also update the extensions of the trade an order opens.
    #[must_use]
    pub fn trade_client_extensions(mut self, ext: ClientExtensions) -> Self {
        self.trade_client_extensions = Some(ext);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), crate::core::OandaError> {
        if self.client_extensions.is_none() && self.trade_client_extensions.is_none() {
            return Err(crate::core::OandaError::InvalidParams(
                "no client extensions to update".into(),
            ));
        }
        Ok(())
    }
}

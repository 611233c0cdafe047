//! Maps logical operations to URLs on the live or practice hosts.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::core::client::constants::{
    LIVE_REST_HOST, LIVE_STREAM_HOST, PRACTICE_REST_HOST, PRACTICE_STREAM_HOST,
};
use crate::core::OandaError;

/// Which of the two broker environments a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    /// Real-money trading (`fxtrade`).
    Live,
    /// Simulated trading (`fxpractice`).
    #[default]
    Practice,
}

impl Environment {
    /// Base URL of the REST API for this environment.
    pub const fn rest_host(self) -> &'static str {
        match self {
            Self::Live => LIVE_REST_HOST,
            Self::Practice => PRACTICE_REST_HOST,
        }
    }

    /// Base URL of the streaming API for this environment.
    pub const fn stream_host(self) -> &'static str {
        match self {
            Self::Live => LIVE_STREAM_HOST,
            Self::Practice => PRACTICE_STREAM_HOST,
        }
    }

    /// Shorthand for `if live { Live } else { Practice }`.
    pub const fn from_live_flag(live: bool) -> Self {
        if live { Self::Live } else { Self::Practice }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Live => "live",
            Self::Practice => "practice",
        })
    }
}

impl FromStr for Environment {
    type Err = OandaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" | "fxtrade" => Ok(Self::Live),
            "practice" | "fxpractice" | "demo" => Ok(Self::Practice),
            other => Err(OandaError::InvalidParams(format!(
                "unknown environment '{other}', expected 'live' or 'practice'"
            ))),
        }
    }
}

/// One variant per upstream operation, carrying its path parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Accounts,
    AccountDetails { account: String },
    AccountSummary { account: String },
    AccountInstruments { account: String },
    AccountChanges { account: String },

    InstrumentCandles { instrument: String },
    InstrumentOrderBook { instrument: String },
    InstrumentPositionBook { instrument: String },

    LatestCandles { account: String },
    Pricing { account: String },
    PricingStream { account: String },
    AccountInstrumentCandles { account: String, instrument: String },

    Orders { account: String },
    PendingOrders { account: String },
    OrderDetails { account: String, order: String },
    CancelOrder { account: String, order: String },
    OrderClientExtensions { account: String, order: String },

    Positions { account: String },
    OpenPositions { account: String },
    PositionDetails { account: String, instrument: String },
    ClosePosition { account: String, instrument: String },

    Trades { account: String },
    OpenTrades { account: String },
    TradeDetails { account: String, trade: String },
    CloseTrade { account: String, trade: String },
    TradeClientExtensions { account: String, trade: String },
    TradeOrders { account: String, trade: String },

    Transactions { account: String },
    TransactionDetails { account: String, transaction: String },
    TransactionIdRange { account: String },
    TransactionSinceId { account: String },
    TransactionStream { account: String },
}

impl Endpoint {
    /// Path segments after the host, e.g. `["v3", "accounts", "001", "summary"]`.
    pub fn segments(&self) -> Vec<&str> {
        use Endpoint::*;

        let mut out = vec!["v3"];
        match self {
            Accounts => out.push("accounts"),
            AccountDetails { account } => out.extend(["accounts", account.as_str()]),
            AccountSummary { account } => out.extend(["accounts", account.as_str(), "summary"]),
            AccountInstruments { account } => {
                out.extend(["accounts", account.as_str(), "instruments"]);
            }
            AccountChanges { account } => out.extend(["accounts", account.as_str(), "changes"]),

            InstrumentCandles { instrument } => {
                out.extend(["instruments", instrument.as_str(), "candles"]);
            }
            InstrumentOrderBook { instrument } => {
                out.extend(["instruments", instrument.as_str(), "orderBook"]);
            }
            InstrumentPositionBook { instrument } => {
                out.extend(["instruments", instrument.as_str(), "positionBook"]);
            }

            LatestCandles { account } => {
                out.extend(["accounts", account.as_str(), "candles", "latest"]);
            }
            Pricing { account } => out.extend(["accounts", account.as_str(), "pricing"]),
            PricingStream { account } => {
                out.extend(["accounts", account.as_str(), "pricing", "stream"]);
            }
            AccountInstrumentCandles { account, instrument } => {
                out.extend([
                    "accounts",
                    account.as_str(),
                    "instruments",
                    instrument.as_str(),
                    "candles",
                ]);
            }

            Orders { account } => out.extend(["accounts", account.as_str(), "orders"]),
            PendingOrders { account } => {
                out.extend(["accounts", account.as_str(), "pendingOrders"]);
            }
            OrderDetails { account, order } => {
                out.extend(["accounts", account.as_str(), "orders", order.as_str()]);
            }
            CancelOrder { account, order } => {
                out.extend(["accounts", account.as_str(), "orders", order.as_str(), "cancel"]);
            }
            OrderClientExtensions { account, order } => {
                out.extend([
                    "accounts",
                    account.as_str(),
                    "orders",
                    order.as_str(),
                    "clientExtensions",
                ]);
            }

            Positions { account } => out.extend(["accounts", account.as_str(), "positions"]),
            OpenPositions { account } => {
                out.extend(["accounts", account.as_str(), "openPositions"]);
            }
            PositionDetails { account, instrument } => {
                out.extend(["accounts", account.as_str(), "positions", instrument.as_str()]);
            }
            ClosePosition { account, instrument } => {
                out.extend([
                    "accounts",
                    account.as_str(),
                    "positions",
                    instrument.as_str(),
                    "close",
                ]);
            }

            Trades { account } => out.extend(["accounts", account.as_str(), "trades"]),
            OpenTrades { account } => out.extend(["accounts", account.as_str(), "openTrades"]),
            TradeDetails { account, trade } => {
                out.extend(["accounts", account.as_str(), "trades", trade.as_str()]);
            }
            CloseTrade { account, trade } => {
                out.extend(["accounts", account.as_str(), "trades", trade.as_str(), "close"]);
            }
            TradeClientExtensions { account, trade } => {
                out.extend([
                    "accounts",
                    account.as_str(),
                    "trades",
                    trade.as_str(),
                    "clientExtensions",
                ]);
            }
            TradeOrders { account, trade } => {
                out.extend(["accounts", account.as_str(), "trades", trade.as_str(), "orders"]);
            }

            Transactions { account } => out.extend(["accounts", account.as_str(), "transactions"]),
            TransactionDetails { account, transaction } => {
                out.extend(["accounts", account.as_str(), "transactions", transaction.as_str()]);
            }
            TransactionIdRange { account } => {
                out.extend(["accounts", account.as_str(), "transactions", "idrange"]);
            }
            TransactionSinceId { account } => {
                out.extend(["accounts", account.as_str(), "transactions", "sinceid"]);
            }
            TransactionStream { account } => {
                out.extend(["accounts", account.as_str(), "transactions", "stream"]);
            }
        }
        out
    }

    /// The unencoded `/v3/...` path.
    pub fn path(&self) -> String {
        let mut p = String::new();
        for seg in self.segments() {
            p.push('/');
            p.push_str(seg);
        }
        p
    }

    /// Whether this operation is served from the streaming host.
    pub const fn is_stream(&self) -> bool {
        matches!(
            self,
            Self::PricingStream { .. } | Self::TransactionStream { .. }
        )
    }

    /// Join this endpoint onto `base`, percent-encoding every path parameter.
    ///
    /// Any path already present on `base` is kept as a prefix.
    pub fn url_on(&self, base: &Url) -> Result<Url, OandaError> {
        let mut url = base.clone();
        {
            let mut segs = url
                .path_segments_mut()
                .map_err(|()| OandaError::Data(format!("base URL cannot be a base: {base}")))?;
            segs.pop_if_empty();
            segs.extend(self.segments());
        }
        Ok(url)
    }
}

/// Resolve `endpoint` to a fully qualified URL string for `env`.
///
/// Pure: the same inputs always produce the same string.
pub fn resolve(env: Environment, endpoint: &Endpoint) -> Result<String, OandaError> {
    let host = if endpoint.is_stream() {
        env.stream_host()
    } else {
        env.rest_host()
    };
    let base = Url::parse(host)?;
    Ok(endpoint.url_on(&base)?.to_string())
}

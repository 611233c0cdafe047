//! oanda-rs: ergonomic async client for the OANDA v20 REST and streaming API.
//!
//! One [`OandaClient`] is built per token and environment. Each resource is reached
//! through a borrowed handle: [`accounts`](OandaClient::accounts),
//! [`instruments`](OandaClient::instruments), [`orders`](OandaClient::orders),
//! [`positions`](OandaClient::positions), [`pricing`](OandaClient::pricing),
//! [`trades`](OandaClient::trades) and [`transactions`](OandaClient::transactions).
//!
//! ```no_run
//! # async fn run() -> Result<(), oanda_rs::OandaError> {
//! use oanda_rs::instrument::CandlesQuery;
//! use oanda_rs::{Granularity, OandaClientBuilder};
//!
//! let client = OandaClientBuilder::from_env()?.build()?;
//! let candles = client
//!     .instruments()
//!     .candles("EUR_USD", &CandlesQuery::new().granularity(Granularity::H1).count(24))
//!     .await?;
//! for c in &candles.candles {
//!     println!("{} {:?}", c.time, c.mid);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;

pub mod account;
pub mod instrument;
pub mod order;
pub mod position;
pub mod pricing;
pub mod trade;
pub mod transaction;

pub use crate::core::{
    ClientExtensions, ClientExtensionsUpdate, CloseUnits, Endpoint, Environment, Granularity,
    OandaClient, OandaClientBuilder, OandaError, OrderPositionFill, OrderState, OrderType,
    PositionSide, PriceComponent, TimeInForce, TradeStateFilter, TransactionFilter,
    TriggerCondition, WeeklyAlignment, resolve,
};

pub use account::{AccountApi, AccountQuery};
pub use instrument::{BookQuery, CandlesQuery, InstrumentApi};
pub use order::{OnFillDetails, OrderApi, OrderQuery, OrderRequest};
pub use position::{PositionApi, PositionCloseout};
pub use pricing::{LatestCandlesQuery, PriceStreamMessage, PricingApi, PricingQuery, StreamQuery};
pub use trade::{DependentOrders, TradeApi, TradeQuery};
pub use transaction::{TransactionApi, TransactionQuery, TransactionStreamMessage};

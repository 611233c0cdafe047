//! Core components of the `oanda-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`OandaClient`] and its builder.
//! - The primary [`OandaError`] type.
//! - Endpoint resolution for the live and practice environments.
//! - Query-string encoding and the broker keyword enums.

/// The main client (`OandaClient`), builder, and configuration.
pub mod client;
/// Logical operations and the hosts they resolve to.
pub mod endpoint;
/// The primary error type (`OandaError`) for the crate.
pub mod error;
/// Broker keywords (granularity, order type, time-in-force, ...).
pub mod models;
pub(crate) mod net;
/// Query-string encoding helpers.
pub mod query;

// convenient re-exports so most code can just `use crate::core::OandaClient`
pub use client::{OandaClient, OandaClientBuilder};
pub use endpoint::{Endpoint, Environment, resolve};
pub use error::OandaError;
pub use models::{
    ClientExtensions, ClientExtensionsUpdate, CloseUnits, Granularity, OrderPositionFill,
    OrderState, OrderType, PositionSide, PriceComponent, TimeInForce, TradeStateFilter,
    TransactionFilter, TriggerCondition, WeeklyAlignment,
};

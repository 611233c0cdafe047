mod api;
mod dependent;
mod model;

pub use dependent::DependentOrders;
pub use model::{
    CloseTradeResponse, Trade, TradeClientExtensionsResponse, TradeOrdersResponse, TradeResponse,
    TradesResponse,
};

use serde::Serialize;

use crate::core::query::csv;
use crate::core::{ClientExtensionsUpdate, CloseUnits, OandaClient, OandaError, TradeStateFilter};

/// Filters for the trade list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TradeQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instrument: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<String>,
    #[serde(rename = "beforeID", skip_serializing_if = "Option::is_none")]
    pub before_id: Option<String>,
}

impl TradeQuery {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn ids<S: AsRef<str>>(mut self, ids: &[S]) -> Self {
        self.ids = csv(ids);
        self
    }

    /// Filter by state. [default=OPEN]
    #[must_use]
    pub fn state(mut self, state: TradeStateFilter) -> Self {
        self.state = Some(state.as_str().to_string());
        self
    }

    #[must_use]
    pub fn instrument(mut self, instrument: impl Into<String>) -> Self {
        self.instrument = Some(instrument.into());
        self
    }

    /// Maximum number of trades. Outside `1..=500` falls back to the default of 50.
    #[must_use]
    pub fn count(mut self, count: u32) -> Self {
        let count = if (1..=500).contains(&count) { count } else { 50 };
        self.count = Some(count.to_string());
        self
    }

    #[must_use]
    pub fn before_id(mut self, id: impl Into<String>) -> Self {
        self.before_id = Some(id.into());
        self
    }
}

/// Trade endpoints for one client.
#[derive(Debug, Clone, Copy)]
pub struct TradeApi<'a> {
    client: &'a OandaClient,
}

impl OandaClient {
    /// Trade listing and management.
    pub const fn trades(&self) -> TradeApi<'_> {
        TradeApi { client: self }
    }
}

impl TradeApi<'_> {
    /// List trades matching `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn list(
        &self,
        account: &str,
        query: &TradeQuery,
    ) -> Result<TradesResponse, OandaError> {
        api::fetch_list(self.client, account, query).await
    }

    /// List the open trades.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn open(&self, account: &str) -> Result<TradesResponse, OandaError> {
        api::fetch_open(self.client, account).await
    }

    /// Details of one trade. `id` may be a trade ID or `@` followed by a client ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn details(&self, account: &str, id: &str) -> Result<TradeResponse, OandaError> {
        api::fetch_details(self.client, account, id).await
    }

    /// Close all of a trade, or part of it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParams` for zero or negative units, otherwise an error if the
    /// request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn close(
        &self,
        account: &str,
        id: &str,
        units: CloseUnits,
    ) -> Result<CloseTradeResponse, OandaError> {
        let units = units.validate()?;
        api::close(self.client, account, id, units).await
    }

    /// Update the client extensions of a trade.
    ///
    /// Only `client_extensions` is sent; `trade_client_extensions` is an order-only field.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParams` if there is nothing to update, otherwise an error if the
    /// request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn update_client_extensions(
        &self,
        account: &str,
        id: &str,
        update: &ClientExtensionsUpdate,
    ) -> Result<TradeClientExtensionsResponse, OandaError> {
        let update = ClientExtensionsUpdate {
            client_extensions: update.client_extensions.clone(),
            trade_client_extensions: None,
        };
        update.validate()?;
        api::update_client_extensions(self.client, account, id, &update).await
    }

    /// Create, replace or cancel the dependent orders of a trade.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParams` if `orders` is empty, otherwise an error if the request
    /// fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn update_orders(
        &self,
        account: &str,
        id: &str,
        orders: &DependentOrders,
    ) -> Result<TradeOrdersResponse, OandaError> {
        if orders.is_empty() {
            return Err(OandaError::InvalidParams("no dependent orders to update".into()));
        }
        api::update_orders(self.client, account, id, orders).await
    }
}

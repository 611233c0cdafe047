//! Orders: listing, submitting, replacing and cancelling.
//!
//! Orders are built with the per-type constructors on [`OrderRequest`]:
//!
//! ```no_run
//! # async fn run() -> Result<(), oanda_rs::OandaError> {
//! use oanda_rs::order::OrderRequest;
//! use oanda_rs::{Environment, OandaClient};
//! use rust_decimal::Decimal;
//!
//! let client = OandaClient::new("token", Environment::Practice)?;
//! let resp = client
//!     .orders()
//!     .create("101-001-0000000-001", &OrderRequest::market("EUR_USD", Decimal::from(100)))
//!     .await?;
//! println!("{:?}", resp.order_fill_transaction);
//! # Ok(())
//! # }
//! ```

mod api;
mod model;
mod request;

pub use model::{
    Order, OrderCancelResponse, OrderClientExtensionsResponse, OrderCreateResponse,
    OrderReplaceResponse, OrderResponse, OrdersResponse,
};
pub(crate) use request::OnFillSlot;
pub use request::{OnFillDetails, OrderRequest};

use serde::Serialize;

use crate::core::query::csv;
use crate::core::{ClientExtensionsUpdate, OandaClient, OandaError, OrderState};

/// Filters for the order list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderQuery {
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

impl OrderQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only these order IDs.
    #[must_use]
    pub fn ids<S: AsRef<str>>(mut self, ids: &[S]) -> Self {
        self.ids = csv(ids);
        self
    }

    /// Filter by state. [default=PENDING]
    #[must_use]
    pub fn state(mut self, state: OrderState) -> Self {
        self.state = Some(state.as_str().to_string());
        self
    }

    #[must_use]
    pub fn instrument(mut self, instrument: impl Into<String>) -> Self {
        self.instrument = Some(instrument.into());
        self
    }

    /// Maximum number of orders. Outside `1..=500` falls back to the default of 50.
    #[must_use]
    pub fn count(mut self, count: u32) -> Self {
        let count = if (1..=500).contains(&count) { count } else { 50 };
        self.count = Some(count.to_string());
        self
    }

    /// Only orders with an ID below this one.
    #[must_use]
    pub fn before_id(mut self, id: impl Into<String>) -> Self {
        self.before_id = Some(id.into());
        self
    }
}

/// Order endpoints for one client.
#[derive(Debug, Clone, Copy)]
pub struct OrderApi<'a> {
    client: &'a OandaClient,
}

impl OandaClient {
    /// Order listing and management.
    pub const fn orders(&self) -> OrderApi<'_> {
        OrderApi { client: self }
    }
}

impl OrderApi<'_> {
    /// List orders matching `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn list(
        &self,
        account: &str,
        query: &OrderQuery,
    ) -> Result<OrdersResponse, OandaError> {
        api::fetch_list(self.client, account, query).await
    }

    /// List all pending orders.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn pending(&self, account: &str) -> Result<OrdersResponse, OandaError> {
        api::fetch_pending(self.client, account).await
    }

    /// Details of one order. `id` may be an order ID or `@` followed by a client ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn details(&self, account: &str, id: &str) -> Result<OrderResponse, OandaError> {
        api::fetch_details(self.client, account, id).await
    }

    /// Submit a new order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the order is rejected, or the response cannot
    /// be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn create(
        &self,
        account: &str,
        order: &OrderRequest,
    ) -> Result<OrderCreateResponse, OandaError> {
        api::create(self.client, account, order).await
    }

    /// Cancel order `id` and submit `order` in its place.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the order is rejected, or the response cannot
    /// be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn replace(
        &self,
        account: &str,
        id: &str,
        order: &OrderRequest,
    ) -> Result<OrderReplaceResponse, OandaError> {
        api::replace(self.client, account, id, order).await
    }

    /// Cancel a pending order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn cancel(&self, account: &str, id: &str) -> Result<OrderCancelResponse, OandaError> {
        api::cancel(self.client, account, id).await
    }

    /// Update the client extensions of an order, and optionally of the trade it opens.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParams` if `update` is empty, otherwise an error if the request
    /// fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn update_client_extensions(
        &self,
        account: &str,
        id: &str,
        update: &ClientExtensionsUpdate,
    ) -> Result<OrderClientExtensionsResponse, OandaError> {
        update.validate()?;
        api::update_client_extensions(self.client, account, id, update).await
    }
}

mod api;
mod model;

pub use model::{
    Transaction, TransactionPages, TransactionResponse, TransactionStreamMessage,
    TransactionsResponse,
};

use chrono::{DateTime, Utc};
use futures_util::stream::BoxStream;
use serde::Serialize;

use crate::core::query::{check_range, csv, rfc3339};
use crate::core::{OandaClient, OandaError, TransactionFilter};

/// Time-range query for the paged transaction listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransactionQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(rename = "pageSize", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub types: Option<String>,
}

impl TransactionQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start of the range, inclusive. [default=account creation time]
    ///
    /// A reversed range is dropped and both ends are cleared.
    #[must_use]
    pub fn from(mut self, from: DateTime<Utc>) -> Self {
        self.from = Some(rfc3339(from));
        check_range(&mut self.from, &mut self.to);
        self
    }

    /// End of the range, inclusive. [default=request time]
    ///
    /// An end in the future, or one not after `from`, clears both ends.
    #[must_use]
    pub fn to(mut self, to: DateTime<Utc>) -> Self {
        self.to = Some(rfc3339(to));
        check_range(&mut self.from, &mut self.to);
        self
    }

    /// Transactions per page. Outside `1..=1000` falls back to the default of 100.
    #[must_use]
    pub fn page_size(mut self, size: u32) -> Self {
        let size = if (1..=1000).contains(&size) { size } else { 100 };
        self.page_size = Some(size.to_string());
        self
    }

    /// Restrict the listing to these transaction types.
    #[must_use]
    pub fn types(mut self, types: &[TransactionFilter]) -> Self {
        self.types = csv(types.iter().map(|t| t.as_str()));
        self
    }
}

/// Transaction history endpoints for one client.
#[derive(Debug, Clone, Copy)]
pub struct TransactionApi<'a> {
    client: &'a OandaClient,
}

impl OandaClient {
    /// Transaction history and the transaction stream.
    pub const fn transactions(&self) -> TransactionApi<'_> {
        TransactionApi { client: self }
    }
}

impl TransactionApi<'_> {
    /// List the pages of transactions that satisfy a time-based query.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn pages(
        &self,
        account: &str,
        query: &TransactionQuery,
    ) -> Result<TransactionPages, OandaError> {
        api::fetch_pages(self.client, account, query).await
    }

    /// Details of a single transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn details(
        &self,
        account: &str,
        transaction_id: &str,
    ) -> Result<TransactionResponse, OandaError> {
        api::fetch_details(self.client, account, transaction_id).await
    }

    /// Transactions with IDs in `from..=to`, optionally filtered by type.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn id_range(
        &self,
        account: &str,
        from: &str,
        to: &str,
        types: &[TransactionFilter],
    ) -> Result<TransactionsResponse, OandaError> {
        api::fetch_id_range(self.client, account, from, to, types).await
    }

    /// Transactions after (not including) `id`, optionally filtered by type.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn since_id(
        &self,
        account: &str,
        id: &str,
        types: &[TransactionFilter],
    ) -> Result<TransactionsResponse, OandaError> {
        api::fetch_since_id(self.client, account, id, types).await
    }

    /// Follow the account's transaction stream, heartbeats included.
    ///
    /// # Errors
    ///
    /// Fails if the stream cannot be opened; errors while reading arrive as stream items.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn stream(
        &self,
        account: &str,
    ) -> Result<BoxStream<'static, Result<TransactionStreamMessage, OandaError>>, OandaError> {
        api::open_stream(self.client, account).await
    }
}

mod api;
mod model;

pub use model::{
    Account, AccountChanges, AccountChangesResponse, AccountChangesState,
    AccountInstrumentsResponse, AccountList, AccountProperties, AccountResponse, AccountSummary,
    AccountSummaryResponse, Instrument,
};

use serde::Serialize;

use crate::core::query::csv;
use crate::core::{OandaClient, OandaError};

/// Options for the account endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AccountQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruments: Option<String>,
    #[serde(rename = "sinceTransactionID", skip_serializing_if = "Option::is_none")]
    pub since_transaction_id: Option<String>,
}

impl AccountQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only these instruments.
    #[must_use]
    pub fn instruments<S: AsRef<str>>(mut self, instruments: &[S]) -> Self {
        self.instruments = csv(instruments);
        self
    }

    /// Changes after this transaction.
    #[must_use]
    pub fn since_transaction_id(mut self, id: impl Into<String>) -> Self {
        self.since_transaction_id = Some(id.into());
        self
    }
}

/// Account endpoints for one client.
#[derive(Debug, Clone, Copy)]
pub struct AccountApi<'a> {
    client: &'a OandaClient,
}

impl OandaClient {
    /// Accounts, their summaries, tradeable instruments and changes.
    pub const fn accounts(&self) -> AccountApi<'_> {
        AccountApi { client: self }
    }
}

impl AccountApi<'_> {
    /// Accounts the token is authorized for.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn list(&self) -> Result<AccountList, OandaError> {
        api::fetch_list(self.client).await
    }

    /// Full details of one account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn details(&self, account: &str) -> Result<AccountResponse, OandaError> {
        api::fetch_details(self.client, account).await
    }

    /// Summary of one account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn summary(&self, account: &str) -> Result<AccountSummaryResponse, OandaError> {
        api::fetch_summary(self.client, account).await
    }

    /// Instruments the account can trade, optionally narrowed with
    /// [`AccountQuery::instruments`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn instruments(
        &self,
        account: &str,
        query: &AccountQuery,
    ) -> Result<AccountInstrumentsResponse, OandaError> {
        api::fetch_instruments(self.client, account, query).await
    }

    /// Changes to the account since `since_transaction_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn changes(
        &self,
        account: &str,
        since_transaction_id: &str,
    ) -> Result<AccountChangesResponse, OandaError> {
        let query = AccountQuery::new().since_transaction_id(since_transaction_id);
        api::fetch_changes(self.client, account, &query).await
    }
}

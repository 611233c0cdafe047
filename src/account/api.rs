use crate::account::{
    AccountChangesResponse, AccountInstrumentsResponse, AccountList, AccountQuery, AccountResponse,
    AccountSummaryResponse,
};
use crate::core::net::Request;
use crate::core::query::append_query;
use crate::core::{Endpoint, OandaClient, OandaError};

pub(super) async fn fetch_list(client: &OandaClient) -> Result<AccountList, OandaError> {
    let url = client.url_for(&Endpoint::Accounts)?;
    client.execute_json("accounts", Request::get(url)).await
}

pub(super) async fn fetch_details(
    client: &OandaClient,
    account: &str,
) -> Result<AccountResponse, OandaError> {
    let url = client.url_for(&Endpoint::AccountDetails {
        account: account.to_string(),
    })?;
    client.execute_json("account details", Request::get(url)).await
}

pub(super) async fn fetch_summary(
    client: &OandaClient,
    account: &str,
) -> Result<AccountSummaryResponse, OandaError> {
    let url = client.url_for(&Endpoint::AccountSummary {
        account: account.to_string(),
    })?;
    client.execute_json("account summary", Request::get(url)).await
}

pub(super) async fn fetch_instruments(
    client: &OandaClient,
    account: &str,
    query: &AccountQuery,
) -> Result<AccountInstrumentsResponse, OandaError> {
    let mut url = client.url_for(&Endpoint::AccountInstruments {
        account: account.to_string(),
    })?;
    append_query(&mut url, query)?;
    client
        .execute_json("account instruments", Request::get(url))
        .await
}

pub(super) async fn fetch_changes(
    client: &OandaClient,
    account: &str,
    query: &AccountQuery,
) -> Result<AccountChangesResponse, OandaError> {
    let mut url = client.url_for(&Endpoint::AccountChanges {
        account: account.to_string(),
    })?;
    append_query(&mut url, query)?;
    client.execute_json("account changes", Request::get(url)).await
}

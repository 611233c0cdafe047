use futures_util::StreamExt;
use futures_util::stream::BoxStream;
use serde::Serialize;

use crate::core::net::Request;
use crate::core::query::{append_query, csv};
use crate::core::{Endpoint, OandaClient, OandaError, TransactionFilter};
use crate::transaction::{
    TransactionPages, TransactionQuery, TransactionResponse, TransactionStreamMessage,
    TransactionsResponse,
};

#[derive(Serialize)]
struct IdRangeQuery<'a> {
    from: &'a str,
    to: &'a str,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    types: Option<String>,
}

#[derive(Serialize)]
struct SinceIdQuery<'a> {
    id: &'a str,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    types: Option<String>,
}

fn type_filter(types: &[TransactionFilter]) -> Option<String> {
    csv(types.iter().map(|t| t.as_str()))
}

pub(super) async fn fetch_pages(
    client: &OandaClient,
    account: &str,
    query: &TransactionQuery,
) -> Result<TransactionPages, OandaError> {
    let mut url = client.url_for(&Endpoint::Transactions {
        account: account.to_string(),
    })?;
    append_query(&mut url, query)?;
    client.execute_json("transactions", Request::get(url)).await
}

pub(super) async fn fetch_details(
    client: &OandaClient,
    account: &str,
    transaction_id: &str,
) -> Result<TransactionResponse, OandaError> {
    let url = client.url_for(&Endpoint::TransactionDetails {
        account: account.to_string(),
        transaction: transaction_id.to_string(),
    })?;
    client
        .execute_json("transaction details", Request::get(url))
        .await
}

pub(super) async fn fetch_id_range(
    client: &OandaClient,
    account: &str,
    from: &str,
    to: &str,
    types: &[TransactionFilter],
) -> Result<TransactionsResponse, OandaError> {
    let mut url = client.url_for(&Endpoint::TransactionIdRange {
        account: account.to_string(),
    })?;
    append_query(
        &mut url,
        &IdRangeQuery {
            from,
            to,
            types: type_filter(types),
        },
    )?;
    client
        .execute_json("transaction id range", Request::get(url))
        .await
}

pub(super) async fn fetch_since_id(
    client: &OandaClient,
    account: &str,
    id: &str,
    types: &[TransactionFilter],
) -> Result<TransactionsResponse, OandaError> {
    let mut url = client.url_for(&Endpoint::TransactionSinceId {
        account: account.to_string(),
    })?;
    append_query(
        &mut url,
        &SinceIdQuery {
            id,
            types: type_filter(types),
        },
    )?;
    client
        .execute_json("transactions since id", Request::get(url))
        .await
}

pub(super) async fn open_stream(
    client: &OandaClient,
    account: &str,
) -> Result<BoxStream<'static, Result<TransactionStreamMessage, OandaError>>, OandaError> {
    let url = client.url_for(&Endpoint::TransactionStream {
        account: account.to_string(),
    })?;
    let lines = client.stream_lines(Request::get(url)).await?;
    Ok(lines
        .map(|line| line.and_then(|l| TransactionStreamMessage::from_line(&l)))
        .boxed())
}

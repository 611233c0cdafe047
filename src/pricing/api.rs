use futures_util::StreamExt;
use futures_util::stream::BoxStream;

use crate::core::net::{Request, decode};
use crate::core::query::append_query;
use crate::core::{Endpoint, OandaClient, OandaError};
use crate::instrument::{CandlesQuery, CandlesResponse};
use crate::pricing::{
    LatestCandlesQuery, LatestCandlesResponse, PriceStreamMessage, PricingQuery, PricingResponse,
    StreamQuery,
};

pub(super) async fn fetch_latest_candles(
    client: &OandaClient,
    account: &str,
    query: &LatestCandlesQuery,
) -> Result<LatestCandlesResponse, OandaError> {
    let mut url = client.url_for(&Endpoint::LatestCandles {
        account: account.to_string(),
    })?;
    append_query(&mut url, query)?;
    client.execute_json("latest candles", Request::get(url)).await
}

pub(super) async fn fetch_prices(
    client: &OandaClient,
    account: &str,
    query: &PricingQuery,
) -> Result<PricingResponse, OandaError> {
    let mut url = client.url_for(&Endpoint::Pricing {
        account: account.to_string(),
    })?;
    append_query(&mut url, query)?;
    client.execute_json("pricing", Request::get(url)).await
}

pub(super) async fn fetch_candles(
    client: &OandaClient,
    account: &str,
    instrument: &str,
    query: &CandlesQuery,
) -> Result<CandlesResponse, OandaError> {
    let mut url = client.url_for(&Endpoint::AccountInstrumentCandles {
        account: account.to_string(),
        instrument: instrument.to_string(),
    })?;
    append_query(&mut url, query)?;
    client.execute_json("account candles", Request::get(url)).await
}

fn stream_request(
    client: &OandaClient,
    account: &str,
    query: &StreamQuery,
) -> Result<Request, OandaError> {
    let mut url = client.url_for(&Endpoint::PricingStream {
        account: account.to_string(),
    })?;
    append_query(&mut url, query)?;
    Ok(Request::get(url))
}

pub(super) async fn fetch_stream_first(
    client: &OandaClient,
    account: &str,
    query: &StreamQuery,
) -> Result<PriceStreamMessage, OandaError> {
    let req = stream_request(client, account, query)?;
    client.execute_json("price stream", req).await
}

pub(super) async fn open_stream(
    client: &OandaClient,
    account: &str,
    query: &StreamQuery,
) -> Result<BoxStream<'static, Result<PriceStreamMessage, OandaError>>, OandaError> {
    let req = stream_request(client, account, query)?;
    let lines = client.stream_lines(req).await?;
    Ok(lines
        .map(|line| line.and_then(|l| decode("price stream", &l)))
        .boxed())
}

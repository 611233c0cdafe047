use crate::core::net::Request;
use crate::core::query::append_query;
use crate::core::{Endpoint, OandaClient, OandaError};
use crate::instrument::{
    BookQuery, CandlesQuery, CandlesResponse, OrderBookResponse, PositionBookResponse,
};

pub(super) async fn fetch_candles(
    client: &OandaClient,
    instrument: &str,
    query: &CandlesQuery,
) -> Result<CandlesResponse, OandaError> {
    let mut url = client.url_for(&Endpoint::InstrumentCandles {
        instrument: instrument.to_string(),
    })?;
    append_query(&mut url, query)?;
    client.execute_json("candles", Request::get(url)).await
}

pub(super) async fn fetch_order_book(
    client: &OandaClient,
    instrument: &str,
    query: &BookQuery,
) -> Result<OrderBookResponse, OandaError> {
    let mut url = client.url_for(&Endpoint::InstrumentOrderBook {
        instrument: instrument.to_string(),
    })?;
    append_query(&mut url, query)?;
    client.execute_json("order book", Request::get(url)).await
}

pub(super) async fn fetch_position_book(
    client: &OandaClient,
    instrument: &str,
    query: &BookQuery,
) -> Result<PositionBookResponse, OandaError> {
    let mut url = client.url_for(&Endpoint::InstrumentPositionBook {
        instrument: instrument.to_string(),
    })?;
    append_query(&mut url, query)?;
    client.execute_json("position book", Request::get(url)).await
}

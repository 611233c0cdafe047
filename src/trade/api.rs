use serde::Serialize;

use crate::core::net::Request;
use crate::core::query::append_query;
use crate::core::{ClientExtensionsUpdate, CloseUnits, Endpoint, OandaClient, OandaError};
use crate::trade::{
    CloseTradeResponse, DependentOrders, TradeClientExtensionsResponse, TradeOrdersResponse,
    TradeQuery, TradeResponse, TradesResponse,
};

#[derive(Serialize)]
struct CloseBody {
    units: CloseUnits,
}

pub(super) async fn fetch_list(
    client: &OandaClient,
    account: &str,
    query: &TradeQuery,
) -> Result<TradesResponse, OandaError> {
    let mut url = client.url_for(&Endpoint::Trades {
        account: account.to_string(),
    })?;
    append_query(&mut url, query)?;
    client.execute_json("trades", Request::get(url)).await
}

pub(super) async fn fetch_open(
    client: &OandaClient,
    account: &str,
) -> Result<TradesResponse, OandaError> {
    let url = client.url_for(&Endpoint::OpenTrades {
        account: account.to_string(),
    })?;
    client.execute_json("open trades", Request::get(url)).await
}

pub(super) async fn fetch_details(
    client: &OandaClient,
    account: &str,
    id: &str,
) -> Result<TradeResponse, OandaError> {
    let url = client.url_for(&Endpoint::TradeDetails {
        account: account.to_string(),
        trade: id.to_string(),
    })?;
    client.execute_json("trade details", Request::get(url)).await
}

pub(super) async fn close(
    client: &OandaClient,
    account: &str,
    id: &str,
    units: CloseUnits,
) -> Result<CloseTradeResponse, OandaError> {
    let url = client.url_for(&Endpoint::CloseTrade {
        account: account.to_string(),
        trade: id.to_string(),
    })?;
    client
        .execute_json("close trade", Request::put(url, &CloseBody { units })?)
        .await
}

pub(super) async fn update_client_extensions(
    client: &OandaClient,
    account: &str,
    id: &str,
    update: &ClientExtensionsUpdate,
) -> Result<TradeClientExtensionsResponse, OandaError> {
    let url = client.url_for(&Endpoint::TradeClientExtensions {
        account: account.to_string(),
        trade: id.to_string(),
    })?;
    client
        .execute_json("trade client extensions", Request::put(url, update)?)
        .await
}

pub(super) async fn update_orders(
    client: &OandaClient,
    account: &str,
    id: &str,
    orders: &DependentOrders,
) -> Result<TradeOrdersResponse, OandaError> {
    let url = client.url_for(&Endpoint::TradeOrders {
        account: account.to_string(),
        trade: id.to_string(),
    })?;
    client
        .execute_json("trade orders", Request::put(url, orders)?)
        .await
}

use crate::core::net::Request;
use crate::core::query::append_query;
use crate::core::{ClientExtensionsUpdate, Endpoint, OandaClient, OandaError};
use crate::order::{
    OrderCancelResponse, OrderClientExtensionsResponse, OrderCreateResponse, OrderQuery,
    OrderReplaceResponse, OrderRequest, OrderResponse, OrdersResponse,
};

fn orders_endpoint(account: &str) -> Endpoint {
    Endpoint::Orders {
        account: account.to_string(),
    }
}

pub(super) async fn fetch_list(
    client: &OandaClient,
    account: &str,
    query: &OrderQuery,
) -> Result<OrdersResponse, OandaError> {
    let mut url = client.url_for(&orders_endpoint(account))?;
    append_query(&mut url, query)?;
    client.execute_json("orders", Request::get(url)).await
}

pub(super) async fn fetch_pending(
    client: &OandaClient,
    account: &str,
) -> Result<OrdersResponse, OandaError> {
    let url = client.url_for(&Endpoint::PendingOrders {
        account: account.to_string(),
    })?;
    client.execute_json("pending orders", Request::get(url)).await
}

pub(super) async fn fetch_details(
    client: &OandaClient,
    account: &str,
    id: &str,
) -> Result<OrderResponse, OandaError> {
    let url = client.url_for(&Endpoint::OrderDetails {
        account: account.to_string(),
        order: id.to_string(),
    })?;
    client.execute_json("order details", Request::get(url)).await
}

pub(super) async fn create(
    client: &OandaClient,
    account: &str,
    order: &OrderRequest,
) -> Result<OrderCreateResponse, OandaError> {
    let url = client.url_for(&orders_endpoint(account))?;
    client
        .execute_json("create order", Request::post(url, order)?)
        .await
}

pub(super) async fn replace(
    client: &OandaClient,
    account: &str,
    id: &str,
    order: &OrderRequest,
) -> Result<OrderReplaceResponse, OandaError> {
    let url = client.url_for(&Endpoint::OrderDetails {
        account: account.to_string(),
        order: id.to_string(),
    })?;
    client
        .execute_json("replace order", Request::put(url, order)?)
        .await
}

pub(super) async fn cancel(
    client: &OandaClient,
    account: &str,
    id: &str,
) -> Result<OrderCancelResponse, OandaError> {
    let url = client.url_for(&Endpoint::CancelOrder {
        account: account.to_string(),
        order: id.to_string(),
    })?;
    client
        .execute_json("cancel order", Request::put_empty(url))
        .await
}

pub(super) async fn update_client_extensions(
    client: &OandaClient,
    account: &str,
    id: &str,
    update: &ClientExtensionsUpdate,
) -> Result<OrderClientExtensionsResponse, OandaError> {
    let url = client.url_for(&Endpoint::OrderClientExtensions {
        account: account.to_string(),
        order: id.to_string(),
    })?;
    client
        .execute_json("order client extensions", Request::put(url, update)?)
        .await
}

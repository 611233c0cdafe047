use crate::core::net::Request;
use crate::core::{Endpoint, OandaClient, OandaError};
use crate::position::{ClosePositionResponse, PositionCloseout, PositionResponse, PositionsResponse};

pub(super) async fn fetch_list(
    client: &OandaClient,
    account: &str,
) -> Result<PositionsResponse, OandaError> {
    let url = client.url_for(&Endpoint::Positions {
        account: account.to_string(),
    })?;
    client.execute_json("positions", Request::get(url)).await
}

pub(super) async fn fetch_open(
    client: &OandaClient,
    account: &str,
) -> Result<PositionsResponse, OandaError> {
    let url = client.url_for(&Endpoint::OpenPositions {
        account: account.to_string(),
    })?;
    client.execute_json("open positions", Request::get(url)).await
}

pub(super) async fn fetch_details(
    client: &OandaClient,
    account: &str,
    instrument: &str,
) -> Result<PositionResponse, OandaError> {
    let url = client.url_for(&Endpoint::PositionDetails {
        account: account.to_string(),
        instrument: instrument.to_string(),
    })?;
    client.execute_json("position details", Request::get(url)).await
}

pub(super) async fn close(
    client: &OandaClient,
    account: &str,
    instrument: &str,
    closeout: &PositionCloseout,
) -> Result<ClosePositionResponse, OandaError> {
    let url = client.url_for(&Endpoint::ClosePosition {
        account: account.to_string(),
        instrument: instrument.to_string(),
    })?;
    client
        .execute_json("close position", Request::put(url, closeout)?)
        .await
}

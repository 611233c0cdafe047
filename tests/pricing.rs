mod common;

use chrono::{Duration, TimeZone, Utc};
use common::{ACCOUNT, TOKEN, account_path, client_for, dec, fixture, setup_server};
use futures_util::StreamExt;
use httpmock::Method::GET;
use oanda_rs::{
    CandlesQuery, Granularity, LatestCandlesQuery, OandaClient, OandaError, PriceComponent,
    PriceStreamMessage, PricingQuery, StreamQuery,
};
use std::time::Duration as StdDuration;

const PRICE_LINE: &str = r#"{"type":"PRICE","time":"2024-05-02T14:20:04.998000000Z","bids":[{"price":"1.07118","liquidity":1000000}],"asks":[{"price":"1.07128","liquidity":1000000}],"closeoutBid":"1.07116","closeoutAsk":"1.07130","status":"tradeable","tradeable":true,"instrument":"EUR_USD"}"#;
const HEARTBEAT_LINE: &str = r#"{"type":"HEARTBEAT","time":"2024-05-02T14:20:09.001000000Z"}"#;

#[tokio::test]
async fn prices_parse_depth_and_home_conversions() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(account_path("/pricing"))
            .query_param("instruments", "EUR_USD,USD_JPY")
            .query_param("includeHomeConversions", "true");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("pricing"));
    });

    let client = client_for(&server);
    let q = PricingQuery::new()
        .instruments(&["EUR_USD", "USD_JPY"])
        .include_home_conversions();
    let resp = client.pricing().prices(ACCOUNT, &q).await.unwrap();
    mock.assert();

    let p = &resp.prices[0];
    assert_eq!(p.instrument, "EUR_USD");
    assert_eq!(p.tradeable, Some(true));
    assert_eq!(p.bids.len(), 2);
    assert_eq!(p.best_bid(), Some(dec("1.07118")));
    assert_eq!(p.best_ask(), Some(dec("1.07128")));
    assert_eq!(p.asks[0].liquidity, 1_000_000);
    assert_eq!(resp.home_conversions[0].currency, "EUR");
    assert_eq!(resp.home_conversions[0].position_value, dec("1.07123"));
}

#[test]
fn since_in_the_future_is_replaced_with_now() {
    let past = Utc.with_ymd_and_hms(2024, 5, 2, 14, 0, 0).unwrap();
    assert_eq!(
        PricingQuery::new().since(past).since.as_deref(),
        Some("2024-05-02T14:00:00Z")
    );

    let before = Utc::now();
    let q = PricingQuery::new().since(before + Duration::days(1));
    let sent = chrono::DateTime::parse_from_rfc3339(q.since.as_deref().unwrap()).unwrap();
    assert!(sent.with_timezone(&Utc) <= Utc::now());
    assert!(sent.with_timezone(&Utc) >= before - Duration::seconds(1));
}

#[tokio::test]
async fn latest_candles_build_specifications() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(account_path("/candles/latest"))
            .query_param("candleSpecifications", "EUR_USD:M5:B,USD_JPY:M5:B")
            .query_param("units", "1");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("latest_candles"));
    });

    let client = client_for(&server);
    let q = LatestCandlesQuery::new()
        .candle_specifications(&["EUR_USD", "USD_JPY"], Granularity::M5, PriceComponent::Bid)
        .units(dec("-3"));
    let resp = client.pricing().latest_candles(ACCOUNT, &q).await.unwrap();
    mock.assert();

    assert_eq!(resp.latest_candles.len(), 2);
    let eur = &resp.latest_candles[0];
    assert_eq!(eur.granularity, Granularity::M5);
    assert_eq!(eur.candles[0].bid.unwrap().close, dec("1.07118"));
    assert!(resp.latest_candles[1].candles.is_empty());
}

#[tokio::test]
async fn account_candles_use_account_path() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(account_path("/instruments/EUR_USD/candles"))
            .query_param("smooth", "true")
            .query_param("includeFirst", "false");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("candles_eur_usd"));
    });

    let client = client_for(&server);
    let q = CandlesQuery::new().smooth().without_include_first();
    let resp = client
        .pricing()
        .candles(ACCOUNT, "EUR_USD", &q)
        .await
        .unwrap();
    mock.assert();
    assert_eq!(resp.candles.len(), 2);
}

#[tokio::test]
async fn stream_first_reads_a_single_line() {
    let server = setup_server();
    let body = format!("{PRICE_LINE}\n{HEARTBEAT_LINE}\n{PRICE_LINE}\n");
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(account_path("/pricing/stream"))
            .query_param("instruments", "EUR_USD")
            .query_param("snapshot", "false");
        then.status(200)
            .header("content-type", "application/octet-stream")
            .body(body);
    });

    let client = client_for(&server);
    let q = StreamQuery::new().instruments(&["EUR_USD"]).without_snapshot();
    let msg = client.pricing().stream_first(ACCOUNT, &q).await.unwrap();
    mock.assert();

    match msg {
        PriceStreamMessage::Price(p) => {
            assert_eq!(p.instrument, "EUR_USD");
            assert_eq!(p.closeout_ask, dec("1.0713"));
        }
        other => panic!("expected a price, got {other:?}"),
    }
}

#[tokio::test]
async fn stream_yields_prices_and_heartbeats_until_closed() {
    let server = setup_server();
    let body = format!("{PRICE_LINE}\n\n{HEARTBEAT_LINE}\n{PRICE_LINE}");
    let mock = server.mock(|when, then| {
        when.method(GET).path(account_path("/pricing/stream"));
        then.status(200).body(body);
    });

    let client = client_for(&server);
    let stream = client
        .pricing()
        .stream(ACCOUNT, &StreamQuery::new().instruments(&["EUR_USD"]))
        .await
        .unwrap();
    let items: Vec<_> = stream.collect().await;
    mock.assert();

    assert_eq!(items.len(), 3);
    assert!(matches!(items[0], Ok(PriceStreamMessage::Price(_))));
    assert!(matches!(items[1], Ok(PriceStreamMessage::Heartbeat { .. })));
    assert!(matches!(items[2], Ok(PriceStreamMessage::Price(_))));
}

#[tokio::test]
async fn empty_stream_is_a_data_error() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(account_path("/pricing/stream"));
        then.status(200).body("");
    });

    let client = client_for(&server);
    let err = client
        .pricing()
        .stream_first(ACCOUNT, &StreamQuery::new())
        .await
        .unwrap_err();
    mock.assert();

    match err {
        OandaError::Data(msg) => assert!(msg.contains("stream closed")),
        other => panic!("expected Data error, got {other:?}"),
    }
}

fn client_with_timeout(server: &httpmock::MockServer, timeout: StdDuration) -> OandaClient {
    let base = url::Url::parse(&server.base_url()).unwrap();
    OandaClient::builder()
        .token(TOKEN)
        .base_rest(base.clone())
        .base_stream(base)
        .timeout(timeout)
        .build()
        .unwrap()
}

#[tokio::test]
async fn stream_first_on_a_silent_stream_times_out() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(account_path("/pricing/stream"));
        then.status(200)
            .delay(StdDuration::from_secs(3))
            .body(format!("{PRICE_LINE}\n"));
    });

    let client = client_with_timeout(&server, StdDuration::from_millis(300));
    let err = client
        .pricing()
        .stream_first(ACCOUNT, &StreamQuery::new().instruments(&["EUR_USD"]))
        .await
        .unwrap_err();
    mock.assert();

    match err {
        OandaError::Http(e) => assert!(e.is_timeout(), "expected a timeout, got {e}"),
        other => panic!("expected Http timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn long_lived_stream_ignores_the_request_timeout() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(account_path("/pricing/stream"));
        then.status(200)
            .delay(StdDuration::from_millis(600))
            .body(format!("{HEARTBEAT_LINE}\n"));
    });

    let client = client_with_timeout(&server, StdDuration::from_millis(200));
    let stream = client
        .pricing()
        .stream(ACCOUNT, &StreamQuery::new().instruments(&["EUR_USD"]))
        .await
        .unwrap();
    let items: Vec<_> = stream.collect().await;
    mock.assert();

    assert_eq!(items.len(), 1);
    assert!(matches!(items[0], Ok(PriceStreamMessage::Heartbeat { .. })));
}

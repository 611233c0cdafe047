mod common;

use common::{ACCOUNT, account_path, client_for, dec, fixture, setup_server};
use httpmock::Method::{GET, PUT};
use oanda_rs::{CloseUnits, OandaError, PositionCloseout, PositionSide};
use serde_json::json;

#[tokio::test]
async fn list_and_open_positions() {
    let server = setup_server();
    let all = server.mock(|when, then| {
        when.method(GET).path(account_path("/positions"));
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("positions"));
    });
    let open = server.mock(|when, then| {
        when.method(GET).path(account_path("/openPositions"));
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("positions"));
    });

    let client = client_for(&server);
    let listed = client.positions().list(ACCOUNT).await.unwrap();
    let opened = client.positions().open(ACCOUNT).await.unwrap();
    all.assert();
    open.assert();

    let p = &listed.positions[0];
    assert_eq!(p.instrument, "EUR_USD");
    assert_eq!(p.long.units, dec("20000"));
    assert_eq!(p.short.units, dec("-500"));
    assert_eq!(p.net_units(), dec("19500"));
    assert_eq!(p.financing, dec("-1.231"));
    // absent from the payload
    assert_eq!(p.long.guaranteed_execution_fees, dec("0"));
    assert_eq!(opened.last_transaction_id, "6365");
}

#[tokio::test]
async fn details_for_one_instrument() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(account_path("/positions/EUR_USD"));
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"position":{"instrument":"EUR_USD","long":{"units":"100","averagePrice":"1.07","tradeIDs":["1"]},"short":{"units":"0"}},"lastTransactionID":"9"}"#);
    });

    let client = client_for(&server);
    let resp = client.positions().details(ACCOUNT, "EUR_USD").await.unwrap();
    mock.assert();

    assert_eq!(resp.position.long.average_price, Some(dec("1.07")));
    assert!(resp.position.short.trade_ids.is_empty());
    assert_eq!(resp.position.pl, dec("0"));
}

#[tokio::test]
async fn close_sends_only_the_requested_side() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path(account_path("/positions/EUR_USD/close"))
            .json_body(json!({"longUnits": "ALL"}));
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("position_close"));
    });

    let client = client_for(&server);
    let resp = client
        .positions()
        .close(ACCOUNT, "EUR_USD", PositionCloseout::all_long())
        .await
        .unwrap();
    mock.assert();

    let fill = resp.long_order_fill_transaction.unwrap();
    assert_eq!(fill.kind, "ORDER_FILL");
    assert_eq!(fill.get_str("pl"), Some("14.2000"));
    assert!(resp.short_order_create_transaction.is_none());
    assert_eq!(resp.related_transaction_ids.len(), 2);
}

#[test]
fn closeout_body_carries_units_as_strings() {
    let c = PositionCloseout::all_short()
        .with_side(PositionSide::Long, CloseUnits::Units(dec("250")));
    assert_eq!(
        serde_json::to_value(c).unwrap(),
        json!({"longUnits": "250", "shortUnits": "ALL"})
    );
}

#[tokio::test]
async fn invalid_closeouts_are_rejected_before_sending() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(PUT).path(account_path("/positions/EUR_USD/close"));
        then.status(200).body("{}");
    });

    let client = client_for(&server);
    let empty = client
        .positions()
        .close(ACCOUNT, "EUR_USD", PositionCloseout::default())
        .await
        .unwrap_err();
    assert!(matches!(empty, OandaError::InvalidParams(_)));

    let zero = client
        .positions()
        .close(
            ACCOUNT,
            "EUR_USD",
            PositionCloseout::side(PositionSide::Short, CloseUnits::Units(dec("0"))),
        )
        .await
        .unwrap_err();
    match zero {
        OandaError::InvalidParams(msg) => assert!(msg.contains("greater than 0")),
        other => panic!("expected InvalidParams, got {other:?}"),
    }

    assert_eq!(mock.calls(), 0);
}
